//! Pearson correlation between columns.
//!
//! # Mathematical Background
//!
//! ```text
//! ρ(X, Y) = Σ (x_i - x̄)(y_i - ȳ) / sqrt(Σ (x_i - x̄)² · Σ (y_i - ȳ)²)
//! ```
//!
//! Means are taken over the paired sample only. A zero denominator (either
//! side constant, or no pairs at all) yields a defined correlation of `0.0`.
//! Each side is rescaled by its largest magnitude first, so values near the
//! top of the `f64` range do not overflow the sums of squares.
//!
//! # Examples
//!
//! ```
//! use linearmodel::data::DataFrame;
//! use linearmodel::stats::correlation;
//!
//! let df = DataFrame::from_numeric(vec![
//!     ("col1", vec![1.0, 2.0, 3.0]),
//!     ("col2", vec![4.0, 5.0, 6.0]),
//! ])
//! .expect("valid frame");
//!
//! let r = correlation(&df, "col1", "col2").expect("numeric columns");
//! assert!((r - 1.0).abs() < 1e-12);
//! ```

use crate::data::DataFrame;
use crate::error::{LinearModelError, Result};
use crate::primitives::Matrix;
use serde::{Deserialize, Serialize};

/// Pearson correlation of two equal-length samples.
///
/// # Errors
///
/// Returns [`LinearModelError::DimensionMismatch`] if lengths differ.
pub fn corr(x: &[f64], y: &[f64]) -> Result<f64> {
    let n = x.len();
    if n != y.len() {
        return Err(LinearModelError::dimension_mismatch("y length", n, y.len()));
    }
    if is_constant(x) || is_constant(y) {
        return Ok(0.0);
    }

    let x = rescaled(x);
    let y = rescaled(y);
    let x_mean = x.iter().sum::<f64>() / n as f64;
    let y_mean = y.iter().sum::<f64>() / n as f64;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(&y) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denominator = (sxx * syy).sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }
    Ok(sxy / denominator)
}

/// True for an empty slice or one holding a single repeated value.
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Divides by the largest magnitude so squared deviations stay finite.
///
/// Pearson correlation is invariant under positive scaling.
fn rescaled(values: &[f64]) -> Vec<f64> {
    let scale = values.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    values.iter().map(|v| v / scale).collect()
}

/// Pearson correlation between two numeric columns.
///
/// Rows where either cell is absent are dropped from both sides.
///
/// # Errors
///
/// Returns an error if either column is missing or not numeric.
pub fn correlation(frame: &DataFrame, first: &str, second: &str) -> Result<f64> {
    let (x, y) = frame.present_pairs(first, second)?;
    corr(&x, &y)
}

/// Symmetric correlation matrix over a frame's numeric columns.
///
/// Rows and columns follow the frame's column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: Matrix<f64>,
}

impl CorrelationMatrix {
    /// Column names, in matrix order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The `p × p` coefficient matrix.
    #[must_use]
    pub fn values(&self) -> &Matrix<f64> {
        &self.values
    }

    /// Position of a column in the matrix.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Correlation between two named columns.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::ColumnNotFound`] if either name is not a
    /// numeric column of the source frame.
    pub fn get(&self, first: &str, second: &str) -> Result<f64> {
        let i = self
            .index_of(first)
            .ok_or_else(|| LinearModelError::column_not_found(first))?;
        let j = self
            .index_of(second)
            .ok_or_else(|| LinearModelError::column_not_found(second))?;
        Ok(self.values.get(i, j))
    }

    /// Every column's correlation with `target`, in matrix order.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::ColumnNotFound`] if `target` is not in the matrix.
    pub fn against(&self, target: &str) -> Result<Vec<(&str, f64)>> {
        let j = self
            .index_of(target)
            .ok_or_else(|| LinearModelError::column_not_found(target))?;
        Ok(self
            .names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), self.values.get(i, j)))
            .collect())
    }
}

/// Computes the correlation matrix of all numeric columns.
///
/// Each pair is computed once, over that pair's complete rows, and mirrored.
///
/// # Errors
///
/// Propagates column access errors (none occur for a well-formed frame).
pub fn corr_matrix(frame: &DataFrame) -> Result<CorrelationMatrix> {
    let names: Vec<String> = frame
        .numeric_column_names()
        .into_iter()
        .map(str::to_string)
        .collect();
    let p = names.len();

    let mut values = Matrix::zeros(p, p);
    for i in 0..p {
        for j in 0..=i {
            let r = correlation(frame, &names[i], &names[j])?;
            values.set(i, j, r);
            values.set(j, i, r);
        }
    }

    Ok(CorrelationMatrix { names, values })
}

#[cfg(test)]
#[path = "correlation_tests.rs"]
mod tests;
