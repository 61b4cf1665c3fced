//! Descriptive statistics over named columns.
//!
//! Every column-level function reads one numeric column of a [`DataFrame`],
//! drops absent cells, and computes over what is left. Empty input follows a
//! zero-value convention (`0.0`) instead of failing, so [`summary`] can run
//! over any mix of columns. Only an unknown or non-numeric column is an error.
//!
//! Dispersion uses the population convention (divide by `n`).
//!
//! # Examples
//!
//! ```
//! use linearmodel::data::DataFrame;
//! use linearmodel::stats;
//!
//! let df = DataFrame::from_numeric(vec![("col1", vec![1.0, 2.0, 3.0, 4.0, 5.0])])
//!     .expect("valid frame");
//!
//! assert_eq!(stats::mean(&df, "col1").expect("numeric column"), 3.0);
//! assert_eq!(stats::variance(&df, "col1").expect("numeric column"), 2.0);
//! assert_eq!(stats::median(&df, "col1").expect("numeric column"), 3.0);
//! ```

pub mod correlation;
pub mod summary;

pub use correlation::{corr, corr_matrix, correlation, CorrelationMatrix};
pub use summary::{summary, ColumnSummary, PairCorrelation, Summary};

use crate::data::DataFrame;
use crate::error::Result;
use std::collections::HashMap;

/// Descriptive statistics over a slice of present values.
///
/// Borrows the data; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct DescriptiveStats<'a> {
    data: &'a [f64],
}

impl<'a> DescriptiveStats<'a> {
    /// Wraps a slice of values (absent cells already removed).
    #[must_use]
    pub fn new(data: &'a [f64]) -> Self {
        Self { data }
    }

    /// Number of values.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.len()
    }

    /// Arithmetic mean; `0.0` when empty.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Population variance; `0.0` when empty.
    #[must_use]
    pub fn variance(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        let mean = self.mean();
        self.data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / self.data.len() as f64
    }

    /// Population standard deviation, `variance().sqrt()`.
    #[must_use]
    pub fn std(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Middle of the sorted values; mean of the two middles for an even count.
    ///
    /// `0.0` when empty.
    #[must_use]
    pub fn median(&self) -> f64 {
        let mut sorted = self.data.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        if n == 0 {
            0.0
        } else if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        }
    }

    /// Most frequent value. Ties go to the value seen first.
    ///
    /// `None` when empty.
    #[must_use]
    pub fn mode(&self) -> Option<f64> {
        let tally = Tally::new(self.data);
        let mut best: Option<(f64, usize)> = None;
        for &(value, count) in &tally.distinct {
            if best.map_or(true, |(_, c)| count > c) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }

    /// Mode with tie resolution by occurrence weighting.
    ///
    /// A unique most-frequent value is returned as is. When several values
    /// share the top count, the result is `Σ v·count(v) / Σ count(v)` with
    /// both sums taken over every value, not only the tied ones.
    ///
    /// `0.0` when empty.
    #[must_use]
    pub fn weighted_mode(&self) -> f64 {
        let tally = Tally::new(self.data);
        let Some(max_count) = tally.distinct.iter().map(|&(_, c)| c).max() else {
            return 0.0;
        };

        let mut leaders = tally.distinct.iter().filter(|&&(_, c)| c == max_count);
        match (leaders.next(), leaders.next()) {
            (Some(&(value, _)), None) => value,
            _ => {
                // Row-wise weights: each row contributes its value's count.
                let (num, den) = self.data.iter().fold((0.0, 0.0), |(num, den), &v| {
                    let weight = tally.count(v) as f64;
                    (num + v * weight, den + weight)
                });
                num / den
            }
        }
    }
}

/// Occurrence counts in first-seen order.
struct Tally {
    distinct: Vec<(f64, usize)>,
    index: HashMap<u64, usize>,
}

impl Tally {
    fn new(values: &[f64]) -> Self {
        let mut distinct: Vec<(f64, usize)> = Vec::new();
        let mut index = HashMap::new();
        for &v in values {
            let slot = *index.entry(Self::key(v)).or_insert_with(|| {
                distinct.push((v, 0));
                distinct.len() - 1
            });
            distinct[slot].1 += 1;
        }
        Self { distinct, index }
    }

    fn count(&self, value: f64) -> usize {
        self.index
            .get(&Self::key(value))
            .map_or(0, |&slot| self.distinct[slot].1)
    }

    // 0.0 and -0.0 compare equal, so they share a bucket.
    fn key(value: f64) -> u64 {
        if value == 0.0 {
            0.0_f64.to_bits()
        } else {
            value.to_bits()
        }
    }
}

/// Mean of the present values of `column`.
///
/// # Errors
///
/// Returns an error if the column is missing or not numeric.
pub fn mean(frame: &DataFrame, column: &str) -> Result<f64> {
    let values = frame.present(column)?;
    Ok(DescriptiveStats::new(&values).mean())
}

/// Population standard deviation of the present values of `column`.
///
/// # Errors
///
/// Returns an error if the column is missing or not numeric.
pub fn std(frame: &DataFrame, column: &str) -> Result<f64> {
    let values = frame.present(column)?;
    Ok(DescriptiveStats::new(&values).std())
}

/// Population variance of the present values of `column`.
///
/// # Errors
///
/// Returns an error if the column is missing or not numeric.
pub fn variance(frame: &DataFrame, column: &str) -> Result<f64> {
    let values = frame.present(column)?;
    Ok(DescriptiveStats::new(&values).variance())
}

/// Median of the present values of `column`.
///
/// # Errors
///
/// Returns an error if the column is missing or not numeric.
pub fn median(frame: &DataFrame, column: &str) -> Result<f64> {
    let values = frame.present(column)?;
    Ok(DescriptiveStats::new(&values).median())
}

/// First-seen-wins mode of the present values of `column`.
///
/// # Errors
///
/// Returns an error if the column is missing or not numeric.
pub fn mode(frame: &DataFrame, column: &str) -> Result<Option<f64>> {
    let values = frame.present(column)?;
    Ok(DescriptiveStats::new(&values).mode())
}

/// Weighted mode of the present values of `column`.
///
/// See [`DescriptiveStats::weighted_mode`].
///
/// # Errors
///
/// Returns [`crate::LinearModelError::ColumnNotFound`] if the column is missing.
pub fn weighted_mode(frame: &DataFrame, column: &str) -> Result<f64> {
    let values = frame.present(column)?;
    Ok(DescriptiveStats::new(&values).weighted_mode())
}

/// First-seen-wins mode of a categorical column.
///
/// # Errors
///
/// Returns an error if the column is missing or not categorical.
pub fn mode_label(frame: &DataFrame, column: &str) -> Result<Option<String>> {
    let cells = frame.categorical(column)?;
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in cells.iter().flatten() {
        let count = counts.entry(label.as_str()).or_insert(0);
        if *count == 0 {
            order.push(label.as_str());
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for label in order {
        let count = counts[label];
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((label, count));
        }
    }
    Ok(best.map(|(label, _)| label.to_string()))
}

#[cfg(test)]
#[path = "descriptive_tests.rs"]
mod tests;
