//! Correlation-based feature selection.
//!
//! Ranks every numeric column against a target column and keeps those whose
//! absolute Pearson correlation is strictly above a threshold.
//!
//! # Example
//!
//! ```
//! use linearmodel::data::DataFrame;
//! use linearmodel::feature_selection::CorrelationSelector;
//!
//! let df = DataFrame::from_numeric(vec![
//!     ("target", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
//!     ("col1", vec![1.0, 2.0, 3.0, 4.0, 5.0]),
//!     ("col2", vec![5.0, 4.0, 3.0, 2.0, 1.0]),
//! ])
//! .expect("valid frame");
//!
//! let result = CorrelationSelector::new()
//!     .with_threshold(0.9)
//!     .select(&df, "target")
//!     .expect("target is numeric");
//!
//! assert_eq!(result.selected, vec!["col1", "col2"]);
//! ```

use crate::data::DataFrame;
use crate::error::{LinearModelError, Result};
use crate::stats::corr_matrix;
use log::debug;
use serde::{Deserialize, Serialize};

/// Absolute correlation a column must exceed to be selected by default.
pub const DEFAULT_THRESHOLD: f64 = 0.55;

/// Result of correlation-based selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Target column
    pub target: String,
    /// Threshold that was applied
    pub threshold: f64,
    /// Selected columns, in frame order
    pub selected: Vec<String>,
    /// Signed correlation of every non-target numeric column, in frame order
    pub scores: Vec<(String, f64)>,
}

impl SelectionResult {
    /// Number of selected columns.
    #[must_use]
    pub fn n_selected(&self) -> usize {
        self.selected.len()
    }

    /// Selected names as borrowed strings, ready for [`DataFrame::to_matrix`].
    #[must_use]
    pub fn selected_names(&self) -> Vec<&str> {
        self.selected.iter().map(String::as_str).collect()
    }
}

/// Selects regressors by their correlation with a target column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationSelector {
    threshold: f64,
}

impl Default for CorrelationSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl CorrelationSelector {
    /// Creates a selector with [`DEFAULT_THRESHOLD`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Sets the absolute-correlation threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Returns the configured threshold.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Ranks every numeric column of `frame` against `target`.
    ///
    /// Categorical columns are never candidates. The target is excluded even
    /// though it correlates with itself at 1.0. No qualifying column gives an
    /// empty selection, not an error. A negative threshold selects every
    /// candidate, including ones with no correlation at all.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::InvalidHyperparameter`] for a NaN threshold,
    /// [`LinearModelError::ColumnNotFound`] for an unknown target and
    /// [`LinearModelError::ColumnType`] for a categorical one.
    pub fn select(&self, frame: &DataFrame, target: &str) -> Result<SelectionResult> {
        if self.threshold.is_nan() {
            return Err(LinearModelError::InvalidHyperparameter {
                param: "threshold".to_string(),
                value: self.threshold.to_string(),
                constraint: "a number".to_string(),
            });
        }
        frame.numeric(target)?;

        let matrix = corr_matrix(frame)?;
        let scores: Vec<(String, f64)> = matrix
            .against(target)?
            .into_iter()
            .filter(|&(name, _)| name != target)
            .map(|(name, r)| (name.to_string(), r))
            .collect();

        let selected: Vec<String> = scores
            .iter()
            .filter(|(_, r)| r.abs() > self.threshold)
            .map(|(name, _)| name.clone())
            .collect();

        debug!(
            "selected {} of {} candidates against '{target}' (threshold {})",
            selected.len(),
            scores.len(),
            self.threshold
        );

        Ok(SelectionResult {
            target: target.to_string(),
            threshold: self.threshold,
            selected,
            scores,
        })
    }
}

/// Names of the numeric columns whose absolute correlation with `target`
/// exceeds `threshold`, in frame order.
///
/// # Errors
///
/// Same conditions as [`CorrelationSelector::select`].
pub fn find_highly_correlated(frame: &DataFrame, target: &str, threshold: f64) -> Result<Vec<String>> {
    CorrelationSelector::new()
        .with_threshold(threshold)
        .select(frame, target)
        .map(|result| result.selected)
}

#[cfg(test)]
#[path = "feature_selection_tests.rs"]
mod tests;
