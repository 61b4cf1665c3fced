//! Frame-wide summary report.

use super::correlation::correlation;
use super::DescriptiveStats;
use crate::data::DataFrame;
use crate::error::Result;
use log::debug;
use serde::{Deserialize, Serialize};

/// Descriptive statistics of one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name
    pub name: String,
    /// Number of present cells
    pub count: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Population standard deviation
    pub std: f64,
    /// Median
    pub median: f64,
    /// Population variance
    pub variance: f64,
    /// First-seen-wins mode, `None` for a column with no present cells
    pub mode: Option<f64>,
    /// Mode with occurrence-weighted tie resolution
    pub weighted_mode: f64,
}

impl ColumnSummary {
    fn from_values(name: &str, values: &[f64]) -> Self {
        let stats = DescriptiveStats::new(values);
        Self {
            name: name.to_string(),
            count: stats.count(),
            mean: stats.mean(),
            std: stats.std(),
            median: stats.median(),
            variance: stats.variance(),
            mode: stats.mode(),
            weighted_mode: stats.weighted_mode(),
        }
    }
}

/// Correlation of one unordered pair of numeric columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairCorrelation {
    /// Earlier column in frame order
    pub first: String,
    /// Later column in frame order
    pub second: String,
    /// Pearson coefficient over the pair's complete rows
    pub correlation: f64,
}

impl PairCorrelation {
    /// Report label, e.g. `"Correlation Gaz vs Fioul"`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Correlation {} vs {}", self.first, self.second)
    }
}

/// Summary report: per-column statistics plus pairwise correlations.
///
/// # Examples
///
/// ```
/// use linearmodel::data::DataFrame;
/// use linearmodel::stats::summary;
///
/// let df = DataFrame::from_numeric(vec![
///     ("Gaz", vec![1.0, 2.0, 3.0]),
///     ("Fioul", vec![3.0, 2.0, 1.0]),
/// ])
/// .expect("valid frame");
///
/// let report = summary(&df).expect("numeric frame");
/// assert_eq!(report.columns.len(), 2);
/// assert_eq!(report.correlations[0].label(), "Correlation Gaz vs Fioul");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// One entry per numeric column, in frame order
    pub columns: Vec<ColumnSummary>,
    /// One entry per unordered pair `(i, j)` with `i < j`, in frame order
    pub correlations: Vec<PairCorrelation>,
}

impl Summary {
    /// Looks up a column's statistics by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Looks up the correlation of a pair, in either order.
    #[must_use]
    pub fn correlation(&self, a: &str, b: &str) -> Option<f64> {
        self.correlations
            .iter()
            .find(|p| (p.first == a && p.second == b) || (p.first == b && p.second == a))
            .map(|p| p.correlation)
    }
}

/// Computes the summary of every numeric column of `frame`.
///
/// Categorical columns are skipped. Absent cells are dropped per column for
/// the statistics and per pair for the correlations.
///
/// # Errors
///
/// Propagates column access errors (none occur for a well-formed frame).
pub fn summary(frame: &DataFrame) -> Result<Summary> {
    let names = frame.numeric_column_names();
    debug!(
        "summarizing {} numeric columns over {} rows",
        names.len(),
        frame.n_rows()
    );

    let columns = names
        .iter()
        .map(|&name| Ok(ColumnSummary::from_values(name, &frame.present(name)?)))
        .collect::<Result<Vec<_>>>()?;

    let mut correlations = Vec::with_capacity(names.len() * names.len().saturating_sub(1) / 2);
    for (i, &first) in names.iter().enumerate() {
        for &second in &names[i + 1..] {
            correlations.push(PairCorrelation {
                first: first.to_string(),
                second: second.to_string(),
                correlation: correlation(frame, first, second)?,
            });
        }
    }

    Ok(Summary {
        columns,
        correlations,
    })
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
