//! `DataFrame` module for named column containers.
//!
//! Columns are typed once, when the frame is built. Absent cells are kept as
//! `None` and are never silently turned into numbers: statistics skip them,
//! and the only place they become values is the explicit
//! [`DataFrame::fill_missing`] boundary transform.

use crate::error::{LinearModelError, Result};
use crate::primitives::{Matrix, Vector};
use log::debug;
use serde::{Deserialize, Serialize};

/// A typed, fixed-length column. `None` marks an absent cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Column {
    /// Numeric measurements.
    Numeric(Vec<Option<f64>>),
    /// Labels (e.g. region names, qualifiers).
    Categorical(Vec<Option<String>>),
}

impl Column {
    /// Builds a numeric column with no absent cells.
    #[must_use]
    pub fn numeric(values: &[f64]) -> Self {
        Self::Numeric(values.iter().copied().map(Some).collect())
    }

    /// Builds a categorical column with no absent cells.
    #[must_use]
    pub fn categorical<S: AsRef<str>>(values: &[S]) -> Self {
        Self::Categorical(
            values
                .iter()
                .map(|v| Some(v.as_ref().to_string()))
                .collect(),
        )
    }

    /// Number of cells, present or absent.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    /// Returns true if the column has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true for numeric columns.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// Number of absent cells.
    #[must_use]
    pub fn missing_count(&self) -> usize {
        match self {
            Self::Numeric(v) => v.iter().filter(|c| c.is_none()).count(),
            Self::Categorical(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }
}

/// A table of named, equal-length, typed columns.
///
/// Column order is the insertion order and is preserved by every operation
/// that reports per-column results.
///
/// # Examples
///
/// ```
/// use linearmodel::data::{Column, DataFrame};
///
/// let df = DataFrame::new(vec![
///     ("x".to_string(), Column::numeric(&[1.0, 2.0, 3.0])),
///     ("y".to_string(), Column::Numeric(vec![Some(4.0), None, Some(6.0)])),
/// ])
/// .expect("DataFrame creation should succeed with valid columns");
/// assert_eq!(df.shape(), (3, 2));
/// assert_eq!(df.present("y").expect("y is numeric"), vec![4.0, 6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    columns: Vec<(String, Column)>,
    n_rows: usize,
}

impl DataFrame {
    /// Creates a new `DataFrame` from named columns.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::InvalidSchema`] if there are no columns,
    /// columns have different lengths, a name is empty, or a name repeats.
    pub fn new(columns: Vec<(String, Column)>) -> Result<Self> {
        let Some((_, first)) = columns.first() else {
            return Err(LinearModelError::InvalidSchema(
                "DataFrame must have at least one column".into(),
            ));
        };
        let n_rows = first.len();

        for (name, col) in &columns {
            if name.is_empty() {
                return Err(LinearModelError::InvalidSchema(
                    "Column names cannot be empty".into(),
                ));
            }
            if col.len() != n_rows {
                return Err(LinearModelError::InvalidSchema(format!(
                    "Column '{name}' has {} rows, expected {n_rows}",
                    col.len()
                )));
            }
        }

        let mut names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        if let Some(pair) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(LinearModelError::InvalidSchema(format!(
                "Duplicate column name '{}'",
                pair[0]
            )));
        }

        Ok(Self { columns, n_rows })
    }

    /// Convenience constructor for all-numeric, complete data.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DataFrame::new`].
    pub fn from_numeric(columns: Vec<(&str, Vec<f64>)>) -> Result<Self> {
        Self::new(
            columns
                .into_iter()
                .map(|(name, values)| (name.to_string(), Column::numeric(&values)))
                .collect(),
        )
    }

    /// Returns the shape as (`n_rows`, `n_cols`).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column names in frame order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Returns the numeric column names in frame order.
    #[must_use]
    pub fn numeric_column_names(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|(_, c)| c.is_numeric())
            .map(|(n, _)| n.as_str())
            .collect()
    }

    /// Returns true if the frame has a column with this name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Returns a reference to a column by name.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::ColumnNotFound`] if the column doesn't exist.
    pub fn column(&self, name: &str) -> Result<&Column> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| c)
            .ok_or_else(|| LinearModelError::column_not_found(name))
    }

    /// Returns the cells of a numeric column, absent markers included.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::ColumnNotFound`] for an unknown name and
    /// [`LinearModelError::ColumnType`] for a categorical column.
    pub fn numeric(&self, name: &str) -> Result<&[Option<f64>]> {
        match self.column(name)? {
            Column::Numeric(values) => Ok(values),
            Column::Categorical(_) => Err(LinearModelError::ColumnType {
                name: name.to_string(),
                expected: "numeric",
            }),
        }
    }

    /// Returns the cells of a categorical column, absent markers included.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::ColumnNotFound`] for an unknown name and
    /// [`LinearModelError::ColumnType`] for a numeric column.
    pub fn categorical(&self, name: &str) -> Result<&[Option<String>]> {
        match self.column(name)? {
            Column::Categorical(values) => Ok(values),
            Column::Numeric(_) => Err(LinearModelError::ColumnType {
                name: name.to_string(),
                expected: "categorical",
            }),
        }
    }

    /// Returns the present values of a numeric column, in row order.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DataFrame::numeric`].
    pub fn present(&self, name: &str) -> Result<Vec<f64>> {
        Ok(self.numeric(name)?.iter().flatten().copied().collect())
    }

    /// Returns row-aligned pairs where both numeric columns are present.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DataFrame::numeric`], for either column.
    pub fn present_pairs(&self, first: &str, second: &str) -> Result<(Vec<f64>, Vec<f64>)> {
        let a = self.numeric(first)?;
        let b = self.numeric(second)?;
        Ok(a.iter()
            .zip(b)
            .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
            .unzip())
    }

    /// Builds a Feature Matrix from the named numeric columns, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::ColumnNotFound`] / [`LinearModelError::ColumnType`]
    /// for bad names and [`LinearModelError::MissingValues`] if any selected
    /// column still has absent cells.
    pub fn to_matrix(&self, names: &[&str]) -> Result<Matrix<f64>> {
        let columns = names
            .iter()
            .map(|name| self.complete(name))
            .collect::<Result<Vec<_>>>()?;

        let mut data = Vec::with_capacity(self.n_rows * names.len());
        for row_idx in 0..self.n_rows {
            data.extend(columns.iter().map(|col| col[row_idx]));
        }

        Matrix::from_vec(self.n_rows, names.len(), data)
    }

    /// Builds a Response Vector from a numeric column.
    ///
    /// # Errors
    ///
    /// Same conditions as [`DataFrame::to_matrix`].
    pub fn to_vector(&self, name: &str) -> Result<Vector<f64>> {
        Ok(Vector::from_vec(self.complete(name)?))
    }

    fn complete(&self, name: &str) -> Result<Vec<f64>> {
        self.numeric(name)?
            .iter()
            .map(|cell| {
                cell.ok_or_else(|| LinearModelError::MissingValues {
                    column: name.to_string(),
                })
            })
            .collect()
    }

    /// Returns a copy where every absent numeric cell holds `value`.
    ///
    /// Categorical columns are left untouched.
    #[must_use]
    pub fn fill_missing(&self, value: f64) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|(name, col)| {
                let filled = match col {
                    Column::Numeric(values) => {
                        let missing = col.missing_count();
                        if missing > 0 {
                            debug!("filling {missing} missing cells in '{name}' with {value}");
                        }
                        Column::Numeric(values.iter().map(|c| Some(c.unwrap_or(value))).collect())
                    }
                    Column::Categorical(_) => col.clone(),
                };
                (name.clone(), filled)
            })
            .collect();

        Self {
            columns,
            n_rows: self.n_rows,
        }
    }

    /// The loader convention: absent numeric cells become `0.0`.
    #[must_use]
    pub fn fill_missing_with_zero(&self) -> Self {
        self.fill_missing(0.0)
    }

    /// Returns an iterator over columns as (name, column) pairs.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(n, c)| (n.as_str(), c))
    }

    /// Selects columns by name, returning a new `DataFrame`.
    ///
    /// # Errors
    ///
    /// Returns an error if any column doesn't exist or no names are given.
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        let selected = names
            .iter()
            .map(|&name| Ok((name.to_string(), self.column(name)?.clone())))
            .collect::<Result<Vec<_>>>()?;
        Self::new(selected)
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
