//! Error types for linearmodel operations.
//!
//! Every fallible operation returns [`Result`]. Errors are grouped into four
//! kinds (see [`ErrorKind`]) so callers can decide whether to fix their input,
//! their data, or their call order.

use thiserror::Error;

/// Broad classification of a [`LinearModelError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A referenced column does not exist.
    Lookup,
    /// The computation has no well-defined numeric answer.
    Numerical,
    /// An operation was called before the estimator was fitted.
    State,
    /// The inputs are malformed (shape, emptiness, type, missing cells).
    Validation,
}

/// Main error type for linearmodel operations.
///
/// # Examples
///
/// ```
/// use linearmodel::error::{ErrorKind, LinearModelError};
///
/// let err = LinearModelError::ColumnNotFound {
///     name: "Gaz".to_string(),
/// };
/// assert_eq!(err.kind(), ErrorKind::Lookup);
/// assert!(err.to_string().contains("Gaz"));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LinearModelError {
    /// Column name is not part of the frame's schema.
    #[error("Column not found: '{name}'")]
    ColumnNotFound {
        /// Requested column name
        name: String,
    },

    /// Normal-equation matrix is not invertible.
    #[error("Singular design matrix: pivot = {pivot}, cannot solve normal equations")]
    SingularMatrix {
        /// Cholesky pivot that fell below tolerance
        pivot: f64,
    },

    /// R² is undefined: constant target but non-zero residuals.
    #[error("R² undefined: target has zero variance but residual sum of squares = {ss_res}")]
    UndefinedRSquared {
        /// Residual sum of squares
        ss_res: f64,
    },

    /// `predict` or `get_coeffs` called before a successful `fit`.
    #[error("Model not fitted: call fit() first")]
    NotFitted,

    /// Shapes don't agree.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Computation needs at least one sample.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Typed accessor used on a column of another type.
    #[error("Column '{name}' is not {expected}")]
    ColumnType {
        /// Column name
        name: String,
        /// Expected column type
        expected: &'static str,
    },

    /// Column still holds absent cells where complete data is required.
    #[error("Column '{column}' has missing values; fill them before building a design matrix")]
    MissingValues {
        /// Column name
        column: String,
    },

    /// Frame construction rejected (lengths, names).
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Invalid hyperparameter value provided.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },
}

impl LinearModelError {
    /// Returns the kind of failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ColumnNotFound { .. } => ErrorKind::Lookup,
            Self::SingularMatrix { .. } | Self::UndefinedRSquared { .. } => ErrorKind::Numerical,
            Self::NotFitted => ErrorKind::State,
            Self::DimensionMismatch { .. }
            | Self::EmptyInput(_)
            | Self::ColumnType { .. }
            | Self::MissingValues { .. }
            | Self::InvalidSchema(_)
            | Self::InvalidHyperparameter { .. } => ErrorKind::Validation,
        }
    }

    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput(context.to_string())
    }

    /// Create a column-not-found error
    #[must_use]
    pub fn column_not_found(name: &str) -> Self {
        Self::ColumnNotFound {
            name: name.to_string(),
        }
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, LinearModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_not_found_display() {
        let err = LinearModelError::column_not_found("Solaire");
        assert_eq!(err.to_string(), "Column not found: 'Solaire'");
        assert_eq!(err.kind(), ErrorKind::Lookup);
    }

    #[test]
    fn test_singular_matrix_display() {
        let err = LinearModelError::SingularMatrix { pivot: 1e-15 };
        let msg = err.to_string();
        assert!(msg.contains("Singular design matrix"));
        assert!(msg.contains("1e-15") || msg.contains("0.000000000000001"));
        assert_eq!(err.kind(), ErrorKind::Numerical);
    }

    #[test]
    fn test_undefined_r_squared_is_numerical() {
        let err = LinearModelError::UndefinedRSquared { ss_res: 0.5 };
        assert!(err.to_string().contains("0.5"));
        assert_eq!(err.kind(), ErrorKind::Numerical);
    }

    #[test]
    fn test_not_fitted_is_state() {
        let err = LinearModelError::NotFitted;
        assert!(err.to_string().contains("fit()"));
        assert_eq!(err.kind(), ErrorKind::State);
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = LinearModelError::dimension_mismatch("n_samples", 4, 3);
        let msg = err.to_string();
        assert!(msg.contains("n_samples=4"));
        assert!(msg.contains("got 3"));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_validation_kinds() {
        let errors = [
            LinearModelError::empty_input("y"),
            LinearModelError::ColumnType {
                name: "Nature".to_string(),
                expected: "numeric",
            },
            LinearModelError::MissingValues {
                column: "Fioul".to_string(),
            },
            LinearModelError::InvalidSchema("duplicate column".to_string()),
            LinearModelError::InvalidHyperparameter {
                param: "threshold".to_string(),
                value: "NaN".to_string(),
                constraint: ">= 0".to_string(),
            },
        ];
        for err in &errors {
            assert_eq!(err.kind(), ErrorKind::Validation, "{err}");
        }
    }

    #[test]
    fn test_error_is_std_error() {
        let err = LinearModelError::NotFitted;
        let _: &dyn std::error::Error = &err;
    }
}
