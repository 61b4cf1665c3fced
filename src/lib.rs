//! Linearmodel: descriptive statistics, correlation-based feature selection
//! and ordinary least squares regression over named tabular columns.
//!
//! The typical workflow summarizes a [`DataFrame`](data::DataFrame), picks the
//! columns that correlate with a target, and fits a linear model on them.
//!
//! # Quick Start
//!
//! ```
//! use linearmodel::prelude::*;
//!
//! let df = DataFrame::from_numeric(vec![
//!     ("target", vec![6.0, 8.0, 9.0, 11.0, 13.0]),
//!     ("x1", vec![1.0, 1.0, 2.0, 2.0, 3.0]),
//!     ("x2", vec![1.0, 2.0, 2.0, 3.0, 3.5]),
//! ])
//! .expect("valid frame");
//!
//! // Descriptive statistics and pairwise correlations
//! let report = summary(&df).expect("numeric frame");
//! assert_eq!(report.columns.len(), 3);
//!
//! // Regressors correlated with the target
//! let features = find_highly_correlated(&df, "target", 0.55).expect("numeric target");
//! let names: Vec<&str> = features.iter().map(String::as_str).collect();
//!
//! // y = 3 + x1 + 2*x2
//! let x = df.to_matrix(&names).expect("complete columns");
//! let y = df.to_vector("target").expect("complete column");
//!
//! let mut model = OrdinaryLeastSquares::new(true);
//! model.fit(&x, &y).expect("independent columns");
//! let r2 = model.determination_coefficient(&x, &y).expect("non-constant target");
//! assert!((r2 - 1.0).abs() < 1e-9);
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: DataFrame of typed, named columns
//! - [`stats`]: Descriptive statistics, correlation and summaries
//! - [`feature_selection`]: Correlation-based regressor selection
//! - [`linear_model`]: Ordinary least squares regression
//! - [`metrics`]: Goodness-of-fit (R²)
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade. The library never installs a
//! logger; wire one up in the binary (e.g. `env_logger`) to see them.

pub mod data;
pub mod error;
pub mod feature_selection;
pub mod linear_model;
pub mod metrics;
pub mod prelude;
pub mod primitives;
pub mod stats;
pub mod traits;

pub use error::{LinearModelError, Result};
pub use traits::Estimator;
