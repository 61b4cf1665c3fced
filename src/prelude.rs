//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use linearmodel::prelude::*;
//! ```

pub use crate::data::{Column, DataFrame};
pub use crate::error::{LinearModelError, Result};
pub use crate::feature_selection::{find_highly_correlated, CorrelationSelector, SelectionResult};
pub use crate::linear_model::OrdinaryLeastSquares;
pub use crate::metrics::r_squared;
pub use crate::primitives::{Matrix, Vector};
pub use crate::stats::{summary, DescriptiveStats, Summary};
pub use crate::traits::Estimator;
