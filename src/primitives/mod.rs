//! Core compute primitives (Vector, Matrix).
//!
//! These types carry the feature matrices, response vectors and coefficient
//! vectors used by the estimators.

mod matrix;
mod vector;

pub use matrix::Matrix;
pub use vector::Vector;
