//! Core estimator trait.
//!
//! Defines the fit / predict / score contract shared by regression models.

use crate::error::Result;
use crate::primitives::{Matrix, Vector};

/// Primary trait for supervised estimators.
///
/// # Examples
///
/// ```
/// use linearmodel::prelude::*;
///
/// // y = 2x + 1
/// let x_train = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).expect("4 rows, 1 column");
/// let y_train = Vector::from_slice(&[3.0, 5.0, 7.0, 9.0]);
///
/// let x_test = Matrix::from_vec(2, 1, vec![5.0, 6.0]).expect("2 rows, 1 column");
/// let y_test = Vector::from_slice(&[11.0, 13.0]);
///
/// let mut model = OrdinaryLeastSquares::default();
/// model.fit(&x_train, &y_train).expect("well-conditioned data");
/// let predictions = model.predict(&x_test).expect("model is fitted");
/// assert_eq!(predictions.len(), 2);
/// let score = model.score(&x_test, &y_test).expect("non-constant target");
/// assert!(score > 0.99);
/// ```
pub trait Estimator {
    /// Fits the model to training data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails (dimension mismatch, singular matrix, etc.).
    fn fit(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<()>;

    /// Predicts target values for input data.
    ///
    /// # Errors
    ///
    /// Returns an error if the model is not fitted or `x` has the wrong width.
    fn predict(&self, x: &Matrix<f64>) -> Result<Vector<f64>>;

    /// Computes the R² score of the predictions on `x` against `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if prediction fails or R² is undefined.
    fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<f64>;
}
