//! Linear models for regression.
//!
//! Includes Ordinary Least Squares (OLS) linear regression.

use crate::error::{LinearModelError, Result};
use crate::metrics::r_squared;
use crate::primitives::{Matrix, Vector};
use crate::traits::Estimator;
use log::{debug, warn};

/// Ordinary Least Squares (OLS) linear regression.
///
/// Fits a linear model by minimizing the residual sum of squares between
/// observed targets and predicted targets. The model equation is:
///
/// ```text
/// y = X β + ε
/// ```
///
/// where `β` is the coefficient vector and `ε` is random error. With an
/// intercept, `X` is augmented with a leading column of ones and `β[0]` is
/// the intercept.
///
/// # Solver
///
/// Uses normal equations: `β = (X^T X)^-1 X^T y` via Cholesky decomposition.
/// With an intercept the equations are formed on column-centred `X` and `y`,
/// and the intercept is `ȳ - x̄·β`, so a large feature offset does not mask
/// its spread. A design matrix whose normal matrix is not positive definite (collinear
/// features, fewer samples than parameters) is rejected with
/// [`LinearModelError::SingularMatrix`].
///
/// # Examples
///
/// ```
/// use linearmodel::prelude::*;
///
/// // y = 3 + 1*x1 + 2*x2
/// let x = Matrix::from_rows(
///     &[vec![1.0, 1.0], vec![1.0, 2.0], vec![2.0, 2.0], vec![2.0, 3.0]],
///     2,
/// )
/// .expect("rows have equal length");
/// let y = Vector::from_slice(&[6.0, 8.0, 9.0, 11.0]);
///
/// let mut model = OrdinaryLeastSquares::new(true);
/// model.fit(&x, &y).expect("independent columns");
///
/// let beta = model.get_coeffs().expect("model is fitted");
/// assert!((beta[0] - 3.0).abs() < 1e-9);
///
/// let r2 = model.determination_coefficient(&x, &y).expect("non-constant target");
/// assert!((r2 - 1.0).abs() < 1e-9);
/// ```
///
/// # Performance
///
/// - Time complexity: O(n²p + p³) where n = samples, p = features
/// - Space complexity: O(np)
#[derive(Debug, Clone)]
pub struct OrdinaryLeastSquares {
    /// Full parameter vector, intercept first when configured.
    coefficients: Option<Vector<f64>>,
    /// Whether to fit an intercept.
    fit_intercept: bool,
}

impl Default for OrdinaryLeastSquares {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OrdinaryLeastSquares {
    /// Creates an unfitted estimator.
    #[must_use]
    pub fn new(intercept: bool) -> Self {
        Self {
            coefficients: None,
            fit_intercept: intercept,
        }
    }

    /// Sets whether to fit an intercept term.
    #[must_use]
    pub fn with_intercept(mut self, fit_intercept: bool) -> Self {
        self.fit_intercept = fit_intercept;
        self
    }

    /// Returns true if an intercept column is prepended on fit and predict.
    #[must_use]
    pub fn fits_intercept(&self) -> bool {
        self.fit_intercept
    }

    /// Returns the fitted parameter vector, intercept at index 0 when configured.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::NotFitted`] before a successful fit.
    pub fn get_coeffs(&self) -> Result<&Vector<f64>> {
        self.coefficients.as_ref().ok_or(LinearModelError::NotFitted)
    }

    /// Returns the feature weights (excluding intercept).
    #[must_use]
    pub fn coefficients(&self) -> Option<Vector<f64>> {
        let beta = self.coefficients.as_ref()?;
        if self.fit_intercept {
            Some(beta.slice(1, beta.len()))
        } else {
            Some(beta.clone())
        }
    }

    /// Returns the intercept term; `0.0` when unfitted or not configured.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        match &self.coefficients {
            Some(beta) if self.fit_intercept => beta[0],
            _ => 0.0,
        }
    }

    /// Returns true if the model has been fitted.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Number of features seen at fit time.
    #[must_use]
    pub fn n_features(&self) -> Option<usize> {
        let beta = self.coefficients.as_ref()?;
        Some(beta.len() - usize::from(self.fit_intercept))
    }

    /// R² of the model's predictions on `x` against `y`.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::NotFitted`] before a successful fit,
    /// [`LinearModelError::DimensionMismatch`] for a wrongly shaped input and
    /// [`LinearModelError::UndefinedRSquared`] for a constant `y` that the
    /// model does not reproduce.
    pub fn determination_coefficient(&self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<f64> {
        self.score(x, y)
    }

    fn solve_normal_equations(x: &Matrix<f64>, y: &Vector<f64>) -> Result<Vector<f64>> {
        let xt = x.transpose();
        let xtx = xt.matmul(x)?;
        let xty = xt.matvec(y)?;

        xtx.cholesky_solve(&xty).map_err(|err| {
            if let LinearModelError::SingularMatrix { pivot } = &err {
                warn!("rejecting fit: singular normal equations (pivot {pivot})");
            }
            err
        })
    }

    fn design_matrix(&self, x: &Matrix<f64>) -> Matrix<f64> {
        if self.fit_intercept {
            x.with_leading_column(1.0)
        } else {
            x.clone()
        }
    }
}

impl Estimator for OrdinaryLeastSquares {
    /// Fits the linear regression model using normal equations.
    ///
    /// Solves: β = (X^T X)^-1 X^T y, on centred data when fitting an intercept.
    ///
    /// A failed fit leaves any previous fit in place.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Input dimensions don't match
    /// - There are no samples, or nothing to estimate
    /// - Fewer samples than parameters, or collinear features (singular matrix)
    fn fit(&mut self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<()> {
        let (n_samples, n_features) = x.shape();

        if n_samples != y.len() {
            return Err(LinearModelError::dimension_mismatch(
                "n_samples",
                n_samples,
                y.len(),
            ));
        }

        if n_samples == 0 {
            return Err(LinearModelError::empty_input("cannot fit with zero samples"));
        }

        let n_params = n_features + usize::from(self.fit_intercept);
        if n_params == 0 {
            return Err(LinearModelError::empty_input(
                "no features and no intercept to estimate",
            ));
        }

        // Underdetermined: X^T X has rank at most n_samples.
        if n_samples < n_params {
            warn!("rejecting fit: {n_samples} samples for {n_params} parameters");
            return Err(LinearModelError::SingularMatrix { pivot: 0.0 });
        }

        let beta = if self.fit_intercept {
            // Centred normal equations; the intercept comes back from the means.
            let x_means = x.column_means();
            let y_mean = y.mean();
            let y_centered: Vec<f64> = y.as_slice().iter().map(|v| v - y_mean).collect();

            let slopes =
                Self::solve_normal_equations(&x.centered(&x_means), &Vector::from_vec(y_centered))?;
            let offset: f64 = x_means
                .iter()
                .zip(slopes.as_slice())
                .map(|(mean, slope)| mean * slope)
                .sum();

            let mut params = Vec::with_capacity(n_params);
            params.push(y_mean - offset);
            params.extend_from_slice(slopes.as_slice());
            Vector::from_vec(params)
        } else {
            Self::solve_normal_equations(x, y)?
        };

        debug!(
            "fitted OLS on {n_samples} samples, {n_params} parameters (intercept: {})",
            self.fit_intercept
        );
        self.coefficients = Some(beta);
        Ok(())
    }

    /// Predicts target values for input data.
    ///
    /// # Errors
    ///
    /// Returns [`LinearModelError::NotFitted`] before a successful fit and
    /// [`LinearModelError::DimensionMismatch`] if `x` has a different number
    /// of columns than the training data.
    fn predict(&self, x: &Matrix<f64>) -> Result<Vector<f64>> {
        let beta = self.get_coeffs()?;
        let expected = beta.len() - usize::from(self.fit_intercept);
        if x.n_cols() != expected {
            return Err(LinearModelError::dimension_mismatch(
                "n_features",
                expected,
                x.n_cols(),
            ));
        }

        self.design_matrix(x).matvec(beta)
    }

    /// Computes the R² score.
    fn score(&self, x: &Matrix<f64>, y: &Vector<f64>) -> Result<f64> {
        let y_pred = self.predict(x)?;
        r_squared(&y_pred, y)
    }
}

#[cfg(test)]
#[path = "ols_tests.rs"]
mod tests;
