//! Goodness-of-fit metrics for regression.

use crate::error::{LinearModelError, Result};
use crate::primitives::Vector;
use log::warn;

/// Relative bound under which a residual sum of squares counts as zero.
const ZERO_RESIDUAL_TOLERANCE: f64 = 1e-12;

/// Computes the coefficient of determination (R²).
///
/// R² = 1 - (`SS_res` / `SS_tot`)
///
/// where `SS_res` is the residual sum of squares and `SS_tot` is the total
/// sum of squares.
///
/// A constant target has `SS_tot = 0`. Then R² is `1.0` if the predictions
/// reproduce it (residuals numerically zero) and undefined otherwise.
///
/// # Examples
///
/// ```
/// use linearmodel::metrics::r_squared;
/// use linearmodel::primitives::Vector;
///
/// let y_true = Vector::from_slice(&[3.0, -0.5, 2.0, 7.0]);
/// let y_pred = Vector::from_slice(&[2.5, 0.0, 2.0, 8.0]);
/// let r2 = r_squared(&y_pred, &y_true).expect("same non-zero length");
/// assert!(r2 > 0.9);
/// ```
///
/// # Errors
///
/// Returns [`LinearModelError::DimensionMismatch`] if lengths differ,
/// [`LinearModelError::EmptyInput`] for empty vectors and
/// [`LinearModelError::UndefinedRSquared`] for a constant target that the
/// predictions miss.
pub fn r_squared(y_pred: &Vector<f64>, y_true: &Vector<f64>) -> Result<f64> {
    if y_pred.len() != y_true.len() {
        return Err(LinearModelError::dimension_mismatch(
            "prediction length",
            y_true.len(),
            y_pred.len(),
        ));
    }
    let Some(&first) = y_true.as_slice().first() else {
        return Err(LinearModelError::empty_input("r_squared needs at least one sample"));
    };

    let ss_res: f64 = y_true
        .as_slice()
        .iter()
        .zip(y_pred.as_slice())
        .map(|(t, p)| (t - p).powi(2))
        .sum();

    // Compared exactly: a computed mean can drift off a repeated value.
    if y_true.as_slice().iter().all(|&t| t == first) {
        let scale = y_true.len() as f64 * first.powi(2).max(1.0);
        if ss_res <= ZERO_RESIDUAL_TOLERANCE * scale {
            return Ok(1.0);
        }
        warn!("R² undefined: constant target, residual sum of squares {ss_res}");
        return Err(LinearModelError::UndefinedRSquared { ss_res });
    }

    let y_mean = y_true.mean();
    let ss_tot: f64 = y_true.as_slice().iter().map(|t| (t - y_mean).powi(2)).sum();

    Ok(1.0 - (ss_res / ss_tot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_r_squared_perfect() {
        let y = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        assert!((r_squared(&y, &y).expect("same length") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_known_value() {
        // ss_res = 1.5, ss_tot = 29.1875
        let y_true = Vector::from_slice(&[3.0, -0.5, 2.0, 7.0]);
        let y_pred = Vector::from_slice(&[2.5, 0.0, 2.0, 8.0]);
        let r2 = r_squared(&y_pred, &y_true).expect("same length");
        assert!((r2 - (1.0 - 1.5 / 29.1875)).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_mean_predictor_is_zero() {
        let y_true = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let y_pred = Vector::from_slice(&[2.0, 2.0, 2.0]);
        assert!(r_squared(&y_pred, &y_true).expect("same length").abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_can_be_negative() {
        let y_true = Vector::from_slice(&[1.0, 2.0, 3.0]);
        let y_pred = Vector::from_slice(&[3.0, 2.0, 1.0]);
        assert!(r_squared(&y_pred, &y_true).expect("same length") < 0.0);
    }

    #[test]
    fn test_r_squared_constant_target_matched() {
        let y_true = Vector::from_slice(&[0.1, 0.1, 0.1]);
        let y_pred = Vector::from_slice(&[0.1, 0.1, 0.1 + 1e-12]);
        assert_eq!(r_squared(&y_pred, &y_true), Ok(1.0));
    }

    #[test]
    fn test_r_squared_constant_target_missed() {
        let y_true = Vector::from_slice(&[5.0, 5.0, 5.0]);
        let y_pred = Vector::from_slice(&[4.0, 5.0, 6.0]);
        let err = r_squared(&y_pred, &y_true).expect_err("undefined R²");
        assert_eq!(err, LinearModelError::UndefinedRSquared { ss_res: 2.0 });
    }

    #[test]
    fn test_r_squared_length_mismatch() {
        let y_true = Vector::from_slice(&[1.0, 2.0]);
        let y_pred = Vector::from_slice(&[1.0]);
        assert!(matches!(
            r_squared(&y_pred, &y_true),
            Err(LinearModelError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_r_squared_empty() {
        let empty = Vector::from_vec(Vec::new());
        assert!(matches!(
            r_squared(&empty, &empty),
            Err(LinearModelError::EmptyInput(_))
        ));
    }
}
