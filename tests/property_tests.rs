//! Property-based tests using proptest.
//!
//! These tests verify invariants of the statistics routines and the
//! least-squares estimator.

use linearmodel::prelude::*;
use linearmodel::stats::corr;
use proptest::prelude::*;

// Strategy for generating sample columns
fn column_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-100.0f64..100.0, 1..max_len)
}

// Strategy for paired columns of equal length
fn paired_strategy(max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (2..max_len).prop_flat_map(|len| {
        (
            proptest::collection::vec(-100.0f64..100.0, len),
            proptest::collection::vec(-100.0f64..100.0, len),
        )
    })
}

// Small integer-valued columns, so repeated values actually occur
fn discrete_strategy(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec((-5i32..5).prop_map(f64::from), 1..max_len)
}

// Random design: unit draws stretched by a per-column scale and shifted by a
// per-column offset, plus true coefficients (intercept first)
fn design_strategy() -> impl Strategy<Value = (Matrix<f64>, Vec<f64>)> {
    (1usize..=3).prop_flat_map(|p| {
        ((p + 2)..12).prop_flat_map(move |n| {
            (
                proptest::collection::vec(-1.0f64..1.0, n * p),
                proptest::collection::vec(-1e6f64..1e6, p),
                proptest::collection::vec(1.0f64..10.0, p),
                proptest::collection::vec(-10.0f64..10.0, p + 1),
            )
                .prop_map(move |(unit, offsets, scales, beta)| {
                    let data = unit
                        .iter()
                        .enumerate()
                        .map(|(idx, u)| offsets[idx % p] + scales[idx % p] * u)
                        .collect();
                    let x = Matrix::from_vec(n, p, data).expect("n * p values");
                    (x, beta)
                })
        })
    })
}

// Gram-Schmidt over the centred columns. Returns the smallest centred column
// norm and the smallest fraction of a column's norm left after removing the
// earlier columns; a fraction near zero means (near-)collinear columns.
fn column_independence(x: &Matrix<f64>) -> (f64, f64) {
    let (n, p) = x.shape();
    let mut basis: Vec<Vec<f64>> = Vec::with_capacity(p);
    let (mut min_norm, mut min_share) = (f64::INFINITY, f64::INFINITY);

    for j in 0..p {
        let column: Vec<f64> = (0..n).map(|i| x.get(i, j)).collect();
        let mean = column.iter().sum::<f64>() / n as f64;
        let mut residual: Vec<f64> = column.iter().map(|v| v - mean).collect();
        let norm = residual.iter().map(|v| v * v).sum::<f64>().sqrt();

        for q in &basis {
            let d: f64 = residual.iter().zip(q).map(|(r, q)| r * q).sum();
            for (r, q) in residual.iter_mut().zip(q) {
                *r -= d * q;
            }
        }
        let left = residual.iter().map(|v| v * v).sum::<f64>().sqrt();

        min_norm = min_norm.min(norm);
        min_share = min_share.min(if norm > 0.0 { left / norm } else { 0.0 });
        if left > 0.0 {
            basis.push(residual.iter().map(|r| r / left).collect());
        }
    }
    (min_norm, min_share)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn std_is_sqrt_of_variance(data in column_strategy(50)) {
        let stats = DescriptiveStats::new(&data);
        prop_assert_eq!(stats.std(), stats.variance().sqrt());
        prop_assert!(stats.variance() >= 0.0);
    }

    #[test]
    fn constant_column_has_zero_variance(value in -100.0f64..100.0, len in 1usize..30) {
        let data = vec![value; len];
        let stats = DescriptiveStats::new(&data);
        prop_assert!(stats.variance().abs() < 1e-9);
    }

    #[test]
    fn median_is_reversal_invariant(data in column_strategy(50)) {
        let mut reversed = data.clone();
        reversed.reverse();
        prop_assert_eq!(
            DescriptiveStats::new(&data).median(),
            DescriptiveStats::new(&reversed).median()
        );
    }

    #[test]
    fn median_lies_within_range(data in column_strategy(50)) {
        let median = DescriptiveStats::new(&data).median();
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(median >= min && median <= max);
    }

    #[test]
    fn correlation_is_symmetric((x, y) in paired_strategy(40)) {
        let xy = corr(&x, &y).expect("same length");
        let yx = corr(&y, &x).expect("same length");
        prop_assert_eq!(xy, yx);
        prop_assert!(xy.abs() <= 1.0 + 1e-12);
    }

    #[test]
    fn self_correlation_is_one((x, _) in paired_strategy(40)) {
        let stats = DescriptiveStats::new(&x);
        prop_assume!(stats.variance() > 1e-9);
        let r = corr(&x, &x).expect("same length");
        prop_assert!((r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn weighted_mode_equals_mode_without_ties(data in discrete_strategy(30)) {
        let stats = DescriptiveStats::new(&data);
        let mode = stats.mode().expect("non-empty");
        let top = data.iter().filter(|&&v| v == mode).count();
        let tied = data
            .iter()
            .filter(|&&v| v != mode && data.iter().filter(|&&w| w == v).count() == top)
            .count();
        prop_assume!(tied == 0);
        prop_assert_eq!(stats.weighted_mode(), mode);
    }

    #[test]
    fn mode_is_a_most_frequent_value(data in discrete_strategy(30)) {
        let mode = DescriptiveStats::new(&data).mode().expect("non-empty");
        let count_of = |v: f64| data.iter().filter(|&&w| w == v).count();
        let best = data.iter().map(|&v| count_of(v)).max().expect("non-empty");
        prop_assert_eq!(count_of(mode), best);
    }

    #[test]
    fn ols_recovers_noise_free_coefficients((x, beta) in design_strategy()) {
        let (min_norm, min_share) = column_independence(&x);
        prop_assume!(min_norm >= 1.0 && min_share >= 0.2);

        let y: Vec<f64> = (0..x.n_rows())
            .map(|i| beta[0] + (0..x.n_cols()).map(|j| beta[j + 1] * x.get(i, j)).sum::<f64>())
            .collect();
        let y = Vector::from_vec(y);

        let mut model = OrdinaryLeastSquares::new(true);
        model.fit(&x, &y).expect("independent columns");

        let slopes = model.coefficients().expect("fitted");
        for (j, want) in beta[1..].iter().enumerate() {
            let got = slopes[j];
            prop_assert!((got - want).abs() < 1e-5, "slope {}: got {}, want {}", j, got, want);
        }

        let predictions = model.predict(&x).expect("fitted");
        for i in 0..y.len() {
            prop_assert!(
                (predictions[i] - y[i]).abs() < 1e-3,
                "row {}: got {}, want {}", i, predictions[i], y[i]
            );
        }
    }

    #[test]
    fn ols_recovers_coefficients_on_small_designs(
        b0 in -10.0f64..10.0,
        b1 in -10.0f64..10.0,
        b2 in -10.0f64..10.0,
    ) {
        let x = Matrix::from_rows(
            &[
                vec![1.0, 1.0],
                vec![1.0, 2.0],
                vec![2.0, 2.0],
                vec![2.0, 3.0],
                vec![3.0, 1.0],
                vec![0.0, 4.0],
            ],
            2,
        )
        .expect("rows have equal length");
        let y: Vec<f64> = (0..x.n_rows())
            .map(|i| b0 + b1 * x.get(i, 0) + b2 * x.get(i, 1))
            .collect();
        let y = Vector::from_vec(y);

        let mut model = OrdinaryLeastSquares::new(true);
        model.fit(&x, &y).expect("independent columns");

        let beta = model.get_coeffs().expect("fitted");
        for (got, want) in beta.as_slice().iter().zip([b0, b1, b2]) {
            prop_assert!((got - want).abs() < 1e-8, "got {}, want {}", got, want);
        }
    }

    #[test]
    fn ols_training_r_squared_is_one(b1 in 0.5f64..10.0, b2 in 0.5f64..10.0) {
        let x = Matrix::from_rows(
            &[vec![1.0, 1.0], vec![1.0, 2.0], vec![2.0, 2.0], vec![2.0, 3.0]],
            2,
        )
        .expect("rows have equal length");
        let y: Vec<f64> = (0..4).map(|i| 3.0 + b1 * x.get(i, 0) + b2 * x.get(i, 1)).collect();
        let y = Vector::from_vec(y);

        let mut model = OrdinaryLeastSquares::new(true);
        model.fit(&x, &y).expect("independent columns");
        let r2 = model.determination_coefficient(&x, &y).expect("non-constant target");
        prop_assert!((r2 - 1.0).abs() < 1e-9);
    }
}
