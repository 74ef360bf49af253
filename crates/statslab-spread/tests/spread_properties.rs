//! Property-based tests for dispersion measures

use proptest::prelude::*;
use statslab_spread::*;

proptest! {
    // Property: every dispersion measure is non-negative
    #[test]
    fn prop_non_negative(values in prop::collection::vec(-1e6f64..1e6, 2..200)) {
        prop_assert!(pvariance(&values, None).unwrap() >= 0.0);
        prop_assert!(variance(&values, None).unwrap() >= 0.0);
        prop_assert!(pstdev(&values, None).unwrap() >= 0.0);
        prop_assert!(stdev(&values, None).unwrap() >= 0.0);
    }

    // Property: sample variance = population variance * N / (N - 1)
    #[test]
    fn prop_bessel_relation(values in prop::collection::vec(-1e3f64..1e3, 2..200)) {
        let n = values.len() as f64;
        let pv = pvariance(&values, None).unwrap();
        let sv = variance(&values, None).unwrap();
        prop_assert!((sv - pv * n / (n - 1.0)).abs() <= 1e-9 * (1.0 + sv));
    }

    // Property: shifting the data leaves the spread unchanged
    #[test]
    fn prop_shift_invariant(
        values in prop::collection::vec(-1e3f64..1e3, 2..100),
        shift in -1e3f64..1e3,
    ) {
        let shifted: Vec<f64> = values.iter().map(|x| x + shift).collect();
        let a = pstdev(&values, None).unwrap();
        let b = pstdev(&shifted, None).unwrap();
        prop_assert!((a - b).abs() <= 1e-6 * (1.0 + a));
    }

    // Property: the mean minimizes squared deviations
    #[test]
    fn prop_mean_is_least_squares_center(
        values in prop::collection::vec(-1e3f64..1e3, 1..100),
        other in -1e3f64..1e3,
    ) {
        let at_mean = pvariance(&values, None).unwrap();
        let elsewhere = pvariance(&values, Some(other)).unwrap();
        prop_assert!(at_mean <= elsewhere + 1e-9 * (1.0 + elsewhere));
    }
}

#[test]
fn test_reference_scenario() {
    let data = [1.0, 2.0, 3.0, 4.0];
    assert!((variance(&data, None).unwrap() - 1.6667).abs() < 1e-4);
    assert_eq!(pvariance(&data, None).unwrap(), 1.25);
}
