//! Property-based tests for central tendency measures

use approx::assert_relative_eq;
use proptest::prelude::*;
use statslab_center::*;
use statslab_core::Sample;

proptest! {
    // Property: the median lies within the sample range
    #[test]
    fn prop_median_within_range(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let sample = Sample::from(values);
        let m = median(&sample).unwrap();
        prop_assert!(sample.min().unwrap() <= m && m <= sample.max().unwrap());
    }

    // Property: low <= median <= high, all equal for odd sizes
    #[test]
    fn prop_median_ordering(values in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let lo = median_low(&values).unwrap();
        let mid = median(&values).unwrap();
        let hi = median_high(&values).unwrap();
        prop_assert!(lo <= mid && mid <= hi);
        if values.len() % 2 == 1 {
            prop_assert_eq!(lo, mid);
            prop_assert_eq!(mid, hi);
        }
    }

    // Property: mean is linear under positive scaling
    #[test]
    fn prop_mean_scales(
        values in prop::collection::vec(-1e3f64..1e3, 1..100),
        scale in 0.001f64..1e3,
    ) {
        let scaled: Vec<f64> = values.iter().map(|x| x * scale).collect();
        let expected = scale * mean(&values).unwrap();
        let got = mean(&scaled).unwrap();
        let tolerance = 1e-9 * (1.0 + values.iter().map(|x| (x * scale).abs()).sum::<f64>());
        prop_assert!((got - expected).abs() <= tolerance, "{} vs {}", got, expected);
    }

    // Property: explicit unit weights match the unweighted harmonic mean
    #[test]
    fn prop_harmonic_unit_weights(values in prop::collection::vec(0.0f64..1e3, 1..100)) {
        let ones = vec![1.0; values.len()];
        prop_assert_eq!(
            harmonic_mean(&values, &ones).unwrap(),
            harmonic_mean(&values, &[]).unwrap()
        );
    }

    // Property: HM <= GM <= AM for positive data
    #[test]
    fn prop_mean_inequality(values in prop::collection::vec(0.01f64..1e3, 1..100)) {
        let am = mean(&values).unwrap();
        let gm = geometric_mean(&values).unwrap();
        let hm = harmonic_mean(&values, &[]).unwrap();
        let slack = 1e-9 * am;
        prop_assert!(hm <= gm + slack);
        prop_assert!(gm <= am + slack);
    }

    // Property: the mode is one of the multimodes, and is the first of them
    #[test]
    fn prop_mode_heads_multimode(values in prop::collection::vec(0i32..8, 1..60)) {
        let data: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
        let modes = multimode(&data);
        prop_assert_eq!(mode(&data).unwrap(), modes[0]);
    }

    // Property: grouped median stays within half a class of the sample range
    #[test]
    fn prop_grouped_median_bounded(
        values in prop::collection::vec(0i32..50, 1..100),
        interval in 0.5f64..5.0,
    ) {
        let data: Vec<f64> = values.iter().map(|&v| f64::from(v)).collect();
        let s = Sample::from(data);
        let m = median_grouped(&s, interval).unwrap();
        prop_assert!(m >= s.min().unwrap() - interval / 2.0 - 1e-9);
        prop_assert!(m <= s.max().unwrap() + interval / 2.0 + 1e-9);
    }
}

#[test]
fn test_reference_scenarios() {
    let data = [1.0, 2.0, 3.0, 4.0];
    assert_eq!(mean(&data).unwrap(), 2.5);
    assert_eq!(median(&data).unwrap(), 2.5);
    assert_eq!(median_low(&data).unwrap(), 2.0);
    assert_eq!(median_high(&data).unwrap(), 3.0);
    assert_eq!(harmonic_mean(&[1.0, 4.0], &[]).unwrap(), 1.6);
    assert_eq!(mode(&[1.0, 1.0, 2.0, 3.0]).unwrap(), 1.0);
    assert_eq!(multimode(&[1.0, 1.0, 2.0, 2.0, 3.0]), vec![1.0, 2.0]);
    assert!(matches!(
        harmonic_mean(&[-1.0, 2.0], &[]),
        Err(Error::NegativeValue(_))
    ));
    assert!(matches!(mean(&[]), Err(Error::EmptySample { .. })));
}

#[test]
fn test_estimators_through_trait_objects() {
    let estimators: Vec<Box<dyn CentralTendencyEstimator>> = vec![
        Box::new(Mean),
        Box::new(GeometricMean),
        Box::new(HarmonicMean::new()),
        Box::new(Median),
        Box::new(MedianLow),
        Box::new(MedianHigh),
        Box::new(MedianGrouped::default()),
    ];
    let sample = Sample::from(vec![2.0, 8.0, 4.0]);
    for est in &estimators {
        let value = est.estimate(&sample).unwrap();
        assert!(
            (2.0..=8.0).contains(&value),
            "{} gave {}",
            est.name(),
            value
        );
    }
    assert_relative_eq!(estimators[1].estimate(&sample).unwrap(), 4.0, epsilon = 1e-12);
}
