// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::Array1;
use tsen::estimators::approaches::{DispersionParams, FuzzyDispersionEstimator};
use tsen::estimators::entropy::Entropy;
use tsen::estimators::errors::MultiscaleError;
use tsen::estimators::multiscale::{
    MultiscaleConfig, NoopObserver, ScaleOutcome, TimeShiftEntropy, compute_curve,
    compute_curve_detailed,
};
use tsen::estimators::traits::{GlobalValue, SubsequenceEstimator};

use crate::test_helpers::{
    OddStartEstimator, RejectingEstimator, SumEstimator, generate_gaussian_series, ramp,
};

#[test]
fn ramp_of_ten_with_stub_estimator() {
    // k=1: 55; k=2: mean(25, 30); k=3: mean(22, 15, 18)
    let series = ramp(10);
    let est = SumEstimator::new(2);
    let curve = compute_curve(series.view(), &est, &MultiscaleConfig::new(3), &NoopObserver).unwrap();
    assert_eq!(curve.len(), 3);
    assert_abs_diff_eq!(curve[0], 55.0, epsilon = 1e-12);
    assert_abs_diff_eq!(curve[1], 27.5, epsilon = 1e-12);
    assert_abs_diff_eq!(curve[2], 55.0 / 3.0, epsilon = 1e-12);
    // 1 + 2 + 3 estimator calls
    assert_eq!(est.calls(), 6);
}

#[test]
fn ramp_of_ten_with_fuzzy_dispersion() {
    let series = ramp(10);
    let curve = Entropy::time_shift_curve(series.view(), 2, 3, 1, 3).unwrap();
    assert_eq!(curve.len(), 3);
    assert!(curve.iter().all(|v| v.is_finite() && *v >= 0.0));

    // Scale 1 equals the estimator on the whole series
    let direct = Entropy::new_fuzzy_dispersion(series.view(), 2, 3, 1).unwrap().global_value();
    assert_abs_diff_eq!(curve[0], direct, epsilon = 1e-12);

    // Scale 3 is the mean over the three interleavings
    let est = FuzzyDispersionEstimator::new(DispersionParams::new(2, 3, 1));
    let parts: Vec<f64> = [vec![1.0, 4.0, 7.0, 10.0], vec![2.0, 5.0, 8.0], vec![3.0, 6.0, 9.0]]
        .into_iter()
        .map(|v| est.estimate(Array1::from(v).view()).unwrap())
        .collect();
    assert_abs_diff_eq!(curve[2], parts.iter().sum::<f64>() / 3.0, epsilon = 1e-12);
}

#[test]
fn unembeddable_delay_gives_sentinel_curve() {
    let series = ramp(10);
    let est = FuzzyDispersionEstimator::new(DispersionParams::new(2, 3, usize::MAX));
    let curve = compute_curve(series.view(), &est, &MultiscaleConfig::new(3), &NoopObserver).unwrap();
    assert_eq!(curve.len(), 3);
    assert!(curve.iter().all(|v| v.is_nan()));

    let detailed =
        compute_curve_detailed(series.view(), &est, &MultiscaleConfig::new(3), &NoopObserver).unwrap();
    assert_eq!(detailed.failed_scales(), vec![1, 2, 3]);
}

#[test]
fn series_shorter_than_dimension_is_fatal() {
    let series = ramp(5);
    let est = SumEstimator::new(10);
    let res = compute_curve(series.view(), &est, &MultiscaleConfig::new(3), &NoopObserver);
    assert_eq!(res, Err(MultiscaleError::SeriesTooShort { len: 5, dim: 10 }));
    assert_eq!(est.calls(), 0);

    let res = Entropy::time_shift_curve(series.view(), 10, 6, 1, 3);
    assert_eq!(res, Err(MultiscaleError::SeriesTooShort { len: 5, dim: 10 }));
}

#[test]
fn invalid_input_is_rejected_before_any_scale() {
    let est = SumEstimator::new(1);
    let empty = Array1::<f64>::zeros(0);
    assert_eq!(
        compute_curve(empty.view(), &est, &MultiscaleConfig::new(3), &NoopObserver),
        Err(MultiscaleError::EmptySeries)
    );

    let mut series = ramp(8);
    series[6] = f64::INFINITY;
    assert_eq!(
        compute_curve(series.view(), &est, &MultiscaleConfig::new(3), &NoopObserver),
        Err(MultiscaleError::NonFiniteData { index: 6, value: f64::INFINITY })
    );

    assert_eq!(
        compute_curve(ramp(8).view(), &est, &MultiscaleConfig::new(0), &NoopObserver),
        Err(MultiscaleError::InvalidParameter { name: "max_scale", value: 0 })
    );
    assert_eq!(est.calls(), 0);
}

#[test]
fn max_scale_is_clamped_to_series_length() {
    let series = ramp(5);
    let est = SumEstimator::new(1);
    let curve = compute_curve_detailed(series.view(), &est, &MultiscaleConfig::new(20), &NoopObserver).unwrap();
    assert_eq!(curve.requested_max_scale(), 20);
    assert_eq!(curve.max_scale(), 5);
    assert_eq!(curve.values().len(), 5);
    assert!(curve.values().iter().all(|v| v.is_finite()));
}

#[test]
fn unusable_scales_become_nan_without_affecting_others() {
    // len 6, dim 3: scales 1 and 2 have subsequences of length >= 3, scales 3..=6 do not
    let series = ramp(6);
    let est = SumEstimator::new(3);
    let curve = compute_curve_detailed(series.view(), &est, &MultiscaleConfig::new(6), &NoopObserver).unwrap();
    let values = curve.values();
    assert_eq!(values.len(), 6);
    assert_abs_diff_eq!(values[0], 21.0, epsilon = 1e-12);
    assert_abs_diff_eq!(values[1], 10.5, epsilon = 1e-12);
    assert!(values.iter().skip(2).all(|v| v.is_nan()));
    assert_eq!(curve.failed_scales(), vec![3, 4, 5, 6]);
    assert_eq!(
        curve.scale(4),
        Some(&ScaleOutcome::Failed(MultiscaleError::NoUsableSubsequence { scale: 4 }))
    );

    // The same scales computed alone give the same numbers
    let alone = compute_curve(series.view(), &est, &MultiscaleConfig::new(2), &NoopObserver).unwrap();
    assert_eq!(alone.to_vec(), values.slice(ndarray::s![..2]).to_vec());
}

#[test]
fn estimator_that_rejects_everything_yields_full_nan_curve() {
    let series = ramp(12);
    let curve = compute_curve(series.view(), &RejectingEstimator, &MultiscaleConfig::new(12), &NoopObserver).unwrap();
    assert_eq!(curve.len(), 12);
    assert!(curve.iter().all(|v| v.is_nan()));
}

#[test]
fn partial_estimator_failures_keep_the_scale() {
    // scale 2: offset 1 {1,3,5,7,9} accepted, offset 2 {2,4,...} rejected
    let series = ramp(10);
    let curve = compute_curve_detailed(series.view(), &OddStartEstimator, &MultiscaleConfig::new(2), &NoopObserver).unwrap();
    match curve.scale(2) {
        Some(ScaleOutcome::Computed { value, stage }) => {
            assert_abs_diff_eq!(*value, 25.0, epsilon = 1e-12);
            assert_eq!(stage.failed_count(), 1);
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[test]
fn std_devs_follow_the_offsets() {
    let series = ramp(10);
    let curve = compute_curve_detailed(series.view(), &SumEstimator::new(1), &MultiscaleConfig::new(2), &NoopObserver).unwrap();
    let std = curve.std_devs();
    assert!(std[0].is_nan());
    assert_abs_diff_eq!(std[1], 12.5f64.sqrt(), epsilon = 1e-12);
}

#[test]
fn time_shift_estimator_wraps_the_driver() {
    let series = generate_gaussian_series(300, 0.0, 1.0, 17);
    let params = DispersionParams::new(2, 6, 1);
    let config = MultiscaleConfig::new(8);
    let time_shift = TimeShiftEntropy::new(FuzzyDispersionEstimator::new(params), config);
    assert_eq!(time_shift.config().max_scale, 8);
    assert_eq!(time_shift.estimator().embedding_dim(), 2);

    let curve = time_shift.curve_with(series.view(), &NoopObserver).unwrap();
    let detailed = Entropy::time_shift_curve_detailed(series.view(), params, config).unwrap();
    assert_eq!(curve.len(), 8);
    for (a, b) in curve.iter().zip(detailed.values().iter()) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
    }

    let stage = time_shift.stage(series.view(), 5).unwrap();
    assert_eq!(stage.outcomes().len(), 5);
    assert_abs_diff_eq!(stage.mean().unwrap(), curve[4], epsilon = 1e-12);
}
