// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};
use tracing::debug;

use crate::estimators::errors::{MultiscaleError, MultiscaleResult};
use crate::estimators::multiscale::config::MultiscaleConfig;
use crate::estimators::multiscale::observer::MultiscaleObserver;
use crate::estimators::multiscale::stage::{StageEntropies, compute_stage_entropies};
use crate::estimators::traits::SubsequenceEstimator;

/// Result of one scale of the curve.
#[derive(Debug, Clone, PartialEq)]
pub enum ScaleOutcome {
    /// Mean over the valid offsets, with the offsets it was computed from.
    Computed { value: f64, stage: StageEntropies },
    /// No offset at this scale produced a value.
    Failed(MultiscaleError),
}

impl ScaleOutcome {
    /// Curve entry: the mean, or NaN for a failed scale.
    pub fn value(&self) -> f64 {
        match self {
            ScaleOutcome::Computed { value, .. } => *value,
            ScaleOutcome::Failed(_) => f64::NAN,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ScaleOutcome::Failed(_))
    }
}

/// Time-shift multiscale entropy curve with per-scale detail.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiscaleCurve {
    requested_max_scale: usize,
    scales: Vec<ScaleOutcome>,
}

impl MultiscaleCurve {
    /// Kmax as passed in the configuration.
    pub fn requested_max_scale(&self) -> usize {
        self.requested_max_scale
    }

    /// Kmax actually used, after clamping to the series length.
    pub fn max_scale(&self) -> usize {
        self.scales.len()
    }

    pub fn scales(&self) -> &[ScaleOutcome] {
        &self.scales
    }

    /// Outcome of a 1-based scale.
    pub fn scale(&self, k: usize) -> Option<&ScaleOutcome> {
        k.checked_sub(1).and_then(|i| self.scales.get(i))
    }

    /// One entry per scale; NaN marks a failed scale.
    pub fn values(&self) -> Array1<f64> {
        self.scales.iter().map(ScaleOutcome::value).collect()
    }

    /// Sample standard deviation across the valid offsets of each scale; NaN where
    /// the scale failed or had fewer than two valid offsets.
    pub fn std_devs(&self) -> Array1<f64> {
        self.scales
            .iter()
            .map(|s| match s {
                ScaleOutcome::Computed { stage, .. } => stage.std_dev().unwrap_or(f64::NAN),
                ScaleOutcome::Failed(_) => f64::NAN,
            })
            .collect()
    }

    pub fn failed_scales(&self) -> Vec<usize> {
        self.scales
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_failed())
            .map(|(i, _)| i + 1)
            .collect()
    }
}

fn validate_series(series: ArrayView1<'_, f64>) -> MultiscaleResult<()> {
    if series.is_empty() {
        return Err(MultiscaleError::EmptySeries);
    }
    if let Some((index, &value)) = series.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(MultiscaleError::NonFiniteData { index, value });
    }
    Ok(())
}

/// Scales after which a progress notice is due: every ceil(total / 10) scales and at the end.
fn progress_due(completed: usize, total: usize) -> bool {
    if total <= 10 {
        return false;
    }
    let step = total.div_ceil(10);
    completed % step == 0 || completed == total
}

/// Compute the time-shift multiscale entropy curve, keeping per-scale detail.
///
/// For every scale k in `1..=Kmax` the series is split into k interleaved
/// subsequences (offsets `1..=k`, stride k), each is passed to `estimator`, and
/// the valid results are averaged. A scale without any valid offset is recorded
/// as failed and does not stop the remaining scales.
///
/// Fails only on invalid input: an empty or non-finite series, `max_scale == 0`,
/// or a series shorter than the estimator's embedding dimension. A `max_scale`
/// larger than the series length is clamped and reported to `observer`.
pub fn compute_curve_detailed<E, O>(
    series: ArrayView1<'_, f64>,
    estimator: &E,
    config: &MultiscaleConfig,
    observer: &O,
) -> MultiscaleResult<MultiscaleCurve>
where
    E: SubsequenceEstimator + ?Sized,
    O: MultiscaleObserver + ?Sized,
{
    validate_series(series)?;
    if config.max_scale == 0 {
        return Err(MultiscaleError::invalid_parameter("max_scale", config.max_scale));
    }
    let len = series.len();
    let dim = estimator.embedding_dim();
    if len < dim {
        return Err(MultiscaleError::SeriesTooShort { len, dim });
    }

    let requested_max_scale = config.max_scale;
    let max_scale = if requested_max_scale > len {
        observer.kmax_clamped(requested_max_scale, len);
        len
    } else {
        requested_max_scale
    };
    debug!(len, dim, max_scale, execution = ?config.execution, "Computing time-shift entropy curve");

    let mut scales = Vec::with_capacity(max_scale);
    for k in 1..=max_scale {
        let outcome = match compute_stage_entropies(series, k, estimator, config.execution) {
            Ok(stage) => match stage.mean() {
                Some(value) => ScaleOutcome::Computed { value, stage },
                None => ScaleOutcome::Failed(MultiscaleError::NoUsableSubsequence { scale: k }),
            },
            Err(err) => ScaleOutcome::Failed(err),
        };
        if let ScaleOutcome::Failed(err) = &outcome {
            observer.scale_failed(k, err);
        }
        scales.push(outcome);

        if progress_due(k, max_scale) {
            observer.progress(k, max_scale);
        }
    }

    Ok(MultiscaleCurve { requested_max_scale, scales })
}

/// Compute the time-shift multiscale entropy curve TSEn[1..=Kmax].
///
/// Returns exactly Kmax entries (after clamping), NaN at scales where no offset
/// produced a value. See [`compute_curve_detailed`] for the failure contract.
pub fn compute_curve<E, O>(
    series: ArrayView1<'_, f64>,
    estimator: &E,
    config: &MultiscaleConfig,
    observer: &O,
) -> MultiscaleResult<Array1<f64>>
where
    E: SubsequenceEstimator + ?Sized,
    O: MultiscaleObserver + ?Sized,
{
    compute_curve_detailed(series, estimator, config, observer).map(|curve| curve.values())
}
