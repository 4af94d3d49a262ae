// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

use crate::estimators::errors::{EntropyError, MultiscaleError, MultiscaleResult};
use crate::estimators::multiscale::config::ExecutionMode;
use crate::estimators::traits::SubsequenceEstimator;
use crate::estimators::utils::subsequence::subsequence;

/// Result for one offset of a scale.
#[derive(Debug, Clone, PartialEq)]
pub enum OffsetOutcome {
    /// Estimator output for the subsequence.
    Entropy(f64),
    /// Subsequence shorter than the embedding dimension; estimator not called.
    TooShort { len: usize },
    /// The estimator rejected the subsequence.
    Failed(EntropyError),
}

impl OffsetOutcome {
    pub fn value(&self) -> Option<f64> {
        match self {
            OffsetOutcome::Entropy(h) => Some(*h),
            _ => None,
        }
    }
}

/// Per-offset outcomes of one scale, indexed by offset - 1.
#[derive(Debug, Clone, PartialEq)]
pub struct StageEntropies {
    scale: usize,
    outcomes: Vec<OffsetOutcome>,
}

impl StageEntropies {
    pub fn scale(&self) -> usize {
        self.scale
    }

    pub fn outcomes(&self) -> &[OffsetOutcome] {
        &self.outcomes
    }

    /// Outcome of a 1-based offset.
    pub fn outcome(&self, offset: usize) -> Option<&OffsetOutcome> {
        offset.checked_sub(1).and_then(|i| self.outcomes.get(i))
    }

    /// Per-offset values with NaN in place of skipped or failed offsets.
    pub fn to_array(&self) -> Array1<f64> {
        self.outcomes
            .iter()
            .map(|o| o.value().unwrap_or(f64::NAN))
            .collect()
    }

    pub fn valid_values(&self) -> Vec<f64> {
        self.outcomes.iter().filter_map(OffsetOutcome::value).collect()
    }

    pub fn valid_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.value().is_some()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, OffsetOutcome::TooShort { .. }))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, OffsetOutcome::Failed(_)))
            .count()
    }

    /// Mean of the valid offset entropies.
    pub fn mean(&self) -> Option<f64> {
        let valid = self.valid_values();
        if valid.is_empty() {
            return None;
        }
        Some(valid.iter().sum::<f64>() / valid.len() as f64)
    }

    /// Sample standard deviation of the valid offset entropies (needs two values).
    pub fn std_dev(&self) -> Option<f64> {
        let valid = Array1::from(self.valid_values());
        if valid.len() < 2 {
            return None;
        }
        Some(valid.std(1.0))
    }
}

fn evaluate_offset<E>(
    series: ArrayView1<'_, f64>,
    offset: usize,
    scale: usize,
    estimator: &E,
) -> OffsetOutcome
where
    E: SubsequenceEstimator + ?Sized,
{
    let sub = subsequence(series, offset, scale);
    if sub.len() < estimator.embedding_dim() {
        trace!(scale, offset, len = sub.len(), "Subsequence too short, skipped");
        return OffsetOutcome::TooShort { len: sub.len() };
    }
    match estimator.estimate(sub.view()) {
        Ok(h) => OffsetOutcome::Entropy(h),
        Err(err) => {
            trace!(scale, offset, error = %err, "Estimator failed on subsequence");
            OffsetOutcome::Failed(err)
        }
    }
}

/// Evaluate offsets `1..=scale`, in offset order regardless of the execution path.
#[cfg(feature = "parallel")]
fn evaluate_offsets<E>(
    series: ArrayView1<'_, f64>,
    scale: usize,
    estimator: &E,
    mode: ExecutionMode,
) -> Vec<OffsetOutcome>
where
    E: SubsequenceEstimator + ?Sized,
{
    if mode.use_parallel(scale) {
        return (1..scale + 1)
            .into_par_iter()
            .map(|offset| evaluate_offset(series, offset, scale, estimator))
            .collect();
    }
    (1..=scale)
        .map(|offset| evaluate_offset(series, offset, scale, estimator))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_offsets<E>(
    series: ArrayView1<'_, f64>,
    scale: usize,
    estimator: &E,
    _mode: ExecutionMode,
) -> Vec<OffsetOutcome>
where
    E: SubsequenceEstimator + ?Sized,
{
    (1..=scale)
        .map(|offset| evaluate_offset(series, offset, scale, estimator))
        .collect()
}

/// Entropies of the `scale` interleaved subsequences of `series`.
///
/// Offset `m` in `1..=scale` selects every `scale`-th value starting at position `m`.
/// Subsequences shorter than the embedding dimension are skipped and estimator
/// failures are recorded; neither aborts the stage. Fails with
/// `NoUsableSubsequence` when no offset produced a value.
pub fn compute_stage_entropies<E>(
    series: ArrayView1<'_, f64>,
    scale: usize,
    estimator: &E,
    mode: ExecutionMode,
) -> MultiscaleResult<StageEntropies>
where
    E: SubsequenceEstimator + ?Sized,
{
    if scale == 0 {
        return Err(MultiscaleError::invalid_parameter("scale", scale));
    }

    let outcomes = evaluate_offsets(series, scale, estimator, mode);

    let stage = StageEntropies { scale, outcomes };
    if stage.valid_count() == 0 {
        return Err(MultiscaleError::NoUsableSubsequence { scale });
    }
    Ok(stage)
}
