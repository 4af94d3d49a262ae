// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};

use crate::estimators::errors::EntropyResult;

pub trait GlobalValue {
    /// Compute and return the global value of the measure.
    fn global_value(&self) -> f64;
}

/// Optional interface for estimators that may not support local values.
///
/// Estimators that do support local values should return supports_local() = true
/// and provide local values via `Ok(Array1<f64>)`. Estimators that do not support
/// local values should return supports_local() = false and an Err with a brief reason.
pub trait OptionalLocalValues {
    fn supports_local(&self) -> bool;
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str>;
}

/// Capability interface consumed by the multiscale driver.
///
/// Maps one finite sequence to a single non-negative entropy value, or fails when
/// the sequence is too short for the embedding. Implementations carry their own
/// parameters (dimension, classes, delay); the driver only needs the embedding
/// dimension to pre-filter subsequences.
pub trait SubsequenceEstimator: Send + Sync {
    /// Estimate the entropy of a single sequence.
    fn estimate(&self, sequence: ArrayView1<'_, f64>) -> EntropyResult<f64>;

    /// Embedding dimension used for the global and per-offset length checks.
    fn embedding_dim(&self) -> usize;
}

impl<E: SubsequenceEstimator + ?Sized> SubsequenceEstimator for &E {
    fn estimate(&self, sequence: ArrayView1<'_, f64>) -> EntropyResult<f64> {
        (**self).estimate(sequence)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }
}
