// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Time-shift multiscale entropy.
//!
//! Coarse-graining by time-shifted decimation: at scale k the series is split into
//! the k interleaved subsequences starting at offsets 1..=k with stride k. Each is
//! passed to a [`SubsequenceEstimator`] and the per-scale value is the mean over
//! the offsets that produced one.

pub mod config;
pub mod driver;
pub mod observer;
pub mod stage;

pub use config::{ExecutionMode, MultiscaleConfig, PARALLEL_MIN_OFFSETS};
pub use driver::{MultiscaleCurve, ScaleOutcome, compute_curve, compute_curve_detailed};
pub use observer::{
    MultiscaleEvent, MultiscaleObserver, NoopObserver, RecordingObserver, TracingObserver,
};
pub use stage::{OffsetOutcome, StageEntropies, compute_stage_entropies};

use ndarray::{Array1, ArrayView1};

use crate::estimators::errors::MultiscaleResult;
use crate::estimators::traits::SubsequenceEstimator;

/// Time-shift multiscale entropy estimator bound to a subsequence estimator and settings.
///
/// Notices go to `tracing` unless another observer is passed to the `*_with` methods.
pub struct TimeShiftEntropy<E> {
    estimator: E,
    config: MultiscaleConfig,
}

impl<E: SubsequenceEstimator> TimeShiftEntropy<E> {
    pub fn new(estimator: E, config: MultiscaleConfig) -> Self {
        Self { estimator, config }
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    pub fn config(&self) -> &MultiscaleConfig {
        &self.config
    }

    /// TSEn[1..=Kmax], NaN at failed scales.
    pub fn curve(&self, series: ArrayView1<'_, f64>) -> MultiscaleResult<Array1<f64>> {
        self.curve_with(series, &TracingObserver)
    }

    pub fn curve_with<O>(&self, series: ArrayView1<'_, f64>, observer: &O) -> MultiscaleResult<Array1<f64>>
    where
        O: MultiscaleObserver + ?Sized,
    {
        compute_curve(series, &self.estimator, &self.config, observer)
    }

    pub fn curve_detailed(&self, series: ArrayView1<'_, f64>) -> MultiscaleResult<MultiscaleCurve> {
        self.curve_detailed_with(series, &TracingObserver)
    }

    pub fn curve_detailed_with<O>(
        &self,
        series: ArrayView1<'_, f64>,
        observer: &O,
    ) -> MultiscaleResult<MultiscaleCurve>
    where
        O: MultiscaleObserver + ?Sized,
    {
        compute_curve_detailed(series, &self.estimator, &self.config, observer)
    }

    /// Offset entropies of a single scale.
    pub fn stage(&self, series: ArrayView1<'_, f64>, scale: usize) -> MultiscaleResult<StageEntropies> {
        compute_stage_entropies(series, scale, &self.estimator, self.config.execution)
    }
}
