// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Side-channel notices of the multiscale driver.
//!
//! Notices never affect the computed curve. The driver calls the observer
//! from the calling thread only.

use std::sync::Mutex;
use tracing::{info, warn};

use crate::estimators::errors::MultiscaleError;

pub trait MultiscaleObserver {
    /// Kmax exceeded the series length and was lowered.
    fn kmax_clamped(&self, _original: usize, _corrected: usize) {}

    /// The scale produced no usable offset; its curve entry is NaN.
    fn scale_failed(&self, _scale: usize, _error: &MultiscaleError) {}

    /// `completed` of `total` scales are done.
    fn progress(&self, _completed: usize, _total: usize) {}
}

/// Ignores every notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl MultiscaleObserver for NoopObserver {}

/// Forwards notices to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl MultiscaleObserver for TracingObserver {
    fn kmax_clamped(&self, original: usize, corrected: usize) {
        warn!(original, corrected, "Maximum scale exceeds series length, clamped");
    }

    fn scale_failed(&self, scale: usize, error: &MultiscaleError) {
        warn!(scale, error = %error, "Time-shift entropy failed at scale");
    }

    fn progress(&self, completed: usize, total: usize) {
        info!(completed, total, "Time-shift entropy progress");
    }
}

/// A notice captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum MultiscaleEvent {
    KmaxClamped { original: usize, corrected: usize },
    ScaleFailed { scale: usize, error: MultiscaleError },
    Progress { completed: usize, total: usize },
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<MultiscaleEvent>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the notices received so far, in order.
    pub fn events(&self) -> Vec<MultiscaleEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn push(&self, event: MultiscaleEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event),
            Err(poisoned) => poisoned.into_inner().push(event),
        }
    }
}

impl MultiscaleObserver for RecordingObserver {
    fn kmax_clamped(&self, original: usize, corrected: usize) {
        self.push(MultiscaleEvent::KmaxClamped { original, corrected });
    }

    fn scale_failed(&self, scale: usize, error: &MultiscaleError) {
        self.push(MultiscaleEvent::ScaleFailed { scale, error: error.clone() });
    }

    fn progress(&self, completed: usize, total: usize) {
        self.push(MultiscaleEvent::Progress { completed, total });
    }
}

impl<O: MultiscaleObserver + ?Sized> MultiscaleObserver for &O {
    fn kmax_clamped(&self, original: usize, corrected: usize) {
        (**self).kmax_clamped(original, corrected)
    }

    fn scale_failed(&self, scale: usize, error: &MultiscaleError) {
        (**self).scale_failed(scale, error)
    }

    fn progress(&self, completed: usize, total: usize) {
        (**self).progress(completed, total)
    }
}
