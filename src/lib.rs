// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # tsen
//!
//! Time-shift multiscale entropy (TSEn) for one-dimensional time series, with fuzzy
//! dispersion entropy as the per-subsequence estimator.
//!
//! ## Quick Start
//!
//! ```rust
//! use tsen::estimators::entropy::Entropy;
//! use tsen::estimators::traits::GlobalValue;
//! use ndarray::Array1;
//!
//! let series = Array1::from_iter((0..200).map(|i| (i as f64 * 0.3).sin()));
//!
//! // Single-sequence fuzzy dispersion entropy (dim = 2, 6 classes, delay 1)
//! let h = Entropy::new_fuzzy_dispersion(series.view(), 2, 6, 1)
//!     .unwrap()
//!     .global_value();
//! assert!(h >= 0.0);
//!
//! // Curve over scales 1..=10
//! let curve = Entropy::time_shift_curve(series.view(), 2, 6, 1, 10).unwrap();
//! assert_eq!(curve.len(), 10);
//! ```
//!
//! ## Time-shift coarse-graining
//!
//! At scale k the series is decimated into the k interleaved subsequences starting at
//! offsets 1..=k with stride k (no block averaging). Each subsequence is evaluated on
//! its own and the scale value is the mean over the subsequences that could be
//! evaluated. Failures stay local:
//!
//! | Situation | Effect |
//! |-----------|--------|
//! | subsequence shorter than the embedding dimension | offset skipped |
//! | estimator rejects a subsequence | offset recorded as failed |
//! | no offset of a scale usable | scale entry is NaN, other scales unaffected |
//! | Kmax larger than the series | Kmax clamped, observer notified |
//! | series shorter than the embedding dimension | error, no curve |
//!
//! ## Architecture
//!
//! 1. **Public API Layer**: the `Entropy` factory and `TimeShiftEntropy`
//! 2. **Estimation Approaches**: fuzzy / crisp dispersion entropy
//! 3. **Multiscale Core**: subsequence indexing, per-scale stage, curve driver
//! 4. **Core Infrastructure**: shared traits, error types and notice observers
//!
//! Any type implementing [`estimators::traits::SubsequenceEstimator`] can replace the
//! dispersion estimator.
//!
//! ## Feature Flags
//!
//! - `parallel` (default): evaluate the offsets of a scale on the rayon thread pool

pub mod estimators;
