// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for single-sequence estimators and the multiscale driver.
//!
//! Estimator failures ([`EntropyError`]) are absorbed per offset inside a scale.
//! Driver failures ([`MultiscaleError`]) are either fatal for the whole call
//! (input validation) or absorbed per scale into a NaN entry of the curve.

use thiserror::Error;

/// Result alias for single-sequence estimator operations.
pub type EntropyResult<T> = Result<T, EntropyError>;

/// Result alias for the time-shift stage and the multiscale driver.
pub type MultiscaleResult<T> = Result<T, MultiscaleError>;

/// Errors raised by an entropy estimator working on one sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntropyError {
    /// A parameter is outside its valid range.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: usize,
    },

    /// The sequence cannot hold a single embedding vector.
    #[error("Insufficient length: required {required}, actual {len}")]
    InsufficientLength {
        /// Actual sequence length
        len: usize,
        /// Minimum length, (dim - 1) * delay + 1
        required: usize,
    },

    /// A value is NaN or infinite.
    #[error("Non-finite value {value} at index {index}")]
    NonFiniteData { index: usize, value: f64 },

    /// classes^dim does not fit into a u64 pattern code.
    #[error("Pattern space overflow: {classes}^{dim} does not fit into u64")]
    PatternSpaceOverflow { classes: usize, dim: usize },
}

impl EntropyError {
    /// Create an InsufficientLength error.
    pub fn insufficient_length(len: usize, required: usize) -> Self {
        Self::InsufficientLength { len, required }
    }

    /// Create an InvalidParameter error.
    pub fn invalid_parameter(name: &'static str, value: usize) -> Self {
        Self::InvalidParameter { name, value }
    }
}

/// Errors raised by the time-shift stage and the multiscale driver.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MultiscaleError {
    /// The input series is empty.
    #[error("Empty series")]
    EmptySeries,

    /// A value of the input series is NaN or infinite.
    #[error("Non-finite value {value} at index {index}")]
    NonFiniteData { index: usize, value: f64 },

    /// A parameter is outside its valid range.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: usize,
    },

    /// The series is shorter than the embedding dimension. Fatal for the whole curve.
    #[error("Series too short: length {len} < embedding dimension {dim}")]
    SeriesTooShort { len: usize, dim: usize },

    /// Every offset at this scale was too short or failed in the estimator.
    #[error("No usable subsequence at scale {scale}")]
    NoUsableSubsequence { scale: usize },
}

impl MultiscaleError {
    /// Create an InvalidParameter error.
    pub fn invalid_parameter(name: &'static str, value: usize) -> Self {
        Self::InvalidParameter { name, value }
    }
}
