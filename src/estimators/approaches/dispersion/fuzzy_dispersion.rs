// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};
use std::collections::BTreeMap;

use crate::estimators::approaches::dispersion::dispersion_utils::{
    Membership, accumulate_patterns, class_weights, crisp_codes, embedding_windows,
    normal_cdf_map, pattern_space,
};
use crate::estimators::errors::{EntropyError, EntropyResult};
use crate::estimators::traits::{GlobalValue, OptionalLocalValues, SubsequenceEstimator};

/// Parameters of the (fuzzy) dispersion entropy estimator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionParams {
    /// Embedding dimension m
    pub dim: usize,
    /// Number of dispersion classes nc
    pub classes: usize,
    /// Time delay tau between embedded elements
    pub delay: usize,
    pub membership: Membership,
    /// Divide by ln(classes^dim)
    pub normalize: bool,
}

impl Default for DispersionParams {
    fn default() -> Self {
        Self {
            dim: 2,
            classes: 6,
            delay: 1,
            membership: Membership::Triangular,
            normalize: false,
        }
    }
}

impl DispersionParams {
    pub fn new(dim: usize, classes: usize, delay: usize) -> Self {
        Self { dim, classes, delay, ..Self::default() }
    }

    pub fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Minimum sequence length holding one embedding vector: (dim - 1) * delay + 1.
    ///
    /// `None` when the embedding span does not fit into `usize`; no sequence is that long.
    pub fn min_length(&self) -> Option<usize> {
        self.dim
            .saturating_sub(1)
            .checked_mul(self.delay)
            .and_then(|span| span.checked_add(1))
    }

    /// Check that dim, classes and delay are positive and the pattern alphabet fits into u64.
    pub fn validate(&self) -> EntropyResult<()> {
        if self.dim == 0 {
            return Err(EntropyError::invalid_parameter("dim", self.dim));
        }
        if self.classes == 0 {
            return Err(EntropyError::invalid_parameter("classes", self.classes));
        }
        if self.delay == 0 {
            return Err(EntropyError::invalid_parameter("delay", self.delay));
        }
        pattern_space(self.classes, self.dim)?;
        Ok(())
    }
}

/// Fuzzy dispersion entropy estimator for a single 1D sequence.
///
/// Values are mapped through the normal CDF, scaled into `classes` dispersion classes
/// and embedded with dimension `dim` and delay `delay`. With triangular membership every
/// value belongs partially to its two neighbouring classes, so one embedding vector
/// contributes to up to 2^dim dispersion patterns; with crisp membership this reduces to
/// classic dispersion entropy. The result is the Shannon entropy (natural log) of the
/// pattern distribution.
pub struct FuzzyDispersionEntropy {
    params: DispersionParams,
    distribution: BTreeMap<u64, f64>,
    codes: Option<Array1<u64>>,
    n_windows: usize,
}

impl FuzzyDispersionEntropy {
    /// Build from a 1D sequence.
    ///
    /// Fails when the parameters are invalid, the data contains non-finite values or
    /// the sequence is shorter than `(dim - 1) * delay + 1`.
    pub fn new(data: ArrayView1<'_, f64>, params: DispersionParams) -> EntropyResult<Self> {
        params.validate()?;
        if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(EntropyError::NonFiniteData { index, value });
        }
        let n = data.len();
        let required = params.min_length().unwrap_or(usize::MAX);
        if n < required {
            return Err(EntropyError::insufficient_length(n, required));
        }

        let y = normal_cdf_map(data);
        let weights: Vec<_> = y
            .iter()
            .map(|&v| class_weights(v, params.classes, params.membership))
            .collect();

        let n_windows = embedding_windows(n, params.dim, params.delay);
        let counts = accumulate_patterns(&weights, params.dim, params.delay, params.classes);
        let total = n_windows as f64;
        let distribution = counts.into_iter().map(|(code, w)| (code, w / total)).collect();

        let codes = match params.membership {
            Membership::Crisp => Some(crisp_codes(&weights, params.dim, params.delay, params.classes)),
            Membership::Triangular => None,
        };

        Ok(Self { params, distribution, codes, n_windows })
    }

    pub fn params(&self) -> &DispersionParams {
        &self.params
    }

    /// Number of embedding vectors.
    pub fn n_windows(&self) -> usize {
        self.n_windows
    }

    /// Pattern probabilities as (code, p) pairs sorted by code.
    pub fn pattern_distribution(&self) -> Vec<(u64, f64)> {
        self.distribution
            .iter()
            .filter(|&(_, &p)| p > 0.0)
            .map(|(&c, &p)| (c, p))
            .collect()
    }

    fn norm(&self) -> f64 {
        if !self.params.normalize {
            return 1.0;
        }
        let space = (self.params.dim as f64) * (self.params.classes as f64).ln();
        if space > 0.0 { space } else { 1.0 }
    }
}

impl GlobalValue for FuzzyDispersionEntropy {
    fn global_value(&self) -> f64 {
        // -sum(p * ln p), summed in code order
        let mut h = 0.0_f64;
        for &p in self.distribution.values() {
            h -= if p > 0.0 { p * p.ln() } else { 0.0 };
        }
        // Clamp tiny negative rounding residue
        h.max(0.0) / self.norm()
    }
}

impl OptionalLocalValues for FuzzyDispersionEntropy {
    fn supports_local(&self) -> bool {
        self.codes.is_some()
    }

    /// Local values -ln p(pattern_t) per window; crisp membership only.
    fn local_values_opt(&self) -> Result<Array1<f64>, &'static str> {
        let codes = self
            .codes
            .as_ref()
            .ok_or("Local values are not defined for fuzzy membership")?;
        let norm = self.norm();
        Ok(codes.mapv(|c| -self.distribution[&c].ln() / norm))
    }
}

/// Parameter holder that plugs fuzzy dispersion entropy into the multiscale driver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FuzzyDispersionEstimator {
    pub params: DispersionParams,
}

impl FuzzyDispersionEstimator {
    pub fn new(params: DispersionParams) -> Self {
        Self { params }
    }
}

impl SubsequenceEstimator for FuzzyDispersionEstimator {
    fn estimate(&self, sequence: ArrayView1<'_, f64>) -> EntropyResult<f64> {
        FuzzyDispersionEntropy::new(sequence, self.params).map(|e| e.global_value())
    }

    fn embedding_dim(&self) -> usize {
        self.params.dim
    }
}
