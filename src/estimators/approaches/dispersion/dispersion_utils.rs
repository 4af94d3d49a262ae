// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use ndarray::{Array1, ArrayView1};
use statrs::distribution::{ContinuousCDF, Normal};
use std::collections::BTreeMap;

use crate::estimators::errors::{EntropyError, EntropyResult};

/// How a value in class space is assigned to dispersion classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Membership {
    /// Round to the nearest class (classic dispersion entropy).
    Crisp,
    /// Split the weight between the two neighbouring classes (fuzzy dispersion entropy).
    #[default]
    Triangular,
}

/// Class memberships of a single value: up to two (class, weight) pairs.
///
/// Classes are 0-based here (0..classes). Weights sum to one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassWeights {
    pub lower: (usize, f64),
    pub upper: Option<(usize, f64)>,
}

impl ClassWeights {
    fn single(class: usize) -> Self {
        Self { lower: (class, 1.0), upper: None }
    }

    /// Iterate over the (class, weight) pairs with non-zero weight.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        std::iter::once(self.lower)
            .chain(self.upper)
            .filter(|&(_, w)| w > 0.0)
    }
}

/// Map a sequence through the normal CDF with its own mean and sample standard deviation.
///
/// A zero (or undefined) standard deviation maps every value to 0.5. The moments are
/// taken on a copy scaled by the largest magnitude, so sums of values near `f64::MAX`
/// stay finite; the CDF is invariant under that scaling.
pub fn normal_cdf_map(series: ArrayView1<'_, f64>) -> Array1<f64> {
    let n = series.len();
    if n == 0 {
        return Array1::zeros(0);
    }
    let scale = series.fold(0.0_f64, |acc, &x| acc.max(x.abs()));
    if !(scale.is_finite() && scale > 0.0) {
        return Array1::from_elem(n, 0.5);
    }
    let scaled = series.mapv(|x| x / scale);
    let mean = scaled.sum() / n as f64;
    let std = if n > 1 { scaled.std(1.0) } else { 0.0 };
    match Normal::new(mean, std) {
        Ok(normal) if std > 0.0 => scaled.mapv(|x| normal.cdf(x)),
        _ => Array1::from_elem(n, 0.5),
    }
}

/// Memberships of a normal-CDF value `y` in [0, 1] over `classes` dispersion classes.
///
/// The value is scaled to z = classes * y + 0.5, i.e. into [0.5, classes + 0.5],
/// where class c (1-based) is centred on z = c. Values outside [0, 1] are clamped and
/// NaN is treated as the median 0.5.
pub fn class_weights(y: f64, classes: usize, membership: Membership) -> ClassWeights {
    let y = if y.is_nan() { 0.5 } else { y.clamp(0.0, 1.0) };
    let c = classes as f64;
    let z = c * y + 0.5;
    match membership {
        Membership::Crisp => {
            let class = z.round().clamp(1.0, c) as usize;
            ClassWeights::single(class - 1)
        }
        Membership::Triangular => {
            if z <= 1.0 {
                return ClassWeights::single(0);
            }
            if z >= c {
                return ClassWeights::single(classes - 1);
            }
            let floor = z.floor();
            let frac = z - floor;
            let lower = floor as usize;
            ClassWeights {
                lower: (lower - 1, 1.0 - frac),
                upper: Some((lower, frac)),
            }
        }
    }
}

/// Size of the pattern alphabet, classes^dim, or an error if it does not fit into u64.
pub fn pattern_space(classes: usize, dim: usize) -> EntropyResult<u64> {
    let exp = u32::try_from(dim).map_err(|_| EntropyError::PatternSpaceOverflow { classes, dim })?;
    (classes as u64)
        .checked_pow(exp)
        .ok_or(EntropyError::PatternSpaceOverflow { classes, dim })
}

/// Number of embedding vectors of dimension `dim` with delay `delay` in a sequence of length `n`.
///
/// Zero when the embedding span overflows `usize`.
pub fn embedding_windows(n: usize, dim: usize, delay: usize) -> usize {
    match dim.saturating_sub(1).checked_mul(delay) {
        Some(span) => n.saturating_sub(span),
        None => 0,
    }
}

/// Accumulate fuzzy pattern weights over all embedding vectors.
///
/// Each window distributes the product of its elements' class weights over every
/// combination of member classes. Patterns are encoded as base-`classes` integers,
/// first element most significant. Weights of one window sum to one.
pub fn accumulate_patterns(
    weights: &[ClassWeights],
    dim: usize,
    delay: usize,
    classes: usize,
) -> BTreeMap<u64, f64> {
    let n_windows = embedding_windows(weights.len(), dim, delay);
    let base = classes as u64;
    let mut acc: BTreeMap<u64, f64> = BTreeMap::new();

    // Reuse one buffer of partial (code, weight) products across windows
    let mut partial: Vec<(u64, f64)> = Vec::with_capacity(1 << dim.min(16));
    let mut next: Vec<(u64, f64)> = Vec::with_capacity(1 << dim.min(16));

    for t in 0..n_windows {
        partial.clear();
        partial.push((0, 1.0));
        for j in 0..dim {
            let member = &weights[t + j * delay];
            next.clear();
            for &(code, w) in partial.iter() {
                for (class, cw) in member.iter() {
                    next.push((code * base + class as u64, w * cw));
                }
            }
            std::mem::swap(&mut partial, &mut next);
        }
        for &(code, w) in partial.iter() {
            *acc.entry(code).or_insert(0.0) += w;
        }
    }
    acc
}

/// Crisp pattern code per window, for local values.
pub fn crisp_codes(weights: &[ClassWeights], dim: usize, delay: usize, classes: usize) -> Array1<u64> {
    let n_windows = embedding_windows(weights.len(), dim, delay);
    let base = classes as u64;
    let mut out = Vec::with_capacity(n_windows);
    for t in 0..n_windows {
        let mut code = 0u64;
        for j in 0..dim {
            code = code * base + weights[t + j * delay].lower.0 as u64;
        }
        out.push(code);
    }
    Array1::from(out)
}
