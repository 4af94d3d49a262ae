// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Interleaved subsequences used by the time-shift coarse-graining.
//!
//! Offsets are 1-based: offset `m` with stride `k` selects the positions
//! `m, m + k, m + 2k, ...` not exceeding the series length.

use ndarray::{Array1, ArrayView1, s};

/// Number of elements in the subsequence starting at `offset` with `stride`.
///
/// Equals `(len - offset) / stride + 1` when `1 <= offset <= len`, else 0.
pub fn subsequence_len(len: usize, offset: usize, stride: usize) -> usize {
    if offset == 0 || stride == 0 || offset > len {
        return 0;
    }
    (len - offset) / stride + 1
}

/// 1-based positions `offset, offset + stride, ...` not exceeding `len`.
pub fn subsequence_indices(len: usize, offset: usize, stride: usize) -> Vec<usize> {
    if offset == 0 || stride == 0 {
        return Vec::new();
    }
    (offset..=len).step_by(stride).collect()
}

/// Owned copy of the subsequence starting at `offset` (1-based) with `stride`.
pub fn subsequence(series: ArrayView1<'_, f64>, offset: usize, stride: usize) -> Array1<f64> {
    if subsequence_len(series.len(), offset, stride) == 0 {
        return Array1::zeros(0);
    }
    let step = isize::try_from(stride).unwrap_or(isize::MAX);
    series.slice(s![offset - 1..;step]).to_owned()
}
