// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Minimum number of offsets at one scale before `ExecutionMode::Auto` goes parallel.
pub const PARALLEL_MIN_OFFSETS: usize = 8;

/// How the offsets of one scale are evaluated.
///
/// All modes produce identical results. Without the `parallel` feature every mode
/// runs sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// Parallel when more than one worker thread is available and the scale has
    /// at least [`PARALLEL_MIN_OFFSETS`] offsets.
    #[default]
    Auto,
    Sequential,
    Parallel,
}

impl ExecutionMode {
    /// Decide whether `offsets` independent evaluations should run in parallel.
    pub fn use_parallel(self, offsets: usize) -> bool {
        #[cfg(feature = "parallel")]
        {
            match self {
                ExecutionMode::Sequential => false,
                ExecutionMode::Parallel => true,
                ExecutionMode::Auto => {
                    rayon::current_num_threads() > 1 && offsets >= PARALLEL_MIN_OFFSETS
                }
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            let _ = offsets;
            false
        }
    }
}

/// Settings of the multiscale driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiscaleConfig {
    /// Largest scale Kmax; clamped to the series length.
    pub max_scale: usize,
    pub execution: ExecutionMode,
}

impl Default for MultiscaleConfig {
    fn default() -> Self {
        Self {
            max_scale: 10,
            execution: ExecutionMode::Auto,
        }
    }
}

impl MultiscaleConfig {
    pub fn new(max_scale: usize) -> Self {
        Self { max_scale, ..Self::default() }
    }

    pub fn with_max_scale(mut self, max_scale: usize) -> Self {
        self.max_scale = max_scale;
        self
    }

    pub fn with_execution(mut self, execution: ExecutionMode) -> Self {
        self.execution = execution;
        self
    }
}
