use ndarray::{Array1, ArrayView1};

use crate::estimators::approaches::dispersion::dispersion_utils::Membership;
use crate::estimators::approaches::dispersion::fuzzy_dispersion::{
    DispersionParams, FuzzyDispersionEntropy, FuzzyDispersionEstimator,
};
use crate::estimators::errors::{EntropyResult, MultiscaleResult};
use crate::estimators::multiscale::{MultiscaleConfig, MultiscaleCurve, TimeShiftEntropy};
pub use crate::estimators::traits::{GlobalValue, OptionalLocalValues};

/// Entropy estimation methods for 1D time series
///
/// This struct provides static methods for creating single-sequence estimators
/// and for running the time-shift multiscale analysis on top of them.
pub struct Entropy;

impl Entropy {
    /// Creates a fuzzy dispersion entropy estimator for a 1D series
    ///
    /// # Arguments
    ///
    /// * `data` - One-dimensional series of finite values
    /// * `dim` - Embedding dimension
    /// * `classes` - Number of dispersion classes
    /// * `delay` - Time delay between embedded elements
    ///
    /// # Errors
    ///
    /// Fails on zero parameters, non-finite data, or a series shorter than
    /// `(dim - 1) * delay + 1`.
    pub fn new_fuzzy_dispersion(
        data: ArrayView1<'_, f64>,
        dim: usize,
        classes: usize,
        delay: usize,
    ) -> EntropyResult<FuzzyDispersionEntropy> {
        FuzzyDispersionEntropy::new(data, DispersionParams::new(dim, classes, delay))
    }

    /// Creates a classic (crisp) dispersion entropy estimator for a 1D series
    ///
    /// Same as [`Entropy::new_fuzzy_dispersion`] with rounding to the nearest class,
    /// which makes local values available.
    pub fn new_dispersion(
        data: ArrayView1<'_, f64>,
        dim: usize,
        classes: usize,
        delay: usize,
    ) -> EntropyResult<FuzzyDispersionEntropy> {
        let params = DispersionParams::new(dim, classes, delay).with_membership(Membership::Crisp);
        FuzzyDispersionEntropy::new(data, params)
    }

    /// Creates a time-shift multiscale estimator using fuzzy dispersion entropy per subsequence
    pub fn time_shift(
        params: DispersionParams,
        config: MultiscaleConfig,
    ) -> TimeShiftEntropy<FuzzyDispersionEstimator> {
        TimeShiftEntropy::new(FuzzyDispersionEstimator::new(params), config)
    }

    /// Time-shift multiscale fuzzy dispersion entropy curve TSEn[1..=max_scale]
    ///
    /// # Arguments
    ///
    /// * `series` - One-dimensional series of finite values
    /// * `dim`, `classes`, `delay` - Parameters of the per-subsequence estimator
    /// * `max_scale` - Largest scale; clamped to the series length
    ///
    /// # Returns
    ///
    /// One value per scale, NaN where no subsequence of that scale could be evaluated.
    /// Fails only when the series is empty, non-finite or shorter than `dim`.
    pub fn time_shift_curve(
        series: ArrayView1<'_, f64>,
        dim: usize,
        classes: usize,
        delay: usize,
        max_scale: usize,
    ) -> MultiscaleResult<Array1<f64>> {
        Self::time_shift(
            DispersionParams::new(dim, classes, delay),
            MultiscaleConfig::new(max_scale),
        )
        .curve(series)
    }

    /// Same as [`Entropy::time_shift_curve`], keeping per-scale and per-offset detail
    pub fn time_shift_curve_detailed(
        series: ArrayView1<'_, f64>,
        params: DispersionParams,
        config: MultiscaleConfig,
    ) -> MultiscaleResult<MultiscaleCurve> {
        Self::time_shift(params, config).curve_detailed(series)
    }
}
