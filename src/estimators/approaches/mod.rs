pub mod dispersion;

// Unified re-exports so tests and users can import
// tsen::estimators::approaches::* ergonomically.
pub use dispersion::dispersion_utils::Membership;
pub use dispersion::fuzzy_dispersion::{
    DispersionParams, FuzzyDispersionEntropy, FuzzyDispersionEstimator,
};
