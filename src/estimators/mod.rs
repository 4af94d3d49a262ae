pub mod entropy;
pub mod errors;
pub mod multiscale;
pub mod traits;
pub mod approaches;
pub mod utils;

pub use errors::{EntropyError, EntropyResult, MultiscaleError, MultiscaleResult};
pub use traits::{GlobalValue, OptionalLocalValues, SubsequenceEstimator};
