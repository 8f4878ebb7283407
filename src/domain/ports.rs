use crate::utils::error::Result;

/// Produces a fuel-remaining volume from some indirect measurement.
pub trait FuelEstimator {
    fn estimate(&self) -> Result<f64>;
}
