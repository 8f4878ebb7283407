pub mod blend;
pub mod estimator;

pub use crate::domain::model::{BlendRequest, BlendResult, FuelRemainingSource, VolumeUnit};
pub use crate::domain::ports::FuelEstimator;
pub use crate::utils::error::Result;

/// Rounds to two decimal places for presentation. Values too large to scale
/// are already far past hundredths precision and come back unchanged.
pub fn round_to_hundredths(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}
