use crate::core::round_to_hundredths;
use crate::domain::model::FuelRemainingSource;
use crate::domain::ports::FuelEstimator;
use crate::utils::error::{FuelMixError, Result};
use crate::utils::validation::{validate_percentage, validate_positive};

fn estimate_error(e: FuelMixError) -> FuelMixError {
    FuelMixError::EstimateError {
        message: e.to_string(),
    }
}

/// Fuel left from the trip computer's distance-to-empty and average economy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceEstimator {
    pub distance_to_empty: f64,
    /// Distance per volume unit (mpg for gallons, km/L for liters).
    pub economy: f64,
}

impl DistanceEstimator {
    pub fn new(distance_to_empty: f64, economy: f64) -> Self {
        Self {
            distance_to_empty,
            economy,
        }
    }
}

impl FuelEstimator for DistanceEstimator {
    fn estimate(&self) -> Result<f64> {
        validate_positive("distance_to_empty", self.distance_to_empty).map_err(estimate_error)?;
        validate_positive("economy", self.economy).map_err(estimate_error)?;

        let remaining = round_to_hundredths(self.distance_to_empty / self.economy);
        tracing::debug!(
            distance = self.distance_to_empty,
            economy = self.economy,
            remaining,
            "estimated fuel from distance"
        );
        Ok(remaining)
    }
}

/// Fuel left from a gauge reading expressed as a percentage of the tank.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageEstimator {
    pub fuel_percentage: f64,
    pub tank_size: f64,
}

impl PercentageEstimator {
    pub fn new(fuel_percentage: f64, tank_size: f64) -> Self {
        Self {
            fuel_percentage,
            tank_size,
        }
    }
}

impl FuelEstimator for PercentageEstimator {
    fn estimate(&self) -> Result<f64> {
        validate_percentage("fuel_percentage", self.fuel_percentage).map_err(estimate_error)?;
        validate_positive("tank_size", self.tank_size).map_err(estimate_error)?;

        let remaining = round_to_hundredths(self.fuel_percentage / 100.0 * self.tank_size);
        tracing::debug!(
            percentage = self.fuel_percentage,
            tank_size = self.tank_size,
            remaining,
            "estimated fuel from gauge percentage"
        );
        Ok(remaining)
    }
}

impl FuelRemainingSource {
    /// Turns whichever input mode was used into a fuel-remaining volume.
    /// Manual entries pass through unchanged; range checks happen in the calculator.
    pub fn resolve(&self, tank_size: f64) -> Result<f64> {
        match *self {
            FuelRemainingSource::Manual(volume) => Ok(volume),
            FuelRemainingSource::DistanceToEmpty { distance, economy } => {
                DistanceEstimator::new(distance, economy).estimate()
            }
            FuelRemainingSource::Percentage(percent) => {
                PercentageEstimator::new(percent, tank_size).estimate()
            }
        }
    }
}
