pub mod profile;

use crate::app::report::OutputFormat;
use crate::config::profile::{VehicleProfile, DEFAULT_ETHANOL_E85, DEFAULT_ETHANOL_PUMP_GAS};
use crate::domain::model::{BlendRequest, FuelRemainingSource, VolumeUnit};
use crate::utils::error::{FuelMixError, Result};
use crate::utils::validation::{validate_required_field, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "fuel-mix"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Work out how much E85 and pump gas to add to reach a target ethanol blend")
)]
pub struct CliConfig {
    /// TOML vehicle profile with tank size, unit and fuel defaults
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub profile: Option<String>,

    /// Fuel tank capacity
    #[cfg_attr(feature = "cli", arg(long))]
    pub tank_size: Option<f64>,

    /// Volume unit: gallons or liters
    #[cfg_attr(feature = "cli", arg(long))]
    pub unit: Option<VolumeUnit>,

    /// Fuel currently in the tank
    #[cfg_attr(feature = "cli", arg(long))]
    pub fuel_remaining: Option<f64>,

    /// Distance to empty from the trip computer
    #[cfg_attr(feature = "cli", arg(long))]
    pub distance_to_empty: Option<f64>,

    /// Average economy, distance per volume unit (mpg or km/L)
    #[cfg_attr(feature = "cli", arg(long))]
    pub economy: Option<f64>,

    /// Fuel gauge reading as a percentage of the tank
    #[cfg_attr(feature = "cli", arg(long))]
    pub fuel_percentage: Option<f64>,

    /// Ethanol % of the fuel already in the tank
    #[cfg_attr(feature = "cli", arg(long))]
    pub ethanol_in_tank: Option<f64>,

    /// Ethanol % of the pump gas [default: 10]
    #[cfg_attr(feature = "cli", arg(long))]
    pub ethanol_pump_gas: Option<f64>,

    /// Ethanol % of the E85 [default: 85]
    #[cfg_attr(feature = "cli", arg(long))]
    pub ethanol_e85: Option<f64>,

    /// Desired ethanol % after filling up
    #[cfg_attr(feature = "cli", arg(long))]
    pub target_ethanol: Option<f64>,

    #[serde(default)]
    #[cfg_attr(feature = "cli", arg(long, value_enum, default_value_t = OutputFormat::Text))]
    pub format: OutputFormat,

    /// Emit logs as JSON lines
    #[serde(default)]
    #[cfg_attr(feature = "cli", arg(long))]
    pub json_logs: bool,

    #[serde(default)]
    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl CliConfig {
    pub fn load_profile(&self) -> Result<Option<VehicleProfile>> {
        let Some(path) = self.profile.as_deref() else {
            return Ok(None);
        };

        tracing::info!("📁 Loading vehicle profile from: {}", path);
        let profile = VehicleProfile::from_file(path)?;
        profile.validate()?;
        tracing::debug!(?profile, "profile loaded");
        Ok(Some(profile))
    }

    /// Picks the one fuel-remaining input mode that was supplied.
    pub fn fuel_source(&self, profile: Option<&VehicleProfile>) -> Result<FuelRemainingSource> {
        let given = [
            self.fuel_remaining.is_some(),
            self.distance_to_empty.is_some(),
            self.fuel_percentage.is_some(),
        ]
        .iter()
        .filter(|given| **given)
        .count();

        if given > 1 {
            return Err(FuelMixError::ConfigError {
                message: "use only one of --fuel-remaining, --distance-to-empty, --fuel-percentage"
                    .to_string(),
            });
        }

        if let Some(volume) = self.fuel_remaining {
            return Ok(FuelRemainingSource::Manual(volume));
        }
        if let Some(distance) = self.distance_to_empty {
            let economy = self
                .economy
                .or_else(|| profile.and_then(|p| p.vehicle.economy));
            let economy = validate_required_field("economy", economy)?;
            return Ok(FuelRemainingSource::DistanceToEmpty { distance, economy });
        }
        if let Some(percent) = self.fuel_percentage {
            return Ok(FuelRemainingSource::Percentage(percent));
        }

        Err(FuelMixError::MissingConfigError {
            field: "fuel_remaining".to_string(),
        })
    }

    /// Merges flags over the profile (flags win) into a calculator request.
    pub fn build_request(&self, profile: Option<&VehicleProfile>) -> Result<BlendRequest> {
        let tank_size = validate_required_field(
            "tank_size",
            self.tank_size.or_else(|| profile.map(|p| p.vehicle.tank_size)),
        )?;
        let unit = self
            .unit
            .or_else(|| profile.map(VehicleProfile::unit))
            .unwrap_or_default();

        let fuel_remaining = self.fuel_source(profile)?.resolve(tank_size)?;

        let ethanol_pump_gas = self
            .ethanol_pump_gas
            .or_else(|| profile.and_then(VehicleProfile::ethanol_pump_gas))
            .unwrap_or(DEFAULT_ETHANOL_PUMP_GAS);
        let ethanol_e85 = self
            .ethanol_e85
            .or_else(|| profile.and_then(VehicleProfile::ethanol_e85))
            .unwrap_or(DEFAULT_ETHANOL_E85);

        Ok(BlendRequest {
            tank_size,
            fuel_remaining,
            ethanol_in_tank: validate_required_field("ethanol_in_tank", self.ethanol_in_tank)?,
            ethanol_pump_gas,
            ethanol_e85,
            target_ethanol: validate_required_field("target_ethanol", self.target_ethanol)?,
            unit,
        })
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.distance_to_empty.is_none() && self.economy.is_some() {
            tracing::warn!("--economy is only used with --distance-to-empty");
        }
        if let Some(path) = self.profile.as_deref() {
            crate::utils::validation::validate_non_empty_string("profile", path)?;
        }
        Ok(())
    }
}
