use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Liters per US gallon.
pub const LITERS_PER_GALLON: f64 = 3.78541;

pub const INVALID_BLEND_MESSAGE: &str =
    "Invalid input or calculations resulted in negative values.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeUnit {
    #[default]
    #[serde(alias = "gallons", alias = "gal")]
    Gallon,
    #[serde(alias = "liters", alias = "litre", alias = "litres", alias = "l")]
    Liter,
}

impl VolumeUnit {
    pub fn to_gallons(self, volume: f64) -> f64 {
        match self {
            VolumeUnit::Gallon => volume,
            VolumeUnit::Liter => volume / LITERS_PER_GALLON,
        }
    }

    pub fn from_gallons(self, gallons: f64) -> f64 {
        match self {
            VolumeUnit::Gallon => gallons,
            VolumeUnit::Liter => gallons * LITERS_PER_GALLON,
        }
    }

    /// Label used in result lines, e.g. "Add 3.20 gallons of E85."
    pub fn plural(self) -> &'static str {
        match self {
            VolumeUnit::Gallon => "gallons",
            VolumeUnit::Liter => "liters",
        }
    }
}

impl fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.plural())
    }
}

impl FromStr for VolumeUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gallon" | "gallons" | "gal" => Ok(VolumeUnit::Gallon),
            "liter" | "liters" | "litre" | "litres" | "l" => Ok(VolumeUnit::Liter),
            other => Err(format!(
                "unknown unit '{}', expected gallons or liters",
                other
            )),
        }
    }
}

/// Everything the calculator needs, in the caller's unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendRequest {
    pub tank_size: f64,
    pub fuel_remaining: f64,
    pub ethanol_in_tank: f64,
    pub ethanol_pump_gas: f64,
    pub ethanol_e85: f64,
    pub target_ethanol: f64,
    #[serde(default)]
    pub unit: VolumeUnit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum BlendResult {
    Valid {
        volume_e85: f64,
        volume_pump_gas: f64,
    },
    Invalid {
        reason: String,
    },
}

impl BlendResult {
    pub fn invalid(reason: impl Into<String>) -> Self {
        BlendResult::Invalid {
            reason: reason.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, BlendResult::Valid { .. })
    }

    /// `(e85, pump_gas)` for a valid blend.
    pub fn volumes(&self) -> Option<(f64, f64)> {
        match self {
            BlendResult::Valid {
                volume_e85,
                volume_pump_gas,
            } => Some((*volume_e85, *volume_pump_gas)),
            BlendResult::Invalid { .. } => None,
        }
    }
}

/// How the fuel already in the tank is known.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuelRemainingSource {
    Manual(f64),
    /// `economy` is distance per volume unit of the request (mpg, km/L).
    DistanceToEmpty { distance: f64, economy: f64 },
    Percentage(f64),
}
