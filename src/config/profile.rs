use crate::domain::model::VolumeUnit;
use crate::utils::error::{FuelMixError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_percentage, validate_positive, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ETHANOL_PUMP_GAS: f64 = 10.0;
pub const DEFAULT_ETHANOL_E85: f64 = 85.0;

/// Per-vehicle defaults so the command line only needs what changes per fill-up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub vehicle: VehicleConfig,
    pub fuel: Option<FuelConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleConfig {
    pub name: String,
    pub tank_size: f64,
    pub unit: Option<VolumeUnit>,
    pub economy: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FuelConfig {
    pub ethanol_pump_gas: Option<f64>,
    pub ethanol_e85: Option<f64>,
}

impl VehicleProfile {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${TANK_SIZE})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FuelMixError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn unit(&self) -> VolumeUnit {
        self.vehicle.unit.unwrap_or_default()
    }

    pub fn ethanol_pump_gas(&self) -> Option<f64> {
        self.fuel.as_ref().and_then(|f| f.ethanol_pump_gas)
    }

    pub fn ethanol_e85(&self) -> Option<f64> {
        self.fuel.as_ref().and_then(|f| f.ethanol_e85)
    }
}

impl Validate for VehicleProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("vehicle.name", &self.vehicle.name)?;
        validate_positive("vehicle.tank_size", self.vehicle.tank_size)?;

        if let Some(economy) = self.vehicle.economy {
            validate_positive("vehicle.economy", economy)?;
        }
        if let Some(pump) = self.ethanol_pump_gas() {
            validate_percentage("fuel.ethanol_pump_gas", pump)?;
        }
        if let Some(e85) = self.ethanol_e85() {
            validate_percentage("fuel.ethanol_e85", e85)?;
        }

        Ok(())
    }
}
