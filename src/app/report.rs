use crate::domain::model::{BlendRequest, BlendResult, VolumeUnit};
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A blend result together with what the user needs to read it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub result: BlendResult,
    pub unit: VolumeUnit,
    pub target_ethanol: f64,
}

impl Report {
    pub fn new(request: &BlendRequest, result: BlendResult) -> Self {
        Self {
            result,
            unit: request.unit,
            target_ethanol: request.target_ethanol,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_valid()
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            BlendResult::Valid {
                volume_e85,
                volume_pump_gas,
            } => {
                writeln!(f, "Add {:.2} {} of E85.", volume_e85, self.unit)?;
                writeln!(f, "Add {:.2} {} of Pump Gas.", volume_pump_gas, self.unit)?;
                write!(
                    f,
                    "Result: {}% Ethanol (E{})",
                    self.target_ethanol, self.target_ethanol
                )
            }
            BlendResult::Invalid { reason } => f.write_str(reason),
        }
    }
}
