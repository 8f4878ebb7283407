use thiserror::Error;

#[derive(Error, Debug)]
pub enum FuelMixError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Profile parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Fuel estimate error: {message}")]
    EstimateError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FuelMixError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            FuelMixError::IoError(_) | FuelMixError::SerializationError(_) => ErrorCategory::Io,
            FuelMixError::TomlParseError(_)
            | FuelMixError::ConfigError { .. }
            | FuelMixError::MissingConfigError { .. } => ErrorCategory::Configuration,
            FuelMixError::InvalidConfigValueError { .. } | FuelMixError::EstimateError { .. } => {
                ErrorCategory::Input
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI; 2 is reserved for an invalid blend.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FuelMixError::IoError(_) => {
                "Check that the profile path exists and is readable".to_string()
            }
            FuelMixError::TomlParseError(_) => {
                "Check the profile for TOML syntax errors and misspelled keys".to_string()
            }
            FuelMixError::SerializationError(_) => "Try the text output format".to_string(),
            FuelMixError::ConfigError { .. } => {
                "Choose exactly one way to supply the fuel remaining".to_string()
            }
            FuelMixError::MissingConfigError { field } => {
                format!("Pass --{} or set it in the profile", field.replace('_', "-"))
            }
            FuelMixError::InvalidConfigValueError { field, .. } => {
                format!("Adjust {} and try again", field)
            }
            FuelMixError::EstimateError { .. } => {
                "Distance and economy must both be positive; percentages must lie in 0-100"
                    .to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FuelMixError::IoError(e) => format!("Could not read the profile: {}", e),
            FuelMixError::TomlParseError(_) => "The profile is not valid TOML".to_string(),
            FuelMixError::MissingConfigError { field } => {
                format!("A value for {} is required", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, FuelMixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_follows_category() {
        let missing = FuelMixError::MissingConfigError {
            field: "tank_size".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Configuration);
        assert_eq!(missing.severity(), ErrorSeverity::High);

        let estimate = FuelMixError::EstimateError {
            message: "economy must be positive".to_string(),
        };
        assert_eq!(estimate.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_exit_code_follows_severity() {
        let serialization: FuelMixError = serde_json::from_str::<f64>("not json")
            .unwrap_err()
            .into();
        assert_eq!(serialization.severity(), ErrorSeverity::Critical);
        assert_eq!(serialization.exit_code(), 3);

        let io = FuelMixError::IoError(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "profile.toml",
        ));
        assert_eq!(io.exit_code(), 3);

        let config = FuelMixError::ConfigError {
            message: "two fuel sources".to_string(),
        };
        assert_eq!(config.exit_code(), 1);

        let estimate = FuelMixError::EstimateError {
            message: "economy must be positive".to_string(),
        };
        assert_eq!(estimate.exit_code(), 1);
    }

    #[test]
    fn test_recovery_suggestion_names_flag() {
        let missing = FuelMixError::MissingConfigError {
            field: "target_ethanol".to_string(),
        };
        assert!(missing.recovery_suggestion().contains("--target-ethanol"));
    }
}
