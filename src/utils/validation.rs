use crate::utils::error::{FuelMixError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_finite(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(FuelMixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive(field_name: &str, value: f64) -> Result<()> {
    validate_finite(field_name, value)?;
    if value <= 0.0 {
        return Err(FuelMixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be greater than zero".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN fails both comparisons, so test for membership rather than exclusion
    if !(value >= min && value <= max) {
        return Err(FuelMixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_percentage(field_name: &str, value: f64) -> Result<()> {
    validate_range(field_name, value, 0.0, 100.0)
}

pub fn validate_required_field<T: Copy>(field_name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| FuelMixError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FuelMixError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("tank_size", 12.0).is_ok());
        assert!(validate_positive("tank_size", 0.0).is_err());
        assert!(validate_positive("tank_size", -1.0).is_err());
        assert!(validate_positive("tank_size", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_percentage() {
        assert!(validate_percentage("ethanol_e85", 85.0).is_ok());
        assert!(validate_percentage("ethanol_e85", 0.0).is_ok());
        assert!(validate_percentage("ethanol_e85", 100.0).is_ok());
        assert!(validate_percentage("ethanol_e85", 100.5).is_err());
        assert!(validate_percentage("ethanol_e85", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_required_field() {
        assert_eq!(validate_required_field("economy", Some(25.0)).unwrap(), 25.0);
        assert!(matches!(
            validate_required_field::<f64>("economy", None),
            Err(FuelMixError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("vehicle.name", "daily").is_ok());
        assert!(validate_non_empty_string("vehicle.name", "   ").is_err());
    }
}
