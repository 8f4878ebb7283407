use crate::core::round_to_hundredths;
use crate::domain::model::{BlendRequest, BlendResult, INVALID_BLEND_MESSAGE};
use crate::utils::validation::{validate_finite, validate_percentage, validate_positive, validate_range};

/// Solved volumes closer to zero than this (in gallons) are float noise.
pub const ZERO_TOLERANCE_GALLONS: f64 = 1e-9;

pub const E85_NOT_RICHER_MESSAGE: &str =
    "E85 ethanol percentage must be greater than pump gas ethanol percentage.";

/// Solves the two-equation blend (total volume, ethanol volume) for the
/// amounts of E85 and pump gas that fill the tank to the target percentage.
///
/// Works internally in gallons. Every malformed or unsatisfiable request
/// comes back as [`BlendResult::Invalid`]; nothing here panics or errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlendCalculator;

impl BlendCalculator {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(&self, request: &BlendRequest) -> BlendResult {
        tracing::debug!(?request, "computing blend");

        if let Err(reason) = check_inputs(request) {
            tracing::debug!(%reason, "rejected blend request");
            return BlendResult::invalid(reason);
        }

        let unit = request.unit;
        let tank_size = unit.to_gallons(request.tank_size);
        let fuel_remaining = unit.to_gallons(request.fuel_remaining);
        let volume_to_add = tank_size - fuel_remaining;

        if volume_to_add == 0.0 {
            return BlendResult::Valid {
                volume_e85: 0.0,
                volume_pump_gas: 0.0,
            };
        }

        if request.ethanol_e85 <= request.ethanol_pump_gas {
            return BlendResult::invalid(E85_NOT_RICHER_MESSAGE);
        }

        let pump_fraction = request.ethanol_pump_gas / 100.0;
        let e85_fraction = request.ethanol_e85 / 100.0;

        let ethanol_current = fuel_remaining * (request.ethanol_in_tank / 100.0);
        let ethanol_target = tank_size * (request.target_ethanol / 100.0);

        let volume_e85 = snap_to_zero(
            (ethanol_target - ethanol_current - volume_to_add * pump_fraction)
                / (e85_fraction - pump_fraction),
        );
        let volume_pump_gas = snap_to_zero(volume_to_add - volume_e85);

        if !(volume_e85 >= 0.0 && volume_pump_gas >= 0.0) {
            tracing::debug!(volume_e85, volume_pump_gas, "blend solve went negative");
            return BlendResult::invalid(INVALID_BLEND_MESSAGE);
        }

        let volume_e85 = round_to_hundredths(unit.from_gallons(volume_e85));
        let volume_pump_gas = round_to_hundredths(unit.from_gallons(volume_pump_gas));
        if !(volume_e85.is_finite() && volume_pump_gas.is_finite()) {
            tracing::debug!(volume_e85, volume_pump_gas, "blend volumes overflowed");
            return BlendResult::invalid(INVALID_BLEND_MESSAGE);
        }

        let result = BlendResult::Valid {
            volume_e85,
            volume_pump_gas,
        };
        tracing::debug!(?result, "blend computed");
        result
    }
}

/// Convenience wrapper around [`BlendCalculator::compute`].
pub fn compute(request: &BlendRequest) -> BlendResult {
    BlendCalculator::new().compute(request)
}

fn check_inputs(request: &BlendRequest) -> Result<(), String> {
    let check = || -> crate::utils::error::Result<()> {
        validate_positive("tank_size", request.tank_size)?;
        validate_finite("fuel_remaining", request.fuel_remaining)?;
        validate_range("fuel_remaining", request.fuel_remaining, 0.0, request.tank_size)?;
        validate_percentage("ethanol_in_tank", request.ethanol_in_tank)?;
        validate_percentage("ethanol_pump_gas", request.ethanol_pump_gas)?;
        validate_percentage("ethanol_e85", request.ethanol_e85)?;
        validate_percentage("target_ethanol", request.target_ethanol)?;
        Ok(())
    };
    check().map_err(|e| e.to_string())
}

fn snap_to_zero(gallons: f64) -> f64 {
    if gallons.abs() < ZERO_TOLERANCE_GALLONS {
        0.0
    } else {
        gallons
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::VolumeUnit;

    fn request(tank_size: f64, fuel_remaining: f64, target_ethanol: f64) -> BlendRequest {
        BlendRequest {
            tank_size,
            fuel_remaining,
            ethanol_in_tank: 10.0,
            ethanol_pump_gas: 10.0,
            ethanol_e85: 85.0,
            target_ethanol,
            unit: VolumeUnit::Gallon,
        }
    }

    #[test]
    fn test_twelve_gallon_tank_to_e30() {
        let result = compute(&request(12.0, 2.0, 30.0));
        assert_eq!(
            result,
            BlendResult::Valid {
                volume_e85: 3.2,
                volume_pump_gas: 6.8
            }
        );
    }

    #[test]
    fn test_target_below_tank_is_invalid() {
        let result = compute(&request(10.0, 9.0, 5.0));
        assert_eq!(result, BlendResult::invalid(INVALID_BLEND_MESSAGE));
    }

    #[test]
    fn test_full_tank_needs_nothing() {
        let mut req = request(15.0, 15.0, 50.0);
        req.ethanol_in_tank = 0.0;
        assert_eq!(
            compute(&req),
            BlendResult::Valid {
                volume_e85: 0.0,
                volume_pump_gas: 0.0
            }
        );
    }

    #[test]
    fn test_equal_e85_and_pump_gas_is_rejected() {
        let mut req = request(12.0, 2.0, 30.0);
        req.ethanol_e85 = 10.0;
        assert_eq!(compute(&req), BlendResult::invalid(E85_NOT_RICHER_MESSAGE));

        req.ethanol_e85 = 5.0;
        assert_eq!(compute(&req), BlendResult::invalid(E85_NOT_RICHER_MESSAGE));
    }

    #[test]
    fn test_matching_percentages_need_no_e85() {
        let result = compute(&request(13.7, 3.3, 10.0));
        let (e85, pump) = result.volumes().unwrap();
        assert_eq!(e85, 0.0);
        assert_eq!(pump, 10.4);
    }

    #[test]
    fn test_out_of_range_inputs_are_invalid() {
        assert!(!compute(&request(0.0, 0.0, 30.0)).is_valid());
        assert!(!compute(&request(12.0, 13.0, 30.0)).is_valid());
        assert!(!compute(&request(12.0, -1.0, 30.0)).is_valid());
        assert!(!compute(&request(12.0, 2.0, 101.0)).is_valid());
        assert!(!compute(&request(f64::NAN, 2.0, 30.0)).is_valid());
        assert!(!compute(&request(12.0, f64::INFINITY, 30.0)).is_valid());
    }

    #[test]
    fn test_liters_convert_back_to_liters() {
        let mut req = request(12.0 * 3.78541, 2.0 * 3.78541, 30.0);
        req.unit = VolumeUnit::Liter;
        let (e85, pump) = compute(&req).volumes().unwrap();
        assert!((e85 - 3.2 * 3.78541).abs() < 0.01);
        assert!((pump - 6.8 * 3.78541).abs() < 0.01);
    }

    #[test]
    fn test_huge_tank_stays_finite() {
        let (e85, pump) = compute(&request(1e307, 0.0, 30.0))
            .volumes()
            .expect("finite request should stay valid");
        assert!(e85.is_finite() && pump.is_finite());
        assert!(((e85 + pump) - 1e307).abs() / 1e307 < 1e-9);
    }

    #[test]
    fn test_near_max_liter_tank_never_reports_infinite_volumes() {
        // near f64::MAX: volumes either stay finite or degrade to Invalid
        let mut req = request(1.7e308, 0.0, 30.0);
        req.unit = VolumeUnit::Liter;
        match compute(&req) {
            BlendResult::Valid {
                volume_e85,
                volume_pump_gas,
            } => assert!(volume_e85.is_finite() && volume_pump_gas.is_finite()),
            BlendResult::Invalid { reason } => assert_eq!(reason, INVALID_BLEND_MESSAGE),
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let req = request(18.5, 4.25, 40.0);
        assert_eq!(compute(&req), compute(&req));
    }
}
