pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::app::report::{OutputFormat, Report};
pub use crate::config::{profile::VehicleProfile, CliConfig};
pub use crate::core::blend::{compute, BlendCalculator};
pub use crate::core::estimator::{DistanceEstimator, PercentageEstimator};
pub use crate::domain::model::{BlendRequest, BlendResult, FuelRemainingSource, VolumeUnit};
pub use crate::domain::ports::FuelEstimator;
pub use crate::utils::error::{FuelMixError, Result};
