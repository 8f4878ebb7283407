pub mod report;

use crate::config::CliConfig;
use crate::core::blend::BlendCalculator;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use report::Report;

/// Profile → request → blend → report, the whole fill-up calculation.
pub fn run(config: &CliConfig) -> Result<Report> {
    config.validate()?;

    let profile = config.load_profile()?;
    let request = config.build_request(profile.as_ref())?;
    tracing::debug!(?request, "blend request assembled");

    let result = BlendCalculator::new().compute(&request);
    if result.is_valid() {
        tracing::info!("✅ Blend computed for E{}", request.target_ethanol);
    } else {
        tracing::warn!("⚠️ No valid blend for E{}", request.target_ethanol);
    }

    Ok(Report::new(&request, result))
}
