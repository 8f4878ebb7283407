use clap::Parser;
use fuel_mix::utils::logger;
use fuel_mix::CliConfig;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting fuel-mix");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    match fuel_mix::app::run(&config) {
        Ok(report) => {
            match report.render(config.format) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    tracing::error!("❌ Rendering failed: {} (Severity: {:?})", e, e.severity());
                    eprintln!("❌ {}", e.user_friendly_message());
                    std::process::exit(e.exit_code());
                }
            }
            // invalid blend: message already printed, signal it to scripts
            if !report.is_valid() {
                std::process::exit(2);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
