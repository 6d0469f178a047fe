use anyhow::Context;
use clap::Parser;
use hotel_system::app::commands;
use hotel_system::config::toml_config::LogFormat;
use hotel_system::utils::error::ErrorSeverity;
use hotel_system::utils::{logger, validation::Validate};
use hotel_system::{CliConfig, HotelStore, LocalStorage};
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = cli
        .store_config()
        .context("failed to load configuration; make sure the file exists and is valid TOML")?;

    // 初始化日誌
    match config.log_format() {
        LogFormat::Json => logger::init_json_logger(cli.verbose, config.log_level()),
        LogFormat::Compact => logger::init_cli_logger(cli.verbose, config.log_level()),
    }

    tracing::info!("Starting hotel-system CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let data_dir = config.data_dir();
    tracing::info!("📁 Data directory: {}", data_dir.display());

    let storage = Arc::new(LocalStorage::new(data_dir));
    let outcome = HotelStore::open(storage, &config.layout())
        .and_then(|mut store| commands::execute(&mut store, cli.command));

    match outcome {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 4,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
