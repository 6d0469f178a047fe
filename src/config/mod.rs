#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "hotel-system")]
#[command(about = "Manage hotels, customers and reservations stored as JSON files")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding the collection files (overrides the config file)
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併 TOML 配置與命令列覆蓋設定
    pub fn store_config(&self) -> crate::Result<toml_config::StoreConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::StoreConfig::from_file(path)?,
            None => toml_config::StoreConfig::default(),
        };
        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }
        if self.json_logs {
            let logging = config.logging.get_or_insert(toml_config::LoggingConfig {
                level: None,
                format: None,
            });
            logging.format = Some(toml_config::LogFormat::Json);
        }
        Ok(config)
    }
}
