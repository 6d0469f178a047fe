use crate::core::StoreLayout;
use crate::utils::error::{HotelSystemError, Result};
use crate::utils::validation::{
    validate_file_extensions, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_hotels_file")]
    pub hotels_file: String,
    #[serde(default = "default_customers_file")]
    pub customers_file: String,
    #[serde(default = "default_reservations_file")]
    pub reservations_file: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn default_data_dir() -> String {
    "./output".to_string()
}

fn default_hotels_file() -> String {
    "hotels.json".to_string()
}

fn default_customers_file() -> String {
    "customers.json".to_string()
}

fn default_reservations_file() -> String {
    "reservations.json".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            hotels_file: default_hotels_file(),
            customers_file: default_customers_file(),
            reservations_file: default_reservations_file(),
        }
    }
}

impl StoreConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| HotelSystemError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| HotelSystemError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${HOTEL_DATA_DIR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| HotelSystemError::ConfigError {
            message: format!("invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn data_dir(&self) -> PathBuf {
        PathBuf::from(&self.storage.data_dir)
    }

    pub fn layout(&self) -> StoreLayout {
        StoreLayout {
            hotels_file: self.storage.hotels_file.clone(),
            customers_file: self.storage.customers_file.clone(),
            reservations_file: self.storage.reservations_file.clone(),
        }
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.data_dir", &self.storage.data_dir)?;

        let files = [
            self.storage.hotels_file.as_str(),
            self.storage.customers_file.as_str(),
            self.storage.reservations_file.as_str(),
        ];
        for file in files {
            validate_non_empty_string("storage", file)?;
        }
        validate_file_extensions("storage", &files, &["json"])?;

        let distinct: HashSet<&str> = files.iter().copied().collect();
        if distinct.len() != files.len() {
            return Err(HotelSystemError::validation(
                "storage",
                "hotels, customers and reservations need separate files",
            ));
        }

        if let Some(level) = self.log_level() {
            let valid_levels = ["trace", "debug", "info", "warn", "error"];
            if !valid_levels.contains(&level) {
                return Err(HotelSystemError::validation(
                    "logging.level",
                    format!("'{}' is not one of {}", level, valid_levels.join(", ")),
                ));
            }
        }

        Ok(())
    }
}
