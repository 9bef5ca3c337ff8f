//! Configuration loading and validation.
//!
//! Configuration is loaded from a TOML file. Every section is optional and
//! falls back to built-in defaults, so an empty file is a valid config.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use tracing_subscriber::{fmt, EnvFilter};

use crate::analysis::AnalysisConfig;
use crate::domain::{LadderConfig, LadderTable};
use crate::error::{ConfigError, Result};

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub ladders: LadderTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".into()
}

fn default_log_format() -> String {
    "pretty".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;

        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.is_empty() {
            return Err(ConfigError::MissingField {
                field: "logging.level",
            }
            .into());
        }
        validate_ladder("ladders.default", "default", &self.ladders.default)?;
        for (name, ladder) in &self.ladders.props {
            validate_ladder("ladders.props", name, ladder)?;
        }
        Ok(())
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.logging.level));

        match self.logging.format.as_str() {
            "json" => {
                fmt().json().with_env_filter(filter).init();
            }
            _ => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

fn validate_ladder(field: &'static str, name: &str, config: &LadderConfig) -> Result<()> {
    if config.step <= Decimal::ZERO {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("step must be positive for '{name}', got {}", config.step),
        }
        .into());
    }
    if config.odds_shift <= 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!(
                "odds_shift must be positive for '{name}', got {}",
                config.odds_shift
            ),
        }
        .into());
    }
    if config.num_lines == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("num_lines must be at least 1 for '{name}'"),
        }
        .into());
    }
    Ok(())
}
