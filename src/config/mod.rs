pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_url, Validate};
#[cfg(feature = "cli")]
use crate::config::toml_config::TomlConfig;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Backend settings after the command line and the config file are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendSettings {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: None,
        }
    }
}

impl ConfigProvider for BackendSettings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for BackendSettings {
    fn validate(&self) -> Result<()> {
        validate_backend("base_url", &self.base_url, "timeout_seconds", self.timeout_seconds)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "multiplier-client")]
#[command(about = "Multiply two integers through a remote backend")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, help = "Request timeout; the HTTP client default applies when unset")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "TOML file; keys set in its [backend] table override --base-url/--timeout-seconds")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run a single calculation and print the result
    Calc {
        #[arg(allow_hyphen_values = true)]
        num1: String,
        #[arg(allow_hyphen_values = true)]
        num2: String,
    },
    /// Read operands from stdin, one calculation per line
    Interactive,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn backend_settings(&self) -> BackendSettings {
        BackendSettings {
            base_url: self.base_url.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }

    /// File values win key by key; the rest comes from the command line
    /// (whose own defaults cover anything left unset).
    pub fn resolve(&self, file: Option<&TomlConfig>) -> BackendSettings {
        match file {
            Some(file) => file.merge_over(&self.backend_settings()),
            None => self.backend_settings(),
        }
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_backend("base_url", &self.base_url, "timeout_seconds", self.timeout_seconds)
    }
}

pub(crate) fn validate_backend(
    url_field: &str,
    base_url: &str,
    timeout_field: &str,
    timeout_seconds: Option<u64>,
) -> Result<()> {
    validate_url(url_field, base_url)?;
    if let Some(timeout) = timeout_seconds {
        validate_positive_number(timeout_field, timeout, 1)?;
    }
    Ok(())
}
