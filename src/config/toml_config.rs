use crate::config::{validate_backend, BackendSettings, DEFAULT_BASE_URL};
use crate::core::ConfigProvider;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    pub logging: Option<LoggingConfig>,
}

/// Keys left out of the file stay `None` so command line values can fill them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ClientError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ClientError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BACKEND_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .to_string()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    /// Values written in the file win; anything missing comes from `fallback`.
    pub fn merge_over(&self, fallback: &BackendSettings) -> BackendSettings {
        BackendSettings {
            base_url: self
                .backend
                .base_url
                .clone()
                .unwrap_or_else(|| fallback.base_url.clone()),
            timeout_seconds: self.backend.timeout_seconds.or(fallback.timeout_seconds),
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.backend.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.backend.timeout_seconds.map(Duration::from_secs)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_backend(
            "backend.base_url",
            self.base_url(),
            "backend.timeout_seconds",
            self.backend.timeout_seconds,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[backend]
base_url = "http://calc.internal:9000"
timeout_seconds = 5

[logging]
level = "debug"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_url(), "http://calc.internal:9000");
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.log_level(), None);
    }

    #[test]
    fn test_file_values_win_over_fallback() {
        let config = TomlConfig::from_toml_str(
            "[backend]\nbase_url = \"http://from-file:9000\"\n",
        )
        .unwrap();
        let fallback = BackendSettings {
            base_url: "http://from-cli".to_string(),
            timeout_seconds: Some(7),
        };

        let merged = config.merge_over(&fallback);

        assert_eq!(merged.base_url, "http://from-file:9000");
        assert_eq!(merged.timeout_seconds, Some(7));
    }

    #[test]
    fn test_logging_only_file_keeps_fallback_backend() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"debug\"\n").unwrap();
        let fallback = BackendSettings {
            base_url: "http://x".to_string(),
            timeout_seconds: Some(3),
        };

        let merged = config.merge_over(&fallback);

        assert_eq!(merged.base_url, "http://x");
        assert_eq!(merged.request_timeout(), Some(Duration::from_secs(3)));
        assert_eq!(config.log_level(), Some("debug"));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("MULTIPLIER_TEST_BACKEND_URL", "https://test.api.com");

        let toml_content = r#"
[backend]
base_url = "${MULTIPLIER_TEST_BACKEND_URL}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.base_url(), "https://test.api.com");

        std::env::remove_var("MULTIPLIER_TEST_BACKEND_URL");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r#"
[backend]
base_url = "invalid-url"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[backend\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ClientError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[backend]
base_url = "http://127.0.0.1:8080"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.base_url(), "http://127.0.0.1:8080");
    }
}
