use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{ApiError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
pub const ENV_BASE_URL: &str = "TRACE_API_BASE_URL";
pub const ENV_TOKEN: &str = "TRACE_API_TOKEN";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Bearer token handed to the transport. Usually supplied through the environment.
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            timeout_seconds: 15,
            token: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub directory: String,
    pub file_name: String,
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            directory: "logs".to_string(),
            file_name: "trace-client.log".to_string(),
            filter: "trace_client=info".to_string(),
        }
    }
}

impl Config {
    /// Reads `path` if it exists (defaults otherwise), then applies environment
    /// overrides. `.env` is consulted first.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        dotenv::dotenv().ok();
        let path = path.as_ref();
        let mut config = if path.exists() {
            let content = fs::read_to_string(path).map_err(|e| {
                ApiError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
            })?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.is_empty()) {
            self.api.base_url = url;
        }
        if let Some(token) = lookup(ENV_TOKEN).filter(|v| !v.is_empty()) {
            self.api.token = Some(token);
        }
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.api.base_url.as_str();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ApiError::Config(format!(
                "api.base_url must start with http:// or https://, got '{}'",
                url
            )));
        }
        if self.api.timeout_seconds == 0 {
            return Err(ApiError::Config("api.timeout_seconds must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = Config::from_toml("[api]\nbase_url = \"https://mes.example.com/api\"\n").unwrap();
        assert_eq!(config.api.base_url, "https://mes.example.com/api");
        assert_eq!(config.api.timeout_seconds, 15);
        assert_eq!(config.logging.directory, "logs");
    }

    #[test]
    fn environment_overrides_file() {
        let mut config = Config::default();
        let env: HashMap<&str, &str> = [
            (ENV_BASE_URL, "https://override.example.com"),
            (ENV_TOKEN, "tok-123"),
        ]
        .into_iter()
        .collect();
        config.apply_overrides(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.api.base_url, "https://override.example.com");
        assert_eq!(config.api.token.as_deref(), Some("tok-123"));
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = Config::from_toml("[api]\nbase_url = \"ftp://nope\"\n").unwrap();
        assert!(matches!(config.validate(), Err(ApiError::Config(_))));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(Config::from_toml("[api\n"), Err(ApiError::Toml(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[api]\ntimeout_seconds = 30\n[logging]\nfilter = \"debug\"").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api.timeout_seconds, 30);
        assert_eq!(config.logging.filter, "debug");
    }
}
