//! Configuration file for the `states` binary.
//!
//! ```toml
//! url = "http://localhost:8080/dummyserver/rest/state"
//!
//! [labels]
//! progress_title = "Aguarde"
//! ```
//!
//! Every key is optional. Command-line flags are applied on top in `main`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use states_core::Labels;
use thiserror::Error;

pub const DEFAULT_URL: &str = "http://192.168.0.107:8080/dummyserver/rest/state";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub url: String,
    pub labels: Labels,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            labels: Labels::default(),
        }
    }
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.url, DEFAULT_URL);
    }

    #[test]
    fn partial_labels_keep_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            url = "http://localhost:8080/dummyserver/rest/state"

            [labels]
            progress_title = "Aguarde"
            alert_ok = "Fechar"
            "#,
        )
        .unwrap();

        assert_eq!(config.url, "http://localhost:8080/dummyserver/rest/state");
        assert_eq!(config.labels.progress_title, "Aguarde");
        assert_eq!(config.labels.alert_ok, "Fechar");
        assert_eq!(config.labels.alert_title, Labels::default().alert_title);
    }

    #[test]
    fn wrong_type_is_rejected() {
        let err = AppConfig::from_toml("url = 8080").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/nonexistent/states.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/states.toml"));
    }
}
