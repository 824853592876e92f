use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENV: &str = "development";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Replaces the embedded content when set.
    pub content_dir: Option<PathBuf>,
    pub env: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            content_dir: lookup("CONTENT_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            env: lookup("RUST_ENV").unwrap_or_else(|| DEFAULT_ENV.to_string()),
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;
    use std::collections::HashMap;

    fn config_from(vars: HashMap<&str, &str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(HashMap::new()).unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert!(config.content_dir.is_none());
        assert_eq!(config.env, "development");
        assert_eq!(config.server_url(), "127.0.0.1:8080");
    }

    #[test]
    fn reads_every_key() {
        let config = config_from(hashmap! {
            "HOST" => "0.0.0.0",
            "PORT" => "3000",
            "CONTENT_DIR" => "/srv/content",
            "RUST_ENV" => "production",
        })
        .unwrap();

        assert_eq!(config.server_url(), "0.0.0.0:3000");
        assert_eq!(config.content_dir, Some(PathBuf::from("/srv/content")));
        assert_eq!(config.env, "production");
    }

    #[test]
    fn blank_content_dir_means_embedded() {
        let config = config_from(hashmap! { "CONTENT_DIR" => "  " }).unwrap();

        assert!(config.content_dir.is_none());
    }

    #[test]
    fn invalid_port_is_rejected() {
        for raw in ["http", "70000", "-1"] {
            let err = config_from(hashmap! { "PORT" => raw }).unwrap_err();
            assert_eq!(err, ConfigError::InvalidPort(raw.to_string()));
        }
    }
}
