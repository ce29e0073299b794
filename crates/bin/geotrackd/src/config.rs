//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `geotrack.toml` in the working directory. Every field except the
//! database connection string has a sensible default, so the file is
//! optional. Environment variables take precedence over file values.

use serde::Deserialize;

use geotrack_adapter_storage_mongodb::client::CONNECTION_STRING_VAR;
use geotrack_domain::error::TrackerError;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// PWA shell locations.
    pub assets: AssetsConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `MongoDB` configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `MongoDB` connection string. Required.
    pub connection_string: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Directories holding the PWA shell.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Directory containing `index.html`.
    pub templates_dir: String,
    /// Directory containing `service-worker.js` and `manifest.json`.
    pub static_dir: String,
}

impl Config {
    /// Load configuration from `geotrack.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid (e.g. no connection string).
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("geotrack.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("GEOTRACK_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("GEOTRACK_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("GEOTRACK_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Some(val) = var(CONNECTION_STRING_VAR) {
            self.database.connection_string = val;
        }
        if let Some(val) = var("GEOTRACK_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("GEOTRACK_TEMPLATES_DIR") {
            self.assets.templates_dir = val;
        }
        if let Some(val) = var("GEOTRACK_STATIC_DIR") {
            self.assets.static_dir = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.connection_string.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "database connection string is not set (use {CONNECTION_STRING_VAR} or [database].connection_string)"
            )));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the `MongoDB` connection string.
    #[must_use]
    pub fn connection_string(&self) -> &str {
        &self.database.connection_string
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "geotrackd=info,geotrack=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            templates_dir: "templates".to_string(),
            static_dir: "static".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

impl From<ConfigError> for TrackerError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.database.connection_string = "mongodb://localhost:27017/tracker".to_string();
        config
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.connection_string, "");
        assert_eq!(config.assets.templates_dir, "templates");
        assert_eq!(config.assets.static_dir, "static");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            connection_string = 'mongodb://db:27017/tracker'

            [logging]
            filter = 'debug'

            [assets]
            templates_dir = '/srv/templates'
            static_dir = '/srv/static'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.connection_string(), "mongodb://db:27017/tracker");
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.assets.templates_dir, "/srv/templates");
        assert_eq!(config.assets.static_dir, "/srv/static");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_reject_missing_connection_string() {
        let config = Config::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(message)) if message.contains("MONGODB_CONNECTION_STRING")
        ));
    }

    #[test]
    fn should_reject_blank_connection_string() {
        let mut config = valid_config();
        config.database.connection_string = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = valid_config();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn should_take_connection_string_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[(
            "MONGODB_CONNECTION_STRING",
            "mongodb+srv://u:p@cluster.example.net/tracker",
        )]));
        assert_eq!(
            config.connection_string(),
            "mongodb+srv://u:p@cluster.example.net/tracker"
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_let_env_override_file_values() {
        let mut config: Config = toml::from_str("[server]\nport = 8080").unwrap();
        config.apply_overrides(env(&[
            ("GEOTRACK_BIND", "127.0.0.1:7070"),
            ("RUST_LOG", "trace"),
            ("GEOTRACK_STATIC_DIR", "/srv/static"),
        ]));
        assert_eq!(config.bind_addr(), "127.0.0.1:7070");
        assert_eq!(config.logging.filter, "trace");
        assert_eq!(config.assets.static_dir, "/srv/static");
        assert_eq!(config.assets.templates_dir, "templates");
    }

    #[test]
    fn should_ignore_unparseable_port_override() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("GEOTRACK_PORT", "http")]));
        assert_eq!(config.server.port, 5000);
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    }

    #[test]
    fn should_convert_into_configuration_error() {
        let err: TrackerError = ConfigError::Validation("nope".to_string()).into();
        assert!(matches!(err, TrackerError::Configuration(_)));
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
