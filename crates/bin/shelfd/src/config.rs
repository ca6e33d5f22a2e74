//! Configuration for the shelf daemon.
//!
//! Settings come from `shelf.toml` in the working directory, with
//! environment variables taking precedence. The file is optional; every
//! field has a default, so a bare `shelfd` starts on `0.0.0.0:3000` with a
//! local `shelf.db`.

use serde::Deserialize;

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

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

fn env_override(target: &mut String, key: &str) {
    if let Ok(value) = std::env::var(key) {
        *target = value;
    }
}

impl Config {
    /// Load `shelf.toml` if present, apply environment overrides, and
    /// validate the result.
    ///
    /// Recognized variables: `SHELF_HOST`, `SHELF_PORT`,
    /// `SHELF_DATABASE_URL`, `SHELF_LOG`, and `RUST_LOG` (which wins over
    /// `SHELF_LOG`).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but cannot be read or
    /// parsed, or if validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("shelf.toml")?;

        env_override(&mut config.server.host, "SHELF_HOST");
        if let Ok(port) = std::env::var("SHELF_PORT") {
            if let Ok(port) = port.parse() {
                config.server.port = port;
            }
        }
        env_override(&mut config.database.url, "SHELF_DATABASE_URL");
        env_override(&mut config.logging.filter, "SHELF_LOG");
        env_override(&mut config.logging.filter, "RUST_LOG");

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

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Return the database URL in `sqlx`-compatible format.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database.url
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:shelf.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "shelfd=info,shelf=info,tower_http=debug".to_string(),
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
