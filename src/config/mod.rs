//! Application configuration module
//!
//! Loads typed configuration from environment variables using the `config`
//! and `dotenvy` crates. Variables carry the `FEEDBACK_ANALYTICS` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use feedback_analytics::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod data;
mod error;
mod server;

pub use data::DataConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Survey data source
    #[serde(default)]
    pub data: DataConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads `.env` if present, then reads `FEEDBACK_ANALYTICS__*` variables.
    ///
    /// - `FEEDBACK_ANALYTICS__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FEEDBACK_ANALYTICS__DATA__SEED_PATH=seed.json` -> `data.seed_path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FEEDBACK_ANALYTICS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.data.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("FEEDBACK_ANALYTICS__SERVER__PORT");
        env::remove_var("FEEDBACK_ANALYTICS__SERVER__ENVIRONMENT");
        env::remove_var("FEEDBACK_ANALYTICS__DATA__SEED_PATH");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert!(config.data.seed_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_server_port() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FEEDBACK_ANALYTICS__SERVER__PORT", "3000");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(result.unwrap().server.port, 3000);
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FEEDBACK_ANALYTICS__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_seed_path_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("FEEDBACK_ANALYTICS__DATA__SEED_PATH", "/tmp/seed.json");
        let result = AppConfig::load();
        clear_env();

        assert_eq!(
            result.unwrap().data.seed_path.as_deref(),
            Some("/tmp/seed.json")
        );
    }
}
