use core_config::{
    AppInfo, FromEnv, app_info, env_parse_or, server::ServerConfig, storage::StorageConfig,
};
use std::time::Duration;

// Re-export Environment for use in other modules
pub use core_config::Environment;

const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub environment: Environment,
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=3001 unless set
        let storage = StorageConfig::from_env()?; // DATA_PATH=data/items.json unless set
        let shutdown_secs = env_parse_or("SHUTDOWN_TIMEOUT_SECS", DEFAULT_SHUTDOWN_TIMEOUT_SECS)?;

        Ok(Self {
            app: app_info!(),
            server,
            storage,
            environment,
            shutdown_timeout: Duration::from_secs(shutdown_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        temp_env::with_vars_unset(
            [
                "APP_ENV",
                "HOST",
                "PORT",
                "CORS_ALLOWED_ORIGIN",
                "DATA_PATH",
                "SHUTDOWN_TIMEOUT_SECS",
            ],
            || {
                let config = Config::from_env().unwrap();
                assert_eq!(config.app.name, "catalog_api");
                assert_eq!(config.server.port, 3001);
                assert_eq!(config.storage.data_path.to_str(), Some("data/items.json"));
                assert_eq!(config.shutdown_timeout, Duration::from_secs(30));
                assert!(config.environment.is_development());
            },
        );
    }

    #[test]
    fn test_invalid_shutdown_timeout_is_rejected() {
        temp_env::with_var("SHUTDOWN_TIMEOUT_SECS", Some("soon"), || {
            assert!(Config::from_env().is_err());
        });
    }
}
