use config::{Config, ConfigError, File};
use serde::Deserialize;

fn default_listen_port() -> u16 {
    3000
}

/// Runtime settings, sourced from `config.toml` (optional) and the process
/// environment: DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME, PORT.
///
/// Every field carries a default so loading never fails on a missing
/// variable; a misconfigured database surfaces later as a connection error.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub db_host: String,
    #[serde(default)]
    pub db_port: u16,
    #[serde(default)]
    pub db_user: String,
    #[serde(default)]
    pub db_password: String,
    #[serde(default)]
    pub db_name: String,
    #[serde(default = "default_listen_port")]
    pub port: u16,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name("config.toml").required(false))
            .add_source(config::Environment::default())
            .build()?;

        config.try_deserialize()
    }
}
