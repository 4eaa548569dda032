use std::env;

use cognito_tools::CognitoConfig;
use log::*;

const DEFAULT_SRS_HOST: &str = "127.0.0.1";
const DEFAULT_SRS_PORT: u16 = 8740;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    /// Identity provider (Cognito user pool) configuration.
    pub cognito: CognitoConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SRS_HOST.to_string(),
            port: DEFAULT_SRS_PORT,
            database_url: String::default(),
            cognito: CognitoConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SRS_HOST").ok().unwrap_or_else(|| DEFAULT_SRS_HOST.into());
        let port = env::var("SRS_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for SRS_PORT. {e} Using the default, {DEFAULT_SRS_PORT}, instead."
                    );
                    DEFAULT_SRS_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_SRS_PORT);
        let database_url = env::var("SRS_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ SRS_DATABASE_URL is not set. Please set it to the URL for the sales database.");
            String::default()
        });
        let cognito = CognitoConfig::new_from_env_or_default();
        Self { host, port, database_url, cognito }
    }
}
