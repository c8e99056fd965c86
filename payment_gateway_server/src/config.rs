use std::env;

use log::*;

const DEFAULT_PGW_HOST: &str = "127.0.0.1";
const DEFAULT_PGW_PORT: u16 = 8360;

/// The full server configuration, read once at startup and passed explicitly to the server. There is no global
/// configuration state.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: DEFAULT_PGW_HOST.to_string(), port: DEFAULT_PGW_PORT, database_url: String::default() }
    }
}

impl ServerConfig {
    pub fn from_env_or_default() -> Self {
        let host = env::var("PGW_HOST").ok().unwrap_or_else(|| DEFAULT_PGW_HOST.into());
        let port = env::var("PGW_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for PGW_PORT. {e} Using the default, {DEFAULT_PGW_PORT}, instead."
                    );
                    DEFAULT_PGW_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_PGW_PORT);
        let database_url = env::var("PGW_DATABASE_URL").ok().unwrap_or_else(|| {
            error!("🪛️ PGW_DATABASE_URL is not set. Please set it to the URL for the gateway database.");
            String::default()
        });
        Self { host, port, database_url }
    }
}
