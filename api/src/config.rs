use std::num::ParseIntError;

use derive_more::{Display, Error, From};
use food_client::UsdaClient;

const DEFAULT_PORT: u16 = 3000;

type Result<T, E = ConfigError> = std::result::Result<T, E>;

#[derive(Debug, Display, From, Error)]
pub enum ConfigError {
    #[display("PORT must be a valid port number: {_0}")]
    #[from]
    InvalidPort(ParseIntError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub usda_api_url: String,
    pub usda_api_key: String,
}

impl Config {
    pub fn from_env() -> Result<Config> {
        Config::from_lookup(|key| dotenvy::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(port) => port.trim().parse()?,
            None => {
                tracing::info!("PORT not set, using default: {DEFAULT_PORT}");
                DEFAULT_PORT
            }
        };

        // Upstream settings are not validated; a missing value surfaces as an
        // upstream error on the first proxied request.
        let usda_api_url = lookup("USDA_API_URL").unwrap_or_else(|| {
            tracing::warn!("USDA_API_URL env var not set");
            String::new()
        });
        let usda_api_key = lookup("USDA_API_KEY").unwrap_or_else(|| {
            tracing::warn!("USDA_API_KEY env var not set");
            String::new()
        });

        Ok(Config {
            port,
            usda_api_url,
            usda_api_key,
        })
    }

    pub fn usda_client(&self) -> UsdaClient {
        UsdaClient::new(&self.usda_api_url, &self.usda_api_key)
    }
}
