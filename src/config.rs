use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use tracing::Level;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // Rate limiting, 0 disables it
    pub rate_api_per_min: u32,

    pub seed_demo_data: bool,
    pub log_dir: String,
    pub log_level: Level,
}

fn parse_var<T>(name: &str, raw: Option<String>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{name} has an invalid value: {value}")),
        None => Ok(default),
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            server_addr: lookup("SERVER_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            api_prefix: lookup("API_PREFIX").unwrap_or_else(|| "/api/v1".to_string()),
            rate_api_per_min: parse_var("RATE_API_PER_MIN", lookup("RATE_API_PER_MIN"), 600)?,
            seed_demo_data: parse_var("SEED_DEMO_DATA", lookup("SEED_DEMO_DATA"), true)?,
            log_dir: lookup("LOG_DIR").unwrap_or_else(|| "logs".to_string()),
            log_level: parse_var("LOG_LEVEL", lookup("LOG_LEVEL"), Level::DEBUG)?,
        })
    }
}
