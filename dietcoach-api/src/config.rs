use std::{env, fmt, time::Duration};

use dotenv::dotenv;

const DEFAULT_GENERATION_URL: &str = "https://api-inference.huggingface.co/models/microsoft/biogpt";
const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{0} has invalid value \"{1}\"")]
    Invalid(&'static str, String),
}

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub generation_url: String,
    pub generation_timeout: Duration,
    pub bind_address: String,
    pub port: u16,
}

// The API key must never end up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("generation_url", &self.generation_url)
            .field("generation_timeout", &self.generation_timeout)
            .field("bind_address", &self.bind_address)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Reads configuration from the environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("HUGGINGFACE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::Missing("HUGGINGFACE_API_KEY"))?;

        let generation_timeout = match lookup("GENERATION_TIMEOUT_SECS") {
            Some(value) => value
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("GENERATION_TIMEOUT_SECS", value))?,
            None => DEFAULT_GENERATION_TIMEOUT_SECS,
        };

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            api_key,
            generation_url: lookup("GENERATION_API_URL")
                .unwrap_or_else(|| DEFAULT_GENERATION_URL.to_owned()),
            generation_timeout: Duration::from_secs(generation_timeout),
            bind_address: lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned()),
            port,
        })
    }
}
