use chrono::Duration;
use std::env;

use crate::errors::CustomError;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub alchemy_api_key: String,
    pub rpc_url_override: Option<String>,
    pub cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, CustomError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CustomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cache_ttl_secs = parse_var(&lookup, "CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&lookup, "PORT", DEFAULT_PORT)?,
            alchemy_api_key: lookup("ALCHEMY_API_KEY").unwrap_or_default(),
            rpc_url_override: lookup("ETHEREUM_RPC_URL").filter(|url| !url.is_empty()),
            cache_ttl: cache_ttl(cache_ttl_secs)?,
        })
    }
}

fn cache_ttl(seconds: u64) -> Result<Duration, CustomError> {
    if seconds == 0 {
        return Err(CustomError::ConfigError(
            "CACHE_TTL_SECS must be at least 1".to_string(),
        ));
    }
    i64::try_from(seconds)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or_else(|| {
            CustomError::ConfigError(format!("CACHE_TTL_SECS out of range: {}", seconds))
        })
}

fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T, CustomError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .parse()
            .map_err(|_| CustomError::ConfigError(format!("Failed to parse {}: {:?}", name, raw))),
        None => Ok(default),
    }
}
