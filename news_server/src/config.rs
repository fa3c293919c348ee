use anyhow::{anyhow, Context, Result};

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use news_client::DEFAULT_BASE_URL;

const DEFAULT_CACHE_TTL_SECS: u64 = 5 * 60;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Server settings read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: SocketAddr,
    pub api_url: String,
    pub api_key: Option<String>,
    pub cache_ttl: Duration,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let server_address = lookup("SERVER_ADDRESS").ok_or_else(|| anyhow!("SERVER_ADDRESS must be set"))?;
        let server_address = parse_var("SERVER_ADDRESS", &server_address)?;

        let cache_ttl = match lookup("NEWS_CACHE_TTL_SECS") {
            Some(value) => parse_var("NEWS_CACHE_TTL_SECS", &value)?,
            None => DEFAULT_CACHE_TTL_SECS,
        };
        let timeout = match lookup("NEWS_TIMEOUT_SECS") {
            Some(value) => parse_var("NEWS_TIMEOUT_SECS", &value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Config {
            server_address,
            api_url: lookup("NEWS_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: lookup("NEWS_API_KEY").filter(|key| !key.is_empty()),
            cache_ttl: Duration::from_secs(cache_ttl),
            timeout: Duration::from_secs(timeout),
        })
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse::<T>()
        .with_context(|| format!("{} has an invalid value: {}", name, value))
}
