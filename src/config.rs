//! Application configuration.
//!
//! Loaded once at startup from environment variables; components
//! receive values from here instead of consulting the environment
//! themselves.

use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

const DEFAULT_TTL_SECONDS: u64 = 3600;
const DEFAULT_CACHE_CAPACITY: u64 = 1024;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Wizard World catalog API
    pub api_base_url: String,
    /// Whether reads go through the cache store at all
    pub cache_enabled: bool,
    /// Uniform TTL applied to every cache entry
    pub cache_ttl: Duration,
    /// Maximum number of cache entries
    pub cache_capacity: u64,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if
    /// present). Only `API_BASE_URL` is required; the cache settings
    /// fall back to defaults rather than failing startup.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("API_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Config("API_BASE_URL is not set".to_string()))?;

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "0" | "false" | "no"))
            .unwrap_or(true);

        let cache_ttl = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TTL_SECONDS);

        let cache_capacity = env::var("CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_CACHE_CAPACITY);

        Ok(Self {
            api_base_url,
            cache_enabled,
            cache_ttl: Duration::from_secs(cache_ttl),
            cache_capacity,
        })
    }
}
