//! Environment-derived configuration.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use std::{env, fmt::Display};

use tracing::warn;

const DEFAULT_API_URL: &str = "https://dummyjson.com";
const DEFAULT_STORAGE_DIR: &str = ".storefront";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the remote product catalog API.
    pub api_base_url: String,
    /// Directory holding the persisted cart/wishlist JSON files.
    pub storage_dir: PathBuf,
    /// Per-request timeout for catalog fetches.
    pub request_timeout: Duration,
    /// Quiet window before a search keystroke is committed.
    pub search_debounce: Duration,
    /// Simulated payment processor round trip.
    pub checkout_delay: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            request_timeout: Duration::from_millis(10_000),
            search_debounce: Duration::from_millis(500),
            checkout_delay: Duration::from_millis(2_000),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            api_base_url: var_or("STOREFRONT_API_URL", DEFAULT_API_URL.to_string()),
            storage_dir: PathBuf::from(var_or(
                "STOREFRONT_STORAGE_DIR",
                DEFAULT_STORAGE_DIR.to_string(),
            )),
            request_timeout: Duration::from_millis(parse_or(
                "STOREFRONT_REQUEST_TIMEOUT_MS",
                10_000,
            )),
            search_debounce: Duration::from_millis(parse_or("STOREFRONT_SEARCH_DEBOUNCE_MS", 500)),
            checkout_delay: Duration::from_millis(parse_or("STOREFRONT_CHECKOUT_DELAY_MS", 2_000)),
        }
    }
}

fn var_or(key: &str, default: String) -> String {
    env::var(key).unwrap_or(default)
}

fn parse_or<T: FromStr>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value: {e}, using default");
            default
        }),
        Err(_) => default,
    }
}
