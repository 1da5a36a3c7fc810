// src/config.rs

use crate::domain::expansion::ExpansionPolicy;
use std::net::SocketAddr;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_GRID_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(6) {
    Some(n) => n,
    None => panic!("default page size must be non-zero"),
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value `{value}` for {key}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub listings_api_url: String,
    pub listings_timeout: Duration,
    /// Key the API expects the page size under. Opaque to us.
    pub page_size_key: String,
    pub home_fetch_size: usize,
    pub grid_fetch_size: usize,
    pub grid_items_per_page: NonZeroUsize,
    pub expansion_policy: ExpansionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            listings_api_url: "http://127.0.0.1:8080/api/listings".to_string(),
            listings_timeout: Duration::from_secs(30),
            page_size_key: "1".to_string(),
            home_fetch_size: 15,
            grid_fetch_size: 20,
            grid_items_per_page: DEFAULT_GRID_ITEMS_PER_PAGE,
            expansion_policy: ExpansionPolicy::Single,
        }
    }
}

impl Config {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let timeout_secs: u64 = parse_or(
            &lookup,
            "LISTINGS_TIMEOUT_SECS",
            defaults.listings_timeout.as_secs(),
        )?;

        Ok(Config {
            addr: parse_or(&lookup, "HOMELENGO_ADDR", defaults.addr)?,
            max_workers: parse_or(&lookup, "HOMELENGO_WORKERS", defaults.max_workers)?,
            listings_api_url: lookup("LISTINGS_API_URL").unwrap_or(defaults.listings_api_url),
            listings_timeout: Duration::from_secs(timeout_secs),
            page_size_key: lookup("LISTINGS_PAGE_SIZE_KEY").unwrap_or(defaults.page_size_key),
            home_fetch_size: parse_or(&lookup, "HOME_FETCH_SIZE", defaults.home_fetch_size)?,
            grid_fetch_size: parse_or(&lookup, "GRID_FETCH_SIZE", defaults.grid_fetch_size)?,
            grid_items_per_page: parse_or(
                &lookup,
                "GRID_ITEMS_PER_PAGE",
                defaults.grid_items_per_page,
            )?,
            expansion_policy: parse_or(&lookup, "EXPANSION_POLICY", defaults.expansion_policy)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}
