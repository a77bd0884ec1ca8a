//! Configuration management

use std::time::Duration;

use anyhow::{Context, Result};

use crate::defaults::{default_depot, DEFAULT_CACHE_TTL_SECS};
use crate::types::Coordinates;

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Depot used when a request does not carry one
    pub default_depot: Coordinates,

    /// Lifetime of memoized optimization results
    pub cache_ttl: Duration,

    /// Redis connection string (optional, falls back to the in-memory cache)
    pub redis_url: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_depot: default_depot(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            redis_url: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let default_depot = match (std::env::var("DEPOT_LAT"), std::env::var("DEPOT_LNG")) {
            (Ok(lat), Ok(lng)) => {
                let lat: f64 = lat.parse().context("DEPOT_LAT must be a number")?;
                let lng: f64 = lng.parse().context("DEPOT_LNG must be a number")?;
                let depot = Coordinates { lat, lng };
                if !depot.is_valid() {
                    anyhow::bail!("DEPOT_LAT/DEPOT_LNG out of range: {lat}, {lng}");
                }
                depot
            }
            _ => default_depot(),
        };

        let cache_ttl_secs = match std::env::var("CACHE_TTL_SECONDS") {
            Ok(raw) => raw
                .parse::<u64>()
                .context("CACHE_TTL_SECONDS must be a positive integer")?,
            Err(_) => DEFAULT_CACHE_TTL_SECS,
        };
        if cache_ttl_secs == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be at least 1");
        }

        let redis_url = std::env::var("REDIS_URL").ok();

        Ok(Self {
            default_depot,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            redis_url,
        })
    }
}
