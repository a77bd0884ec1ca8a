//! Shared result cache for memoized optimizations
//!
//! The cache is the engine's only I/O boundary. Redis backs it in
//! production; the in-memory variant serves tests and single-process
//! deployments without a Redis instance. Entries are serialized
//! `OptimizeResponse` values stored under a fingerprint-derived key with a
//! bounded lifetime; an expired entry is indistinguishable from a miss.
//!
//! Cache failures are NOT absorbed here. Callers decide, and the
//! orchestrator fails the whole request on a cache fault rather than
//! degrading to uncached computation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use redis::AsyncCommands;
use tracing::info;

use crate::types::OptimizeResponse;

/// Key namespace shared with the rest of the platform
const KEY_PREFIX: &str = "routeopt";

/// Shared key-value store abstraction (get / set-with-TTL)
#[async_trait]
pub trait ResultCache: Send + Sync {
    /// Look up a memoized response. `Ok(None)` is a miss or an expired entry.
    async fn get(&self, key: &str) -> Result<Option<OptimizeResponse>>;

    /// Store a response under `key` for at most `ttl`.
    async fn set(&self, key: &str, value: &OptimizeResponse, ttl: Duration) -> Result<()>;

    /// Get cache name for logging
    fn name(&self) -> &str;
}

fn namespaced(key: &str) -> String {
    format!("{}:{}", KEY_PREFIX, key)
}

// ==========================================================================
// Redis-backed cache
// ==========================================================================

/// Redis-backed result cache
pub struct RedisResultCache {
    client: redis::Client,
}

impl RedisResultCache {
    /// Create a cache client for the given connection string.
    ///
    /// Connections are established lazily per operation; an unreachable
    /// server surfaces as an error on the first get/set.
    pub fn new(redis_url: &str) -> Result<Self> {
        let client = redis::Client::open(redis_url).context("invalid Redis URL")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ResultCache for RedisResultCache {
    async fn get(&self, key: &str) -> Result<Option<OptimizeResponse>> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .context("connect to Redis")?;

        let raw: Option<String> = conn
            .get(namespaced(key))
            .await
            .context("Redis GET failed")?;

        match raw {
            Some(payload) => {
                let response =
                    serde_json::from_str(&payload).context("deserialize cached response")?;
                Ok(Some(response))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &OptimizeResponse, ttl: Duration) -> Result<()> {
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .context("connect to Redis")?;

        let payload = serde_json::to_string(value).context("serialize response for cache")?;
        // SETEX rejects a zero expiry
        let ttl_secs = ttl.as_secs().max(1);

        let _: () = conn
            .set_ex(namespaced(key), payload, ttl_secs)
            .await
            .context("Redis SETEX failed")?;
        Ok(())
    }

    fn name(&self) -> &str {
        "Redis"
    }
}

// ==========================================================================
// In-memory cache
// ==========================================================================

struct MemoryEntry {
    payload: String,
    stored_at: Instant,
    ttl: Duration,
}

impl MemoryEntry {
    fn is_expired(&self) -> bool {
        self.stored_at.elapsed() >= self.ttl
    }
}

/// In-memory result cache with logical TTL expiry.
///
/// Entries are kept as serialized payloads so a hit goes through the same
/// round trip as the Redis path. The get/set counters make cache traffic
/// observable in tests.
#[derive(Default)]
pub struct InMemoryResultCache {
    entries: Mutex<HashMap<String, MemoryEntry>>,
    get_calls: AtomicU32,
    set_calls: AtomicU32,
}

impl InMemoryResultCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `get` calls observed so far.
    pub fn get_count(&self) -> u32 {
        self.get_calls.load(Ordering::Relaxed)
    }

    /// Number of `set` calls observed so far.
    pub fn set_count(&self) -> u32 {
        self.set_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ResultCache for InMemoryResultCache {
    async fn get(&self, key: &str) -> Result<Option<OptimizeResponse>> {
        self.get_calls.fetch_add(1, Ordering::Relaxed);

        let mut entries = self.entries.lock();
        match entries.get(&namespaced(key)) {
            Some(entry) if entry.is_expired() => {
                entries.remove(&namespaced(key));
                Ok(None)
            }
            Some(entry) => {
                let response = serde_json::from_str(&entry.payload)
                    .context("deserialize cached response")?;
                Ok(Some(response))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &OptimizeResponse, ttl: Duration) -> Result<()> {
        self.set_calls.fetch_add(1, Ordering::Relaxed);

        let payload = serde_json::to_string(value).context("serialize response for cache")?;
        self.entries.lock().insert(
            namespaced(key),
            MemoryEntry {
                payload,
                stored_at: Instant::now(),
                ttl,
            },
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "InMemory"
    }
}

/// Create a result cache based on configuration
pub fn create_result_cache(redis_url: Option<&str>) -> Result<Box<dyn ResultCache>> {
    match redis_url {
        Some(url) => {
            let cache = RedisResultCache::new(url)?;
            info!("Result cache initialized: {}", cache.name());
            Ok(Box::new(cache))
        }
        None => {
            info!("REDIS_URL not configured, using in-memory result cache");
            Ok(Box::new(InMemoryResultCache::new()))
        }
    }
}
