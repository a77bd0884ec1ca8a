//! Route optimization orchestrator
//!
//! The only public async contract of the engine. One call runs:
//! validate -> apply defaults -> fingerprint -> cache lookup -> (on miss)
//! partition + estimate + aggregate -> cache write -> respond.
//!
//! Concurrent calls are independent; identical concurrent requests each
//! recompute and race benignly on the cache write (values are
//! deterministic, so the last writer wins with the same payload). There is
//! no single-flight deduplication.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::defaults::DEFAULT_VEHICLE_COUNT;
use crate::error::OptimizeError;
use crate::services::cache::ResultCache;
use crate::services::fingerprint::request_fingerprint;
use crate::services::ident::IdGenerator;
use crate::services::partition::partition_stops;
use crate::services::schedule::estimate_route;
use crate::types::{Coordinates, OptimizeRequest, OptimizeResponse, Route};

/// Fleet route optimizer with result memoization
pub struct RouteOptimizer {
    cache: Arc<dyn ResultCache>,
    ids: Arc<dyn IdGenerator>,
    default_depot: Coordinates,
    cache_ttl: Duration,
}

impl RouteOptimizer {
    pub fn new(
        cache: Arc<dyn ResultCache>,
        ids: Arc<dyn IdGenerator>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            cache,
            ids,
            default_depot: config.default_depot,
            cache_ttl: config.cache_ttl,
        }
    }

    /// Optimize a request anchored at the current time.
    pub async fn optimize(&self, request: OptimizeRequest) -> Result<OptimizeResponse, OptimizeError> {
        self.optimize_at(request, Utc::now()).await
    }

    /// Optimize a request anchored at `requested_at`.
    ///
    /// `requested_at` is the schedule origin for all arrival/departure
    /// estimates and the ETA; callers pass the transport envelope's
    /// timestamp, tests pin a fixed instant.
    pub async fn optimize_at(
        &self,
        request: OptimizeRequest,
        requested_at: DateTime<Utc>,
    ) -> Result<OptimizeResponse, OptimizeError> {
        if request.stops.is_empty() {
            return Err(OptimizeError::InvalidRequest(
                "at least one stop is required".to_string(),
            ));
        }

        let vehicle_count = match request.vehicles {
            Some(v) if v >= 1 => v,
            _ => DEFAULT_VEHICLE_COUNT,
        };
        let depot = request.depot.unwrap_or(self.default_depot);

        if !depot.is_valid() {
            return Err(OptimizeError::Computation(format!(
                "malformed depot coordinate ({}, {})",
                depot.lat, depot.lng
            )));
        }
        if let Some(bad) = request.stops.iter().find(|s| !s.coordinates().is_valid()) {
            return Err(OptimizeError::Computation(format!(
                "malformed coordinate on stop '{}' ({}, {})",
                bad.id, bad.lat, bad.lng
            )));
        }

        let key = request_fingerprint(&request.stops, vehicle_count, &depot)
            .map_err(|e| OptimizeError::Computation(e.to_string()))?;

        // Cached results are replayed verbatim: no recomputation, no fresh
        // id, no TTL refresh.
        let cached = self
            .cache
            .get(&key)
            .await
            .map_err(OptimizeError::CacheUnavailable)?;
        if let Some(response) = cached {
            debug!("Optimization cache hit for {}", key);
            return Ok(response);
        }
        debug!("Optimization cache miss for {}", key);

        // Buckets keep their vehicle number even though empty ones are
        // dropped from the response; empties are trailing by construction,
        // so the surviving ids stay contiguous.
        let buckets = partition_stops(&request.stops, vehicle_count);
        let routes: Vec<Route> = buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(i, bucket)| estimate_route(&depot, i as u32 + 1, bucket, requested_at))
            .collect();

        let total_distance: f64 = routes.iter().map(|r| r.distance).sum();
        // Vehicles run in parallel, so the fleet finishes with its slowest route
        let total_time: i64 = routes.iter().map(|r| r.time).max().unwrap_or(0);

        let response = OptimizeResponse {
            id: self.ids.new_id(),
            vehicle_count,
            total_distance,
            total_time,
            routes,
            eta: requested_at + ChronoDuration::minutes(total_time),
        };

        info!(
            "Optimized {} stops across {} vehicles: {} routes, {:.1} km, {} min",
            request.stops.len(),
            vehicle_count,
            response.routes.len(),
            response.total_distance,
            response.total_time
        );

        self.cache
            .set(&key, &response, self.cache_ttl)
            .await
            .map_err(OptimizeError::CacheUnavailable)?;

        Ok(response)
    }
}
