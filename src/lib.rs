//! FleetOps Optimizer - Route optimization and result memoization engine
//!
//! Given a depot and a set of delivery stops, this engine partitions the
//! stops across a fleet of vehicles, estimates per-stop arrival/departure
//! times and aggregate distance/time, and memoizes results in a shared
//! key-value cache keyed on a deterministic request fingerprint.
//!
//! The transport layer (message routing, auth, retries) lives outside this
//! crate and talks to [`services::optimizer::RouteOptimizer`], the only
//! component with a public async contract. Everything else is pure
//! computation except the [`services::cache::ResultCache`] boundary.

pub mod config;
pub mod defaults;
pub mod error;
pub mod services;
pub mod types;

pub use config::EngineConfig;
pub use error::OptimizeError;
pub use services::optimizer::RouteOptimizer;
