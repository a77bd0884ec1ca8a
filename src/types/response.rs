//! Optimization response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// A stop with its assigned position and estimated schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizedStop {
    pub id: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_window: Option<TimeWindow>,
    /// Position within the route (1-based, contiguous)
    pub sequence: u32,
    pub estimated_arrival: DateTime<Utc>,
    pub estimated_departure: DateTime<Utc>,
}

/// One vehicle's planned route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Vehicle number within the response (1-based)
    pub vehicle_id: u32,
    pub stops: Vec<OptimizedStop>,
    /// Round-trip distance in kilometers (depot -> stops -> depot)
    pub distance: f64,
    /// Flat per-stop time allowance in minutes
    pub time: i64,
    /// Closed-loop polyline as GeoJSON [lng, lat] pairs
    #[serde(default)]
    pub geometry: Vec<[f64; 2]>,
}

/// Result of a fleet optimization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    /// Fresh request-scoped identifier
    pub id: String,
    pub vehicle_count: u32,
    /// Sum of route distances in kilometers
    pub total_distance: f64,
    /// Longest route time in minutes (vehicles run in parallel)
    pub total_time: i64,
    pub routes: Vec<Route>,
    /// Fleet-wide completion estimate
    pub eta: DateTime<Utc>,
}
