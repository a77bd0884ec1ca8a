//! Stop partitioning across a fleet
//!
//! Deterministic single-pass split: bucket `i` takes
//! `ceil(remaining / vehicles_left)` stops off the front of the input.
//! Larger buckets land on earlier vehicles when the count does not divide
//! evenly, and input order is preserved throughout. Priority and time
//! windows are NOT sort keys; the submission order is the itinerary order.

use crate::types::Stop;

/// Split `stops` into exactly `vehicle_count` buckets in input order.
///
/// A bucket can be empty only when there are fewer stops than vehicles,
/// and empty buckets are always trailing.
pub fn partition_stops(stops: &[Stop], vehicle_count: u32) -> Vec<Vec<Stop>> {
    let vehicle_count = vehicle_count as usize;
    let mut buckets = Vec::with_capacity(vehicle_count);
    let mut remaining = stops;

    for i in 0..vehicle_count {
        let vehicles_left = vehicle_count - i;
        let take = remaining.len().div_ceil(vehicles_left);
        let (bucket, rest) = remaining.split_at(take);
        buckets.push(bucket.to_vec());
        remaining = rest;
    }

    buckets
}
