//! Request fingerprinting
//!
//! A fingerprint is the cache identity of a request: the effective
//! (defaults applied) stops/vehicle-count/depot triple, serialized with
//! fixed field order and stop order preserved, then hashed. Stop order is
//! semantically significant because it drives the partition, so reordering
//! the same stops is a different request.

use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::types::{Coordinates, Stop};

/// Canonical serialization input. Field order is part of the format.
#[derive(Serialize)]
struct FingerprintPayload<'a> {
    stops: &'a [Stop],
    vehicle_count: u32,
    depot: &'a Coordinates,
}

/// Derive the cache key material for an effective request.
pub fn request_fingerprint(
    stops: &[Stop],
    vehicle_count: u32,
    depot: &Coordinates,
) -> Result<String> {
    let payload = FingerprintPayload {
        stops,
        vehicle_count,
        depot,
    };
    let bytes = serde_json::to_vec(&payload).context("serialize fingerprint payload")?;
    Ok(hex::encode(Sha256::digest(&bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeWindow;
    use chrono::{TimeZone, Utc};

    fn depot() -> Coordinates {
        Coordinates { lat: 50.0, lng: 14.0 }
    }

    fn make_stop(id: &str, lat: f64, lng: f64) -> Stop {
        Stop {
            id: id.to_string(),
            lat,
            lng,
            priority: None,
            time_window: None,
        }
    }

    fn stops() -> Vec<Stop> {
        vec![make_stop("a", 50.1, 14.1), make_stop("b", 50.2, 14.2)]
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let s = stops();
        let first = request_fingerprint(&s, 2, &depot()).unwrap();
        let second = request_fingerprint(&s, 2, &depot()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fingerprint_is_printable_hex() {
        let fp = request_fingerprint(&stops(), 1, &depot()).unwrap();
        assert_eq!(fp.len(), 64);
        assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_stop_order_changes_fingerprint() {
        let forward = stops();
        let mut reversed = stops();
        reversed.reverse();

        let fp_forward = request_fingerprint(&forward, 2, &depot()).unwrap();
        let fp_reversed = request_fingerprint(&reversed, 2, &depot()).unwrap();
        assert_ne!(fp_forward, fp_reversed);
    }

    #[test]
    fn test_vehicle_count_changes_fingerprint() {
        let s = stops();
        let one = request_fingerprint(&s, 1, &depot()).unwrap();
        let two = request_fingerprint(&s, 2, &depot()).unwrap();
        assert_ne!(one, two);
    }

    #[test]
    fn test_depot_changes_fingerprint() {
        let s = stops();
        let here = request_fingerprint(&s, 1, &depot()).unwrap();
        let there = request_fingerprint(&s, 1, &Coordinates { lat: 49.0, lng: 16.0 }).unwrap();
        assert_ne!(here, there);
    }

    #[test]
    fn test_stop_metadata_changes_fingerprint() {
        let plain = stops();

        let mut with_priority = stops();
        with_priority[0].priority = Some(1);

        let mut with_window = stops();
        with_window[1].time_window = Some(TimeWindow {
            start: Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap(),
        });

        let fp_plain = request_fingerprint(&plain, 1, &depot()).unwrap();
        let fp_priority = request_fingerprint(&with_priority, 1, &depot()).unwrap();
        let fp_window = request_fingerprint(&with_window, 1, &depot()).unwrap();

        assert_ne!(fp_plain, fp_priority);
        assert_ne!(fp_plain, fp_window);
        assert_ne!(fp_priority, fp_window);
    }
}
