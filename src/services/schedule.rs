//! Per-vehicle schedule estimation
//!
//! Walks one vehicle's bucket in order and assigns fixed-increment
//! arrival/departure estimates anchored at the request time. The model is
//! deliberately not traffic-aware.
//!
//! Two timing notions ride side by side: the 15-minute-per-leg /
//! 5-minute-dwell stop schedule, and the flat 20-minutes-per-stop route
//! total. Different consumers read different fields; do not unify them
//! without product confirmation.

use chrono::{DateTime, Duration, Utc};

use crate::services::geo;
use crate::types::{Coordinates, OptimizedStop, Route, Stop};

/// Travel allowance per leg in the stop schedule
const LEG_MINUTES: i64 = 15;

/// Dwell time at each stop
const DWELL_MINUTES: i64 = 5;

/// Flat per-stop allowance used for the route total
const STOP_ALLOWANCE_MINUTES: i64 = 20;

/// Build one vehicle's route from its assigned bucket.
///
/// Distance is the closed loop depot -> stops -> depot.
pub fn estimate_route(
    depot: &Coordinates,
    vehicle_id: u32,
    bucket: &[Stop],
    requested_at: DateTime<Utc>,
) -> Route {
    let stops: Vec<OptimizedStop> = bucket
        .iter()
        .enumerate()
        .map(|(idx, stop)| {
            let arrival = requested_at + Duration::minutes((idx as i64 + 1) * LEG_MINUTES);
            let departure = arrival + Duration::minutes(DWELL_MINUTES);
            OptimizedStop {
                id: stop.id.clone(),
                lat: stop.lat,
                lng: stop.lng,
                priority: stop.priority,
                time_window: stop.time_window,
                sequence: idx as u32 + 1,
                estimated_arrival: arrival,
                estimated_departure: departure,
            }
        })
        .collect();

    let mut loop_points = Vec::with_capacity(bucket.len() + 2);
    loop_points.push(*depot);
    loop_points.extend(bucket.iter().map(Stop::coordinates));
    loop_points.push(*depot);

    Route {
        vehicle_id,
        distance: geo::path_distance(&loop_points),
        time: bucket.len() as i64 * STOP_ALLOWANCE_MINUTES,
        geometry: loop_points.iter().map(|c| [c.lng, c.lat]).collect(),
        stops,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn depot() -> Coordinates {
        Coordinates { lat: 50.0, lng: 14.0 }
    }

    fn requested_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap()
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

    #[test]
    fn test_empty_bucket_produces_empty_route() {
        let route = estimate_route(&depot(), 1, &[], requested_at());

        assert_eq!(route.vehicle_id, 1);
        assert!(route.stops.is_empty());
        assert_eq!(route.time, 0);
        assert!(route.distance < 1e-9);
        // Degenerate loop: depot -> depot
        assert_eq!(route.geometry.len(), 2);
    }

    #[test]
    fn test_fixed_increment_schedule() {
        let bucket = vec![
            make_stop("a", 50.1, 14.1),
            make_stop("b", 50.2, 14.2),
            make_stop("c", 50.3, 14.3),
        ];

        let route = estimate_route(&depot(), 1, &bucket, requested_at());
        assert_eq!(route.stops.len(), 3);

        let expect = |h: u32, m: u32| Utc.with_ymd_and_hms(2026, 3, 1, h, m, 0).unwrap();

        // Arrivals at +15/+30/+45 minutes, departures 5 minutes later
        assert_eq!(route.stops[0].estimated_arrival, expect(8, 15));
        assert_eq!(route.stops[0].estimated_departure, expect(8, 20));
        assert_eq!(route.stops[1].estimated_arrival, expect(8, 30));
        assert_eq!(route.stops[1].estimated_departure, expect(8, 35));
        assert_eq!(route.stops[2].estimated_arrival, expect(8, 45));
        assert_eq!(route.stops[2].estimated_departure, expect(8, 50));
    }

    #[test]
    fn test_sequence_is_contiguous_from_one() {
        let bucket = vec![
            make_stop("a", 50.1, 14.1),
            make_stop("b", 50.2, 14.2),
            make_stop("c", 50.3, 14.3),
        ];

        let route = estimate_route(&depot(), 2, &bucket, requested_at());
        let sequences: Vec<u32> = route.stops.iter().map(|s| s.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn test_route_time_is_flat_allowance() {
        let bucket = vec![make_stop("a", 50.1, 14.1), make_stop("b", 50.2, 14.2)];
        let route = estimate_route(&depot(), 1, &bucket, requested_at());
        assert_eq!(route.time, 40);
    }

    #[test]
    fn test_distance_is_round_trip() {
        let bucket = vec![make_stop("a", 50.1, 14.1), make_stop("b", 50.2, 14.2)];
        let route = estimate_route(&depot(), 1, &bucket, requested_at());

        let expected = geo::path_distance(&[
            depot(),
            Coordinates { lat: 50.1, lng: 14.1 },
            Coordinates { lat: 50.2, lng: 14.2 },
            depot(),
        ]);
        assert!((route.distance - expected).abs() < 1e-9);
        assert!(route.distance > 0.0);
    }

    #[test]
    fn test_geometry_is_closed_loop_lng_lat() {
        let bucket = vec![make_stop("a", 50.1, 14.1)];
        let route = estimate_route(&depot(), 1, &bucket, requested_at());

        assert_eq!(
            route.geometry,
            vec![[14.0, 50.0], [14.1, 50.1], [14.0, 50.0]]
        );
    }

    #[test]
    fn test_stop_metadata_is_carried_through() {
        let mut stop = make_stop("a", 50.1, 14.1);
        stop.priority = Some(7);

        let route = estimate_route(&depot(), 1, &[stop], requested_at());
        assert_eq!(route.stops[0].id, "a");
        assert_eq!(route.stops[0].priority, Some(7));
        assert!(route.stops[0].time_window.is_none());
    }
}
