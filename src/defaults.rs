use crate::types::Coordinates;

pub const DEFAULT_VEHICLE_COUNT: u32 = 1;

pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

/// Fallback depot: the platform's primary Prague warehouse.
pub fn default_depot() -> Coordinates {
    Coordinates {
        lat: 50.0755,
        lng: 14.4378,
    }
}
