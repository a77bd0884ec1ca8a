//! Engine error taxonomy
//!
//! All failures bubble to the single caller boundary; the engine performs
//! no retries and produces no partial results. Cache faults abort the
//! request (fail-closed) instead of degrading to uncached computation.

use thiserror::Error;

/// Failure modes of a single `optimize` call
#[derive(Debug, Error)]
pub enum OptimizeError {
    /// The caller sent a request the engine cannot work with. Recoverable
    /// by fixing the input and retrying.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Malformed coordinate or internal arithmetic fault during
    /// partitioning/estimation.
    #[error("route computation failed: {0}")]
    Computation(String),

    /// The shared result cache could not be read or written.
    #[error("result cache unavailable: {0}")]
    CacheUnavailable(#[source] anyhow::Error),
}

impl OptimizeError {
    /// Wire-level error code for the transport envelope.
    pub fn code(&self) -> &'static str {
        match self {
            OptimizeError::InvalidRequest(_) => "INVALID_REQUEST",
            OptimizeError::Computation(_) => "COMPUTATION_ERROR",
            OptimizeError::CacheUnavailable(_) => "CACHE_UNAVAILABLE",
        }
    }

    /// Client errors are the caller's to fix; everything else is a
    /// service-side failure.
    pub fn is_client_error(&self) -> bool {
        matches!(self, OptimizeError::InvalidRequest(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            OptimizeError::InvalidRequest("x".into()).code(),
            "INVALID_REQUEST"
        );
        assert_eq!(
            OptimizeError::Computation("x".into()).code(),
            "COMPUTATION_ERROR"
        );
        assert_eq!(
            OptimizeError::CacheUnavailable(anyhow::anyhow!("down")).code(),
            "CACHE_UNAVAILABLE"
        );
    }

    #[test]
    fn test_client_server_classification() {
        assert!(OptimizeError::InvalidRequest("x".into()).is_client_error());
        assert!(!OptimizeError::Computation("x".into()).is_client_error());
        assert!(!OptimizeError::CacheUnavailable(anyhow::anyhow!("down")).is_client_error());
    }
}
