//! Route search error types.
//!
//! None of these are fatal: `RouteFinder::find_routes` turns every one of
//! them into fewer or zero routes.

use crate::domain::{LineId, StationId};
use crate::store::StoreError;

/// Errors from route search.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RouteError {
    /// A store query needed for enumeration failed
    #[error("connection store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// Enumeration produced no candidates
    #[error("no path found from {from} to {to}")]
    NoPathFound { from: StationId, to: StationId },

    /// Every candidate was dropped
    #[error("{dropped} of {total} candidate routes failed")]
    PartialFailure { dropped: usize, total: usize },

    /// A path with no segments cannot be completed
    #[error("route has no segments")]
    EmptyPath,

    /// A line without weekday service has no defined waiting time
    #[error("line {line} has no weekday service")]
    InvalidFrequency { line: LineId },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RouteError::NoPathFound {
            from: StationId::parse("shinjuku").unwrap(),
            to: StationId::parse("ueno").unwrap(),
        };
        assert_eq!(err.to_string(), "no path found from shinjuku to ueno");

        let err = RouteError::PartialFailure {
            dropped: 2,
            total: 2,
        };
        assert_eq!(err.to_string(), "2 of 2 candidate routes failed");

        let err = RouteError::from(StoreError::Unavailable("timeout".into()));
        assert_eq!(
            err.to_string(),
            "connection store unavailable: store unavailable: timeout"
        );

        let err = RouteError::InvalidFrequency {
            line: LineId::parse("ginza").unwrap(),
        };
        assert_eq!(err.to_string(), "line ginza has no weekday service");
    }
}
