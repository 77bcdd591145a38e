//! Per-school comparison errors.

/// Why a school has no best route in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComparisonError {
    /// The school lists no nearest stations
    #[error("no nearest station information")]
    NoNearestStations,

    /// No nearest station is reachable from the origin
    #[error("no route found")]
    NoRouteFound,
}
