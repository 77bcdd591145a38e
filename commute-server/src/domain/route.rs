//! Route types.
//!
//! A `RouteSegment` is one traversed connection, carrying the denormalized
//! station and line details needed for display and waiting-time math.
//! A `CompleteRoute` is an ordered list of segments with its aggregates.

use super::{Connection, LineId, StationId};

/// Station details carried on a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationRef {
    pub id: StationId,
    pub name: String,
}

/// Line details carried on a segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRef {
    pub id: LineId,
    pub name: String,
    pub operator: String,
    /// Weekday trips per hour.
    pub frequency_weekday: u32,
}

/// One traversal of a single connection on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteSegment {
    pub departure: StationRef,
    pub arrival: StationRef,
    pub line: LineRef,
    /// Minutes.
    pub travel_time: u32,
    /// Kilometres.
    pub distance: f64,
    pub fare: u32,
}

impl RouteSegment {
    /// Build a segment from a store connection.
    pub fn from_connection(conn: &Connection) -> Self {
        Self {
            departure: StationRef {
                id: conn.departure.id.clone(),
                name: conn.departure.name.clone(),
            },
            arrival: StationRef {
                id: conn.arrival.id.clone(),
                name: conn.arrival.name.clone(),
            },
            line: LineRef {
                id: conn.line.id.clone(),
                name: conn.line.name.clone(),
                operator: conn.line.operator.clone(),
                frequency_weekday: conn.line.frequency_weekday,
            },
            travel_time: conn.travel_time,
            distance: conn.distance,
            fare: conn.fare,
        }
    }
}

/// A fully quantified route.
///
/// # Invariants
///
/// - `segments` is non-empty
/// - `transfers == segments.len() - 1`
/// - `commute_score` is in `0..=100` once scored (0 before scoring)
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteRoute {
    pub segments: Vec<RouteSegment>,
    /// Minutes, including walking, waiting and transfer time.
    pub total_time: u32,
    pub total_fare: u32,
    /// Kilometres, rounded to one decimal place.
    pub total_distance: f64,
    pub transfers: u32,
    /// Minutes walked after the last segment.
    pub walking_time: u32,
    /// Minutes spent on board.
    pub train_time: u32,
    /// Expected minutes spent waiting for trains (transfer time excluded).
    pub waiting_time: u32,
    pub commute_score: u32,
}

impl CompleteRoute {
    /// Station the route starts from.
    pub fn origin(&self) -> Option<&StationRef> {
        self.segments.first().map(|s| &s.departure)
    }

    /// Station the route ends at.
    pub fn destination(&self) -> Option<&StationRef> {
        self.segments.last().map(|s| &s.arrival)
    }

    /// Returns true if the route has no transfers.
    pub fn is_direct(&self) -> bool {
        self.transfers == 0
    }

    /// Mean weekday frequency over the lines of the route.
    pub fn average_frequency(&self) -> f64 {
        if self.segments.is_empty() {
            return 0.0;
        }
        let sum: f64 = self
            .segments
            .iter()
            .map(|s| f64::from(s.line.frequency_weekday))
            .sum();
        sum / self.segments.len() as f64
    }
}
