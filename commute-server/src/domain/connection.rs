//! Connection edges of the transit graph.
//!
//! A `Connection` is a directed edge from one station to another on a
//! single line. Stations and lines are shared behind `Arc` so connections
//! are cheap to clone when the store hands out query results.

use std::sync::Arc;

use super::{ConnectionId, Line, Station, StationId};

/// A directed connection between two stations on one line.
///
/// A `travel_time` of zero marks a same-station join between two lines,
/// allowing a change of line without physical movement.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub id: ConnectionId,
    pub departure: Arc<Station>,
    pub arrival: Arc<Station>,
    pub line: Arc<Line>,

    /// Travel time in minutes.
    pub travel_time: u32,

    /// Distance in kilometres.
    pub distance: f64,

    /// Fare in currency units.
    pub fare: u32,
}

impl Connection {
    /// Returns the departure station id.
    pub fn departure_id(&self) -> &StationId {
        &self.departure.id
    }

    /// Returns the arrival station id.
    pub fn arrival_id(&self) -> &StationId {
        &self.arrival.id
    }

    /// True for zero-time line joins within one station.
    pub fn is_virtual(&self) -> bool {
        self.travel_time == 0
    }
}
