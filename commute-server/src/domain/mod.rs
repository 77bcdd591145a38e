//! Domain types for the commute planner.
//!
//! This module contains the network reference data (stations, lines,
//! connections, schools) and the route types produced by the planner.
//! Identifiers are validated at construction, so code that receives them
//! can trust their validity.

mod connection;
mod ids;
mod options;
mod route;
mod school;
mod station;
mod time;

pub use connection::Connection;
pub use ids::{ConnectionId, InvalidId, LineId, SchoolId, StationId};
pub use options::{DEFAULT_TIME_SLOT, DayType, Priority, RouteOptions, TimeOfDay};
pub use route::{CompleteRoute, LineRef, RouteSegment, StationRef};
pub use school::{School, SchoolStation};
pub use station::{Line, Station};
pub use time::{InvalidTimeSlot, TimeSlot};
