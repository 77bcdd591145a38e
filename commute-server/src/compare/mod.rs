//! School comparison and commute simulation.
//!
//! Built on [`RouteFinder::find_routes`]: every nearest station of a school
//! is searched concurrently, and the per-station results are combined
//! into a best route per school or a short list of alternatives.

mod comparison;
mod error;
mod itinerary;
mod simulation;

#[cfg(test)]
mod test_network;

use futures::future::join_all;

use crate::domain::{CompleteRoute, RouteOptions, SchoolStation, StationId};
use crate::planner::{RouteFinder, quick_commute_score};
use crate::store::ConnectionStore;

pub use comparison::{ComparisonResult, ComparisonSummary, SchoolComparison, compare_schools};
pub use error::ComparisonError;
pub use itinerary::{Step, StepKind, TRANSFER_STEP_MINS, itinerary};
pub use simulation::{MAX_SIMULATED_ROUTES, Simulation, select_distinct_targets, simulate_commute};

/// Train minutes assumed by [`nearest_station_estimate`].
pub const NOMINAL_TRAIN_MINS: u32 = 30;

/// Trips per hour assumed by [`nearest_station_estimate`].
pub const NOMINAL_FREQUENCY: u32 = 8;

/// The school station a route ends at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetStation {
    pub id: StationId,
    pub name: String,
    pub is_primary: bool,
}

impl TargetStation {
    fn from_school_station(school_station: &SchoolStation) -> Self {
        Self {
            id: school_station.station.id.clone(),
            name: school_station.station.name.clone(),
            is_primary: school_station.is_primary,
        }
    }
}

/// A route to one of a school's nearest stations, with its itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRoute {
    pub target: TargetStation,
    pub route: CompleteRoute,
    pub steps: Vec<Step>,
}

impl StationRoute {
    fn new(target: TargetStation, route: CompleteRoute, destination_name: &str) -> Self {
        let steps = itinerary(&route, destination_name);
        Self {
            target,
            route,
            steps,
        }
    }
}

/// Quick score for a nearest station without running a search.
///
/// Assumes a one-transfer train leg of [`NOMINAL_TRAIN_MINS`] at
/// [`NOMINAL_FREQUENCY`] before the walk.
pub fn nearest_station_estimate(school_station: &SchoolStation) -> u32 {
    quick_commute_score(
        NOMINAL_TRAIN_MINS + school_station.walking_time,
        NOMINAL_FREQUENCY,
        1,
        school_station.walking_time,
    )
}

/// Search every station in `stations` concurrently.
///
/// Results are in the same order as `stations`.
async fn routes_per_station<S: ConnectionStore + Sync>(
    finder: &RouteFinder<S>,
    from: &StationId,
    stations: &[&SchoolStation],
    options: Option<&RouteOptions>,
) -> Vec<Vec<CompleteRoute>> {
    let searches = stations.iter().map(|school_station| {
        finder.find_routes(
            from,
            &school_station.station.id,
            school_station.walking_time,
            options,
        )
    });
    join_all(searches).await
}
