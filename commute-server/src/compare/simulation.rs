//! Simulating the commute from one station to a single school.

use tracing::debug;

use crate::domain::{RouteOptions, School, StationId};
use crate::planner::RouteFinder;
use crate::store::ConnectionStore;

use super::{StationRoute, TargetStation, routes_per_station};

/// Routes returned by a simulation.
pub const MAX_SIMULATED_ROUTES: usize = 3;

/// Alternative routes to one school.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Best first, at most [`MAX_SIMULATED_ROUTES`].
    pub routes: Vec<StationRoute>,
}

/// Find the best few routes from `from` to any of a school's stations.
///
/// Routes to every nearest station are gathered (primary stations first),
/// sorted by score and filtered with [`select_distinct_targets`].
pub async fn simulate_commute<S: ConnectionStore + Sync>(
    finder: &RouteFinder<S>,
    school: &School,
    from: &StationId,
    options: &RouteOptions,
) -> Simulation {
    let stations = school.stations_primary_first();
    let per_station = routes_per_station(finder, from, &stations, Some(options)).await;

    let mut routes: Vec<StationRoute> = stations
        .iter()
        .zip(per_station)
        .flat_map(|(school_station, routes)| {
            let target = TargetStation::from_school_station(school_station);
            routes
                .into_iter()
                .map(move |route| StationRoute::new(target.clone(), route, &school.name))
        })
        .collect();

    routes.sort_by(|a, b| b.route.commute_score.cmp(&a.route.commute_score));
    let candidates = routes.len();
    let routes = select_distinct_targets(routes, MAX_SIMULATED_ROUTES);

    debug!(
        school = %school.id,
        %from,
        candidates,
        selected = routes.len(),
        "Simulated commute"
    );

    Simulation { routes }
}

/// Take up to `max` routes in order, skipping a route whose target
/// station was already taken unless that station is primary.
pub fn select_distinct_targets(routes: Vec<StationRoute>, max: usize) -> Vec<StationRoute> {
    let mut used: Vec<StationId> = Vec::new();
    let mut selected = Vec::with_capacity(max);

    for route in routes {
        if selected.len() >= max {
            break;
        }
        let seen = used.contains(&route.target.id);
        if !seen || route.target.is_primary {
            if !seen {
                used.push(route.target.id.clone());
            }
            selected.push(route);
        }
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::test_network::{finder, school_id, sid};
    use crate::domain::{CompleteRoute, Priority};

    fn line_and_target(route: &StationRoute) -> (&str, &str) {
        (
            route.route.segments[0].line.id.as_str(),
            route.target.id.as_str(),
        )
    }

    #[tokio::test]
    async fn top_routes_prefer_distinct_stations() {
        let finder = finder();
        let school = finder.store().school(&school_id("eastwest")).unwrap();

        let simulation =
            simulate_commute(&finder, school, &sid("home"), &RouteOptions::default()).await;

        let picked: Vec<(&str, &str)> = simulation.routes.iter().map(line_and_target).collect();
        // west/blue (87) is skipped: west is taken and not primary.
        // east/blue (86) is kept: east is primary.
        assert_eq!(
            picked,
            vec![("red", "west"), ("red", "east"), ("blue", "east")]
        );
        let scores: Vec<u32> = simulation.routes.iter().map(|r| r.route.commute_score).collect();
        assert_eq!(scores, vec![93, 92, 86]);
    }

    #[tokio::test]
    async fn options_are_applied() {
        let finder = finder();
        let school = finder.store().school(&school_id("north")).unwrap();
        let options = RouteOptions::default().with_priority(Priority::Cost);

        let simulation = simulate_commute(&finder, school, &sid("home"), &options).await;

        assert_eq!(simulation.routes.len(), 1);
        // Cheap fare earns a bonus on top of an already capped score
        assert_eq!(simulation.routes[0].route.commute_score, 100);
        assert!(simulation.routes[0].target.is_primary);
    }

    #[tokio::test]
    async fn unreachable_school_has_no_routes() {
        let finder = finder();
        for id in ["far", "nowhere"] {
            let school = finder.store().school(&school_id(id)).unwrap();
            let simulation =
                simulate_commute(&finder, school, &sid("home"), &RouteOptions::default()).await;
            assert!(simulation.routes.is_empty());
        }
    }

    fn station_route(target: &str, is_primary: bool, score: u32) -> StationRoute {
        StationRoute {
            target: TargetStation {
                id: sid(target),
                name: target.to_string(),
                is_primary,
            },
            route: CompleteRoute {
                segments: Vec::new(),
                total_time: 30,
                total_fare: 200,
                total_distance: 10.0,
                transfers: 0,
                walking_time: 5,
                train_time: 25,
                waiting_time: 0,
                commute_score: score,
            },
            steps: Vec::new(),
        }
    }

    #[test]
    fn selection_skips_repeated_secondary_stations() {
        let routes = vec![
            station_route("a", false, 90),
            station_route("a", false, 85),
            station_route("b", false, 80),
            station_route("c", false, 70),
        ];

        let selected = select_distinct_targets(routes, 3);
        let targets: Vec<&str> = selected.iter().map(|r| r.target.id.as_str()).collect();
        assert_eq!(targets, vec!["a", "b", "c"]);
    }

    #[test]
    fn selection_allows_repeated_primary_station() {
        let routes = vec![
            station_route("p", true, 90),
            station_route("p", true, 85),
            station_route("p", true, 80),
            station_route("q", false, 70),
        ];

        let selected = select_distinct_targets(routes, 3);
        let targets: Vec<&str> = selected.iter().map(|r| r.target.id.as_str()).collect();
        assert_eq!(targets, vec!["p", "p", "p"]);
    }

    #[test]
    fn selection_may_return_fewer_than_max() {
        let routes = vec![station_route("a", false, 90), station_route("a", false, 80)];
        assert_eq!(select_distinct_targets(routes, 3).len(), 1);
    }
}
