//! Comparing the commute from one station to several schools.

use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::domain::{School, SchoolStation, Station, StationId};
use crate::planner::RouteFinder;
use crate::store::ConnectionStore;

use super::error::ComparisonError;
use super::{StationRoute, TargetStation, routes_per_station};

/// The outcome for one school.
#[derive(Debug, Clone)]
pub struct SchoolComparison {
    pub school: School,
    pub best_route: Result<StationRoute, ComparisonError>,
}

/// Aggregates over the schools that have a route.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonSummary {
    /// Number of schools compared, with or without a route.
    pub total_schools: usize,

    /// Mean total time in minutes; 0 when no school has a route.
    pub average_time: f64,

    /// Mean commute score; 0 when no school has a route.
    pub average_score: f64,
}

impl ComparisonSummary {
    fn from_comparisons(comparisons: &[SchoolComparison]) -> Self {
        let routed: Vec<&StationRoute> = comparisons
            .iter()
            .filter_map(|c| c.best_route.as_ref().ok())
            .collect();

        let (average_time, average_score) = if routed.is_empty() {
            (0.0, 0.0)
        } else {
            let n = routed.len() as f64;
            let time: u32 = routed.iter().map(|r| r.route.total_time).sum();
            let score: u32 = routed.iter().map(|r| r.route.commute_score).sum();
            (f64::from(time) / n, f64::from(score) / n)
        };

        Self {
            total_schools: comparisons.len(),
            average_time,
            average_score,
        }
    }
}

/// Comparison of several schools from one origin.
#[derive(Debug, Clone)]
pub struct ComparisonResult {
    pub from_station: Arc<Station>,
    /// In the order the schools were given.
    pub schools: Vec<SchoolComparison>,
    pub summary: ComparisonSummary,
}

/// Find the best route from `from_station` to each school.
///
/// A school's best route is the top route of whichever nearest station
/// scores strictly highest; on a tie the earlier station wins. Schools
/// and their stations are all searched concurrently.
pub async fn compare_schools<S: ConnectionStore + Sync>(
    finder: &RouteFinder<S>,
    from_station: Arc<Station>,
    schools: &[School],
) -> ComparisonResult {
    let comparisons = join_all(
        schools
            .iter()
            .map(|school| compare_school(finder, &from_station.id, school)),
    )
    .await;

    let summary = ComparisonSummary::from_comparisons(&comparisons);
    debug!(
        from = %from_station.id,
        schools = summary.total_schools,
        average_score = summary.average_score,
        "Compared schools"
    );

    ComparisonResult {
        from_station,
        schools: comparisons,
        summary,
    }
}

async fn compare_school<S: ConnectionStore + Sync>(
    finder: &RouteFinder<S>,
    from: &StationId,
    school: &School,
) -> SchoolComparison {
    if school.stations.is_empty() {
        return SchoolComparison {
            school: school.clone(),
            best_route: Err(ComparisonError::NoNearestStations),
        };
    }

    let stations: Vec<&SchoolStation> = school.stations.iter().collect();
    let per_station = routes_per_station(finder, from, &stations, None).await;

    let mut best: Option<StationRoute> = None;
    for (school_station, routes) in stations.iter().zip(per_station) {
        let Some(top) = routes.into_iter().next() else {
            continue;
        };
        if best
            .as_ref()
            .is_none_or(|b| top.commute_score > b.route.commute_score)
        {
            best = Some(StationRoute::new(
                TargetStation::from_school_station(school_station),
                top,
                &school.name,
            ));
        }
    }

    SchoolComparison {
        school: school.clone(),
        best_route: best.ok_or(ComparisonError::NoRouteFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::StepKind;
    use crate::compare::test_network::{finder, school_id, sid};

    fn schools(ids: &[&str]) -> Vec<School> {
        let finder = finder();
        ids.iter()
            .map(|id| finder.store().school(&school_id(id)).unwrap().clone())
            .collect()
    }

    async fn compare(ids: &[&str]) -> ComparisonResult {
        let finder = finder();
        let home = finder.store().station(&sid("home")).unwrap();
        compare_schools(&finder, home, &schools(ids)).await
    }

    #[tokio::test]
    async fn best_station_wins() {
        let result = compare(&["eastwest"]).await;

        let best = result.schools[0].best_route.as_ref().unwrap();
        // west on the red line scores 93, east on the red line 92
        assert_eq!(best.target.id, sid("west"));
        assert!(!best.target.is_primary);
        assert_eq!(best.route.commute_score, 93);
        assert_eq!(best.route.total_time, 48);
        assert_eq!(best.route.segments[0].line.name, "Red Line");
    }

    #[tokio::test]
    async fn tie_keeps_first_station() {
        let result = compare(&["twins"]).await;

        let best = result.schools[0].best_route.as_ref().unwrap();
        assert_eq!(best.target.id, sid("west2"));
        assert_eq!(best.route.commute_score, 87);
    }

    #[tokio::test]
    async fn per_school_errors() {
        let result = compare(&["nowhere", "far"]).await;

        assert_eq!(
            result.schools[0].best_route.as_ref().unwrap_err(),
            &ComparisonError::NoNearestStations
        );
        assert_eq!(
            result.schools[1].best_route.as_ref().unwrap_err(),
            &ComparisonError::NoRouteFound
        );
        assert_eq!(result.summary.total_schools, 2);
        assert_eq!(result.summary.average_time, 0.0);
        assert_eq!(result.summary.average_score, 0.0);
    }

    #[tokio::test]
    async fn summary_averages_routed_schools_only() {
        let result = compare(&["eastwest", "north", "nowhere", "far", "twins"]).await;

        let names: Vec<&str> = result.schools.iter().map(|c| c.school.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "East West Academy",
                "North High",
                "Nowhere School",
                "Far College",
                "Twin Gates School"
            ]
        );

        // (48 + 10 + 51) / 3 and (93 + 100 + 87) / 3
        assert_eq!(result.summary.total_schools, 5);
        assert!((result.summary.average_time - 109.0 / 3.0).abs() < 1e-9);
        assert!((result.summary.average_score - 280.0 / 3.0).abs() < 1e-9);
        assert_eq!(result.from_station.name, "Home");
    }

    #[tokio::test]
    async fn best_route_has_itinerary() {
        let result = compare(&["north"]).await;

        let best = result.schools[0].best_route.as_ref().unwrap();
        let kinds: Vec<StepKind> = best.steps.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StepKind::Train, StepKind::Walk]);
        assert_eq!(best.steps[1].description, "Walk from North to North High");
    }
}
