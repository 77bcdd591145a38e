//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::compare::{
    ComparisonResult, ComparisonSummary, SchoolComparison, StationRoute, Step, StepKind,
    TargetStation, nearest_station_estimate,
};
use crate::domain::{
    CompleteRoute, DayType, LineRef, Priority, RouteOptions, RouteSegment, School, SchoolStation,
    Station, StationRef, TimeOfDay,
};

/// Query for a route search.
#[derive(Debug, Deserialize)]
pub struct RoutesQuery {
    /// Origin station id
    pub from: String,

    /// Destination station id
    pub to: String,

    /// Minutes walked after the last train (defaults to 0)
    pub walking_time: Option<u32>,

    pub prioritize: Option<Priority>,

    pub time_of_day: Option<TimeOfDay>,
}

/// Request to compare schools.
#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub from_station_id: String,
    pub school_ids: Vec<String>,
}

/// Request to simulate a commute.
#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    pub school_id: String,
    pub from_station_id: String,

    /// "HH:MM-HH:MM" (defaults to the morning peak hour)
    pub time_slot: Option<String>,

    pub day_type: Option<DayType>,

    /// Full search options; when absent they are derived from the time slot
    pub options: Option<RouteOptions>,
}

/// A station.
#[derive(Debug, Serialize)]
pub struct StationResult {
    pub id: String,
    pub name: String,
    pub prefecture: String,
}

/// Response listing stations.
#[derive(Debug, Serialize)]
pub struct StationsResponse {
    pub stations: Vec<StationResult>,
}

/// A school's nearest station.
#[derive(Debug, Serialize)]
pub struct SchoolStationResult {
    pub station_id: String,
    pub station_name: String,

    /// Minutes from the station to the school
    pub walking_time: u32,

    /// Kilometres from the station to the school
    pub distance: f64,

    pub is_primary: bool,

    /// Quick commute estimate for this station
    pub estimated_score: u32,
}

/// A school with its nearest stations.
#[derive(Debug, Serialize)]
pub struct SchoolResult {
    pub id: String,
    pub name: String,
    pub prefecture: String,
    pub address: String,

    /// Primary stations first
    pub stations: Vec<SchoolStationResult>,
}

/// Response listing schools.
#[derive(Debug, Serialize)]
pub struct SchoolsResponse {
    pub schools: Vec<SchoolResult>,
}

/// Station reference on a segment.
#[derive(Debug, Serialize)]
pub struct StationInfo {
    pub id: String,
    pub name: String,
}

/// Line reference on a segment.
#[derive(Debug, Serialize)]
pub struct LineInfo {
    pub id: String,
    pub name: String,
    pub operator: String,

    /// Weekday trips per hour
    pub frequency: u32,
}

/// One segment of a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub departure_station: StationInfo,
    pub arrival_station: StationInfo,
    pub line: LineInfo,
    pub travel_time: u32,
    pub distance: f64,
    pub fare: u32,
}

/// A scored route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub segments: Vec<SegmentResult>,
    pub total_time: u32,
    pub total_fare: u32,
    pub total_distance: f64,
    pub transfers: u32,
    pub walking_time: u32,
    pub train_time: u32,
    pub waiting_time: u32,
    pub commute_score: u32,
}

/// Response for a route search.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    pub from: StationResult,
    pub to: StationResult,

    /// Best first, at most three
    pub routes: Vec<RouteResult>,
}

/// One itinerary step.
#[derive(Debug, Serialize)]
pub struct StepResult {
    /// "train", "transfer" or "walk"
    #[serde(rename = "type")]
    pub kind: &'static str,

    pub description: String,

    /// Minutes
    pub time: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fare: Option<u32>,
}

/// The school station a route ends at.
#[derive(Debug, Serialize)]
pub struct TargetStationResult {
    pub id: String,
    pub name: String,
    pub is_primary: bool,
}

/// A route to a school, summarised for display.
#[derive(Debug, Serialize)]
pub struct StationRouteResult {
    pub total_time: u32,
    pub train_time: u32,
    pub walking_time: u32,
    pub waiting_time: u32,
    pub transfers: u32,
    pub fare: u32,
    pub commute_score: u32,
    pub target_station: TargetStationResult,
    pub steps: Vec<StepResult>,
}

/// School details without stations.
#[derive(Debug, Serialize)]
pub struct SchoolInfo {
    pub id: String,
    pub name: String,
    pub prefecture: String,
    pub address: String,
}

/// One school in a comparison.
#[derive(Debug, Serialize)]
pub struct SchoolComparisonResult {
    pub school: SchoolInfo,
    pub best_route: Option<StationRouteResult>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Comparison aggregates.
#[derive(Debug, Serialize)]
pub struct SummaryResult {
    pub total_schools: usize,
    pub average_time: f64,
    pub average_score: f64,
}

/// Response for a school comparison.
#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub from_station: StationResult,
    pub schools: Vec<SchoolComparisonResult>,
    pub summary: SummaryResult,
}

/// Response for a commute simulation.
#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub school: SchoolInfo,
    pub from_station: StationResult,
    pub time_slot: String,
    pub day_type: DayType,
    pub routes: Vec<StationRouteResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StationResult {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
            prefecture: station.prefecture.clone(),
        }
    }
}

impl SchoolStationResult {
    fn from_school_station(school_station: &SchoolStation) -> Self {
        Self {
            station_id: school_station.station.id.to_string(),
            station_name: school_station.station.name.clone(),
            walking_time: school_station.walking_time,
            distance: school_station.distance,
            is_primary: school_station.is_primary,
            estimated_score: nearest_station_estimate(school_station),
        }
    }
}

impl SchoolResult {
    pub fn from_school(school: &School) -> Self {
        Self {
            id: school.id.to_string(),
            name: school.name.clone(),
            prefecture: school.prefecture.clone(),
            address: school.address.clone(),
            stations: school
                .stations_primary_first()
                .into_iter()
                .map(SchoolStationResult::from_school_station)
                .collect(),
        }
    }
}

impl SchoolInfo {
    pub fn from_school(school: &School) -> Self {
        Self {
            id: school.id.to_string(),
            name: school.name.clone(),
            prefecture: school.prefecture.clone(),
            address: school.address.clone(),
        }
    }
}

impl StationInfo {
    fn from_ref(station: &StationRef) -> Self {
        Self {
            id: station.id.to_string(),
            name: station.name.clone(),
        }
    }
}

impl LineInfo {
    fn from_ref(line: &LineRef) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.clone(),
            operator: line.operator.clone(),
            frequency: line.frequency_weekday,
        }
    }
}

impl SegmentResult {
    fn from_segment(segment: &RouteSegment) -> Self {
        Self {
            departure_station: StationInfo::from_ref(&segment.departure),
            arrival_station: StationInfo::from_ref(&segment.arrival),
            line: LineInfo::from_ref(&segment.line),
            travel_time: segment.travel_time,
            distance: segment.distance,
            fare: segment.fare,
        }
    }
}

impl RouteResult {
    pub fn from_route(route: &CompleteRoute) -> Self {
        Self {
            segments: route.segments.iter().map(SegmentResult::from_segment).collect(),
            total_time: route.total_time,
            total_fare: route.total_fare,
            total_distance: route.total_distance,
            transfers: route.transfers,
            walking_time: route.walking_time,
            train_time: route.train_time,
            waiting_time: route.waiting_time,
            commute_score: route.commute_score,
        }
    }
}

impl StepResult {
    fn from_step(step: &Step) -> Self {
        let kind = match step.kind {
            StepKind::Train => "train",
            StepKind::Transfer => "transfer",
            StepKind::Walk => "walk",
        };
        Self {
            kind,
            description: step.description.clone(),
            time: step.time,
            line: step.line.clone(),
            operator: step.operator.clone(),
            fare: step.fare,
        }
    }
}

impl TargetStationResult {
    fn from_target(target: &TargetStation) -> Self {
        Self {
            id: target.id.to_string(),
            name: target.name.clone(),
            is_primary: target.is_primary,
        }
    }
}

impl StationRouteResult {
    pub fn from_station_route(station_route: &StationRoute) -> Self {
        let route = &station_route.route;
        Self {
            total_time: route.total_time,
            train_time: route.train_time,
            walking_time: route.walking_time,
            waiting_time: route.waiting_time,
            transfers: route.transfers,
            fare: route.total_fare,
            commute_score: route.commute_score,
            target_station: TargetStationResult::from_target(&station_route.target),
            steps: station_route.steps.iter().map(StepResult::from_step).collect(),
        }
    }
}

impl SchoolComparisonResult {
    fn from_comparison(comparison: &SchoolComparison) -> Self {
        let (best_route, error) = match &comparison.best_route {
            Ok(route) => (Some(StationRouteResult::from_station_route(route)), None),
            Err(e) => (None, Some(e.to_string())),
        };
        Self {
            school: SchoolInfo::from_school(&comparison.school),
            best_route,
            error,
        }
    }
}

impl SummaryResult {
    fn from_summary(summary: &ComparisonSummary) -> Self {
        Self {
            total_schools: summary.total_schools,
            average_time: summary.average_time,
            average_score: summary.average_score,
        }
    }
}

impl CompareResponse {
    pub fn from_result(result: &ComparisonResult) -> Self {
        Self {
            from_station: StationResult::from_station(&result.from_station),
            schools: result
                .schools
                .iter()
                .map(SchoolComparisonResult::from_comparison)
                .collect(),
            summary: SummaryResult::from_summary(&result.summary),
        }
    }
}
