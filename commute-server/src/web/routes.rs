//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::compare::{compare_schools, simulate_commute};
use crate::domain::{
    DEFAULT_TIME_SLOT, DayType, RouteOptions, School, SchoolId, Station, StationId, TimeOfDay,
    TimeSlot,
};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/schools", get(list_schools))
        .route("/api/routes", get(find_routes))
        .route("/api/compare", post(compare))
        .route("/api/simulate", post(simulate))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// All stations, in network order.
async fn list_stations(State(state): State<AppState>) -> Json<StationsResponse> {
    let stations = state
        .network
        .stations()
        .iter()
        .map(|s| StationResult::from_station(s))
        .collect();

    Json(StationsResponse { stations })
}

/// All schools with their nearest stations.
async fn list_schools(State(state): State<AppState>) -> Json<SchoolsResponse> {
    let schools = state
        .network
        .schools()
        .iter()
        .map(SchoolResult::from_school)
        .collect();

    Json(SchoolsResponse { schools })
}

/// Best routes between two stations.
async fn find_routes(
    State(state): State<AppState>,
    Query(query): Query<RoutesQuery>,
) -> Result<Json<RoutesResponse>, AppError> {
    let from = lookup_station(&state, &query.from, "origin")?;
    let to = lookup_station(&state, &query.to, "destination")?;

    let mut options = RouteOptions::default();
    if let Some(prioritize) = query.prioritize {
        options.prioritize = prioritize;
    }
    if let Some(time_of_day) = query.time_of_day {
        options.time_of_day = time_of_day;
    }

    let routes = state
        .finder
        .find_routes(
            &from.id,
            &to.id,
            query.walking_time.unwrap_or(0),
            Some(&options),
        )
        .await;

    Ok(Json(RoutesResponse {
        from: StationResult::from_station(&from),
        to: StationResult::from_station(&to),
        routes: routes.iter().map(RouteResult::from_route).collect(),
    }))
}

/// Compare the commute from one station to several schools.
async fn compare(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CompareResponse>, AppError> {
    let req: CompareRequest = parse_body(&body)?;

    if req.from_station_id.is_empty() || req.school_ids.is_empty() {
        return Err(AppError::BadRequest {
            message: "from_station_id and school_ids are required".to_string(),
        });
    }

    let from = lookup_station(&state, &req.from_station_id, "origin")?;

    let mut schools: Vec<School> = Vec::with_capacity(req.school_ids.len());
    for raw in &req.school_ids {
        let id = parse_school_id(raw)?;
        match state.network.school(&id) {
            Some(school) => schools.push(school.clone()),
            None => debug!(school = %id, "Skipping unknown school"),
        }
    }
    if schools.is_empty() {
        return Err(AppError::NotFound {
            message: "none of the requested schools were found".to_string(),
        });
    }

    let result = compare_schools(&*state.finder, from, &schools).await;
    Ok(Json(CompareResponse::from_result(&result)))
}

/// Simulate the commute from one station to a school.
///
/// Without explicit options the search uses morning waiting times whatever
/// the slot; the slot and day type are only echoed back.
async fn simulate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SimulateResponse>, AppError> {
    let req: SimulateRequest = parse_body(&body)?;

    let school_id = parse_school_id(&req.school_id)?;
    let school = state
        .network
        .school(&school_id)
        .ok_or_else(|| AppError::NotFound {
            message: format!("school {school_id} not found"),
        })?;
    let from = lookup_station(&state, &req.from_station_id, "origin")?;

    let time_slot = req
        .time_slot
        .as_deref()
        .unwrap_or(DEFAULT_TIME_SLOT)
        .parse::<TimeSlot>()
        .map_err(|e| AppError::BadRequest {
            message: e.to_string(),
        })?;
    let day_type = req.day_type.unwrap_or_default();

    let options = req
        .options
        .unwrap_or_else(|| default_simulation_options(&time_slot, day_type));

    let simulation = simulate_commute(&*state.finder, school, &from.id, &options).await;

    Ok(Json(SimulateResponse {
        school: SchoolInfo::from_school(school),
        from_station: StationResult::from_station(&from),
        time_slot: time_slot.to_string(),
        day_type,
        routes: simulation
            .routes
            .iter()
            .map(StationRouteResult::from_station_route)
            .collect(),
    }))
}

fn default_simulation_options(time_slot: &TimeSlot, day_type: DayType) -> RouteOptions {
    RouteOptions {
        time_of_day: TimeOfDay::Morning,
        time_slot: Some(time_slot.to_string()),
        day_type: Some(day_type),
        ..RouteOptions::default()
    }
}

/// Parse a JSON body, logging it on failure.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!(error = %e, body = %String::from_utf8_lossy(body), "Rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Resolve a station id from a request; `role` names it in errors.
fn lookup_station(state: &AppState, raw: &str, role: &str) -> Result<Arc<Station>, AppError> {
    let id = StationId::parse(raw).map_err(|e| AppError::BadRequest {
        message: format!("Invalid {role} station: {e}"),
    })?;
    state.network.station(&id).ok_or_else(|| AppError::NotFound {
        message: format!("{role} station {id} not found"),
    })
}

fn parse_school_id(raw: &str) -> Result<SchoolId, AppError> {
    SchoolId::parse(raw).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        debug!(%status, %message, "Request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
