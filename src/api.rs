use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::{IntoParams, OpenApi, ToSchema};

use crate::map::{Legend, LegendEntry, MapView, StationMarker, StationPopup};
use crate::models::{CharacteristicListResponse, StationListResponse, StationSummary};
use crate::services::StationService;

const MAP_PAGE: &str = include_str!("../static/map.html");

#[derive(Clone)]
pub struct AppState {
    pub station_service: StationService,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    /// Number of normalized sample records held in memory
    pub records: usize,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StationQuery {
    /// Characteristic name, e.g. "pH"
    pub characteristic: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MapQuery {
    /// Characteristic name; the first one alphabetically when omitted
    pub characteristic: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_characteristics, list_stations, get_station, get_map),
    components(schemas(
        HealthResponse,
        CharacteristicListResponse,
        StationListResponse,
        StationSummary,
        MapView,
        StationMarker,
        StationPopup,
        Legend,
        LegendEntry
    )),
    tags((name = "stations", description = "Water quality monitoring stations"))
)]
pub struct ApiDoc;

pub fn generate_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health))
        .route("/characteristics", get(list_characteristics))
        .route("/stations", get(list_stations))
        .route("/stations/{station_id}", get(get_station))
        .route("/map", get(get_map))
        .with_state(state);

    Router::new()
        .route("/", get(map_page))
        .nest("/api/v1", api_routes)
}

async fn map_page() -> Html<&'static str> {
    Html(MAP_PAGE)
}

#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = "stations",
    responses((status = 200, description = "Service is up", body = HealthResponse))
)]
#[instrument(skip(state))]
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    debug!("Health check requested");
    let response = HealthResponse {
        status: "healthy".to_string(),
        records: state.station_service.record_count(),
    };
    (StatusCode::OK, Json(response))
}

#[utoipa::path(
    get,
    path = "/api/v1/characteristics",
    tag = "stations",
    responses((status = 200, description = "Sorted characteristic names", body = CharacteristicListResponse))
)]
#[instrument(skip(state))]
async fn list_characteristics(State(state): State<AppState>) -> Json<CharacteristicListResponse> {
    let characteristics = state.station_service.characteristics().to_vec();
    info!("Listing {} characteristics", characteristics.len());
    Json(CharacteristicListResponse { characteristics })
}

#[utoipa::path(
    get,
    path = "/api/v1/stations",
    tag = "stations",
    params(StationQuery),
    responses(
        (status = 200, description = "Station summaries", body = StationListResponse),
        (status = 404, description = "Unknown characteristic")
    )
)]
#[instrument(skip(state), fields(characteristic = %query.characteristic))]
async fn list_stations(
    State(state): State<AppState>,
    Query(query): Query<StationQuery>,
) -> Result<Json<StationListResponse>, StatusCode> {
    let characteristic = query.characteristic;
    if !state.station_service.has_characteristic(&characteristic) {
        warn!("Unknown characteristic {}", characteristic);
        return Err(StatusCode::NOT_FOUND);
    }

    let stations = state.station_service.summarize(&characteristic);
    info!(
        "Summarized {} stations for characteristic {}",
        stations.len(),
        characteristic
    );

    Ok(Json(StationListResponse {
        characteristic,
        total_stations: stations.len(),
        stations,
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/stations/{station_id}",
    tag = "stations",
    params(
        ("station_id" = String, Path, description = "Monitoring location identifier"),
        StationQuery
    ),
    responses(
        (status = 200, description = "Station summary", body = StationSummary),
        (status = 404, description = "No samples for this station and characteristic")
    )
)]
#[instrument(skip(state), fields(station_id = %station_id, characteristic = %query.characteristic))]
async fn get_station(
    State(state): State<AppState>,
    Path(station_id): Path<String>,
    Query(query): Query<StationQuery>,
) -> Result<Json<StationSummary>, StatusCode> {
    debug!(
        "Fetching summary for station {} ({})",
        station_id, query.characteristic
    );

    let station = state
        .station_service
        .station(&query.characteristic, &station_id)
        .ok_or_else(|| {
            warn!(
                "No {} samples for station {}",
                query.characteristic, station_id
            );
            StatusCode::NOT_FOUND
        })?;

    info!(
        "Station {} has {} gaps between {} and {}",
        station_id, station.gap_count, station.first_sample, station.last_sample
    );
    Ok(Json(station))
}

#[utoipa::path(
    get,
    path = "/api/v1/map",
    tag = "stations",
    params(MapQuery),
    responses(
        (status = 200, description = "Markers and legend for the map page", body = MapView),
        (status = 404, description = "Unknown characteristic")
    )
)]
#[instrument(skip(state))]
async fn get_map(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> Result<Json<MapView>, StatusCode> {
    let view = state
        .station_service
        .map_view(query.characteristic.as_deref())
        .ok_or_else(|| {
            warn!("Unknown characteristic {:?}", query.characteristic);
            StatusCode::NOT_FOUND
        })?;

    info!(
        "Built map for {:?} with {} markers",
        view.characteristic,
        view.markers.len()
    );
    Ok(Json(view))
}
