//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};

use crate::gateway::{Gateway, RzdApi, StopsQuery};
use crate::rzd::{DEFAULT_PROVIDER, DEFAULT_SERVICE};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/stations", get(stations))
        .route("/routes", get(routes))
        .route("/station_list", get(station_list))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search stations by (partial) name.
async fn stations(
    State(state): State<AppState>,
    Query(query): Query<StationsQuery>,
) -> Json<StationsResponse> {
    let matches = state.gateway.resolve_stations(&query.part).await;

    Json(StationsResponse {
        stations: matches.iter().map(StationEntry::from).collect(),
    })
}

/// List trains between two station codes.
async fn routes(
    State(state): State<AppState>,
    Query(query): Query<RoutesQuery>,
) -> Json<RoutesResponse> {
    let board = state
        .gateway
        .list_trains(&query.code_from, &query.code_to)
        .await;

    if board.trains.is_empty() {
        return Json(RoutesResponse::NotFound {
            status: "Not Found",
            trains: vec![],
        });
    }

    Json(RoutesResponse::Found {
        info: RouteInfoDto {
            origin: board.info.origin.clone(),
            destination: board.info.destination.clone(),
        },
        trains: board.trains.iter().map(TrainDto::from).collect(),
    })
}

/// Stop schedule for one train, queried by station names.
///
/// Names resolve through the station resolver (first match wins), then
/// the correlator supplies the provider/service pair the stops endpoint
/// demands. A name resolving to zero stations degrades to an empty stop
/// list rather than an error.
async fn station_list(
    State(state): State<AppState>,
    Query(query): Query<StationListQuery>,
) -> Json<StationListResponse> {
    Json(station_list_response(&state.gateway, query).await)
}

async fn station_list_response<C: RzdApi>(
    gateway: &Gateway<C>,
    query: StationListQuery,
) -> StationListResponse {
    let (from, to) = tokio::join!(
        gateway.resolve_stations(&query.str_from),
        gateway.resolve_stations(&query.str_to),
    );

    let (Some(from), Some(to)) = (from.first(), to.first()) else {
        return StationListResponse {
            train: query.train_num,
            stops: vec![],
        };
    };

    let origin_code = from.code.to_string();
    let dest_code = to.code.to_string();

    let (provider, service) = gateway
        .find_provider_service(&query.train_num, &origin_code, &dest_code)
        .await
        .unwrap_or_else(|| (DEFAULT_PROVIDER.to_string(), DEFAULT_SERVICE.to_string()));

    let stops = gateway
        .resolve_stops(&StopsQuery {
            train_number: query.train_num,
            origin_code,
            dest_code,
            provider,
            service,
        })
        .await;

    StationListResponse {
        train: stops.train.clone(),
        stops: stops.stops.iter().map(StopDto::from).collect(),
    }
}
