//! Station API handlers

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{extract::State, Json};

use super::dto::{CreateStationRequest, StationResponse};
use crate::application::StationService;
use crate::interfaces::http::common::{ApiError, MessageResponse, ValidatedJson};

/// Station state
#[derive(Clone)]
pub struct StationHandlerState {
    pub stations: Arc<StationService>,
}

#[utoipa::path(
    get,
    path = "/api/stations",
    tag = "Stations",
    responses(
        (status = 200, description = "All charging stations", body = [StationResponse])
    )
)]
pub async fn list_stations(
    State(state): State<StationHandlerState>,
) -> Result<Json<Vec<StationResponse>>, ApiError> {
    let stations = state.stations.list_stations().await?;
    Ok(Json(stations.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/api/stations",
    tag = "Stations",
    security(("bearer_auth" = [])),
    request_body = CreateStationRequest,
    responses(
        (status = 201, description = "Station created", body = MessageResponse),
        (status = 400, description = "Invalid input", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    )
)]
pub async fn create_station(
    State(state): State<StationHandlerState>,
    ValidatedJson(request): ValidatedJson<CreateStationRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state
        .stations
        .create_station(&request.name, &request.location, request.capacity)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Charging station created!")),
    ))
}
