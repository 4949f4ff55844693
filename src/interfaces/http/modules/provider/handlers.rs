//! Provider API handlers
//!
//! Station onboarding and slot administration for charging providers.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use super::dto::{
    AddStationRequest, ManageSlotsRequest, ManageSlotsResponse, SendNotificationRequest,
    SlotAvailabilityParams, SlotAvailabilityResponse, SlotDetails,
};
use crate::application::{NotificationService, StationService};
use crate::interfaces::http::common::{ApiError, MessageResponse, ValidatedJson};

/// Provider state
#[derive(Clone)]
pub struct ProviderHandlerState {
    pub stations: Arc<StationService>,
    pub notifications: Arc<NotificationService>,
}

#[utoipa::path(
    post,
    path = "/api/provider/add-station",
    tag = "Provider",
    request_body = AddStationRequest,
    responses(
        (status = 201, description = "Station added", body = MessageResponse),
        (status = 400, description = "Missing fields", body = MessageResponse)
    )
)]
pub async fn add_station(
    State(state): State<ProviderHandlerState>,
    ValidatedJson(request): ValidatedJson<AddStationRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state
        .stations
        .add_station(&request.station_name, &request.location, &request.station_type)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Charging Station Added Successfully")),
    ))
}

#[utoipa::path(
    post,
    path = "/api/provider/manage-slots",
    tag = "Provider",
    request_body = ManageSlotsRequest,
    responses(
        (status = 200, description = "Slot added, updated, or deleted", body = ManageSlotsResponse),
        (status = 400, description = "Invalid action or missing slot details", body = MessageResponse),
        (status = 404, description = "Slot not found", body = MessageResponse)
    )
)]
pub async fn manage_slots(
    State(state): State<ProviderHandlerState>,
    Json(request): Json<ManageSlotsRequest>,
) -> Result<Json<ManageSlotsResponse>, ApiError> {
    let details = request.slot_details.unwrap_or_default();

    match request.action.as_str() {
        "Add" => {
            let (station_id, start, end) = require_window(&details)?;
            let slot = state.stations.add_slot(station_id, start, end).await?;
            Ok(Json(ManageSlotsResponse {
                message: "Slot added successfully".to_string(),
                slot_id: Some(slot.id),
            }))
        }
        "Edit" => {
            let slot_id = details
                .slot_id
                .ok_or_else(invalid_details)?;
            let (start, end) = match (details.start_time, details.end_time) {
                (Some(s), Some(e)) => (s.and_utc(), e.and_utc()),
                _ => return Err(invalid_details()),
            };
            state.stations.edit_slot(slot_id, start, end).await?;
            Ok(Json(ManageSlotsResponse {
                message: "Slot updated successfully".to_string(),
                slot_id: Some(slot_id),
            }))
        }
        "Delete" => {
            let slot_id = details
                .slot_id
                .ok_or_else(invalid_details)?;
            state.stations.delete_slot(slot_id).await?;
            Ok(Json(ManageSlotsResponse {
                message: "Slot deleted successfully".to_string(),
                slot_id: None,
            }))
        }
        _ => Err(invalid_details()),
    }
}

fn invalid_details() -> ApiError {
    ApiError::bad_request("Invalid action or missing slot details")
}

fn require_window(
    details: &SlotDetails,
) -> Result<(i32, chrono::DateTime<chrono::Utc>, chrono::DateTime<chrono::Utc>), ApiError> {
    match (details.station_id, details.start_time, details.end_time) {
        (Some(id), Some(s), Some(e)) => Ok((id, s.and_utc(), e.and_utc())),
        _ => Err(invalid_details()),
    }
}

#[utoipa::path(
    get,
    path = "/api/provider/slot-availability",
    tag = "Provider",
    params(("station_id" = Option<i32>, Query, description = "Station to inspect")),
    responses(
        (status = 200, description = "Slot statuses for the station", body = SlotAvailabilityResponse),
        (status = 400, description = "Missing station_id", body = MessageResponse)
    )
)]
pub async fn slot_availability(
    State(state): State<ProviderHandlerState>,
    Query(params): Query<SlotAvailabilityParams>,
) -> Result<Json<SlotAvailabilityResponse>, ApiError> {
    let station_id = params
        .station_id
        .ok_or_else(|| ApiError::bad_request("Station ID is required"))?;

    let slots = state.stations.slot_availability(station_id).await?;

    Ok(Json(SlotAvailabilityResponse {
        slots: slots.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/provider/send-notification",
    tag = "Provider",
    request_body = SendNotificationRequest,
    responses(
        (status = 200, description = "Notification dispatched", body = MessageResponse),
        (status = 400, description = "Missing booking id or user info", body = MessageResponse)
    )
)]
pub async fn send_notification(
    State(state): State<ProviderHandlerState>,
    Json(request): Json<SendNotificationRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let (booking_id, user_info) = match (request.booking_id, request.user_info) {
        (Some(id), Some(info)) if !info.is_empty() => (id, info),
        _ => return Err(ApiError::bad_request("Booking ID and User Info are required")),
    };

    let message = format!("Your slot booking with ID {} is confirmed!", booking_id);
    state.notifications.notify(&user_info, &message);

    Ok(Json(MessageResponse::new(format!(
        "Notification sent for booking {}",
        booking_id
    ))))
}
