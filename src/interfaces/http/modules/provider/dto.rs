//! Provider-facing DTOs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::Slot;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddStationRequest {
    #[validate(length(min = 1, max = 100, message = "station_name is required"))]
    pub station_name: String,
    #[validate(length(min = 1, max = 200, message = "location is required"))]
    pub location: String,
    #[validate(length(min = 1, max = 50, message = "station_type is required"))]
    pub station_type: String,
}

/// Slot fields accompanying a manage-slots action. Which fields are
/// required depends on the action, so everything is optional here and
/// checked in the handler.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SlotDetails {
    pub slot_id: Option<i32>,
    pub station_id: Option<i32>,
    /// Naive local timestamp, e.g. `2024-01-01T09:00:00`
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ManageSlotsRequest {
    /// One of `Add`, `Edit`, `Delete`
    pub action: String,
    pub slot_details: Option<SlotDetails>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ManageSlotsResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_id: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SlotAvailabilityParams {
    pub station_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlotStatusEntry {
    pub slot_id: i32,
    pub status: String,
}

impl From<Slot> for SlotStatusEntry {
    fn from(s: Slot) -> Self {
        Self {
            slot_id: s.id,
            status: s.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SlotAvailabilityResponse {
    pub slots: Vec<SlotStatusEntry>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendNotificationRequest {
    pub booking_id: Option<i32>,
    pub user_info: Option<String>,
}
