//! Charging session DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StartSessionRequest {
    #[validate(range(min = 1, message = "station_id is required"))]
    pub station_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionStartedResponse {
    pub message: String,
    pub session_id: i32,
}
