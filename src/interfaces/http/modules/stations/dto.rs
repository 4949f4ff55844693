//! Station DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::ChargingStation;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStationRequest {
    #[validate(length(min = 1, max = 100, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, max = 200, message = "location is required"))]
    pub location: String,
    #[validate(range(min = 1, message = "capacity must be at least 1"))]
    pub capacity: i32,
}

/// Public station listing entry
#[derive(Debug, Serialize, ToSchema)]
pub struct StationResponse {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub status: String,
}

impl From<ChargingStation> for StationResponse {
    fn from(s: ChargingStation) -> Self {
        Self {
            id: s.id,
            name: s.name,
            location: s.location,
            status: s.status.as_str().to_string(),
        }
    }
}
