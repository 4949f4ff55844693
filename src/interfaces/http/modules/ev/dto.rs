//! EV-owner DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Booking, ChargingStation};

#[derive(Debug, Deserialize, ToSchema)]
pub struct FindProvidersParams {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderEntry {
    pub id: i32,
    pub name: String,
    pub location: String,
}

impl From<ChargingStation> for ProviderEntry {
    fn from(s: ChargingStation) -> Self {
        Self {
            id: s.id,
            name: s.name,
            location: s.location,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProvidersResponse {
    pub providers: Vec<ProviderEntry>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FilterStationsParams {
    pub pricing: Option<String>,
    pub speed: Option<String>,
    pub availability: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FilteredStationEntry {
    pub id: i32,
    pub name: String,
    pub pricing: Option<String>,
    pub speed: Option<String>,
    pub status: String,
}

impl From<ChargingStation> for FilteredStationEntry {
    fn from(s: ChargingStation) -> Self {
        Self {
            id: s.id,
            name: s.name,
            pricing: s.pricing,
            speed: s.speed,
            status: s.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FilteredStationsResponse {
    pub stations: Vec<FilteredStationEntry>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PaymentDetailsDto {
    pub amount: Option<f64>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BookSlotRequest {
    pub slot_id: Option<i32>,
    pub payment_details: Option<PaymentDetailsDto>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookingConfirmedResponse {
    pub message: String,
    pub booking_id: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryEntry {
    pub booking_id: i32,
    /// Booking date as `YYYY-MM-DD`
    pub date: String,
    pub amount: f64,
}

impl From<Booking> for HistoryEntry {
    fn from(b: Booking) -> Self {
        Self {
            booking_id: b.id,
            date: b.booking_time.format("%Y-%m-%d").to_string(),
            amount: b.amount,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub history: Vec<HistoryEntry>,
}
