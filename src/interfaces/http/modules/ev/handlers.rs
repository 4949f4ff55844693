//! EV-owner API handlers
//!
//! Discovery, booking, and history routes for EV drivers. All of them
//! sit behind the bearer-token middleware.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{
    BookSlotRequest, BookingConfirmedResponse, FilterStationsParams, FilteredStationsResponse,
    FindProvidersParams, HistoryResponse, ProvidersResponse,
};
use crate::application::{BookingService, PaymentDetails, StationService};
use crate::domain::{StationFilter, StationStatus};
use crate::interfaces::http::common::{ApiError, MessageResponse};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// EV-owner state
#[derive(Clone)]
pub struct EvHandlerState {
    pub stations: Arc<StationService>,
    pub bookings: Arc<BookingService>,
}

#[utoipa::path(
    get,
    path = "/api/ev/find-providers",
    tag = "EV Owners",
    security(("bearer_auth" = [])),
    params(
        ("latitude" = Option<String>, Query, description = "Caller latitude"),
        ("longitude" = Option<String>, Query, description = "Caller longitude")
    ),
    responses(
        (status = 200, description = "Nearby energy providers", body = ProvidersResponse),
        (status = 400, description = "Missing coordinates", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    )
)]
pub async fn find_providers(
    State(state): State<EvHandlerState>,
    Query(params): Query<FindProvidersParams>,
) -> Result<Json<ProvidersResponse>, ApiError> {
    // Coordinates are required even though no distance filtering happens
    // yet; every station doubles as a provider entry.
    let has_coords = matches!(
        (&params.latitude, &params.longitude),
        (Some(lat), Some(long)) if !lat.is_empty() && !long.is_empty()
    );
    if !has_coords {
        return Err(ApiError::bad_request("Latitude and Longitude are required"));
    }

    let stations = state.stations.list_stations().await?;
    Ok(Json(ProvidersResponse {
        providers: stations.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/ev/filter-stations",
    tag = "EV Owners",
    security(("bearer_auth" = [])),
    params(
        ("pricing" = Option<String>, Query, description = "Exact pricing tier"),
        ("speed" = Option<String>, Query, description = "Exact charging speed"),
        ("availability" = Option<String>, Query, description = "Station status, available or occupied")
    ),
    responses(
        (status = 200, description = "Stations matching the filters", body = FilteredStationsResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    )
)]
pub async fn filter_stations(
    State(state): State<EvHandlerState>,
    Query(params): Query<FilterStationsParams>,
) -> Result<Json<FilteredStationsResponse>, ApiError> {
    let filter = StationFilter {
        pricing: params.pricing,
        speed: params.speed,
        status: params.availability.as_deref().map(StationStatus::from_str),
    };

    let stations = state.stations.filter_stations(filter).await?;
    Ok(Json(FilteredStationsResponse {
        stations: stations.into_iter().map(Into::into).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/ev/book-slot",
    tag = "EV Owners",
    security(("bearer_auth" = [])),
    request_body = BookSlotRequest,
    responses(
        (status = 201, description = "Booking confirmed", body = BookingConfirmedResponse),
        (status = 400, description = "Missing details, payment failure, or unavailable slot", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    )
)]
pub async fn book_slot(
    State(state): State<EvHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<BookSlotRequest>,
) -> Result<(StatusCode, Json<BookingConfirmedResponse>), ApiError> {
    let (slot_id, payment_details) = match (request.slot_id, request.payment_details) {
        (Some(id), Some(details)) => (id, details),
        _ => {
            return Err(ApiError::bad_request(
                "Slot ID and Payment Details are required",
            ))
        }
    };

    let amount = payment_details
        .amount
        .ok_or_else(|| ApiError::bad_request("Payment amount is required"))?;

    let booking = state
        .bookings
        .book_slot(&user.user_id, slot_id, PaymentDetails { amount })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BookingConfirmedResponse {
            message: "Booking Confirmed".to_string(),
            booking_id: booking.id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/ev/history",
    tag = "EV Owners",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's booking history", body = HistoryResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    )
)]
pub async fn history(
    State(state): State<EvHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let bookings = state.bookings.history(&user.user_id).await?;
    Ok(Json(HistoryResponse {
        history: bookings.into_iter().map(Into::into).collect(),
    }))
}
