//! Charging session API handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{SessionStartedResponse, StartSessionRequest};
use crate::application::SessionService;
use crate::interfaces::http::common::{ApiError, MessageResponse, ValidatedJson};
use crate::interfaces::http::middleware::AuthenticatedUser;

/// Session state
#[derive(Clone)]
pub struct SessionHandlerState {
    pub sessions: Arc<SessionService>,
}

#[utoipa::path(
    post,
    path = "/api/sessions/start",
    tag = "Sessions",
    security(("bearer_auth" = [])),
    request_body = StartSessionRequest,
    responses(
        (status = 201, description = "Session started", body = SessionStartedResponse),
        (status = 400, description = "Station missing or occupied", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    )
)]
pub async fn start_session(
    State(state): State<SessionHandlerState>,
    Extension(user): Extension<AuthenticatedUser>,
    ValidatedJson(request): ValidatedJson<StartSessionRequest>,
) -> Result<(StatusCode, Json<SessionStartedResponse>), ApiError> {
    let session = state
        .sessions
        .start_session(&user.user_id, request.station_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionStartedResponse {
            message: "Session started!".to_string(),
            session_id: session.id,
        }),
    ))
}

#[utoipa::path(
    post,
    path = "/api/sessions/end/{session_id}",
    tag = "Sessions",
    security(("bearer_auth" = [])),
    params(("session_id" = i32, Path, description = "Session to end")),
    responses(
        (status = 200, description = "Session ended", body = MessageResponse),
        (status = 404, description = "Session not found", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse)
    )
)]
pub async fn end_session(
    State(state): State<SessionHandlerState>,
    Path(session_id): Path<i32>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.sessions.end_session(session_id).await?;
    Ok(Json(MessageResponse::new("Session ended!")))
}
