//! Authentication API handlers
//!
//! Local accounts are stored in our own database and authenticated with
//! bcrypt + HS256 JWTs. The `aws-*` routes delegate to the external
//! identity provider and validate its RS256 ID tokens against the
//! published key set.

use std::sync::Arc;

use axum::http::{header, HeaderMap, StatusCode};
use axum::{extract::State, Json};
use log::{info, warn};

use super::dto::{
    ExternalLoginRequest, ExternalTokensResponse, LoginRequest, RefreshTokenRequest,
    RefreshedTokensResponse, RegisterRequest, TokenResponse,
};
use crate::domain::{RepositoryProvider, User};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::infrastructure::identity::{validate_id_token, IdentityProviderClient};
use crate::interfaces::http::common::{ApiError, MessageResponse, ValidatedJson};
use crate::interfaces::http::middleware::extract_token;

/// Auth state
#[derive(Clone)]
pub struct AuthHandlerState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub jwt_config: JwtConfig,
    pub identity: Option<Arc<IdentityProviderClient>>,
}

impl AuthHandlerState {
    fn identity(&self) -> Result<&IdentityProviderClient, ApiError> {
        self.identity
            .as_deref()
            .ok_or_else(|| ApiError::internal("Identity provider is not configured"))
    }
}

#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 400, description = "Username taken or invalid input", body = MessageResponse)
    )
)]
pub async fn register(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let existing = state
        .repos
        .users()
        .find_by_username(&request.username)
        .await?;
    if existing.is_some() {
        return Err(ApiError::bad_request("User already exists"));
    }

    let password_hash =
        hash_password(&request.password).map_err(|e| ApiError::internal(e.to_string()))?;

    let user = User::new(&request.username, password_hash);
    state.repos.users().save(user).await?;
    info!("User registered: {}", request.username);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully!")),
    ))
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = TokenResponse),
        (status = 401, description = "Invalid credentials", body = MessageResponse)
    )
)]
pub async fn login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let user = state
        .repos
        .users()
        .find_by_username(&request.username)
        .await?;

    let Some(user) = user else {
        return Err(ApiError::unauthorized("Invalid credentials"));
    };

    let password_valid = verify_password(&request.password, &user.password_hash).unwrap_or(false);
    if !password_valid {
        warn!("Failed login attempt for {}", request.username);
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let access_token = create_token(
        &user.id,
        &user.username,
        user.role.as_str(),
        &state.jwt_config,
    )
    .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(TokenResponse { access_token }))
}

#[utoipa::path(
    post,
    path = "/api/aws-login",
    tag = "Authentication",
    request_body = ExternalLoginRequest,
    responses(
        (status = 200, description = "Provider token set", body = ExternalTokensResponse),
        (status = 401, description = "Provider rejected the credentials", body = MessageResponse),
        (status = 404, description = "User not found at the provider", body = MessageResponse)
    )
)]
pub async fn external_login(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<ExternalLoginRequest>,
) -> Result<Json<ExternalTokensResponse>, ApiError> {
    let identity = state.identity()?;

    let tokens = identity.login(&request.username, &request.password).await?;
    info!("External login succeeded for {}", request.username);

    Ok(Json(ExternalTokensResponse {
        id_token: tokens.id_token,
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token.unwrap_or_default(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/aws-protected",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Greeting for the token's subject", body = MessageResponse),
        (status = 401, description = "Missing, expired, or invalid ID token", body = MessageResponse)
    )
)]
pub async fn external_protected(
    State(state): State<AuthHandlerState>,
    headers: HeaderMap,
) -> Result<Json<MessageResponse>, ApiError> {
    let identity = state.identity()?;

    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ApiError::unauthorized("Missing authentication token"))?;
    let token = extract_token(auth_header)
        .ok_or_else(|| ApiError::unauthorized("Invalid authentication token"))?;

    let jwks = identity.fetch_jwks().await?;
    let claims = validate_id_token(
        token,
        &jwks,
        &identity.config().client_id,
        &identity.config().issuer,
    )
    .map_err(|e| ApiError::unauthorized(e.to_string()))?;

    Ok(Json(MessageResponse::new(format!(
        "Hello, {}!",
        claims.display_name()
    ))))
}

#[utoipa::path(
    post,
    path = "/api/aws-refresh",
    tag = "Authentication",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Fresh access and id tokens", body = RefreshedTokensResponse),
        (status = 401, description = "Refresh token rejected", body = MessageResponse)
    )
)]
pub async fn external_refresh(
    State(state): State<AuthHandlerState>,
    ValidatedJson(request): ValidatedJson<RefreshTokenRequest>,
) -> Result<Json<RefreshedTokensResponse>, ApiError> {
    let identity = state.identity()?;

    let tokens = identity.refresh(&request.refresh_token).await?;

    Ok(Json(RefreshedTokensResponse {
        access_token: tokens.access_token,
        id_token: tokens.id_token,
    }))
}
