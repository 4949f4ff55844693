//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, NotificationService, SessionService, StationService};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::infrastructure::identity::IdentityProviderClient;
use crate::interfaces::http::common::MessageResponse;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{auth, ev, health, provider, sessions, stations};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::register,
        auth::login,
        auth::external_login,
        auth::external_protected,
        auth::external_refresh,
        // Stations
        stations::list_stations,
        stations::create_station,
        // Sessions
        sessions::start_session,
        sessions::end_session,
        // Provider
        provider::add_station,
        provider::manage_slots,
        provider::slot_availability,
        provider::send_notification,
        // EV owners
        ev::find_providers,
        ev::filter_stations,
        ev::book_slot,
        ev::history,
    ),
    components(
        schemas(
            // Common
            MessageResponse,
            // Auth
            auth::RegisterRequest,
            auth::LoginRequest,
            auth::TokenResponse,
            auth::ExternalLoginRequest,
            auth::ExternalTokensResponse,
            auth::RefreshTokenRequest,
            auth::RefreshedTokensResponse,
            // Stations
            stations::CreateStationRequest,
            stations::StationResponse,
            // Sessions
            sessions::StartSessionRequest,
            sessions::SessionStartedResponse,
            // Provider
            provider::AddStationRequest,
            provider::SlotDetails,
            provider::ManageSlotsRequest,
            provider::ManageSlotsResponse,
            provider::SlotStatusEntry,
            provider::SlotAvailabilityResponse,
            provider::SendNotificationRequest,
            // EV owners
            ev::ProviderEntry,
            ev::ProvidersResponse,
            ev::FilteredStationEntry,
            ev::FilteredStationsResponse,
            ev::PaymentDetailsDto,
            ev::BookSlotRequest,
            ev::BookingConfirmedResponse,
            ev::HistoryEntry,
            ev::HistoryResponse,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Local accounts (JWT) and external identity provider flows"),
        (name = "Stations", description = "Charging station listing and creation"),
        (name = "Sessions", description = "Charging session lifecycle"),
        (name = "Provider", description = "Provider-side station and slot administration"),
        (name = "EV Owners", description = "Driver-facing discovery, booking, and history"),
    ),
    info(
        title = "EV Charging Booking API",
        version = "1.0.0",
        description = "REST API for EV charging station booking and session management",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
#[allow(clippy::too_many_arguments)]
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
    station_service: Arc<StationService>,
    session_service: Arc<SessionService>,
    booking_service: Arc<BookingService>,
    notification_service: Arc<NotificationService>,
    identity: Option<Arc<IdentityProviderClient>>,
) -> Router {
    let middleware_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    let auth_state = auth::AuthHandlerState {
        repos,
        jwt_config,
        identity,
    };

    let station_state = stations::StationHandlerState {
        stations: station_service.clone(),
    };

    let session_state = sessions::SessionHandlerState {
        sessions: session_service,
    };

    let provider_state = provider::ProviderHandlerState {
        stations: station_service.clone(),
        notifications: notification_service,
    };

    let ev_state = ev::EvHandlerState {
        stations: station_service,
        bookings: booking_service,
    };

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public; the aws-protected route validates the
    // provider-issued ID token inside the handler)
    let auth_routes = Router::new()
        .route("/api/register", post(auth::register))
        .route("/api/login", post(auth::login))
        .route("/api/aws-login", post(auth::external_login))
        .route("/api/aws-protected", get(auth::external_protected))
        .route("/api/aws-refresh", post(auth::external_refresh))
        .with_state(auth_state);

    // Station routes: listing is public, creation requires a token
    let station_public_routes = Router::new()
        .route("/api/stations", get(stations::list_stations))
        .with_state(station_state.clone());
    let station_protected_routes = Router::new()
        .route("/api/stations", post(stations::create_station))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(station_state);

    // Session routes (protected)
    let session_routes = Router::new()
        .route("/api/sessions/start", post(sessions::start_session))
        .route("/api/sessions/end/{session_id}", post(sessions::end_session))
        .layer(middleware::from_fn_with_state(
            middleware_state.clone(),
            auth_middleware,
        ))
        .with_state(session_state);

    // Provider routes (public)
    let provider_routes = Router::new()
        .route("/api/provider/add-station", post(provider::add_station))
        .route("/api/provider/manage-slots", post(provider::manage_slots))
        .route(
            "/api/provider/slot-availability",
            get(provider::slot_availability),
        )
        .route(
            "/api/provider/send-notification",
            post(provider::send_notification),
        )
        .with_state(provider_state);

    // EV-owner routes (protected)
    let ev_routes = Router::new()
        .route("/api/ev/find-providers", get(ev::find_providers))
        .route("/api/ev/filter-stations", get(ev::filter_stations))
        .route("/api/ev/book-slot", post(ev::book_slot))
        .route("/api/ev/history", get(ev::history))
        .layer(middleware::from_fn_with_state(
            middleware_state,
            auth_middleware,
        ))
        .with_state(ev_state);

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health_state);

    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(auth_routes)
        .merge(station_public_routes)
        .merge(station_protected_routes)
        .merge(session_routes)
        .merge(provider_routes)
        .merge(ev_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::application::StubPaymentProcessor;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::SeaOrmRepositoryProvider;

    async fn test_app() -> Router {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();

        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let stations = Arc::new(StationService::new(repos.clone()));
        let sessions = Arc::new(SessionService::new(repos.clone()));
        let bookings = Arc::new(BookingService::new(
            db.clone(),
            repos.clone(),
            Arc::new(StubPaymentProcessor),
        ));

        create_api_router(
            repos,
            db,
            JwtConfig::new("test-secret", 1),
            stations,
            sessions,
            bookings,
            Arc::new(NotificationService),
            None,
        )
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (axum::http::StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        let request = match body {
            Some(v) => builder
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&v).unwrap()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn register_and_login(app: &Router, username: &str) -> String {
        let credentials = json!({"username": username, "password": "pw1"});
        let (status, _) = send(app, "POST", "/api/register", None, Some(credentials.clone())).await;
        assert_eq!(status, axum::http::StatusCode::CREATED);

        let (status, body) = send(app, "POST", "/api/login", None, Some(credentials)).await;
        assert_eq!(status, axum::http::StatusCode::OK);
        body["access_token"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn register_login_flow() {
        let app = test_app().await;

        let credentials = json!({"username": "alice", "password": "pw1"});
        let (status, body) =
            send(&app, "POST", "/api/register", None, Some(credentials.clone())).await;
        assert_eq!(status, axum::http::StatusCode::CREATED);
        assert_eq!(body["message"], "User registered successfully!");

        // Duplicate username
        let (status, body) =
            send(&app, "POST", "/api/register", None, Some(credentials.clone())).await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User already exists");

        let (status, body) = send(&app, "POST", "/api/login", None, Some(credentials)).await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert!(body["access_token"].as_str().unwrap().len() > 20);

        let wrong = json!({"username": "alice", "password": "nope"});
        let (status, body) = send(&app, "POST", "/api/login", None, Some(wrong)).await;
        assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Invalid credentials");
    }

    #[tokio::test]
    async fn protected_routes_require_token() {
        let app = test_app().await;

        let (status, _) = send(&app, "GET", "/api/ev/history", None, None).await;
        assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);

        let (status, _) = send(
            &app,
            "POST",
            "/api/stations",
            None,
            Some(json!({"name": "S", "location": "L", "capacity": 2})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);

        // Listing stays public
        let (status, body) = send(&app, "GET", "/api/stations", None, None).await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn session_lifecycle() {
        let app = test_app().await;
        let token = register_and_login(&app, "bob").await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/stations",
            Some(&token),
            Some(json!({"name": "Downtown", "location": "Main St", "capacity": 2})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::CREATED);
        assert_eq!(body["message"], "Charging station created!");

        let (status, body) = send(&app, "GET", "/api/stations", None, None).await;
        assert_eq!(status, axum::http::StatusCode::OK);
        let station_id = body[0]["id"].as_i64().unwrap();
        assert_eq!(body[0]["status"], "available");

        let (status, body) = send(
            &app,
            "POST",
            "/api/sessions/start",
            Some(&token),
            Some(json!({"station_id": station_id})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::CREATED);
        assert_eq!(body["message"], "Session started!");
        let session_id = body["session_id"].as_i64().unwrap();

        // Station is now occupied; a second session is refused
        let (status, body) = send(
            &app,
            "POST",
            "/api/sessions/start",
            Some(&token),
            Some(json!({"station_id": station_id})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Station not available!");

        let (status, body) = send(
            &app,
            "POST",
            &format!("/api/sessions/end/{}", session_id),
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["message"], "Session ended!");

        // The station is available again
        let (status, body) = send(&app, "GET", "/api/stations", None, None).await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body[0]["status"], "available");

        let (status, body) = send(
            &app,
            "POST",
            "/api/sessions/end/9999",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Session not found");
    }

    #[tokio::test]
    async fn provider_slot_administration() {
        let app = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/provider/add-station",
            None,
            Some(json!({
                "station_name": "Plaza",
                "location": "5th Ave",
                "station_type": "fast"
            })),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::CREATED);
        assert_eq!(body["message"], "Charging Station Added Successfully");

        let (status, _) = send(
            &app,
            "POST",
            "/api/provider/add-station",
            None,
            Some(json!({"station_name": "", "location": "x", "station_type": "y"})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);

        let (status, body) = send(
            &app,
            "POST",
            "/api/provider/manage-slots",
            None,
            Some(json!({
                "action": "Add",
                "slot_details": {
                    "station_id": 1,
                    "start_time": "2024-01-01T09:00:00",
                    "end_time": "2024-01-01T10:00:00"
                }
            })),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["message"], "Slot added successfully");
        let slot_id = body["slot_id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "GET",
            "/api/provider/slot-availability?station_id=1",
            None,
            None,
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["slots"][0]["slot_id"].as_i64().unwrap(), slot_id);
        assert_eq!(body["slots"][0]["status"], "available");

        let (status, body) = send(
            &app,
            "GET",
            "/api/provider/slot-availability",
            None,
            None,
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Station ID is required");

        let (status, body) = send(
            &app,
            "POST",
            "/api/provider/manage-slots",
            None,
            Some(json!({
                "action": "Edit",
                "slot_details": {
                    "slot_id": slot_id,
                    "start_time": "2024-01-01T11:00:00",
                    "end_time": "2024-01-01T12:00:00"
                }
            })),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["message"], "Slot updated successfully");

        let (status, body) = send(
            &app,
            "POST",
            "/api/provider/manage-slots",
            None,
            Some(json!({"action": "Delete", "slot_details": {"slot_id": slot_id}})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["message"], "Slot deleted successfully");

        // Deleting again: the slot is gone
        let (status, body) = send(
            &app,
            "POST",
            "/api/provider/manage-slots",
            None,
            Some(json!({"action": "Delete", "slot_details": {"slot_id": slot_id}})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Slot not found");

        let (status, body) = send(
            &app,
            "POST",
            "/api/provider/manage-slots",
            None,
            Some(json!({"action": "Reserve"})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Invalid action or missing slot details");
    }

    #[tokio::test]
    async fn booking_flow_and_history() {
        let app = test_app().await;
        let token = register_and_login(&app, "carol").await;

        send(
            &app,
            "POST",
            "/api/provider/add-station",
            None,
            Some(json!({
                "station_name": "Plaza",
                "location": "5th Ave",
                "station_type": "fast"
            })),
        )
        .await;
        let (_, body) = send(
            &app,
            "POST",
            "/api/provider/manage-slots",
            None,
            Some(json!({
                "action": "Add",
                "slot_details": {
                    "station_id": 1,
                    "start_time": "2024-01-01T09:00:00",
                    "end_time": "2024-01-01T10:00:00"
                }
            })),
        )
        .await;
        let slot_id = body["slot_id"].as_i64().unwrap();

        let (status, body) = send(
            &app,
            "POST",
            "/api/ev/book-slot",
            Some(&token),
            Some(json!({"slot_id": slot_id, "payment_details": {"amount": 25.5}})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::CREATED);
        assert_eq!(body["message"], "Booking Confirmed");
        let booking_id = body["booking_id"].as_i64().unwrap();

        // Slot is now occupied
        let (_, body) = send(
            &app,
            "GET",
            "/api/provider/slot-availability?station_id=1",
            None,
            None,
        )
        .await;
        assert_eq!(body["slots"][0]["status"], "occupied");

        let (status, body) = send(
            &app,
            "POST",
            "/api/ev/book-slot",
            Some(&token),
            Some(json!({"slot_id": slot_id, "payment_details": {"amount": 25.5}})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Slot not available");

        let (status, body) = send(
            &app,
            "POST",
            "/api/ev/book-slot",
            Some(&token),
            Some(json!({"slot_id": slot_id})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Slot ID and Payment Details are required");

        let (status, body) = send(
            &app,
            "POST",
            "/api/ev/book-slot",
            Some(&token),
            Some(json!({"slot_id": slot_id, "payment_details": {}})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Payment amount is required");

        let (status, body) = send(&app, "GET", "/api/ev/history", Some(&token), None).await;
        assert_eq!(status, axum::http::StatusCode::OK);
        let entry = &body["history"][0];
        assert_eq!(entry["booking_id"].as_i64().unwrap(), booking_id);
        assert_eq!(entry["amount"].as_f64().unwrap(), 25.5);
        assert_eq!(entry["date"].as_str().unwrap().len(), 10);

        // Another user sees an empty history
        let other = register_and_login(&app, "dave").await;
        let (_, body) = send(&app, "GET", "/api/ev/history", Some(&other), None).await;
        assert_eq!(body["history"], json!([]));
    }

    #[tokio::test]
    async fn ev_discovery_routes() {
        let app = test_app().await;
        let token = register_and_login(&app, "erin").await;

        send(
            &app,
            "POST",
            "/api/provider/add-station",
            None,
            Some(json!({
                "station_name": "Plaza",
                "location": "5th Ave",
                "station_type": "fast"
            })),
        )
        .await;

        let (status, body) = send(
            &app,
            "GET",
            "/api/ev/find-providers?latitude=41.0&longitude=29.0",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["providers"][0]["name"], "Plaza");
        assert_eq!(body["providers"][0]["location"], "5th Ave");

        let (status, body) =
            send(&app, "GET", "/api/ev/find-providers", Some(&token), None).await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Latitude and Longitude are required");

        let (status, body) = send(
            &app,
            "GET",
            "/api/ev/filter-stations?availability=available",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["stations"][0]["status"], "available");

        let (status, body) = send(
            &app,
            "GET",
            "/api/ev/filter-stations?pricing=premium",
            Some(&token),
            None,
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["stations"], json!([]));
    }

    #[tokio::test]
    async fn provider_notification_route() {
        let app = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/provider/send-notification",
            None,
            Some(json!({"booking_id": 7, "user_info": "carol@example.com"})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["message"], "Notification sent for booking 7");

        let (status, body) = send(
            &app,
            "POST",
            "/api/provider/send-notification",
            None,
            Some(json!({"booking_id": 7})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Booking ID and User Info are required");
    }

    #[tokio::test]
    async fn external_routes_answer_500_when_unconfigured() {
        let app = test_app().await;

        let (status, body) = send(
            &app,
            "POST",
            "/api/aws-login",
            None,
            Some(json!({"username": "alice", "password": "pw1"})),
        )
        .await;
        assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Identity provider is not configured");
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let app = test_app().await;

        let (status, body) = send(&app, "GET", "/health", None, None).await;
        assert_eq!(status, axum::http::StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["database"]["status"], "up");
    }
}
