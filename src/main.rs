//! EV charging booking backend
//!
//! REST API server for charging station booking. Reads configuration
//! from environment variables (see `config::AppConfig`).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use ev_booking::application::{
    BookingService, NotificationService, SessionService, StationService, StubPaymentProcessor,
};
use ev_booking::domain::RepositoryProvider;
use ev_booking::infrastructure::crypto::jwt::JwtConfig;
use ev_booking::infrastructure::database::migrator::Migrator;
use ev_booking::infrastructure::identity::IdentityProviderClient;
use ev_booking::{create_api_router, init_database, AppConfig, SeaOrmRepositoryProvider};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // ── Load configuration ─────────────────────────────────────
    let app_cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Configuration error: {}", e);
            return Err(e.into());
        }
    };

    info!("Starting EV Charging Booking Service...");
    info!("Database: {}", app_cfg.database.url);

    let jwt_config = JwtConfig::new(
        app_cfg.security.jwt_secret.clone(),
        app_cfg.security.jwt_expiration_hours,
    );
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&app_cfg.database).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // ── Repositories & services ────────────────────────────────
    let repos: Arc<dyn RepositoryProvider> = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));

    let station_service = Arc::new(StationService::new(repos.clone()));
    let session_service = Arc::new(SessionService::new(repos.clone()));
    let booking_service = Arc::new(BookingService::new(
        db.clone(),
        repos.clone(),
        Arc::new(StubPaymentProcessor),
    ));
    let notification_service = Arc::new(NotificationService);

    let identity = match &app_cfg.identity {
        Some(cfg) => {
            info!("External identity provider configured for {}", cfg.region);
            Some(Arc::new(IdentityProviderClient::new(cfg.clone())))
        }
        None => {
            warn!("External identity provider not configured; aws-* routes will answer 500");
            None
        }
    };

    // ── REST API server ────────────────────────────────────────
    let api_router = create_api_router(
        repos,
        db.clone(),
        jwt_config,
        station_service,
        session_service,
        booking_service,
        notification_service,
        identity,
    );

    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Performing final cleanup...");
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("EV Charging Booking Service shutdown complete");
    Ok(())
}

/// Resolve on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
