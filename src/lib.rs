//! # EV Charging Booking Service
//!
//! Backend for booking EV charging slots: local and provider-backed
//! authentication, station and slot administration, charging sessions,
//! and paid slot bookings.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, types and repository traits
//! - **application**: Business logic and use cases
//! - **infrastructure**: External concerns (database, crypto, identity provider)
//! - **interfaces**: REST API with Swagger documentation

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub use config::AppConfig;

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

// Re-export API router
pub use interfaces::create_api_router;
