//! SeaORM repository implementations

pub mod booking_repository;
pub mod repository_provider;
pub mod session_repository;
pub mod slot_repository;
pub mod station_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;
