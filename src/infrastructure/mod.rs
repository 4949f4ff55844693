//! External concerns: database, crypto, identity provider

pub mod crypto;
pub mod database;
pub mod identity;

pub use database::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
