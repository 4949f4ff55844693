pub mod auth;
pub mod ev;
pub mod health;
pub mod provider;
pub mod sessions;
pub mod stations;
