//! SeaORM entity definitions

pub mod booking;
pub mod charging_session;
pub mod slot;
pub mod station;
pub mod user;
