//! EV-owner module — provider discovery, station filtering, booking, history

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
