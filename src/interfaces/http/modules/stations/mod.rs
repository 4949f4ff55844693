//! Station module — public listing and authenticated creation

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
