//! Provider module — station onboarding, slot administration, booking notifications

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
