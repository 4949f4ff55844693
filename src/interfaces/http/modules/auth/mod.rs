//! Authentication module — local register/login plus external identity provider flows

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
