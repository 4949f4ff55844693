//! External identity provider integration
//!
//! - `client`: password/refresh auth flows against the provider endpoint
//! - `token`: RS256 ID-token validation against the published key set

pub mod client;
pub mod token;

pub use client::{IdentityProviderClient, ProviderTokens};
pub use token::{validate_id_token, ExternalClaims, TokenValidationError};
