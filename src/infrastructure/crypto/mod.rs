//! Cryptographic helpers: JWT, password hashing, provider secret hash

pub mod jwt;
pub mod password;
pub mod secret_hash;
