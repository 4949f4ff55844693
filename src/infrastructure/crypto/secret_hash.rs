//! SECRET_HASH computation for the identity provider's password flow
//!
//! The provider requires `base64(hmac_sha256(client_secret, username + client_id))`
//! alongside any credential exchange for app clients with a secret.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the keyed hash the provider expects for a username/client pair.
pub fn calculate_secret_hash(username: &str, client_id: &str, client_secret: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(client_secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(username.as_bytes());
    mac.update(client_id.as_bytes());
    BASE64.encode(mac.finalize().into_bytes())
}
