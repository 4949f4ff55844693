//! Validation of provider-issued ID tokens against the published key set

use jsonwebtoken::jwk::{AlgorithmParameters, JwkSet};
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenValidationError {
    #[error("Token has expired")]
    Expired,

    #[error("Invalid token audience")]
    InvalidAudience,

    #[error("Token has no key id")]
    MissingKeyId,

    #[error("No published key matches kid {0}")]
    UnknownKey(String),

    #[error("Token is not an ID Token")]
    NotIdToken,

    #[error("Invalid token: {0}")]
    Invalid(String),
}

impl From<jsonwebtoken::errors::Error> for TokenValidationError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => TokenValidationError::Expired,
            ErrorKind::InvalidAudience => TokenValidationError::InvalidAudience,
            _ => TokenValidationError::Invalid(e.to_string()),
        }
    }
}

/// Claims carried by a provider ID token
#[derive(Debug, Clone, Deserialize)]
pub struct ExternalClaims {
    pub sub: String,
    pub iss: String,
    pub exp: i64,
    pub token_use: Option<String>,
    #[serde(rename = "cognito:username")]
    pub provider_username: Option<String>,
    pub username: Option<String>,
}

impl ExternalClaims {
    /// Username for display, preferring the provider-scoped claim
    pub fn display_name(&self) -> &str {
        self.provider_username
            .as_deref()
            .or(self.username.as_deref())
            .unwrap_or("Unknown User")
    }
}

/// Verify an RS256 ID token: signature against the key set, issuer,
/// audience (= client id), expiry, and the `token_use` claim.
pub fn validate_id_token(
    token: &str,
    jwks: &JwkSet,
    client_id: &str,
    issuer: &str,
) -> Result<ExternalClaims, TokenValidationError> {
    let header = decode_header(token)?;
    let kid = header.kid.ok_or(TokenValidationError::MissingKeyId)?;

    let jwk = jwks
        .find(&kid)
        .ok_or_else(|| TokenValidationError::UnknownKey(kid.clone()))?;

    let decoding_key = match &jwk.algorithm {
        AlgorithmParameters::RSA(rsa) => DecodingKey::from_rsa_components(&rsa.n, &rsa.e)
            .map_err(|e| TokenValidationError::Invalid(e.to_string()))?,
        _ => {
            return Err(TokenValidationError::Invalid(
                "Unsupported key type in key set".to_string(),
            ))
        }
    };

    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[client_id]);
    validation.set_issuer(&[issuer]);

    let data = decode::<ExternalClaims>(token, &decoding_key, &validation)?;

    if data.claims.token_use.as_deref() != Some("id") {
        return Err(TokenValidationError::NotIdToken);
    }

    Ok(data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_jwks() -> JwkSet {
        serde_json::from_str(r#"{"keys":[]}"#).unwrap()
    }

    #[test]
    fn test_garbage_token_is_invalid() {
        let err = validate_id_token("not-a-jwt", &empty_jwks(), "client", "issuer").unwrap_err();
        assert!(matches!(err, TokenValidationError::Invalid(_)));
    }

    #[test]
    fn test_token_without_kid_rejected() {
        // HS256 token signed without a kid header
        let token = jsonwebtoken::encode(
            &jsonwebtoken::Header::default(),
            &serde_json::json!({"sub": "x", "exp": 4102444800i64}),
            &jsonwebtoken::EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let err = validate_id_token(&token, &empty_jwks(), "client", "issuer").unwrap_err();
        assert!(matches!(err, TokenValidationError::MissingKeyId));
    }

    #[test]
    fn test_unknown_kid_rejected() {
        let mut header = jsonwebtoken::Header::default();
        header.kid = Some("nope".to_string());
        let token = jsonwebtoken::encode(
            &header,
            &serde_json::json!({"sub": "x", "exp": 4102444800i64}),
            &jsonwebtoken::EncodingKey::from_secret(b"secret"),
        )
        .unwrap();

        let err = validate_id_token(&token, &empty_jwks(), "client", "issuer").unwrap_err();
        assert!(matches!(err, TokenValidationError::UnknownKey(_)));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let mut claims = ExternalClaims {
            sub: "s".into(),
            iss: "i".into(),
            exp: 0,
            token_use: Some("id".into()),
            provider_username: Some("alice".into()),
            username: Some("bob".into()),
        };
        assert_eq!(claims.display_name(), "alice");
        claims.provider_username = None;
        assert_eq!(claims.display_name(), "bob");
        claims.username = None;
        assert_eq!(claims.display_name(), "Unknown User");
    }
}
