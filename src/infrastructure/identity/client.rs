//! HTTP client for the external identity provider
//!
//! Speaks the provider's `x-amz-json-1.1` RPC dialect: every call is a POST
//! to the regional endpoint with an `X-Amz-Target` header naming the
//! operation. Only the two `InitiateAuth` flows the service needs are
//! implemented.

use log::warn;
use serde::Deserialize;
use serde_json::json;

use crate::config::IdentityProviderConfig;
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::crypto::secret_hash::calculate_secret_hash;

const INITIATE_AUTH_TARGET: &str = "AWSCognitoIdentityProviderService.InitiateAuth";
const AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Tokens returned by the provider. `refresh_token` is absent on the
/// refresh flow.
#[derive(Debug, Clone)]
pub struct ProviderTokens {
    pub id_token: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
}

#[derive(Deserialize)]
struct InitiateAuthResponse {
    #[serde(rename = "AuthenticationResult")]
    authentication_result: Option<AuthenticationResult>,
}

#[derive(Deserialize)]
struct AuthenticationResult {
    #[serde(rename = "IdToken")]
    id_token: Option<String>,
    #[serde(rename = "AccessToken")]
    access_token: Option<String>,
    #[serde(rename = "RefreshToken")]
    refresh_token: Option<String>,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    #[serde(rename = "__type")]
    error_type: Option<String>,
    message: Option<String>,
}

pub struct IdentityProviderClient {
    http: reqwest::Client,
    config: IdentityProviderConfig,
}

impl IdentityProviderClient {
    pub fn new(config: IdentityProviderConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &IdentityProviderConfig {
        &self.config
    }

    /// Password login (`USER_PASSWORD_AUTH` flow)
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<ProviderTokens> {
        let secret_hash = calculate_secret_hash(
            username,
            &self.config.client_id,
            &self.config.client_secret,
        );

        self.initiate_auth(
            "USER_PASSWORD_AUTH",
            json!({
                "USERNAME": username,
                "PASSWORD": password,
                "SECRET_HASH": secret_hash,
            }),
        )
        .await
    }

    /// Exchange a refresh token for a new access/id token pair
    /// (`REFRESH_TOKEN_AUTH` flow). The provider keys the secret hash on
    /// the client id alone for this flow.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<ProviderTokens> {
        let secret_hash = calculate_secret_hash(
            &self.config.client_id,
            &self.config.client_id,
            &self.config.client_secret,
        );

        self.initiate_auth(
            "REFRESH_TOKEN_AUTH",
            json!({
                "REFRESH_TOKEN": refresh_token,
                "SECRET_HASH": secret_hash,
            }),
        )
        .await
    }

    /// Fetch the provider's published signing keys
    pub async fn fetch_jwks(&self) -> DomainResult<jsonwebtoken::jwk::JwkSet> {
        let url = self.config.jwks_url();
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("JWKS fetch failed: {}", e)))?;

        response
            .json::<jsonwebtoken::jwk::JwkSet>()
            .await
            .map_err(|e| DomainError::Upstream(format!("Invalid JWKS document: {}", e)))
    }

    async fn initiate_auth(
        &self,
        flow: &str,
        auth_parameters: serde_json::Value,
    ) -> DomainResult<ProviderTokens> {
        let body = json!({
            "AuthFlow": flow,
            "AuthParameters": auth_parameters,
            "ClientId": self.config.client_id,
        });

        let response = self
            .http
            .post(self.config.endpoint())
            .header("content-type", AMZ_JSON)
            .header("x-amz-target", INITIATE_AUTH_TARGET)
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| DomainError::Upstream(format!("Identity provider unreachable: {}", e)))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::Upstream(format!("Identity provider read error: {}", e)))?;

        if !status.is_success() {
            return Err(Self::map_provider_error(&bytes));
        }

        let parsed: InitiateAuthResponse = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::Upstream(format!("Invalid provider response: {}", e)))?;

        let result = parsed
            .authentication_result
            .ok_or_else(|| DomainError::Upstream("Provider returned no tokens".to_string()))?;

        match (result.id_token, result.access_token) {
            (Some(id_token), Some(access_token)) => Ok(ProviderTokens {
                id_token,
                access_token,
                refresh_token: result.refresh_token,
            }),
            _ => Err(DomainError::Upstream(
                "Provider response missing tokens".to_string(),
            )),
        }
    }

    fn map_provider_error(body: &[u8]) -> DomainError {
        let parsed: ProviderErrorBody = match serde_json::from_slice(body) {
            Ok(p) => p,
            Err(e) => {
                warn!("Unparseable provider error body: {}", e);
                return DomainError::Upstream("Identity provider error".to_string());
            }
        };

        // Error type may be namespaced, e.g. "com.example#NotAuthorizedException"
        let error_type = parsed.error_type.unwrap_or_default();
        let kind = error_type.rsplit('#').next().unwrap_or("");
        let message = parsed.message.unwrap_or_else(|| error_type.clone());

        match kind {
            "NotAuthorizedException" => DomainError::Unauthorized(message),
            "UserNotFoundException" => DomainError::not_found("User", message),
            _ => DomainError::Upstream(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_not_authorized() {
        let body = br#"{"__type":"NotAuthorizedException","message":"Incorrect username or password."}"#;
        assert!(matches!(
            IdentityProviderClient::map_provider_error(body),
            DomainError::Unauthorized(_)
        ));
    }

    #[test]
    fn test_map_user_not_found_with_namespace() {
        let body = br#"{"__type":"com.amazonaws.cognito#UserNotFoundException","message":"User does not exist."}"#;
        assert!(matches!(
            IdentityProviderClient::map_provider_error(body),
            DomainError::NotFound { .. }
        ));
    }

    #[test]
    fn test_map_unknown_error() {
        let body = br#"{"__type":"TooManyRequestsException","message":"Rate exceeded"}"#;
        assert!(matches!(
            IdentityProviderClient::map_provider_error(body),
            DomainError::Upstream(_)
        ));
    }

    #[test]
    fn test_map_garbage_body() {
        assert!(matches!(
            IdentityProviderClient::map_provider_error(b"not json"),
            DomainError::Upstream(_)
        ));
    }
}
