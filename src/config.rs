//! Environment-sourced configuration
//!
//! Secrets (JWT signing key, provider client secret) are read exclusively
//! from the environment; there are no baked-in fallbacks for them.

use thiserror::Error;

use crate::infrastructure::database::DatabaseConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),

    #[error("Identity provider configuration is incomplete: missing {0}")]
    PartialIdentity(&'static str),
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Local token-signing configuration
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    /// Token lifetime. Defaults to one hour.
    pub jwt_expiration_hours: i64,
}

/// External identity provider (user pool) configuration
#[derive(Debug, Clone)]
pub struct IdentityProviderConfig {
    pub region: String,
    pub user_pool_id: String,
    pub client_id: String,
    pub client_secret: String,
    pub issuer: String,
    /// Endpoint override for testing against a local stand-in
    pub endpoint_override: Option<String>,
}

impl IdentityProviderConfig {
    /// Regional RPC endpoint for auth flows
    pub fn endpoint(&self) -> String {
        self.endpoint_override
            .clone()
            .unwrap_or_else(|| format!("https://cognito-idp.{}.amazonaws.com/", self.region))
    }

    /// Location of the published JSON Web Key Set
    pub fn jwks_url(&self) -> String {
        format!("{}/.well-known/jwks.json", self.issuer.trim_end_matches('/'))
    }
}

/// Top-level application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    /// None when no identity provider variables are set; the aws-* routes
    /// then report the provider as unconfigured.
    pub identity: Option<IdentityProviderConfig>,
}

fn env_opt(name: &'static str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_opt("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match env_opt("API_PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid("API_PORT", e.to_string()))?,
            None => 8000,
        };

        let jwt_secret = env_opt("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;
        let jwt_expiration_hours = match env_opt("JWT_EXPIRATION_HOURS") {
            Some(v) => v
                .parse::<i64>()
                .map_err(|e| ConfigError::Invalid("JWT_EXPIRATION_HOURS", e.to_string()))?,
            None => 1,
        };

        Ok(Self {
            server: ServerConfig { host, port },
            database: DatabaseConfig::from_env(),
            security: SecurityConfig {
                jwt_secret,
                jwt_expiration_hours,
            },
            identity: Self::identity_from_env()?,
        })
    }

    /// Identity provider variables are all-or-nothing: absent means the
    /// provider is not configured, a partial set is a startup error.
    fn identity_from_env() -> Result<Option<IdentityProviderConfig>, ConfigError> {
        let vars = [
            ("AWS_REGION", env_opt("AWS_REGION")),
            ("AWS_COGNITO_USER_POOL_ID", env_opt("AWS_COGNITO_USER_POOL_ID")),
            ("AWS_COGNITO_CLIENT_ID", env_opt("AWS_COGNITO_CLIENT_ID")),
            ("AWS_COGNITO_CLIENT_SECRET", env_opt("AWS_COGNITO_CLIENT_SECRET")),
        ];

        if vars.iter().all(|(_, v)| v.is_none()) {
            return Ok(None);
        }
        if let Some((name, _)) = vars.iter().find(|(_, v)| v.is_none()) {
            return Err(ConfigError::PartialIdentity(name));
        }

        let region = vars[0].1.clone().unwrap();
        let user_pool_id = vars[1].1.clone().unwrap();
        let issuer = env_opt("JWT_DECODE_ISSUER").unwrap_or_else(|| {
            format!("https://cognito-idp.{}.amazonaws.com/{}", region, user_pool_id)
        });

        Ok(Some(IdentityProviderConfig {
            region,
            user_pool_id,
            client_id: vars[2].1.clone().unwrap(),
            client_secret: vars[3].1.clone().unwrap(),
            issuer,
            endpoint_override: env_opt("AWS_COGNITO_ENDPOINT"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwks_url_from_issuer() {
        let config = IdentityProviderConfig {
            region: "us-east-1".into(),
            user_pool_id: "us-east-1_abc".into(),
            client_id: "client".into(),
            client_secret: "secret".into(),
            issuer: "https://cognito-idp.us-east-1.amazonaws.com/us-east-1_abc/".into(),
            endpoint_override: None,
        };
        assert_eq!(
            config.jwks_url(),
            "https://cognito-idp.us-east-1.amazonaws.com/us-east-1_abc/.well-known/jwks.json"
        );
        assert_eq!(config.endpoint(), "https://cognito-idp.us-east-1.amazonaws.com/");
    }

    #[test]
    fn test_server_address() {
        let server = ServerConfig {
            host: "127.0.0.1".into(),
            port: 8000,
        };
        assert_eq!(server.address(), "127.0.0.1:8000");
    }
}
