use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,

    #[error("Token is not yet valid")]
    TokenNotYetValid,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token audience mismatch")]
    InvalidAudience,

    #[error("Malformed token")]
    MalformedToken,
}

/// Claims of an access token issued by the hosted auth provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    /// Admin user id
    pub sub: Uuid,
    pub exp: i64,
    #[serde(default)]
    pub iat: Option<i64>,
    /// Must be `authenticated` for admin routes.
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
}

pub trait TokenVerifier: Send + Sync {
    fn verify_token(&self, token: &str) -> Result<AdminClaims, TokenError>;
}
