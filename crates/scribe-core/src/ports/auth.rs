//! Caller-identity port.
//!
//! The store itself never authenticates anyone; it receives an opaque,
//! unforgeable caller id from the transport layer. This port is the seam
//! where that identity is validated.

use uuid::Uuid;

/// Claims carried by a validated token.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub caller_id: Uuid,
    pub exp: i64,
}

/// Token service trait - validates (and, for tooling, issues) caller tokens.
pub trait TokenService: Send + Sync {
    /// Issue a token for a caller id.
    fn generate_token(&self, caller_id: Uuid) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,
}
