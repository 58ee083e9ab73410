//! Authentication types for the domain layer.
//!
//! An `AuthenticatedUser` is produced by the `SessionValidator` port after a
//! Bearer token has been verified. Handlers only see this type, never the
//! raw claims.

use super::UserId;
use thiserror::Error;

/// Authenticated caller extracted from a validated token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// Subject of the token.
    pub id: UserId,

    /// Email claim, when the issuer includes one.
    pub email: Option<String>,
}

impl AuthenticatedUser {
    pub fn new(id: UserId, email: Option<String>) -> Self {
        Self { id, email }
    }
}

/// Authentication errors that can occur during token validation.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    /// The token is missing, malformed, or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token has expired (separate from InvalidToken for specific handling).
    #[error("Token expired")]
    TokenExpired,

    /// The validator could not run (misconfiguration and similar).
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if this error indicates the caller should obtain a new token.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, AuthError::InvalidToken | AuthError::TokenExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authenticated_user_keeps_subject_and_email() {
        let user = AuthenticatedUser::new(
            UserId::new("admin-1").unwrap(),
            Some("admin@example.com".to_string()),
        );
        assert_eq!(user.id.as_str(), "admin-1");
        assert_eq!(user.email.as_deref(), Some("admin@example.com"));
    }

    #[test]
    fn auth_error_service_unavailable_displays_message() {
        let err = AuthError::service_unavailable("missing secret");
        assert_eq!(format!("{}", err), "Auth service unavailable: missing secret");
    }

    #[test]
    fn auth_error_requires_reauthentication_for_token_errors() {
        assert!(AuthError::InvalidToken.requires_reauthentication());
        assert!(AuthError::TokenExpired.requires_reauthentication());
        assert!(!AuthError::service_unavailable("").requires_reauthentication());
    }
}
