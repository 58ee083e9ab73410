//! HS256 JWT session validator.
//!
//! Validates Bearer tokens signed with the shared secret from
//! `AuthConfig`. The `sub` claim becomes the user id; `exp` is mandatory
//! and checked with the configured leeway.

use async_trait::async_trait;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

use crate::config::AuthConfig;
use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::SessionValidator;

/// Claims carried by accepted tokens.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject - the user ID
    pub sub: String,

    /// Expiry timestamp (Unix epoch seconds)
    pub exp: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Validates HS256 tokens against a shared secret.
pub struct JwtSessionValidator {
    key: DecodingKey,
    validation: Validation,
}

impl JwtSessionValidator {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            key: DecodingKey::from_secret(config.jwt_secret.expose_secret().as_bytes()),
            validation,
        }
    }
}

#[async_trait]
impl SessionValidator for JwtSessionValidator {
    async fn validate(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => {
                tracing::debug!("Token expired");
                AuthError::TokenExpired
            }
            _ => {
                tracing::warn!(error = %e, "Token validation failed");
                AuthError::InvalidToken
            }
        })?;

        let claims = data.claims;
        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!("Token has an empty subject");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(user_id, claims.email))
    }
}

impl std::fmt::Debug for JwtSessionValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtSessionValidator")
            .field("algorithm", &"HS256")
            .field("leeway", &self.validation.leeway)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &str = "a-signing-secret-that-is-long-enough";

    fn token(secret: &str, sub: &str, exp_offset_secs: i64) -> String {
        let claims = Claims {
            sub: sub.to_string(),
            exp: Utc::now().timestamp() + exp_offset_secs,
            email: Some("admin@example.com".to_string()),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn validator() -> JwtSessionValidator {
        JwtSessionValidator::new(&AuthConfig::new(SECRET))
    }

    #[tokio::test]
    async fn accepts_valid_token() {
        let user = validator().validate(&token(SECRET, "admin-1", 3600)).await.unwrap();
        assert_eq!(user.id.as_str(), "admin-1");
        assert_eq!(user.email.as_deref(), Some("admin@example.com"));
    }

    #[tokio::test]
    async fn rejects_wrong_signature() {
        let forged = token("another-secret-of-sufficient-length!!", "admin-1", 3600);
        assert!(matches!(
            validator().validate(&forged).await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[tokio::test]
    async fn expired_token_is_reported_as_expired() {
        let expired = token(SECRET, "admin-1", -3600);
        assert!(matches!(
            validator().validate(&expired).await,
            Err(AuthError::TokenExpired)
        ));
    }

    #[tokio::test]
    async fn garbage_is_invalid() {
        assert!(matches!(
            validator().validate("not-a-jwt").await,
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn debug_output_has_no_key_material() {
        assert!(!format!("{:?}", validator()).contains(SECRET));
    }
}
