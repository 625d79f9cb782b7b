//! Session token issuing and verification.
//!
//! The token is a bearer JWT signed with HS256 over a shared secret from
//! configuration. Claims carry the user id and admin flag; expiry is fixed
//! at 24 hours from issue.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use newa_bhojan_core::{Role, UserId};

/// How long an issued token stays valid.
const TOKEN_TTL_HOURS: i64 = 24;

/// Errors from token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// Signing failed (malformed key material).
    #[error("token signing failed: {0}")]
    Sign(#[source] jsonwebtoken::errors::Error),

    /// The token is missing required claims, has a bad signature, or has
    /// expired. Collapsed to one variant so verification failures never
    /// leak which check rejected the token.
    #[error("invalid or expired token")]
    Invalid,
}

/// The decoded identity attached to an authenticated request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    /// The authenticated user's id.
    pub id: UserId,
    /// The role carried in the token.
    pub role: Role,
}

impl Identity {
    /// Whether this identity has admin access.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// JWT claims payload.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id.
    sub: i32,
    /// Whether the user holds the admin role.
    admin: bool,
    /// Issued-at, seconds since the unix epoch.
    iat: i64,
    /// Expiry, seconds since the unix epoch.
    exp: i64,
}

/// Signs and verifies session tokens.
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    /// Create an issuer from the configured signing secret.
    #[must_use]
    pub fn new(secret: &SecretString) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        }
    }

    /// Issue a token for a user with a 24h expiry.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Sign` if encoding fails.
    pub fn issue(&self, user_id: UserId, role: Role) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.as_i32(),
            admin: role.is_admin(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding).map_err(TokenError::Sign)
    }

    /// Verify a token's signature and expiry, returning the identity.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` for any malformed, mis-signed, or
    /// expired token.
    pub fn verify(&self, token: &str) -> Result<Identity, TokenError> {
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| TokenError::Invalid)?;

        let role = if data.claims.admin {
            Role::Admin
        } else {
            Role::Customer
        };

        Ok(Identity {
            id: UserId::new(data.claims.sub),
            role,
        })
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&SecretString::from("kJ8#mP2$vN5@qR9!wX3^zL6&tY1*uB4%"))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let issuer = issuer();
        let token = issuer.issue(UserId::new(2), Role::Customer).expect("issue");
        let identity = issuer.verify(&token).expect("verify");

        assert_eq!(identity.id, UserId::new(2));
        assert_eq!(identity.role, Role::Customer);
        assert!(!identity.is_admin());
    }

    #[test]
    fn test_admin_flag_roundtrip() {
        let issuer = issuer();
        let token = issuer.issue(UserId::new(1), Role::Admin).expect("issue");
        let identity = issuer.verify(&token).expect("verify");
        assert!(identity.is_admin());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = issuer();
        assert!(matches!(
            issuer.verify("not.a.token"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = issuer();

        // A token whose expiry passed an hour ago, well outside the
        // default validation leeway.
        let issued = Utc::now() - Duration::hours(2);
        let claims = Claims {
            sub: 2,
            admin: false,
            iat: issued.timestamp(),
            exp: (issued + Duration::hours(1)).timestamp(),
        };
        let token = jsonwebtoken::encode(&Header::default(), &claims, &issuer.encoding)
            .expect("encode");

        assert!(matches!(issuer.verify(&token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = issuer().issue(UserId::new(1), Role::Admin).expect("issue");
        let other = TokenIssuer::new(&SecretString::from("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6!"));
        assert!(matches!(other.verify(&token), Err(TokenError::Invalid)));
    }
}
