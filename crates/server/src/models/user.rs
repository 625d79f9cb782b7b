//! User domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use newa_bhojan_core::{Email, Role, UserId};

/// A registered user.
///
/// Holds the argon2 password hash; never serialize this type outward.
/// Use [`PublicUser`] for anything that crosses the API boundary.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// User's email address, unique across the store.
    pub email: Email,
    /// Argon2 PHC-format password hash.
    pub password_hash: String,
    /// Authorization role.
    pub role: Role,
    /// Optional contact phone.
    pub phone: Option<String>,
    /// Optional delivery address.
    pub address: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Whether this account has admin access.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// The outward-facing view of a user, with the password hash stripped.
#[derive(Debug, Clone, Serialize)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: Email,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            phone: user.phone.clone(),
            address: user.address.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}
