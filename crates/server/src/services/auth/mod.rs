//! Authentication service.
//!
//! Covers the session state machine (anonymous -> authenticated with a
//! role), self-service profile updates, and the admin side of user
//! management with its one hard rule: admin accounts can never be deleted
//! or demoted, by anyone.

mod error;

pub use error::AuthError;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use newa_bhojan_core::{Email, Role, UserId};

use crate::models::{PublicUser, User};
use crate::services::token::TokenIssuer;
use crate::store::{NewUser, StoreError, UserStore, UserUpdate};

/// A successful login: the signed token plus the public user view.
#[derive(Debug)]
pub struct LoginOutcome {
    pub token: String,
    pub user: PublicUser,
}

/// Fields accepted at registration.
#[derive(Debug)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Self-service profile changes.
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}

/// Admin-driven changes to another user.
#[derive(Debug, Default)]
pub struct AdminUserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// Authentication service over the user store.
pub struct AuthService<'a> {
    users: &'a dyn UserStore,
    tokens: &'a TokenIssuer,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(users: &'a dyn UserStore, tokens: &'a TokenIssuer) -> Self {
        Self { users, tokens }
    }

    /// Register a new customer account.
    ///
    /// Registration can never create an admin: the role is always
    /// `Customer` regardless of input.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::DuplicateEmail` if the email is already registered.
    pub fn register(&self, registration: Registration) -> Result<PublicUser, AuthError> {
        let email = Email::parse(&registration.email)?;
        let password_hash = hash_password(&registration.password)?;

        let user = self
            .users
            .create(NewUser {
                name: registration.name,
                email,
                password_hash,
                role: Role::Customer,
                phone: registration.phone,
                address: registration.address,
            })
            .map_err(|e| match e {
                StoreError::Conflict(_) => AuthError::DuplicateEmail,
                other => AuthError::Store(other),
            })?;

        Ok(PublicUser::from(user))
    }

    /// Login with email and password, issuing a session token.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email is unknown or
    /// the password does not match; the caller cannot tell which.
    pub fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .get_by_email(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password_hash)?;

        let token = self
            .tokens
            .issue(user.id, user.role)
            .map_err(|_| AuthError::TokenIssue)?;

        Ok(LoginOutcome {
            token,
            user: PublicUser::from(user),
        })
    }

    /// Update the caller's own profile. Password changes are re-hashed
    /// before storing.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the account no longer exists.
    pub fn update_profile(
        &self,
        user_id: UserId,
        update: ProfileUpdate,
    ) -> Result<PublicUser, AuthError> {
        let password_hash = match update.password.as_deref() {
            Some(password) if !password.is_empty() => Some(hash_password(password)?),
            _ => None,
        };

        let user = self
            .users
            .update(
                user_id,
                UserUpdate {
                    name: update.name,
                    phone: update.phone,
                    address: update.address,
                    password_hash,
                    ..UserUpdate::default()
                },
            )
            .map_err(|e| match e {
                StoreError::NotFound(_) => AuthError::UserNotFound,
                other => AuthError::Store(other),
            })?;

        Ok(PublicUser::from(user))
    }

    // =========================================================================
    // Admin user management
    // =========================================================================

    /// List all users with password hashes stripped.
    #[must_use]
    pub fn list_users(&self) -> Vec<PublicUser> {
        self.users.list().iter().map(PublicUser::from).collect()
    }

    /// Update another user's name, email, or role.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the target does not exist.
    /// Returns `AuthError::ProtectedAccount` if the target is an admin and
    /// the update would change their role - admin accounts cannot be
    /// demoted regardless of request content.
    /// Returns `AuthError::DuplicateEmail` if the new email is already
    /// held by another user.
    pub fn admin_update_user(
        &self,
        target: UserId,
        update: AdminUserUpdate,
    ) -> Result<PublicUser, AuthError> {
        let existing = self.users.get(target).ok_or(AuthError::UserNotFound)?;

        if existing.is_admin() && update.role.is_some_and(|role| role != Role::Admin) {
            return Err(AuthError::ProtectedAccount);
        }

        // Role changes only apply to non-admin targets; an admin's role is
        // already Admin and stays that way.
        let role = if existing.is_admin() {
            None
        } else {
            update.role
        };

        let email = match update.email.as_deref() {
            Some(raw) => Some(Email::parse(raw)?),
            None => None,
        };

        let user = self
            .users
            .update(
                target,
                UserUpdate {
                    name: update.name,
                    email,
                    role,
                    ..UserUpdate::default()
                },
            )
            .map_err(|e| match e {
                StoreError::NotFound(_) => AuthError::UserNotFound,
                StoreError::Conflict(_) => AuthError::DuplicateEmail,
            })?;

        Ok(PublicUser::from(user))
    }

    /// Delete a non-admin user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the target does not exist.
    /// Returns `AuthError::ProtectedAccount` if the target is an admin.
    pub fn admin_delete_user(&self, target: UserId) -> Result<(), AuthError> {
        let existing = self.users.get(target).ok_or(AuthError::UserNotFound)?;

        if existing.is_admin() {
            return Err(AuthError::ProtectedAccount);
        }

        self.users.delete(target).map_err(|e| match e {
            StoreError::NotFound(_) => AuthError::UserNotFound,
            other => AuthError::Store(other),
        })
    }

    /// Look up a user's public view by id.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if the user does not exist.
    pub fn get_user(&self, id: UserId) -> Result<PublicUser, AuthError> {
        self.users
            .get(id)
            .map(|u| PublicUser::from(&u))
            .ok_or(AuthError::UserNotFound)
    }
}

// =============================================================================
// Password hashing
// =============================================================================

/// Hash a password with argon2 and a fresh random salt.
pub(crate) fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AuthError::PasswordHash)?;
    Ok(hash.to_string())
}

/// Verify a password against a stored PHC-format hash.
fn verify_password(password: &str, stored_hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(stored_hash).map_err(|_| AuthError::PasswordHash)?;
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use crate::models::User;
    use crate::store::MemoryUserStore;

    use super::*;

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(&SecretString::from("kJ8#mP2$vN5@qR9!wX3^zL6&tY1*uB4%"))
    }

    fn registration(email: &str) -> Registration {
        Registration {
            name: "muskan".to_owned(),
            email: email.to_owned(),
            password: "customer123".to_owned(),
            phone: None,
            address: None,
        }
    }

    /// Seed an admin directly into the store (registration can't create one).
    fn seed_admin(store: &MemoryUserStore) -> User {
        store
            .create(NewUser {
                name: "admin".to_owned(),
                email: Email::parse("admin@newabhojan.com").expect("valid"),
                password_hash: hash_password("admin123").expect("hash"),
                role: Role::Admin,
                phone: None,
                address: None,
            })
            .expect("seed admin")
    }

    #[test]
    fn test_register_then_login() {
        let store = MemoryUserStore::new();
        let tokens = issuer();
        let auth = AuthService::new(&store, &tokens);

        let user = auth
            .register(registration("customer@example.com"))
            .expect("register");
        assert_eq!(user.role, Role::Customer);

        let outcome = auth
            .login("customer@example.com", "customer123")
            .expect("login");
        assert_eq!(outcome.user.id, user.id);
        assert!(!outcome.token.is_empty());
    }

    #[test]
    fn test_register_never_elevates_to_admin() {
        let store = MemoryUserStore::new();
        let tokens = issuer();
        let auth = AuthService::new(&store, &tokens);

        let user = auth
            .register(registration("sneaky@example.com"))
            .expect("register");
        assert_eq!(user.role, Role::Customer);
    }

    #[test]
    fn test_duplicate_registration_fails_second_time() {
        let store = MemoryUserStore::new();
        let tokens = issuer();
        let auth = AuthService::new(&store, &tokens);

        auth.register(registration("dup@example.com")).expect("first");
        let err = auth
            .register(registration("dup@example.com"))
            .expect_err("second must fail");
        assert!(matches!(err, AuthError::DuplicateEmail));

        // First registration unaffected: login still works.
        assert!(auth.login("dup@example.com", "customer123").is_ok());
    }

    #[test]
    fn test_wrong_password_and_unknown_email_look_identical() {
        let store = MemoryUserStore::new();
        let tokens = issuer();
        let auth = AuthService::new(&store, &tokens);
        auth.register(registration("real@example.com")).expect("register");

        let wrong_password = auth
            .login("real@example.com", "bad-password")
            .expect_err("wrong password");
        let unknown_email = auth
            .login("ghost@example.com", "customer123")
            .expect_err("unknown email");

        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_email, AuthError::InvalidCredentials));
    }

    #[test]
    fn test_admin_cannot_be_demoted() {
        let store = MemoryUserStore::new();
        let tokens = issuer();
        let auth = AuthService::new(&store, &tokens);
        let admin = seed_admin(&store);

        let err = auth
            .admin_update_user(
                admin.id,
                AdminUserUpdate {
                    role: Some(Role::Customer),
                    ..AdminUserUpdate::default()
                },
            )
            .expect_err("demotion must fail");
        assert!(matches!(err, AuthError::ProtectedAccount));

        // Role unchanged.
        assert!(store.get(admin.id).expect("still there").is_admin());
    }

    #[test]
    fn test_admin_cannot_be_deleted() {
        let store = MemoryUserStore::new();
        let tokens = issuer();
        let auth = AuthService::new(&store, &tokens);
        let admin = seed_admin(&store);

        let err = auth
            .admin_delete_user(admin.id)
            .expect_err("delete must fail");
        assert!(matches!(err, AuthError::ProtectedAccount));
        assert!(store.get(admin.id).is_some());
    }

    #[test]
    fn test_admin_cannot_reassign_taken_email() {
        let store = MemoryUserStore::new();
        let tokens = issuer();
        let auth = AuthService::new(&store, &tokens);

        auth.register(registration("first@example.com")).expect("first");
        let second = auth
            .register(registration("second@example.com"))
            .expect("second");

        let err = auth
            .admin_update_user(
                second.id,
                AdminUserUpdate {
                    email: Some("first@example.com".to_owned()),
                    ..AdminUserUpdate::default()
                },
            )
            .expect_err("taken email must be rejected");
        assert!(matches!(err, AuthError::DuplicateEmail));

        // Each login still resolves its own account.
        let outcome = auth
            .login("second@example.com", "customer123")
            .expect("login");
        assert_eq!(outcome.user.id, second.id);
    }

    #[test]
    fn test_admin_can_promote_customer() {
        let store = MemoryUserStore::new();
        let tokens = issuer();
        let auth = AuthService::new(&store, &tokens);

        let user = auth
            .register(registration("promote@example.com"))
            .expect("register");
        let updated = auth
            .admin_update_user(
                user.id,
                AdminUserUpdate {
                    role: Some(Role::Admin),
                    ..AdminUserUpdate::default()
                },
            )
            .expect("promotion");
        assert_eq!(updated.role, Role::Admin);
    }

    #[test]
    fn test_profile_password_change_rehashes() {
        let store = MemoryUserStore::new();
        let tokens = issuer();
        let auth = AuthService::new(&store, &tokens);

        let user = auth
            .register(registration("rotate@example.com"))
            .expect("register");
        auth.update_profile(
            user.id,
            ProfileUpdate {
                password: Some("new-password-9".to_owned()),
                ..ProfileUpdate::default()
            },
        )
        .expect("update");

        assert!(auth.login("rotate@example.com", "customer123").is_err());
        assert!(auth.login("rotate@example.com", "new-password-9").is_ok());
    }

    #[test]
    fn test_list_users_strips_hashes() {
        let store = MemoryUserStore::new();
        let tokens = issuer();
        let auth = AuthService::new(&store, &tokens);
        seed_admin(&store);

        let listed = auth.list_users();
        assert_eq!(listed.len(), 1);
        let json = serde_json::to_value(&listed).expect("serialize");
        assert!(!json.to_string().contains("argon2"));
    }
}
