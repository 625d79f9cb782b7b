//! Authentication error types.

use thiserror::Error;

use crate::store::StoreError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] newa_bhojan_core::EmailError),

    /// Wrong password or unknown email. One variant for both so the
    /// response never reveals which part was wrong.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Email already registered.
    #[error("Email already in use")]
    DuplicateEmail,

    /// Attempted mutation of an admin account.
    #[error("Cannot modify admin user")]
    ProtectedAccount,

    /// User not found.
    #[error("User not found")]
    UserNotFound,

    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,

    /// Token issuing error.
    #[error("token issuing error")]
    TokenIssue,
}
