//! Unified error handling.
//!
//! Provides a unified `ApiError` type that maps every failure in the
//! taxonomy to an HTTP status plus a `{"error": message}` JSON body. All
//! route handlers return `Result<T, ApiError>`; a failed request is logged
//! and answered, never fatal to the process.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::services::orders::OrderError;
use crate::services::token::TokenError;
use crate::store::StoreError;

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Authentication operation failed.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),

    /// Order lifecycle operation failed.
    #[error("order error: {0}")]
    Order(#[from] OrderError),

    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Missing, malformed, or expired token.
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Role check failed.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<TokenError> for ApiError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => Self::Unauthenticated("Invalid token".to_owned()),
            TokenError::Sign(_) => Self::Internal(err.to_string()),
        }
    }
}

impl ApiError {
    /// The HTTP status this error renders as.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Auth(err) => match err {
                AuthError::UserNotFound => StatusCode::NOT_FOUND,
                AuthError::Store(StoreError::NotFound(_)) => StatusCode::NOT_FOUND,
                // DuplicateEmail, InvalidCredentials, ProtectedAccount,
                // InvalidEmail all render as client errors.
                AuthError::DuplicateEmail
                | AuthError::InvalidCredentials
                | AuthError::ProtectedAccount
                | AuthError::InvalidEmail(_)
                | AuthError::Store(StoreError::Conflict(_)) => StatusCode::BAD_REQUEST,
                AuthError::PasswordHash | AuthError::TokenIssue => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Order(err) => match err {
                OrderError::EmptyCart | OrderError::MissingDeliveryInfo => StatusCode::BAD_REQUEST,
                OrderError::Forbidden => StatusCode::FORBIDDEN,
                OrderError::NotFound(_) | OrderError::Store(StoreError::NotFound(_)) => {
                    StatusCode::NOT_FOUND
                }
                OrderError::Store(StoreError::Conflict(_)) => StatusCode::BAD_REQUEST,
                OrderError::PaymentFailed(_) => StatusCode::BAD_GATEWAY,
            },
            Self::Store(err) => match err {
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::Conflict(_) => StatusCode::BAD_REQUEST,
            },
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The user-visible message. Internal details are never exposed.
    fn message(&self) -> String {
        match self {
            Self::Auth(err) => err.to_string(),
            Self::Order(err) => err.to_string(),
            Self::Store(err) => err.to_string(),
            Self::Unauthenticated(msg) | Self::Forbidden(msg) => msg.clone(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Internal(_) => "Server error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Internal(_)) {
            tracing::error!(error = %self, "Request error");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let status = self.status();
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
