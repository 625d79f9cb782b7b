//! Authentication extractors.
//!
//! Route handlers declare their auth requirement by taking one of these
//! extractors as an argument. Both read the bearer token from the
//! `Authorization` header and verify it against the state's issuer.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::error::ApiError;
use crate::services::token::Identity;
use crate::state::AppState;

/// Extractor that requires a valid session token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAuth(identity): RequireAuth,
/// ) -> impl IntoResponse {
///     format!("Hello, user {}!", identity.id)
/// }
/// ```
pub struct RequireAuth(pub Identity);

/// Extractor that additionally requires the admin role.
pub struct RequireAdmin(pub Identity);

/// Pull the bearer token out of the `Authorization` header.
fn bearer_token(parts: &Parts) -> Result<&str, ApiError> {
    let header_value = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthenticated("No token provided".to_owned()))?;

    header_value
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError::Unauthenticated("No token provided".to_owned()))
}

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let identity = state
            .tokens()
            .verify(token)
            .map_err(|_| ApiError::Unauthenticated("Invalid token".to_owned()))?;

        Ok(Self(identity))
    }
}

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let RequireAuth(identity) = RequireAuth::from_request_parts(parts, state).await?;

        if !identity.is_admin() {
            return Err(ApiError::Forbidden("Access denied".to_owned()));
        }

        Ok(Self(identity))
    }
}
