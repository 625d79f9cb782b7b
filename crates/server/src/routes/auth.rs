//! Authentication and user management route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use newa_bhojan_core::{Role, UserId};

use crate::error::Result;
use crate::middleware::{RequireAdmin, RequireAuth};
use crate::models::PublicUser;
use crate::services::auth::{AdminUserUpdate, AuthService, ProfileUpdate, Registration};
use crate::state::AppState;

// =============================================================================
// Payload Types
// =============================================================================

/// Registration payload.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name ("username" kept for storefront compatibility).
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Login payload.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: the bearer token plus the public user view.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

/// Admin user-update payload. Role strings other than "admin" demote to
/// customer for non-admin targets; admin targets are protected.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
}

/// Self-service profile payload.
#[derive(Debug, Deserialize, Default)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub password: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /auth/register - create a customer account.
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<PublicUser>)> {
    let auth = AuthService::new(state.users(), state.tokens());
    let user = auth.register(Registration {
        name: body.username,
        email: body.email,
        password: body.password,
        phone: body.phone,
        address: body.address,
    })?;

    tracing::info!(user_id = %user.id, "User registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// POST /auth/login - verify credentials and issue a token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let auth = AuthService::new(state.users(), state.tokens());
    let outcome = auth.login(&body.email, &body.password)?;

    Ok(Json(LoginResponse {
        token: outcome.token,
        user: outcome.user,
    }))
}

/// GET /auth/users - all users, password hashes stripped (admin).
pub async fn list_users(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
) -> Json<Vec<PublicUser>> {
    let auth = AuthService::new(state.users(), state.tokens());
    Json(auth.list_users())
}

/// PUT /auth/users/{id} - update a user (admin; admin targets protected).
pub async fn update_user(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateUserRequest>,
) -> Result<Json<PublicUser>> {
    let auth = AuthService::new(state.users(), state.tokens());
    let user = auth.admin_update_user(
        UserId::new(id),
        AdminUserUpdate {
            name: body.name,
            email: body.email,
            role: body.role,
        },
    )?;

    Ok(Json(user))
}

/// DELETE /auth/users/{id} - delete a non-admin user (admin).
pub async fn delete_user(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>> {
    let auth = AuthService::new(state.users(), state.tokens());
    auth.admin_delete_user(UserId::new(id))?;

    Ok(Json(serde_json::json!({ "message": "User deleted" })))
}

/// PUT /auth/profile - update the caller's own profile.
pub async fn update_profile(
    RequireAuth(identity): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<PublicUser>> {
    let auth = AuthService::new(state.users(), state.tokens());
    let user = auth.update_profile(
        identity.id,
        ProfileUpdate {
            name: body.name,
            phone: body.phone,
            address: body.address,
            password: body.password,
        },
    )?;

    Ok(Json(user))
}
