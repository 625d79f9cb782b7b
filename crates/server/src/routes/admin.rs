//! Admin dashboard route handlers.
//!
//! Pure read-side aggregation; all mutation goes through the auth and
//! order routes.

use axum::{Json, extract::State};

use crate::middleware::RequireAdmin;
use crate::services::orders::{AdminStats, OrderService};
use crate::state::AppState;

/// GET /admin/stats - revenue over delivered orders and pending count.
pub async fn stats(
    RequireAdmin(_identity): RequireAdmin,
    State(state): State<AppState>,
) -> Json<AdminStats> {
    let service = OrderService::new(state.orders(), state.gateway());
    Json(service.stats())
}
