//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

use newa_bhojan_core::{Cart, CartItem, OrderId, OrderStatus, PaymentMethod};

use crate::error::Result;
use crate::middleware::{RequireAdmin, RequireAuth};
use crate::models::Order;
use crate::services::auth::AuthService;
use crate::services::orders::{DeliveryDetails, OrderService};
use crate::state::AppState;

/// Checkout payload: the client's held cart plus delivery details.
///
/// The cart lines are re-normalized server-side (duplicates merged, zero
/// quantities dropped) and the total is recomputed from the snapshot, so
/// nothing the client computed is trusted. On a 201 response the client
/// clears its cart.
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    pub items: Vec<CartItem>,
    pub phone: String,
    pub address: String,
    pub payment_method: PaymentMethod,
}

/// Status overwrite payload.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

/// POST /orders - convert the submitted cart into a pending order.
pub async fn checkout(
    RequireAuth(identity): RequireAuth,
    State(state): State<AppState>,
    Json(body): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<Order>)> {
    // Contact details come from the account; phone/address from the form.
    let auth = AuthService::new(state.users(), state.tokens());
    let user = auth.get_user(identity.id)?;

    let cart = Cart::from_items(body.items);
    let service = OrderService::new(state.orders(), state.gateway());
    let order = service
        .checkout(
            identity,
            &cart,
            DeliveryDetails {
                name: user.name,
                email: user.email.into_inner(),
                phone: body.phone,
                address: body.address,
            },
            body.payment_method,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders - orders visible to the caller (admins see all).
pub async fn list(
    RequireAuth(identity): RequireAuth,
    State(state): State<AppState>,
) -> Json<Vec<Order>> {
    let service = OrderService::new(state.orders(), state.gateway());
    Json(service.list(identity))
}

/// PUT /orders/{id}/status - overwrite an order's status (admin).
pub async fn update_status(
    RequireAdmin(identity): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<Order>> {
    let service = OrderService::new(state.orders(), state.gateway());
    let order = service.update_status(identity, OrderId::new(id), body.status)?;

    tracing::info!(order_id = %order.id, status = %order.status, "Order status updated");
    Ok(Json(order))
}
