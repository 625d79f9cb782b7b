//! Order lifecycle.
//!
//! Converts a cart plus delivery details into a stored order, scopes
//! listings by role, applies admin status overwrites, and computes the
//! dashboard aggregates.

use thiserror::Error;

use newa_bhojan_core::{Cart, OrderId, OrderStatus, PaymentMethod, Price};

use crate::models::{CustomerInfo, Order, OrderLine};
use crate::services::payment::PaymentGateway;
use crate::services::token::Identity;
use crate::store::{NewOrder, OrderStore, StoreError};

/// Errors from order lifecycle operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Checkout with no cart lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout with a blank address or phone.
    #[error("Delivery address and phone are required")]
    MissingDeliveryInfo,

    /// Role check failed.
    #[error("Access denied")]
    Forbidden,

    /// No order with the given id.
    #[error("Order not found")]
    NotFound(String),

    /// The external gateway rejected the payment.
    #[error("Payment failed: {0}")]
    PaymentFailed(String),

    /// Store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Delivery details captured at checkout.
#[derive(Debug, Clone)]
pub struct DeliveryDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Aggregates shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct AdminStats {
    /// Sum of totals over delivered orders.
    pub total_revenue: Price,
    /// Number of orders still pending.
    pub pending_count: usize,
}

/// Order lifecycle service over the order store and payment gateway.
pub struct OrderService<'a, G> {
    orders: &'a dyn OrderStore,
    gateway: &'a G,
}

impl<'a, G: PaymentGateway> OrderService<'a, G> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(orders: &'a dyn OrderStore, gateway: &'a G) -> Self {
        Self { orders, gateway }
    }

    /// Convert a cart into a stored order.
    ///
    /// Line items are snapshotted (name and price frozen), the total is
    /// recomputed server-side from the snapshot, and the order starts in
    /// `pending`. Wallet payments go through the gateway's confirmation
    /// step before anything is stored; the client clears its cart on a
    /// success response.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::EmptyCart` if the cart has no lines,
    /// `OrderError::MissingDeliveryInfo` if the address or phone is blank,
    /// and `OrderError::PaymentFailed` if the gateway declines.
    pub async fn checkout(
        &self,
        identity: Identity,
        cart: &Cart,
        delivery: DeliveryDetails,
        payment_method: PaymentMethod,
    ) -> Result<Order, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        if delivery.address.trim().is_empty() || delivery.phone.trim().is_empty() {
            return Err(OrderError::MissingDeliveryInfo);
        }

        let items: Vec<OrderLine> = cart.items().iter().map(OrderLine::from).collect();
        let total = cart.total();

        if payment_method.requires_gateway() {
            let confirmation = self
                .gateway
                .confirm(payment_method, total)
                .await
                .map_err(|e| OrderError::PaymentFailed(e.reason))?;
            tracing::info!(reference = %confirmation.reference, "Payment confirmed");
        }

        let order = self.orders.create(NewOrder {
            user_id: identity.id,
            items,
            total,
            status: OrderStatus::Pending,
            customer_info: CustomerInfo {
                name: delivery.name,
                email: delivery.email,
                phone: delivery.phone,
                address: delivery.address,
            },
            payment_method,
        });

        tracing::info!(order_id = %order.id, total = %order.total, "Order placed");
        Ok(order)
    }

    /// Orders visible to the caller: admins see everything, customers see
    /// only their own.
    #[must_use]
    pub fn list(&self, identity: Identity) -> Vec<Order> {
        if identity.is_admin() {
            self.orders.list()
        } else {
            self.orders.list_for_user(identity.id)
        }
    }

    /// Overwrite an order's status. Admin only; any status can replace any
    /// other.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Forbidden` for non-admin callers and
    /// `OrderError::NotFound` for unknown order ids.
    pub fn update_status(
        &self,
        identity: Identity,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, OrderError> {
        if !identity.is_admin() {
            return Err(OrderError::Forbidden);
        }

        self.orders
            .set_status(order_id, status)
            .map_err(|e| match e {
                StoreError::NotFound(_) => OrderError::NotFound(format!("order {order_id}")),
                other => OrderError::Store(other),
            })
    }

    /// Dashboard aggregates: revenue over delivered orders and the count
    /// of pending ones.
    #[must_use]
    pub fn stats(&self) -> AdminStats {
        let orders = self.orders.list();
        let total_revenue = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Delivered)
            .map(|o| o.total)
            .sum();
        let pending_count = orders
            .iter()
            .filter(|o| o.status == OrderStatus::Pending)
            .count();

        AdminStats {
            total_revenue,
            pending_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use newa_bhojan_core::{ProductId, Role, UserId};

    use crate::services::payment::SimulatedGateway;
    use crate::store::MemoryOrderStore;

    use super::*;

    fn customer() -> Identity {
        Identity {
            id: UserId::new(2),
            role: Role::Customer,
        }
    }

    fn admin() -> Identity {
        Identity {
            id: UserId::new(1),
            role: Role::Admin,
        }
    }

    fn delivery() -> DeliveryDetails {
        DeliveryDetails {
            name: "John Doe".to_owned(),
            email: "customer@example.com".to_owned(),
            phone: "+977 9876543210".to_owned(),
            address: "Lalitpur, Nepal".to_owned(),
        }
    }

    fn sample_cart() -> Cart {
        let mut cart = Cart::new();
        let yomari = (ProductId::new(1), "Yomari", Price::from_rupees(250));
        let chatamari = (ProductId::new(3), "Chatamari", Price::from_rupees(180));
        cart.add(yomari.0, yomari.1, yomari.2);
        cart.add(yomari.0, yomari.1, yomari.2);
        cart.add(chatamari.0, chatamari.1, chatamari.2);
        cart
    }

    #[tokio::test]
    async fn test_checkout_scenario_total_and_status() {
        // Cart: Yomari 250 x2 + Chatamari 180 x1 -> total 680, pending.
        let store = MemoryOrderStore::new();
        let gateway = SimulatedGateway;
        let service = OrderService::new(&store, &gateway);

        let order = service
            .checkout(customer(), &sample_cart(), delivery(), PaymentMethod::Cash)
            .await
            .expect("checkout");

        assert_eq!(order.total, Price::from_rupees(680));
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.user_id, UserId::new(2));
        assert_eq!(order.items.len(), 2);
    }

    #[tokio::test]
    async fn test_empty_cart_rejected_and_nothing_stored() {
        let store = MemoryOrderStore::new();
        let gateway = SimulatedGateway;
        let service = OrderService::new(&store, &gateway);

        let err = service
            .checkout(customer(), &Cart::new(), delivery(), PaymentMethod::Cash)
            .await
            .expect_err("must fail");
        assert!(matches!(err, OrderError::EmptyCart));
        assert!(store.list().is_empty());
    }

    #[tokio::test]
    async fn test_blank_delivery_info_rejected() {
        let store = MemoryOrderStore::new();
        let gateway = SimulatedGateway;
        let service = OrderService::new(&store, &gateway);

        let mut blank_address = delivery();
        blank_address.address = "   ".to_owned();
        let err = service
            .checkout(customer(), &sample_cart(), blank_address, PaymentMethod::Cash)
            .await
            .expect_err("blank address");
        assert!(matches!(err, OrderError::MissingDeliveryInfo));

        let mut blank_phone = delivery();
        blank_phone.phone = String::new();
        let err = service
            .checkout(customer(), &sample_cart(), blank_phone, PaymentMethod::Esewa)
            .await
            .expect_err("blank phone");
        assert!(matches!(err, OrderError::MissingDeliveryInfo));
        assert!(store.list().is_empty());
    }

    #[tokio::test]
    async fn test_wallet_checkout_goes_through_gateway() {
        let store = MemoryOrderStore::new();
        let gateway = SimulatedGateway;
        let service = OrderService::new(&store, &gateway);

        let order = service
            .checkout(customer(), &sample_cart(), delivery(), PaymentMethod::Khalti)
            .await
            .expect("checkout");
        assert_eq!(order.payment_method, PaymentMethod::Khalti);
    }

    #[tokio::test]
    async fn test_listing_is_role_scoped() {
        let store = MemoryOrderStore::new();
        let gateway = SimulatedGateway;
        let service = OrderService::new(&store, &gateway);

        let other = Identity {
            id: UserId::new(3),
            role: Role::Customer,
        };
        service
            .checkout(customer(), &sample_cart(), delivery(), PaymentMethod::Cash)
            .await
            .expect("first");
        service
            .checkout(other, &sample_cart(), delivery(), PaymentMethod::Cash)
            .await
            .expect("second");

        assert_eq!(service.list(admin()).len(), 2);
        assert_eq!(service.list(customer()).len(), 1);
        assert!(service.list(customer()).iter().all(|o| o.user_id == UserId::new(2)));
    }

    #[tokio::test]
    async fn test_status_update_is_admin_only() {
        let store = MemoryOrderStore::new();
        let gateway = SimulatedGateway;
        let service = OrderService::new(&store, &gateway);

        let order = service
            .checkout(customer(), &sample_cart(), delivery(), PaymentMethod::Cash)
            .await
            .expect("checkout");

        let err = service
            .update_status(customer(), order.id, OrderStatus::Delivered)
            .expect_err("customer must be rejected");
        assert!(matches!(err, OrderError::Forbidden));

        let updated = service
            .update_status(admin(), order.id, OrderStatus::Delivered)
            .expect("admin update");
        assert_eq!(updated.status, OrderStatus::Delivered);

        let err = service
            .update_status(admin(), OrderId::new(99), OrderStatus::Pending)
            .expect_err("unknown order");
        assert!(matches!(err, OrderError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_delivered_orders_enter_revenue() {
        let store = MemoryOrderStore::new();
        let gateway = SimulatedGateway;
        let service = OrderService::new(&store, &gateway);

        let first = service
            .checkout(customer(), &sample_cart(), delivery(), PaymentMethod::Cash)
            .await
            .expect("first");
        service
            .checkout(customer(), &sample_cart(), delivery(), PaymentMethod::Cash)
            .await
            .expect("second");

        let before = service.stats();
        assert_eq!(before.total_revenue, Price::ZERO);
        assert_eq!(before.pending_count, 2);

        service
            .update_status(admin(), first.id, OrderStatus::Delivered)
            .expect("deliver");

        let after = service.stats();
        assert_eq!(after.total_revenue, Price::from_rupees(680));
        assert_eq!(after.pending_count, 1);
    }
}
