//! Shop orders and their lifecycle state.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{EmployeeId, ProductId};

/// Opaque generated key for orders.
pub type OrderId = String;

/// States a shop order moves through.
///
/// The kitchen drives `Open -> Pending -> Ready`; delivery and checkout glue
/// drive the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderState {
    Open,
    Pending,
    Ready,
    InDelivery,
    Completed,
    Cancelled,
}

impl OrderState {
    pub fn is_active(&self) -> bool {
        matches!(self, OrderState::Open | OrderState::Pending | OrderState::Ready | OrderState::InDelivery)
    }
}

/// How the order leaves the shop. Drivers are only assigned to `Delivery`
/// orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryType {
    Delivery,
    Pickup,
}

/// One line of an order: a catalog product and how many units of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: ProductId,
    pub quantity: u32,
}

/// An order as the workflow engine sees it.
///
/// The duration fields are elapsed-time metrics recorded for analytics; apart
/// from the pending-duration "max observed" rule they do not drive control
/// flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopOrder {
    pub id: OrderId,
    pub customer: String,
    pub state: OrderState,
    pub delivery_type: DeliveryType,
    pub lines: Vec<OrderLine>,
    /// Chefs whose ovens bake for this order (for the kitchen overview).
    pub chefs: Vec<EmployeeId>,
    pub driver: Option<EmployeeId>,
    /// Epoch seconds, stamped by the order actor's clock on creation.
    pub created_at: u64,
    pub completed_at: Option<u64>,
    /// Time from order creation until the first pizza went into an oven.
    pub open_duration: Option<Duration>,
    /// Longest single baking duration observed across the order's pizzas.
    pub pending_duration: Option<Duration>,
    pub ready_duration: Option<Duration>,
    pub total_duration: Option<Duration>,
}

impl ShopOrder {
    /// Total line units; this is the order's size for vehicle-slot purposes.
    pub fn unit_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// DTO for order creation. `created_at` is stamped by the actor, not the
/// caller.
#[derive(Debug, Clone)]
pub struct ShopOrderCreate {
    pub customer: String,
    pub delivery_type: DeliveryType,
    pub lines: Vec<OrderLine>,
}
