//! Custom actions for the order actor.
//!
//! These are the atomic order mutations the kitchen and delivery components
//! rely on. Each one is applied inside the order actor's message loop, so a
//! read-check-write like the pending-duration max rule cannot interleave with
//! another request.

use std::time::Duration;

use crate::model::{EmployeeId, OrderState};

/// Custom actions for [`ShopOrder`](crate::model::ShopOrder) entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves the order to a new lifecycle state. Entering `Completed` stamps
    /// the completion timestamp.
    SetState(OrderState),
    /// Records a chef as involved with the order. Duplicates are ignored.
    AddChef(EmployeeId),
    /// Records the open duration (order creation until the first bake).
    /// Set-once: later calls are ignored.
    SetOpenDuration(Duration),
    /// Offers one finished bake's duration; the order keeps the maximum
    /// observed across all its pizzas.
    RecordBakeDuration(Duration),
    /// Records the driver taking the order out.
    AssignDriver(EmployeeId),
}

/// Results from order actions - variants match 1:1 with [`OrderAction`].
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    SetState(()),
    /// `true` if the chef was newly added.
    AddChef(bool),
    /// `true` if the duration was recorded, `false` if it was already set.
    SetOpenDuration(bool),
    /// The maximum bake duration observed so far.
    RecordBakeDuration(Duration),
    AssignDriver(()),
}
