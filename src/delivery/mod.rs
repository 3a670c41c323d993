//! Delivery assignment.
//!
//! The kitchen hands a finished order to this component exactly once, when
//! the order flips to `Ready`. Everything behind [`DriverAssignment`] is a
//! collaborator from the kitchen's point of view; tests substitute a
//! recording double.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;

use async_trait::async_trait;

use crate::model::{EmployeeId, ShopOrder};

/// Seam between the kitchen workflow and driver dispatch.
#[async_trait]
pub trait DriverAssignment: Send + Sync {
    /// Picks a driver for a ready order. Returns `None` when no vehicle can
    /// take the order right now; the order then stays `Ready` without a
    /// driver.
    async fn assign_driver(&self, order: &ShopOrder) -> Result<Option<EmployeeId>, DeliveryError>;
}
