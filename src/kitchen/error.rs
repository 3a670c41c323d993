//! Error types for the kitchen workflow.
//!
//! Two tiers, matching how callers are expected to react:
//! - [`KitchenError`] variants are invariant violations or infrastructure
//!   failures. They abort the triggering request and are never retried.
//! - Expected "can't do that right now" conditions (oven busy, item unknown,
//!   order in the wrong state) are *not* errors; the workflow operations
//!   report them as `Ok(false)` and callers show a normal decline.

use thiserror::Error;

use crate::catalog_actor::CatalogError;
use crate::delivery::DeliveryError;
use crate::order_actor::OrderError;

/// Errors that can occur during kitchen workflow operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum KitchenError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Oven assignment was requested for an order that already has chefs.
    #[error("Ovens already assigned to order {0}")]
    OvensAlreadyAssigned(String),

    /// There is no oven with an assigned chef.
    #[error("There are no ovens with assigned employees")]
    NoStaffedOvens,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// An error occurred while communicating with the kitchen actor.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
