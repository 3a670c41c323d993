//! Error types for delivery assignment.

use thiserror::Error;

use crate::catalog_actor::CatalogError;
use crate::employee_actor::EmployeeError;
use crate::order_actor::OrderError;

/// Errors that can occur while assigning a driver.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DeliveryError {
    /// `assign_driver` was called for an order that is not delivered.
    #[error("Order {0} is not a delivery-type order")]
    NotADeliveryOrder(String),

    #[error(transparent)]
    Employee(#[from] EmployeeError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Order(#[from] OrderError),
}
