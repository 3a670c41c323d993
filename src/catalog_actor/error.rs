//! Error types for the catalog actor.

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A kitchen copy was requested from a product that is not a pizza
    /// template.
    #[error("Not a pizza template: {0}")]
    NotAPizzaTemplate(String),

    /// The product data provided is invalid.
    #[error("Catalog validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for CatalogError {
    fn from(msg: String) -> Self {
        CatalogError::ActorCommunicationError(msg)
    }
}
