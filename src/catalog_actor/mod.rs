//! Catalog-specific resource logic and entity implementation.
//!
//! The catalog actor is the single store for every product-shaped record in
//! the shop: menu templates, toppings, ovens, vehicles and the ephemeral
//! kitchen pizza copies.

pub mod entity;
pub mod error;

pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::CatalogClient;
use crate::framework::ResourceActor;
use crate::model::Product;

/// Creates a new catalog actor and its client.
pub fn new() -> (ResourceActor<Product>, CatalogClient) {
    let counter = Arc::new(AtomicU64::new(1));
    let next_id = move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("product_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_id);
    let client = CatalogClient::new(generic_client);

    (actor, client)
}
