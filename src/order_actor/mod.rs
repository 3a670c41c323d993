//! Order-specific resource logic and entity implementation.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::ShopOrder;

/// Creates a new order actor and its client.
pub fn new() -> (ResourceActor<ShopOrder>, OrderClient) {
    let counter = Arc::new(AtomicU64::new(1));
    let next_id = move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("order_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_id);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
