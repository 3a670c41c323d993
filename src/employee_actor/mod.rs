//! Employee-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::EmployeeClient;
use crate::framework::ResourceActor;
use crate::model::Employee;

/// Creates a new employee actor and its client.
pub fn new() -> (ResourceActor<Employee>, EmployeeClient) {
    let counter = Arc::new(AtomicU64::new(1));
    let next_id = move || {
        let id = counter.fetch_add(1, Ordering::SeqCst);
        format!("employee_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_id);
    let client = EmployeeClient::new(generic_client);

    (actor, client)
}
