//! The kitchen workflow: oven assignment, baking transitions, cancellation
//! and time queries.
//!
//! [`KitchenManagement`] implements the state machine; [`KitchenActor`] runs
//! it one request at a time (see the module docs in [`actor`]).

pub mod actor;
pub mod engine;
pub mod error;

pub use actor::*;
pub use engine::*;
pub use error::*;
