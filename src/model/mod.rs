//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod employee;
pub mod order;
pub mod product;

pub use employee::*;
pub use order::*;
pub use product::*;
