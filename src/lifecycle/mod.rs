//! System lifecycle: wiring the actors together and shutting them down.

pub mod pizza_shop;
pub mod tracing;

pub use pizza_shop::*;
pub use self::tracing::setup_tracing;
