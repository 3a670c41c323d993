//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! Log verbosity is controlled via the `RUST_LOG` environment variable:
//!
//! ```bash
//! # Compact workflow logs
//! RUST_LOG=info cargo test
//!
//! # Full payloads at function entry points
//! RUST_LOG=debug cargo test
//!
//! # Only the kitchen
//! RUST_LOG=papa_pizza::kitchen=debug cargo test
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: startup, shutdown, final store size
//! - **Entity operations**: Create, Get, List, Update, Delete and actions
//! - **Kitchen workflow**: oven distribution, state transitions, duration
//!   bookkeeping, delivery hand-off
//! - **Errors**: entity ids and failure reasons as structured fields
//!
//! A typical bake at `RUST_LOG=info`:
//!
//! ```text
//! INFO Distributing pizzas across ovens order="order_1" copies=3 ovens=2
//! INFO Setting open duration for order order="order_1" secs=42
//! INFO All pizzas baked, order ready order="order_1"
//! INFO Driver assigned driver="employee_3" units=3
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
