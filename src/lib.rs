//! # Papa Pizza
//!
//! > **A pizza-shop management core built on resource-oriented actors.**
//!
//! This crate implements the workflow heart of a pizza shop: a catalog of
//! products (pizzas, toppings, ovens, vehicles), orders with a lifecycle,
//! employees, delivery assignment, and at the center the kitchen: per-order
//! pizza copies distributed across staffed ovens, the
//! `Open -> Pending -> Ready` state machine, baking-duration bookkeeping and
//! the hand-off to delivery when the last pizza leaves the oven.
//!
//! ## 🏗️ Design Philosophy
//!
//! Each resource (product, order, employee) is managed by an isolated actor
//! that processes messages sequentially. That gives us:
//! - **No locks**: actor state is owned exclusively by its task.
//! - **Type safety**: associated types tie each actor to its own DTOs and
//!   actions at compile time.
//! - **Serialized workflows**: the kitchen runs as its own actor, so a
//!   baking transition can never interleave with another one. Two chefs
//!   racing to load the same oven is a message ordering, not a data race.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that powers every store.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Stores ([`catalog_actor`], [`order_actor`], [`employee_actor`])
//! Concrete `ActorEntity` implementations over the [`model`] types. The
//! catalog holds everything product-shaped, including the ephemeral kitchen
//! pizza copies; the order actor applies atomic order actions (state,
//! chefs, durations); employees are plain staff records.
//!
//! ### 3. The Interface ([`clients`])
//! Domain clients wrapping the generic `ResourceClient`:
//! [`CatalogClient`](clients::CatalogClient),
//! [`OrderClient`](clients::OrderClient),
//! [`EmployeeClient`](clients::EmployeeClient).
//!
//! ### 4. The Core ([`kitchen`])
//! [`KitchenManagement`](kitchen::KitchenManagement) implements oven
//! assignment (greedy least-loaded), the baking transitions, cancellation
//! and the advisory time queries; [`KitchenActor`](kitchen::KitchenActor)
//! serializes them.
//!
//! ### 5. The Edges ([`delivery`], [`lifecycle`], [`time`])
//! Driver assignment behind the [`DriverAssignment`](delivery::DriverAssignment)
//! seam, the [`PizzaShop`](lifecycle::PizzaShop) orchestrator, and the
//! injected [`Clock`](time::Clock) that makes every duration testable.
//!
//! ## 🚀 Quick Start
//!
//! ```ignore
//! use papa_pizza::lifecycle::PizzaShop;
//!
//! let shop = PizzaShop::new();
//! let order_id = shop.order_client.create_order(order).await?;
//! shop.kitchen_client.assign_ovens(order_id.clone()).await?;
//! // chefs drive pizzas with start_baking / finish_baking
//! shop.shutdown().await?;
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! RUST_LOG=info cargo test
//! ```

pub mod catalog_actor;
pub mod clients;
pub mod delivery;
pub mod employee_actor;
pub mod framework;
pub mod kitchen;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod time;
