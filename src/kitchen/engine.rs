//! The kitchen workflow engine.
//!
//! Owns the shop's core state machine: distributing kitchen pizza copies
//! across staffed ovens, the `Open -> Pending -> Ready` transitions on
//! pizzas and orders, baking-duration bookkeeping, order-ready
//! reconciliation with the delivery hand-off, cancellation, and the advisory
//! time queries.
//!
//! The engine itself holds no entity state; everything lives behind the
//! catalog and order clients. It is driven single-file by
//! [`KitchenActor`](crate::kitchen::KitchenActor), which is what makes its
//! read-modify-write sequences safe.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::clients::{ActorClient, CatalogClient, OrderClient};
use crate::delivery::DriverAssignment;
use crate::kitchen::KitchenError;
use crate::model::{
    DeliveryType, OrderId, OrderState, PizzaState, Product, ProductCategory, ProductId,
};
use crate::time::Clock;

/// Fixed per-pizza baking duration, in seconds.
pub const MAX_BAKING_SECS: u64 = 300;

/// Sentinel returned by [`KitchenManagement::time_left`] for items that are
/// not baking yet: remaining time is unbounded/unknown.
pub const TIME_LEFT_UNBOUNDED: i64 = i64::MAX;

/// The kitchen workflow engine.
pub struct KitchenManagement {
    catalog: CatalogClient,
    orders: OrderClient,
    delivery: Arc<dyn DriverAssignment>,
    clock: Arc<dyn Clock>,
}

impl KitchenManagement {
    pub fn new(
        catalog: CatalogClient,
        orders: OrderClient,
        delivery: Arc<dyn DriverAssignment>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            orders,
            delivery,
            clock,
        }
    }

    /// Creates kitchen copies for every pizza unit of the order and
    /// distributes them across staffed ovens, shortest queue first (ties:
    /// first oven in id order).
    ///
    /// Fails when the order already has chefs (duplicate assignment) or no
    /// oven with a chef exists.
    pub async fn assign_ovens(&self, order_id: &OrderId) -> Result<(), KitchenError> {
        let order = self
            .orders
            .get(order_id.clone())
            .await?
            .ok_or_else(|| KitchenError::OrderNotFound(order_id.clone()))?;
        if !order.chefs.is_empty() {
            return Err(KitchenError::OvensAlreadyAssigned(order_id.clone()));
        }

        let mut ovens: Vec<Product> = self
            .catalog
            .find_by_category(ProductCategory::Oven)
            .await?
            .into_iter()
            .filter(|oven| oven.oven_chef().is_some())
            .collect();
        if ovens.is_empty() {
            return Err(KitchenError::NoStaffedOvens);
        }

        // One copy per ordered unit, for pizza and custom-pizza lines only.
        let mut copies: Vec<ProductId> = Vec::new();
        for line in &order.lines {
            let Some(product) = self.catalog.find_by_id(line.product.clone()).await? else {
                warn!(product = %line.product, "Order line references a missing product");
                continue;
            };
            if !product.is_pizza_template() {
                continue;
            }
            for _ in 0..line.quantity {
                let copy = self
                    .catalog
                    .create_kitchen_copy(product.id.clone(), order.id.clone())
                    .await?;
                copies.push(copy);
            }
        }

        info!(order = %order.id, copies = copies.len(), ovens = ovens.len(), "Distributing pizzas across ovens");
        for copy in copies {
            // Oven with the least pizzas, first one on a tie.
            let mut least = 0;
            for (i, oven) in ovens.iter().enumerate() {
                if oven.oven_queue().len() < ovens[least].oven_queue().len() {
                    least = i;
                }
            }

            if let Some(chef) = ovens[least].oven_chef().cloned() {
                self.orders.add_chef(order.id.clone(), chef).await?;
            }
            if let Some(queue) = ovens[least].oven_queue_mut() {
                queue.push(copy);
            }
            self.catalog.save(ovens[least].clone()).await?;
        }
        Ok(())
    }

    /// Transitions a kitchen pizza to `Pending` (start baking) or `Ready`
    /// (finish baking).
    ///
    /// Expected "not applicable" conditions (unknown id, item not queued in
    /// any oven, oven busy, item not the active one) come back as
    /// `Ok(false)`, never as errors.
    pub async fn change_pizza_state(&self, pizza_id: &ProductId, change_to: PizzaState) -> Result<bool, KitchenError> {
        let Some(pizza) = self.catalog.find_by_id(pizza_id.clone()).await? else {
            debug!(pizza = %pizza_id, "Unknown pizza id");
            return Ok(false);
        };
        if pizza.kitchen_state().is_none() {
            debug!(pizza = %pizza_id, "Not a kitchen copy");
            return Ok(false);
        }
        let Some(oven) = self.oven_of_pizza(&pizza.id).await? else {
            debug!(pizza = %pizza_id, "Pizza is not queued in any oven");
            return Ok(false);
        };

        match change_to {
            PizzaState::Pending => self.start_baking(pizza, oven).await,
            PizzaState::Ready => self.finish_baking(pizza, oven).await,
            PizzaState::Open => Ok(false),
        }
    }

    async fn start_baking(&self, mut pizza: Product, mut oven: Product) -> Result<bool, KitchenError> {
        if self.oven_busy(&oven).await? {
            return Ok(false);
        }
        // Only the queue head may go in; anything else would break the
        // "one pending pizza per oven, at the head" invariant.
        if oven.oven_queue().first() != Some(&pizza.id) {
            return Ok(false);
        }

        let order_id = pizza.kitchen_order().cloned().unwrap_or_default();
        let order = self
            .orders
            .get(order_id.clone())
            .await?
            .ok_or_else(|| KitchenError::OrderNotFound(order_id.clone()))?;

        let now = self.clock.now();
        // First pizza of the order going in fixes the open duration.
        if order.open_duration.is_none() {
            let open_for = Duration::from_secs(now.saturating_sub(order.created_at));
            info!(order = %order.id, secs = open_for.as_secs(), "Setting open duration for order");
            self.orders.set_open_duration(order.id.clone(), open_for).await?;
        }

        oven.set_baking_since(now);
        pizza.set_kitchen_state(PizzaState::Pending);
        self.orders.set_state(order.id, OrderState::Pending).await?;
        self.catalog.save(pizza).await?;
        self.catalog.save(oven).await?;
        Ok(true)
    }

    async fn finish_baking(&self, mut pizza: Product, mut oven: Product) -> Result<bool, KitchenError> {
        // The oven must actually be baking, and baking this pizza.
        if !self.oven_busy(&oven).await? {
            return Ok(false);
        }
        if oven.oven_queue().first() != Some(&pizza.id) {
            return Ok(false);
        }

        let order_id = pizza.kitchen_order().cloned().unwrap_or_default();
        let order = self
            .orders
            .get(order_id.clone())
            .await?
            .ok_or_else(|| KitchenError::OrderNotFound(order_id.clone()))?;

        let now = self.clock.now();
        let baked_for = Duration::from_secs(now.saturating_sub(oven.baking_since()));
        // No purpose yet; may later feed the time until the oven is free.
        oven.set_baking_since(now);

        // The order keeps the longest single bake as its pending duration.
        self.orders.record_bake_duration(order.id.clone(), baked_for).await?;

        pizza.set_kitchen_state(PizzaState::Ready);
        if let Some(queue) = oven.oven_queue_mut() {
            queue.retain(|id| id != &pizza.id);
        }
        self.catalog.save(pizza.clone()).await?;

        if self.order_baked_through(&order.id).await? {
            info!(order = %order.id, "All pizzas baked, order ready");
            self.orders.set_state(order.id.clone(), OrderState::Ready).await?;
            if order.delivery_type == DeliveryType::Delivery {
                self.delivery.assign_driver(&order).await?;
            }
        }

        // The copy was only ever kitchen bookkeeping; drop it entirely.
        self.catalog.hard_delete(pizza.id).await?;
        self.catalog.save(oven).await?;
        Ok(true)
    }

    /// Cancels all kitchen copies for the order, releasing their ovens.
    ///
    /// Only possible while the order is still `Open`; returns `false`
    /// otherwise. Queue slots freed here are not redistributed to other
    /// orders (known gap).
    pub async fn cancel_pizzas_for_order(&self, order_id: &OrderId) -> Result<bool, KitchenError> {
        let order = self
            .orders
            .get(order_id.clone())
            .await?
            .ok_or_else(|| KitchenError::OrderNotFound(order_id.clone()))?;
        if order.state != OrderState::Open {
            return Ok(false);
        }

        for pizza in self.kitchen_pizzas_of_order(order_id).await? {
            match self.oven_of_pizza(&pizza.id).await? {
                Some(mut oven) => {
                    if let Some(queue) = oven.oven_queue_mut() {
                        queue.retain(|id| id != &pizza.id);
                    }
                    self.catalog.save(oven).await?;
                }
                None => warn!(pizza = %pizza.id, "Kitchen copy was not queued in any oven"),
            }
            self.catalog.hard_delete(pizza.id).await?;
        }
        info!(order = %order_id, "Cancelled kitchen pizzas for order");
        Ok(true)
    }

    /// Upper bound on the time until all of the order's pizzas are baked,
    /// assuming instant human input.
    ///
    /// Only meaningful right after oven assignment; assigning another order
    /// to the same ovens in the meantime skews it.
    pub async fn order_time_estimate(&self, order_id: &OrderId) -> Result<Duration, KitchenError> {
        let order_pizzas: Vec<ProductId> = self
            .kitchen_pizzas_of_order(order_id)
            .await?
            .into_iter()
            .map(|p| p.id)
            .collect();

        let mut max_secs: i64 = 0;
        for oven in self.catalog.find_by_category(ProductCategory::Oven).await? {
            if !oven.oven_queue().iter().any(|id| order_pizzas.contains(id)) {
                continue;
            }
            let mut queue_secs = oven.oven_queue().len() as i64 * MAX_BAKING_SECS as i64;
            if self.oven_busy(&oven).await? {
                queue_secs -= self.clock.now().saturating_sub(oven.baking_since()) as i64;
            }
            if queue_secs > max_secs {
                max_secs = queue_secs;
            }
        }
        Ok(Duration::from_secs(max_secs as u64))
    }

    /// Seconds until the pizza is done.
    ///
    /// [`TIME_LEFT_UNBOUNDED`] when the pizza is not baking (or unknown);
    /// otherwise `MAX_BAKING_SECS` minus the elapsed bake, which goes
    /// negative once the bake overruns.
    pub async fn time_left(&self, pizza_id: &ProductId) -> Result<i64, KitchenError> {
        let Some(pizza) = self.catalog.find_by_id(pizza_id.clone()).await? else {
            return Ok(TIME_LEFT_UNBOUNDED);
        };
        if pizza.kitchen_state() != Some(PizzaState::Pending) {
            return Ok(TIME_LEFT_UNBOUNDED);
        }
        let Some(oven) = self.oven_of_pizza(&pizza.id).await? else {
            return Ok(TIME_LEFT_UNBOUNDED);
        };
        let elapsed = self.clock.now().saturating_sub(oven.baking_since()) as i64;
        Ok(MAX_BAKING_SECS as i64 - elapsed)
    }

    // --- Lookup helpers ---

    /// The oven whose queue contains the pizza, if any.
    async fn oven_of_pizza(&self, pizza_id: &ProductId) -> Result<Option<Product>, KitchenError> {
        let ovens = self.catalog.find_by_category(ProductCategory::Oven).await?;
        Ok(ovens.into_iter().find(|oven| oven.oven_queue().contains(pizza_id)))
    }

    /// Whether the oven's head item is actively baking.
    async fn oven_busy(&self, oven: &Product) -> Result<bool, KitchenError> {
        let Some(head) = oven.oven_queue().first() else {
            return Ok(false);
        };
        let Some(head_pizza) = self.catalog.find_by_id(head.clone()).await? else {
            warn!(oven = %oven.id, pizza = %head, "Oven queue head is missing from the catalog");
            return Ok(false);
        };
        Ok(head_pizza.kitchen_state() == Some(PizzaState::Pending))
    }

    /// All kitchen copies belonging to the order.
    async fn kitchen_pizzas_of_order(&self, order_id: &OrderId) -> Result<Vec<Product>, KitchenError> {
        let copies = self
            .catalog
            .find_by_category(ProductCategory::KitchenPizza)
            .await?
            .into_iter()
            .filter(|p| p.kitchen_order() == Some(order_id))
            .collect();
        Ok(copies)
    }

    /// True once no copy of the order is still `Open` or `Pending`.
    async fn order_baked_through(&self, order_id: &OrderId) -> Result<bool, KitchenError> {
        debug!(order = %order_id, "Checking whether order is baked through");
        let done = self
            .kitchen_pizzas_of_order(order_id)
            .await?
            .iter()
            .all(|p| !matches!(p.kitchen_state(), Some(PizzaState::Open) | Some(PizzaState::Pending)));
        Ok(done)
    }
}
