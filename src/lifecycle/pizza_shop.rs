use std::sync::Arc;

use tracing::{error, info};

use crate::clients::{CatalogClient, EmployeeClient, OrderClient};
use crate::delivery::DeliveryService;
use crate::kitchen::{KitchenActor, KitchenClient, KitchenManagement};
use crate::order_actor::OrderContext;
use crate::time::{Clock, SystemClock};
use crate::{catalog_actor, employee_actor, order_actor};

/// The main runtime orchestrator for the pizza shop.
///
/// `PizzaShop` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors
/// - **Dependency Wiring**: Injecting the clock into the order actor and the
///   store clients plus delivery into the kitchen
/// - **Resource Coordination**: One id generator per entity type
///
/// # Architecture
///
/// Three resource actors (catalog, order, employee) hold the state; the
/// kitchen actor drives the workflow across them; `DeliveryService` hangs off
/// the kitchen as the ready-order hand-off.
///
/// # Example
///
/// ```ignore
/// let shop = PizzaShop::new();
///
/// let order_id = shop.order_client.create_order(order).await?;
/// shop.kitchen_client.assign_ovens(order_id).await?;
///
/// shop.shutdown().await?;
/// ```
pub struct PizzaShop {
    /// Client for the catalog actor (products, ovens, kitchen copies)
    pub catalog_client: CatalogClient,

    /// Client for the order actor
    pub order_client: OrderClient,

    /// Client for the employee actor
    pub employee_client: EmployeeClient,

    /// Client for the kitchen workflow actor
    pub kitchen_client: KitchenClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl PizzaShop {
    /// Creates and initializes a shop on the wall clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates and initializes a shop on an injected clock.
    ///
    /// Tests pass a [`ManualClock`](crate::time::ManualClock) here to drive
    /// baking durations deterministically.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        // 1. Create actors (no dependencies between them)
        let (catalog_actor, catalog_client) = catalog_actor::new();
        let (order_actor, order_client) = order_actor::new();
        let (employee_actor, employee_client) = employee_actor::new();

        // 2. Start resource actors with their injected context
        let catalog_handle = tokio::spawn(catalog_actor.run(()));
        let employee_handle = tokio::spawn(employee_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext { clock: clock.clone() }));

        // 3. Wire the workflow layer on top of the store clients
        let delivery = Arc::new(DeliveryService::new(
            employee_client.clone(),
            catalog_client.clone(),
            order_client.clone(),
        ));
        let engine = KitchenManagement::new(
            catalog_client.clone(),
            order_client.clone(),
            delivery,
            clock,
        );
        let (kitchen_actor, kitchen_client) = KitchenActor::new(32, engine);
        let kitchen_handle = tokio::spawn(kitchen_actor.run());

        Self {
            catalog_client,
            order_client,
            employee_client,
            kitchen_client,
            handles: vec![catalog_handle, employee_handle, order_handle, kitchen_handle],
        }
    }

    /// Gracefully shuts down the entire shop.
    ///
    /// Dropping the clients closes their channels; each actor drains its
    /// queue and exits. The kitchen actor goes first; it holds clones of
    /// the store clients, so the stores only see their channels close once
    /// the kitchen is gone.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop...");

        drop(self.kitchen_client);
        drop(self.catalog_client);
        drop(self.order_client);
        drop(self.employee_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Shop shutdown complete.");
        Ok(())
    }
}

impl Default for PizzaShop {
    fn default() -> Self {
        Self::new()
    }
}
