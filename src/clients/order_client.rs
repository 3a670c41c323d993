use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{EmployeeId, OrderId, OrderState, ShopOrder, ShopOrderCreate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};

/// Client for interacting with the order actor.
///
/// State and duration mutations go through [`OrderAction`]s so every
/// read-check-write lands atomically inside the order actor's message loop.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<ShopOrder>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<ShopOrder>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order))]
    pub async fn create_order(&self, order: ShopOrderCreate) -> Result<OrderId, OrderError> {
        debug!(?order, "create_order called");
        self.inner.create(order).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn set_state(&self, id: OrderId, state: OrderState) -> Result<(), OrderError> {
        match self.perform(id, OrderAction::SetState(state)).await? {
            OrderActionResult::SetState(()) => Ok(()),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Records a chef on the order; returns `true` if newly added.
    #[instrument(skip(self))]
    pub async fn add_chef(&self, id: OrderId, chef: EmployeeId) -> Result<bool, OrderError> {
        match self.perform(id, OrderAction::AddChef(chef)).await? {
            OrderActionResult::AddChef(added) => Ok(added),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Records the open duration once; returns `false` if it was already set.
    #[instrument(skip(self))]
    pub async fn set_open_duration(&self, id: OrderId, duration: Duration) -> Result<bool, OrderError> {
        match self.perform(id, OrderAction::SetOpenDuration(duration)).await? {
            OrderActionResult::SetOpenDuration(recorded) => Ok(recorded),
            other => Err(Self::unexpected(other)),
        }
    }

    /// Offers one bake duration; returns the maximum observed so far.
    #[instrument(skip(self))]
    pub async fn record_bake_duration(&self, id: OrderId, duration: Duration) -> Result<Duration, OrderError> {
        match self.perform(id, OrderAction::RecordBakeDuration(duration)).await? {
            OrderActionResult::RecordBakeDuration(max) => Ok(max),
            other => Err(Self::unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn assign_driver(&self, id: OrderId, driver: EmployeeId) -> Result<(), OrderError> {
        match self.perform(id, OrderAction::AssignDriver(driver)).await? {
            OrderActionResult::AssignDriver(()) => Ok(()),
            other => Err(Self::unexpected(other)),
        }
    }

    async fn perform(&self, id: OrderId, action: OrderAction) -> Result<OrderActionResult, OrderError> {
        self.inner.perform_action(id, action).await.map_err(Self::map_error)
    }

    fn unexpected(result: OrderActionResult) -> OrderError {
        OrderError::ActorCommunicationError(format!("unexpected action result: {:?}", result))
    }
}

#[async_trait]
impl ActorClient<ShopOrder> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<ShopOrder> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
