//! The kitchen actor and its client.
//!
//! The engine's transitions are multi-step read-modify-write sequences over
//! the catalog and order stores. Running them all through one actor's
//! sequential message loop is what serializes mutations per oven and per
//! order: two chefs pressing "start baking" against the same oven can no
//! longer both pass the emptiness check.

use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use crate::kitchen::{KitchenError, KitchenManagement};
use crate::model::{OrderId, PizzaState, ProductId};

/// Requests the kitchen actor processes, one at a time.
#[derive(Debug)]
pub enum KitchenRequest {
    AssignOvens {
        order: OrderId,
        respond_to: oneshot::Sender<Result<(), KitchenError>>,
    },
    ChangePizzaState {
        pizza: ProductId,
        change_to: PizzaState,
        respond_to: oneshot::Sender<Result<bool, KitchenError>>,
    },
    CancelOrder {
        order: OrderId,
        respond_to: oneshot::Sender<Result<bool, KitchenError>>,
    },
    TimeEstimate {
        order: OrderId,
        respond_to: oneshot::Sender<Result<Duration, KitchenError>>,
    },
    TimeLeft {
        pizza: ProductId,
        respond_to: oneshot::Sender<Result<i64, KitchenError>>,
    },
}

/// The "server" half: owns the engine and the receiver.
pub struct KitchenActor {
    receiver: mpsc::Receiver<KitchenRequest>,
    engine: KitchenManagement,
}

impl KitchenActor {
    pub fn new(buffer_size: usize, engine: KitchenManagement) -> (Self, KitchenClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { receiver, engine }, KitchenClient { sender })
    }

    /// Runs the kitchen's event loop until the channel closes.
    pub async fn run(mut self) {
        info!("Kitchen actor started");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                KitchenRequest::AssignOvens { order, respond_to } => {
                    debug!(%order, "AssignOvens");
                    let _ = respond_to.send(self.engine.assign_ovens(&order).await);
                }
                KitchenRequest::ChangePizzaState { pizza, change_to, respond_to } => {
                    debug!(%pizza, ?change_to, "ChangePizzaState");
                    let _ = respond_to.send(self.engine.change_pizza_state(&pizza, change_to).await);
                }
                KitchenRequest::CancelOrder { order, respond_to } => {
                    debug!(%order, "CancelOrder");
                    let _ = respond_to.send(self.engine.cancel_pizzas_for_order(&order).await);
                }
                KitchenRequest::TimeEstimate { order, respond_to } => {
                    debug!(%order, "TimeEstimate");
                    let _ = respond_to.send(self.engine.order_time_estimate(&order).await);
                }
                KitchenRequest::TimeLeft { pizza, respond_to } => {
                    debug!(%pizza, "TimeLeft");
                    let _ = respond_to.send(self.engine.time_left(&pizza).await);
                }
            }
        }
        info!("Kitchen actor shutdown");
    }
}

/// Client for the kitchen actor.
#[derive(Clone)]
pub struct KitchenClient {
    sender: mpsc::Sender<KitchenRequest>,
}

impl KitchenClient {
    /// Distributes the order's pizzas across staffed ovens.
    pub async fn assign_ovens(&self, order: OrderId) -> Result<(), KitchenError> {
        let (respond_to, response) = oneshot::channel();
        self.send(KitchenRequest::AssignOvens { order, respond_to }, response).await
    }

    /// Moves a pizza to `Pending` or `Ready`; `Ok(false)` means "not
    /// applicable right now".
    pub async fn change_pizza_state(&self, pizza: ProductId, change_to: PizzaState) -> Result<bool, KitchenError> {
        let (respond_to, response) = oneshot::channel();
        self.send(KitchenRequest::ChangePizzaState { pizza, change_to, respond_to }, response)
            .await
    }

    /// Convenience for `change_pizza_state(pizza, Pending)`.
    pub async fn start_baking(&self, pizza: ProductId) -> Result<bool, KitchenError> {
        self.change_pizza_state(pizza, PizzaState::Pending).await
    }

    /// Convenience for `change_pizza_state(pizza, Ready)`.
    pub async fn finish_baking(&self, pizza: ProductId) -> Result<bool, KitchenError> {
        self.change_pizza_state(pizza, PizzaState::Ready).await
    }

    /// Removes all of an `Open` order's pizzas from the kitchen.
    pub async fn cancel_pizzas_for_order(&self, order: OrderId) -> Result<bool, KitchenError> {
        let (respond_to, response) = oneshot::channel();
        self.send(KitchenRequest::CancelOrder { order, respond_to }, response).await
    }

    /// Rough upper bound until the order is fully baked.
    pub async fn order_time_estimate(&self, order: OrderId) -> Result<Duration, KitchenError> {
        let (respond_to, response) = oneshot::channel();
        self.send(KitchenRequest::TimeEstimate { order, respond_to }, response).await
    }

    /// Advisory seconds left for one pizza.
    pub async fn time_left(&self, pizza: ProductId) -> Result<i64, KitchenError> {
        let (respond_to, response) = oneshot::channel();
        self.send(KitchenRequest::TimeLeft { pizza, respond_to }, response).await
    }

    async fn send<R>(&self, request: KitchenRequest, response: oneshot::Receiver<Result<R, KitchenError>>) -> Result<R, KitchenError> {
        self.sender
            .send(request)
            .await
            .map_err(|_| KitchenError::ActorCommunicationError("kitchen actor closed".to_string()))?;
        response
            .await
            .map_err(|_| KitchenError::ActorCommunicationError("kitchen actor dropped response".to_string()))?
    }
}
