//! Entity trait implementation for the [`ShopOrder`] domain type.

use std::sync::Arc;

use async_trait::async_trait;

use crate::framework::ActorEntity;
use crate::model::{OrderState, ShopOrder, ShopOrderCreate};
use crate::order_actor::{OrderAction, OrderActionResult};
use crate::time::Clock;

/// Runtime dependencies injected into the order actor.
///
/// The clock stamps `created_at` and `completed_at`; injecting it keeps the
/// order lifecycle testable with a [`ManualClock`](crate::time::ManualClock).
pub struct OrderContext {
    pub clock: Arc<dyn Clock>,
}

#[async_trait]
impl ActorEntity for ShopOrder {
    type Id = String;
    type CreateParams = ShopOrderCreate;
    type UpdateParams = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;

    fn from_create_params(id: String, params: ShopOrderCreate) -> Result<Self, String> {
        if params.lines.is_empty() {
            return Err("order must have at least one line".to_string());
        }
        Ok(Self {
            id,
            customer: params.customer,
            state: OrderState::Open,
            delivery_type: params.delivery_type,
            lines: params.lines,
            chefs: Vec::new(),
            driver: None,
            created_at: 0, // stamped in on_create
            completed_at: None,
            open_duration: None,
            pending_duration: None,
            ready_duration: None,
            total_duration: None,
        })
    }

    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), String> {
        self.created_at = ctx.clock.now();
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    async fn handle_action(&mut self, action: OrderAction, ctx: &Self::Context) -> Result<OrderActionResult, String> {
        match action {
            OrderAction::SetState(state) => {
                self.state = state;
                if state == OrderState::Completed {
                    self.completed_at = Some(ctx.clock.now());
                }
                Ok(OrderActionResult::SetState(()))
            }
            OrderAction::AddChef(chef) => {
                if self.chefs.contains(&chef) {
                    Ok(OrderActionResult::AddChef(false))
                } else {
                    self.chefs.push(chef);
                    Ok(OrderActionResult::AddChef(true))
                }
            }
            OrderAction::SetOpenDuration(duration) => {
                if self.open_duration.is_some() {
                    Ok(OrderActionResult::SetOpenDuration(false))
                } else {
                    self.open_duration = Some(duration);
                    Ok(OrderActionResult::SetOpenDuration(true))
                }
            }
            OrderAction::RecordBakeDuration(duration) => {
                let max = match self.pending_duration {
                    Some(current) if current >= duration => current,
                    _ => {
                        self.pending_duration = Some(duration);
                        duration
                    }
                };
                Ok(OrderActionResult::RecordBakeDuration(max))
            }
            OrderAction::AssignDriver(driver) => {
                self.driver = Some(driver);
                Ok(OrderActionResult::AssignDriver(()))
            }
        }
    }
}
