//! Entity trait implementation for the catalog [`Product`] type.
//!
//! This enables [`Product`] to be managed by the generic
//! [`ResourceActor`](crate::framework::ResourceActor).

use async_trait::async_trait;

use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductUpdate};

#[async_trait]
impl ActorEntity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type UpdateParams = ProductUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();

    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("product name must not be empty".to_string());
        }
        Ok(Product::new(id, params.name, params.price, params.kind))
    }

    /// Full-entity replace: the catalog's `save` writes back every mutable
    /// field in one message, which keeps read-modify-write flows in the
    /// kitchen engine atomic at the store level.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &Self::Context) -> Result<(), String> {
        self.name = update.name;
        self.price = update.price;
        self.kind = update.kind;
        Ok(())
    }

    async fn handle_action(&mut self, _action: Self::Action, _ctx: &Self::Context) -> Result<Self::ActionResult, String> {
        Ok(())
    }
}
