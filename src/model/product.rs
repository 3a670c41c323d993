//! Catalog products: pizza templates, toppings, ovens, vehicles and the
//! ephemeral kitchen copies tracked while an order is being baked.

use serde::{Deserialize, Serialize};

use crate::model::{EmployeeId, OrderId};

/// Opaque generated key for catalog products.
pub type ProductId = String;

/// Coarse catalog grouping. Replaces the string categories the old shop
/// attached to every product; queries filter on this enum instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductCategory {
    Pizza,
    CustomPizza,
    KitchenPizza,
    Topping,
    Oven,
    Vehicle,
    Dishset,
    Consumable,
    Drink,
}

/// States a kitchen pizza copy moves through while the kitchen works on it.
///
/// `Pending` means "in the oven". A copy never outlives `Ready`: the kitchen
/// hard-deletes it as soon as the finishing transition is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PizzaState {
    Open,
    Pending,
    Ready,
}

/// The per-category payload of a [`Product`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProductKind {
    /// A pizza template on the menu. `custom` marks one-off customer builds.
    Pizza {
        toppings: Vec<ProductId>,
        custom: bool,
    },
    /// An ephemeral per-order copy of a pizza template, tracked only while
    /// baking. Belongs to exactly one order for its entire life.
    KitchenPizza {
        template: ProductId,
        toppings: Vec<ProductId>,
        state: PizzaState,
        order: OrderId,
    },
    Topping,
    /// An oven and its FIFO queue of kitchen-pizza ids. The head of the queue
    /// is the item currently baking, if any. `baking_since` is the
    /// epoch-seconds timestamp of when the head item went in.
    ///
    /// Invariant: at most one queued item is `Pending`, and it is the head.
    Oven {
        chef: Option<EmployeeId>,
        queue: Vec<ProductId>,
        baking_since: u64,
    },
    /// A delivery vehicle with a fixed number of order-unit slots.
    Vehicle { slots: u32, used_slots: u32 },
    Dishset,
    Consumable,
    Drink,
}

/// A catalog entity. Identity is an opaque generated key; relationships are
/// explicit foreign-key id fields inside [`ProductKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub kind: ProductKind,
}

impl Product {
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: f64, kind: ProductKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            kind,
        }
    }

    pub fn category(&self) -> ProductCategory {
        match &self.kind {
            ProductKind::Pizza { custom: false, .. } => ProductCategory::Pizza,
            ProductKind::Pizza { custom: true, .. } => ProductCategory::CustomPizza,
            ProductKind::KitchenPizza { .. } => ProductCategory::KitchenPizza,
            ProductKind::Topping => ProductCategory::Topping,
            ProductKind::Oven { .. } => ProductCategory::Oven,
            ProductKind::Vehicle { .. } => ProductCategory::Vehicle,
            ProductKind::Dishset => ProductCategory::Dishset,
            ProductKind::Consumable => ProductCategory::Consumable,
            ProductKind::Drink => ProductCategory::Drink,
        }
    }

    /// True for order lines the kitchen cares about (menu and custom pizzas).
    pub fn is_pizza_template(&self) -> bool {
        matches!(self.kind, ProductKind::Pizza { .. })
    }

    // --- Kitchen-copy accessors ---

    pub fn kitchen_state(&self) -> Option<PizzaState> {
        match &self.kind {
            ProductKind::KitchenPizza { state, .. } => Some(*state),
            _ => None,
        }
    }

    pub fn set_kitchen_state(&mut self, new_state: PizzaState) {
        if let ProductKind::KitchenPizza { state, .. } = &mut self.kind {
            *state = new_state;
        }
    }

    /// The order a kitchen copy belongs to.
    pub fn kitchen_order(&self) -> Option<&OrderId> {
        match &self.kind {
            ProductKind::KitchenPizza { order, .. } => Some(order),
            _ => None,
        }
    }

    // --- Oven accessors ---

    pub fn oven_chef(&self) -> Option<&EmployeeId> {
        match &self.kind {
            ProductKind::Oven { chef, .. } => chef.as_ref(),
            _ => None,
        }
    }

    /// The oven's queue; empty slice for non-oven products.
    pub fn oven_queue(&self) -> &[ProductId] {
        match &self.kind {
            ProductKind::Oven { queue, .. } => queue,
            _ => &[],
        }
    }

    pub fn oven_queue_mut(&mut self) -> Option<&mut Vec<ProductId>> {
        match &mut self.kind {
            ProductKind::Oven { queue, .. } => Some(queue),
            _ => None,
        }
    }

    pub fn baking_since(&self) -> u64 {
        match &self.kind {
            ProductKind::Oven { baking_since, .. } => *baking_since,
            _ => 0,
        }
    }

    pub fn set_baking_since(&mut self, now: u64) {
        if let ProductKind::Oven { baking_since, .. } = &mut self.kind {
            *baking_since = now;
        }
    }
}

/// DTO for product creation.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
    pub kind: ProductKind,
}

/// DTO for product updates. A full-entity replace: the catalog's `save`
/// writes back every mutable field, the way the old framework-managed store
/// persisted whole entities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: String,
    pub price: f64,
    pub kind: ProductKind,
}
