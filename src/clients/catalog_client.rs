use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::catalog_actor::CatalogError;
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{OrderId, PizzaState, Product, ProductCategory, ProductCreate, ProductId, ProductKind, ProductUpdate};

/// Client for interacting with the catalog actor.
///
/// This is the shop's product store: templates, ovens, vehicles and kitchen
/// pizza copies all live behind it. Category queries are client-side filters
/// over a full scan; the catalog is small (bounded by menu and equipment
/// size).
#[derive(Clone)]
pub struct CatalogClient {
    inner: ResourceClient<Product>,
}

impl CatalogClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, product))]
    pub async fn create_product(&self, product: ProductCreate) -> Result<ProductId, CatalogError> {
        debug!(name = %product.name, "Sending create_product to actor");
        self.inner.create(product).await.map_err(Self::map_error)
    }

    /// Fetch a product by id. Alias for the generic `get`, named after the
    /// store operation the workflow contract speaks of.
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        self.inner.get(id).await.map_err(Self::map_error)
    }

    /// All products of one category, sorted by id.
    ///
    /// The sort gives stable enumeration order; the kitchen's least-loaded
    /// tie-break ("first oven found") depends on it.
    #[instrument(skip(self))]
    pub async fn find_by_category(&self, category: ProductCategory) -> Result<Vec<Product>, CatalogError> {
        let mut products: Vec<Product> = self
            .inner
            .list()
            .await
            .map_err(Self::map_error)?
            .into_iter()
            .filter(|p| p.category() == category)
            .collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(products)
    }

    /// Write back a (locally modified) product. Full-entity replace.
    #[instrument(skip(self, product), fields(id = %product.id))]
    pub async fn save(&self, product: Product) -> Result<Product, CatalogError> {
        let update = ProductUpdate {
            name: product.name.clone(),
            price: product.price,
            kind: product.kind.clone(),
        };
        self.inner.update(product.id, update).await.map_err(Self::map_error)
    }

    /// Remove a product from the store entirely. Kitchen copies end here once
    /// baked (or cancelled).
    pub async fn hard_delete(&self, id: ProductId) -> Result<(), CatalogError> {
        self.delete(id).await
    }

    /// Create a fresh kitchen copy of a pizza template, linked to `order`,
    /// in state `Open`.
    #[instrument(skip(self))]
    pub async fn create_kitchen_copy(&self, template_id: ProductId, order: OrderId) -> Result<ProductId, CatalogError> {
        let template = self
            .find_by_id(template_id.clone())
            .await?
            .ok_or_else(|| CatalogError::NotFound(template_id.clone()))?;

        let toppings = match &template.kind {
            ProductKind::Pizza { toppings, .. } => toppings.clone(),
            _ => return Err(CatalogError::NotAPizzaTemplate(template_id)),
        };

        let copy = ProductCreate {
            name: template.name.clone(),
            price: template.price,
            kind: ProductKind::KitchenPizza {
                template: template.id,
                toppings,
                state: PizzaState::Open,
                order,
            },
        };
        self.inner.create(copy).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Product> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            other => CatalogError::ActorCommunicationError(other.to_string()),
        }
    }
}
