//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//!
//! Catalog operations take the acting user's id and are authorized against the
//! permission table before any request reaches the actor. Stock operations by id
//! (`check_stock`, `reserve_stock`, `restock`) are unauthenticated; they are what the
//! order actor uses while placing and returning orders.
use crate::auth::{authorize_user, Operation};
use crate::clients::UserClient;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate, UserId};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
    users: UserClient,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>, users: UserClient) -> Self {
        Self { inner, users }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::Conflict(code)) => ProductError::DuplicateProductCode(code),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl ProductClient {
    // --- Catalog (role-gated) ---

    #[instrument(skip(self))]
    pub async fn add_product(
        &self,
        user_id: UserId,
        params: ProductCreate,
    ) -> Result<ProductId, ProductError> {
        authorize_user(&self.users, user_id, Operation::AddProduct).await?;
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Product added");
        Ok(id)
    }

    /// Updates the product carrying `code`.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        user_id: UserId,
        code: &str,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        authorize_user(&self.users, user_id, Operation::UpdateProduct).await?;
        let id = self.product_by_code(code).await?.id;
        self.inner
            .update(id, update)
            .await
            .map_err(Self::by_code_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, user_id: UserId, code: &str) -> Result<(), ProductError> {
        authorize_user(&self.users, user_id, Operation::DeleteProduct).await?;
        let id = self.product_by_code(code).await?.id;
        self.inner.delete(id).await.map_err(Self::by_code_error)?;
        info!(%id, code, "Product deleted");
        Ok(())
    }

    /// Adds `quantity` to the stock of the product carrying `code`, returning the new level.
    #[instrument(skip(self))]
    pub async fn add_stock(
        &self,
        user_id: UserId,
        code: &str,
        quantity: u32,
    ) -> Result<u32, ProductError> {
        authorize_user(&self.users, user_id, Operation::AddStock).await?;
        let id = self.product_by_code(code).await?.id;
        match self
            .inner
            .perform_action(id, ProductAction::AddStock(quantity))
            .await
        {
            Ok(ProductActionResult::AddStock(level)) => Ok(level),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(Self::by_code_error(e)),
        }
    }

    // --- Catalog reads ---

    #[instrument(skip(self))]
    pub async fn product_by_code(&self, code: &str) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner
            .find_by_key(code)
            .await
            .map_err(Self::map_error)?
            .ok_or(ProductError::InvalidProductCode)
    }

    /// All products, in creation order.
    pub async fn products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    // --- Stock (used by the order actor) ---

    /// Check the current stock level for a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, ProductError> {
        debug!("Checking stock for product {}", id);
        match self.action(id, ProductAction::CheckStock).await? {
            ProductActionResult::CheckStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    /// Reserve a specific amount of stock for a product.
    ///
    /// Returns `Ok(())` if successful, or `NotEnoughStock` leaving the stock untouched.
    #[instrument(skip(self))]
    pub async fn reserve_stock(&self, id: ProductId, quantity: u32) -> Result<(), ProductError> {
        debug!("Reserving {} units for product {}", quantity, id);
        match self.action(id, ProductAction::ReserveStock(quantity)).await? {
            ProductActionResult::ReserveStock(()) => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    /// Put `quantity` units back into a product's stock, returning the new level.
    #[instrument(skip(self))]
    pub async fn restock(&self, id: ProductId, quantity: u32) -> Result<u32, ProductError> {
        debug!("Restocking {} units for product {}", quantity, id);
        match self.action(id, ProductAction::AddStock(quantity)).await? {
            ProductActionResult::AddStock(level) => Ok(level),
            other => Err(unexpected(other)),
        }
    }

    async fn action(
        &self,
        id: ProductId,
        action: ProductAction,
    ) -> Result<ProductActionResult, ProductError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(|e| match e {
                FrameworkError::NotFound(_) => ProductError::InvalidProductId(id),
                other => Self::map_error(other),
            })
    }

    /// For operations addressed by code, a product vanishing between lookup and
    /// request reads the same as an unknown code.
    fn by_code_error(e: FrameworkError) -> ProductError {
        match e {
            FrameworkError::NotFound(_) => ProductError::InvalidProductCode,
            other => Self::map_error(other),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("Unexpected action result: {:?}", result))
}
