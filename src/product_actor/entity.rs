//! Entity trait implementation for the Product domain type.
//!
//! Products are keyed by id inside the actor and by `code` for the outside world:
//! the code is the [`unique_key`](ActorEntity::unique_key), so the actor itself
//! rejects duplicates.

use super::actions::{ProductAction, ProductActionResult};
use crate::framework::ActorEntity;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::ProductError;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    /// Creates a new Product; a blank code is rejected.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        let code = params.code.trim();
        if code.is_empty() {
            return Err(ProductError::InvalidProductCode);
        }
        Ok(Self {
            id,
            code: code.to_string(),
            description: params.description,
            price: params.price,
            currency: params.currency,
            stock: params.stock,
            valid: params.valid,
        })
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.code.clone())
    }

    /// Applies every field present in the update. The code never changes.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(currency) = update.currency {
            self.currency = currency;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        if let Some(valid) = update.valid {
            self.valid = valid;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::ReserveStock(quantity) => {
                self.stock = self
                    .stock
                    .checked_sub(quantity)
                    .ok_or(ProductError::NotEnoughStock {
                        requested: quantity,
                        available: self.stock,
                    })?;
                Ok(ProductActionResult::ReserveStock(()))
            }
            ProductAction::AddStock(quantity) => {
                self.stock = self
                    .stock
                    .checked_add(quantity)
                    .ok_or(ProductError::StockOverflow {
                        added: quantity,
                        available: self.stock,
                    })?;
                Ok(ProductActionResult::AddStock(self.stock))
            }
        }
    }
}
