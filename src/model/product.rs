//! Represents a product in the catalog.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Creation parameters ([`ProductCreate`])
//! - Update parameters ([`ProductUpdate`])
//! - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "product_{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Ron,
    Eur,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// Unique across the catalog.
    pub code: String,
    pub description: String,
    pub price: f64,
    pub currency: Currency,
    pub stock: u32,
    pub valid: bool,
}

/// Payload for adding a product to the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub code: String,
    pub description: String,
    pub price: f64,
    pub currency: Currency,
    pub stock: u32,
    pub valid: bool,
}

/// Fields an editor may change. The code identifies the product and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub description: Option<String>,
    pub price: Option<f64>,
    pub currency: Option<Currency>,
    pub stock: Option<u32>,
    pub valid: Option<bool>,
}

impl From<ProductCreate> for ProductUpdate {
    fn from(product: ProductCreate) -> Self {
        Self {
            description: Some(product.description),
            price: Some(product.price),
            currency: Some(product.currency),
            stock: Some(product.stock),
            valid: Some(product.valid),
        }
    }
}
