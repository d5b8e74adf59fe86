//! Represents a customer order.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
//! - Creation parameters ([`OrderCreate`])
//! - Transitions ([`OrderAction`](crate::order_actor::OrderAction))

use crate::model::{ProductId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Where an order is in its lifecycle. Derived from the order's flags, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderState {
    Placed,
    Delivered,
    Canceled,
    Returned,
}

impl Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderState::Placed => "placed",
            OrderState::Delivered => "delivered",
            OrderState::Canceled => "canceled",
            OrderState::Returned => "returned",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    /// Sorted by product id.
    pub items: Vec<OrderItem>,
    pub delivered: bool,
    pub canceled: bool,
    pub returned: bool,
}

impl Order {
    /// Creates a freshly placed order.
    ///
    /// Items come out in product id order because `items` is a `BTreeMap`.
    pub fn new(id: OrderId, user_id: UserId, items: &BTreeMap<ProductId, u32>) -> Self {
        Self {
            id,
            user_id,
            items: items
                .iter()
                .map(|(&product_id, &quantity)| OrderItem {
                    product_id,
                    quantity,
                })
                .collect(),
            delivered: false,
            canceled: false,
            returned: false,
        }
    }

    /// Canceled wins over every other flag, then returned, then delivered.
    pub fn state(&self) -> OrderState {
        if self.canceled {
            OrderState::Canceled
        } else if self.returned {
            OrderState::Returned
        } else if self.delivered {
            OrderState::Delivered
        } else {
            OrderState::Placed
        }
    }
}

/// Payload for placing a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub user_id: UserId,
    #[serde(rename = "productsIdsToQuantity")]
    pub items: BTreeMap<ProductId, u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed() -> Order {
        let items = BTreeMap::from([(ProductId(3), 1), (ProductId(1), 2)]);
        Order::new(OrderId(1), UserId(1), &items)
    }

    #[test]
    fn items_are_sorted_by_product_id() {
        let order = placed();
        let ids: Vec<_> = order.items.iter().map(|item| item.product_id).collect();
        assert_eq!(ids, vec![ProductId(1), ProductId(3)]);
        assert_eq!(order.state(), OrderState::Placed);
    }

    #[test]
    fn canceled_flag_dominates() {
        let mut order = placed();
        order.delivered = true;
        order.canceled = true;
        assert_eq!(order.state(), OrderState::Canceled);

        order.canceled = false;
        order.returned = true;
        assert_eq!(order.state(), OrderState::Returned);

        order.returned = false;
        assert_eq!(order.state(), OrderState::Delivered);
    }

    #[test]
    fn create_payload_uses_service_field_names() {
        let payload: OrderCreate =
            serde_json::from_str(r#"{"userId": 4, "productsIdsToQuantity": {"2": 5}}"#).unwrap();
        assert_eq!(payload.user_id, UserId(4));
        assert_eq!(payload.items.get(&ProductId(2)), Some(&5));
    }
}
