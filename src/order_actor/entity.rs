//! Entity trait implementation for the Order domain type.
//!
//! The order actor depends on the user and product actors
//! (`Context = (UserClient, ProductClient)`). Because the actor handles one message at
//! a time, a placement or a transition (read order, touch products, write order) never
//! interleaves with another one.

use super::actions::OrderAction;
use super::state::Transition;
use crate::auth::{authorize_user, Operation};
use crate::clients::{ProductClient, UserClient};
use crate::framework::{ActorClient, ActorEntity};
use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderState};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = (UserClient, ProductClient);
    type Error = OrderError;

    /// Builds the order; an empty product map or a zero quantity is rejected here,
    /// before any other actor is asked anything.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        if params.items.is_empty() || params.items.values().any(|&quantity| quantity == 0) {
            return Err(OrderError::InvalidProducts);
        }
        Ok(Order::new(id, params.user_id, &params.items))
    }

    /// Validates the buyer and the products, then reserves stock.
    ///
    /// Checks run in order: buyer exists, buyer may place orders, every product
    /// exists, every product has enough stock. If a reservation still fails, the
    /// reservations already taken are released.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), OrderError> {
        let (users, products) = ctx;

        authorize_user(users, self.user_id, Operation::PlaceOrder).await?;

        let mut stock = Vec::with_capacity(self.items.len());
        for item in &self.items {
            let product = products
                .get(item.product_id)
                .await?
                .ok_or(OrderError::InvalidProductId)?;
            stock.push(product.stock);
        }
        if self
            .items
            .iter()
            .zip(&stock)
            .any(|(item, &available)| available < item.quantity)
        {
            return Err(OrderError::NotEnoughStock);
        }

        let mut reserved: Vec<OrderItem> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if let Err(e) = products.reserve_stock(item.product_id, item.quantity).await {
                warn!(order_id = %self.id, product_id = %item.product_id, error = %e, "Reservation failed, releasing");
                release(products, &reserved).await;
                return Err(e.into());
            }
            reserved.push(*item);
        }

        info!(order_id = %self.id, items = self.items.len(), "Stock reserved");
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), OrderError> {
        Ok(())
    }

    /// A placed order still holds its reservation; deleting it gives the stock back.
    async fn on_delete(&self, ctx: &Self::Context) -> Result<(), OrderError> {
        if self.state() == OrderState::Placed {
            let (_, products) = ctx;
            release(products, &self.items).await;
            info!(order_id = %self.id, "Reservation released on delete");
        }
        Ok(())
    }

    /// Applies a transition. The acting user's role was checked by the client; here
    /// come ownership, the state machine and stock: a return puts every item back or
    /// fails, a cancel releases the reservation for whatever is still in the catalog.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &Self::Context,
    ) -> Result<Order, OrderError> {
        let (_, products) = ctx;
        let transition = action.transition();

        if transition.requires_ownership() && action.by() != self.user_id {
            return Err(OrderError::AccessDenied);
        }

        let next = transition.apply(self.state())?;

        match transition {
            Transition::Return => self.return_stock(products).await?,
            Transition::Cancel => release(products, &self.items).await,
            Transition::Deliver => {}
        }

        match transition {
            Transition::Deliver => self.delivered = true,
            Transition::Cancel => self.canceled = true,
            Transition::Return => self.returned = true,
        }
        debug_assert_eq!(self.state(), next);
        info!(order_id = %self.id, state = %next, "Order transitioned");

        Ok(self.clone())
    }
}

impl Order {
    /// Puts every item back into stock, or none of them.
    async fn return_stock(&self, products: &ProductClient) -> Result<(), OrderError> {
        for item in &self.items {
            products
                .get(item.product_id)
                .await?
                .ok_or(OrderError::InvalidProductId)?;
        }

        let mut restocked: Vec<OrderItem> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if let Err(e) = products.restock(item.product_id, item.quantity).await {
                warn!(order_id = %self.id, product_id = %item.product_id, error = %e, "Restock failed, rolling back");
                for done in &restocked {
                    if let Err(e) = products.reserve_stock(done.product_id, done.quantity).await {
                        warn!(product_id = %done.product_id, error = %e, "Rollback failed");
                    }
                }
                return Err(e.into());
            }
            restocked.push(*item);
        }
        Ok(())
    }
}

/// Gives back reserved stock (failed placement, canceled order). Products that no
/// longer exist are skipped.
async fn release(products: &ProductClient, reserved: &[OrderItem]) {
    for item in reserved {
        if let Err(e) = products.restock(item.product_id, item.quantity).await {
            warn!(product_id = %item.product_id, error = %e, "Release failed");
        }
    }
}
