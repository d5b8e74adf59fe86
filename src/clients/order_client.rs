//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//!
//! Placement is validated entirely inside the actor (`Order::on_create`), since the
//! product-map check comes before the buyer check. Transitions are authorized here
//! first: acting user exists, then their role, and only then is the order looked up.
use crate::auth::authorize_user;
use crate::clients::UserClient;
use crate::framework::{ActorClient, FrameworkError, ResourceClient};
use crate::model::{Order, OrderCreate, OrderId, UserId};
use crate::order_actor::{OrderAction, OrderError, Transition};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    users: UserClient,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, users: UserClient) -> Self {
        Self { inner, users }
    }

    #[instrument(skip(self))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "Order placed");
        Ok(id)
    }

    /// Marks the order delivered. Expeditors only.
    pub async fn deliver_order(&self, id: OrderId, by: UserId) -> Result<Order, OrderError> {
        self.transition(id, by, Transition::Deliver).await
    }

    /// Cancels a placed order. Only the client who placed it.
    pub async fn cancel_order(&self, id: OrderId, by: UserId) -> Result<Order, OrderError> {
        self.transition(id, by, Transition::Cancel).await
    }

    /// Returns a delivered order, putting its items back into stock. Only the client
    /// who placed it.
    pub async fn return_order(&self, id: OrderId, by: UserId) -> Result<Order, OrderError> {
        self.transition(id, by, Transition::Return).await
    }

    /// Like `get`, but a missing order is an error.
    pub async fn order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.get(id).await?.ok_or(OrderError::InvalidOrderId)
    }

    #[instrument(skip(self))]
    async fn transition(
        &self,
        id: OrderId,
        by: UserId,
        transition: Transition,
    ) -> Result<Order, OrderError> {
        authorize_user(&self.users, by, transition.operation()).await?;
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderAction::new(transition, by))
            .await
            .map_err(Self::map_error)
    }
}

/// `delete` comes from the trait and skips the permission table; it is meant for
/// housekeeping, not for users. Deleting a placed order releases its reservation.
#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(_)) => OrderError::InvalidOrderId,
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MockClient;
    use crate::model::{Address, Role, User};

    fn user(id: u32, roles: &[Role]) -> User {
        User {
            id: UserId(id),
            first_name: "Elena".to_string(),
            surname: "Dumitru".to_string(),
            roles: roles.to_vec(),
            address: Address {
                city: "Brasov".to_string(),
                street: "Republicii".to_string(),
                number: 12,
                zipcode: "500030".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_role_is_checked_before_the_order_is_looked_up() {
        let mut users = MockClient::<User>::new();
        users.expect_get(UserId(1)).return_ok(Some(user(1, &[Role::Admin])));
        users.expect_get(UserId(2)).return_ok(None);
        // No order expectations: neither call may reach the order actor.
        let orders = MockClient::<Order>::new();
        let client = OrderClient::new(orders.client(), UserClient::new(users.client()));

        assert_eq!(
            client.deliver_order(OrderId(404), UserId(1)).await,
            Err(OrderError::AccessDenied)
        );
        assert_eq!(
            client.cancel_order(OrderId(404), UserId(2)).await,
            Err(OrderError::InvalidCustomerId)
        );

        users.verify();
        orders.verify();
    }

    #[tokio::test]
    async fn test_unknown_order_is_invalid_order_id() {
        let mut users = MockClient::<User>::new();
        users.expect_get(UserId(5)).return_ok(Some(user(5, &[Role::Expeditor])));
        let mut orders = MockClient::<Order>::new();
        orders
            .expect_action(OrderId(404))
            .return_err(FrameworkError::NotFound("order_404".to_string()));
        let client = OrderClient::new(orders.client(), UserClient::new(users.client()));

        assert_eq!(
            client.deliver_order(OrderId(404), UserId(5)).await,
            Err(OrderError::InvalidOrderId)
        );

        users.verify();
        orders.verify();
    }

    #[tokio::test]
    async fn test_entity_errors_survive_the_actor_boundary() {
        let mut orders = MockClient::<Order>::new();
        orders.expect_create().return_err(FrameworkError::EntityError(Box::new(
            OrderError::InvalidProducts,
        )));
        let client = OrderClient::new(orders.client(), UserClient::new(MockClient::new().client()));

        let result = client
            .place_order(OrderCreate {
                user_id: UserId(1),
                items: Default::default(),
            })
            .await;
        assert_eq!(result, Err(OrderError::InvalidProducts));
    }
}
