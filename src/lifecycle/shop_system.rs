use crate::clients::{OrderClient, ProductClient, UserClient};
use tracing::{error, info};

/// The running shop: three actors and the clients to reach them.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new(32);
///
/// let buyer = system.user_client.create_user(buyer_data).await?;
/// let order = system.order_client.place_order(order_data).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub user_client: UserClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns every actor with `buffer_size` as its channel capacity.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(buffer_size: usize) -> Self {
        // 1. Create actors (no dependencies)
        let (user_actor, user_client) = crate::user_actor::new(buffer_size);
        let (product_actor, product_client) =
            crate::product_actor::new(buffer_size, user_client.clone());
        let (order_actor, order_client) = crate::order_actor::new(buffer_size, user_client.clone());

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let product_handle = tokio::spawn(product_actor.run(()));
        let order_handle =
            tokio::spawn(order_actor.run((user_client.clone(), product_client.clone())));

        info!(buffer_size, "Shop started");
        Self {
            user_client,
            product_client,
            order_client,
            handles: vec![user_handle, product_handle, order_handle],
        }
    }

    /// Drops every client and waits for the actors to drain and exit.
    ///
    /// Clones of the clients held elsewhere (e.g. by the HTTP router) keep the actors
    /// alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Closing the channels makes each actor's `recv()` return `None`.
        drop(self.order_client);
        drop(self.product_client);
        drop(self.user_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
