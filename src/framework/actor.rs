//! # Generic Actor Server
//!
//! [`ResourceActor`] owns the store of one entity type and processes requests
//! sequentially, so every handler runs with exclusive access to its state.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This is the "server" half: it owns the `store` and the receiving end of the channel.
/// Each actor handles one message at a time, which is what makes a multi-step handler
/// (read order, touch products, write order) behave like a single transaction.
///
/// # Operations
///
/// * **Create**: allocates the next id, calls `from_create_params`, rejects a taken
///   `unique_key`, runs `on_create`, then stores the entity.
/// * **Get** / **List** / **FindByKey**: clones out of the store; `List` is in id order.
/// * **Update**: runs `on_update` on the stored entity and returns the new state.
/// * **Delete**: runs `on_delete`, then removes the entity.
/// * **Action**: runs `handle_action` on the stored entity.
///
/// A failing hook leaves the store as it was before the request for Create and
/// Delete; Update and Action hooks are expected to mutate only once they know
/// they will succeed.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the mpsc channel; when it is full, client calls
    /// wait for room.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// The `context` is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Product" instead of "online_shop::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };

                    if let Some(key) = item.unique_key() {
                        let taken = self
                            .store
                            .values()
                            .any(|other| other.unique_key().as_deref() == Some(key.as_str()));
                        if taken {
                            warn!(entity_type, %key, "Unique key already taken");
                            let _ = respond_to.send(Err(FrameworkError::Conflict(key)));
                            continue;
                        }
                    }

                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }

                    self.next_id += 1;
                    self.store.insert(id.clone(), item);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let _ = respond_to.send(Ok(self.store.values().cloned().collect()));
                }
                ResourceRequest::FindByKey { key, respond_to } => {
                    let item = self
                        .store
                        .values()
                        .find(|item| item.unique_key().as_deref() == Some(key.as_str()))
                        .cloned();
                    let found = item.is_some();
                    debug!(entity_type, %key, found, "FindByKey");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Coupon {
        id: u32,
        code: String,
        uses_left: u32,
    }

    #[derive(Debug)]
    struct CouponCreate {
        code: String,
        uses: u32,
    }

    #[derive(Debug)]
    struct CouponUpdate {
        uses: Option<u32>,
    }

    #[derive(Debug)]
    enum CouponAction {
        Redeem,
    }

    #[derive(Debug, thiserror::Error)]
    enum CouponError {
        #[error("empty code")]
        EmptyCode,
        #[error("coupon exhausted")]
        Exhausted,
    }

    #[async_trait]
    impl ActorEntity for Coupon {
        type Id = u32;
        type Create = CouponCreate;
        type Update = CouponUpdate;
        type Action = CouponAction;
        type ActionResult = u32;
        type Context = ();
        type Error = CouponError;

        fn from_create_params(id: u32, params: CouponCreate) -> Result<Self, Self::Error> {
            if params.code.is_empty() {
                return Err(CouponError::EmptyCode);
            }
            Ok(Self {
                id,
                code: params.code,
                uses_left: params.uses,
            })
        }

        fn unique_key(&self) -> Option<String> {
            Some(self.code.clone())
        }

        async fn on_update(&mut self, update: CouponUpdate, _ctx: &()) -> Result<(), Self::Error> {
            if let Some(uses) = update.uses {
                self.uses_left = uses;
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: CouponAction, _ctx: &()) -> Result<u32, Self::Error> {
            match action {
                CouponAction::Redeem => {
                    self.uses_left = self.uses_left.checked_sub(1).ok_or(CouponError::Exhausted)?;
                    Ok(self.uses_left)
                }
            }
        }
    }

    fn coupon(code: &str, uses: u32) -> CouponCreate {
        CouponCreate {
            code: code.to_string(),
            uses,
        }
    }

    #[tokio::test]
    async fn test_resource_actor_lifecycle() {
        let (actor, client) = ResourceActor::<Coupon>::new(10);
        tokio::spawn(actor.run(()));

        let id = client.create(coupon("SPRING", 1)).await.unwrap();
        assert_eq!(id, 1);

        assert_eq!(client.perform_action(id, CouponAction::Redeem).await.unwrap(), 0);
        let exhausted = client.perform_action(id, CouponAction::Redeem).await;
        assert!(matches!(exhausted, Err(FrameworkError::EntityError(_))));

        let updated = client.update(id, CouponUpdate { uses: Some(5) }).await.unwrap();
        assert_eq!(updated.uses_left, 5);

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
        assert!(matches!(
            client.delete(id).await,
            Err(FrameworkError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unique_key_conflict_does_not_consume_id() {
        let (actor, client) = ResourceActor::<Coupon>::new(10);
        tokio::spawn(actor.run(()));

        assert_eq!(client.create(coupon("SPRING", 1)).await.unwrap(), 1);
        let duplicate = client.create(coupon("SPRING", 3)).await;
        assert!(matches!(duplicate, Err(FrameworkError::Conflict(key)) if key == "SPRING"));
        let invalid = client.create(coupon("", 3)).await;
        assert!(matches!(invalid, Err(FrameworkError::EntityError(_))));

        assert_eq!(client.create(coupon("SUMMER", 1)).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_list_returns_entities_in_id_order() {
        let (actor, client) = ResourceActor::<Coupon>::new(10);
        tokio::spawn(actor.run(()));

        for code in ["C", "A", "B"] {
            client.create(coupon(code, 1)).await.unwrap();
        }

        let codes: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.code)
            .collect();
        assert_eq!(codes, vec!["C", "A", "B"]);
    }

    #[tokio::test]
    async fn test_find_by_key() {
        let (actor, client) = ResourceActor::<Coupon>::new(10);
        tokio::spawn(actor.run(()));

        client.create(coupon("SPRING", 1)).await.unwrap();
        let id = client.create(coupon("SUMMER", 4)).await.unwrap();

        let found = client.find_by_key("SUMMER").await.unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.uses_left, 4);
        assert!(client.find_by_key("WINTER").await.unwrap().is_none());
    }
}
