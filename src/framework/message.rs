//! # Generic Messages
//!
//! The request envelope exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to an actor.
///
/// The variants are the CRUD lifecycle of a resource plus `List` and `FindByKey` for catalog reads and
/// `Action` for resource-specific logic (stock reservation, order transitions).
/// Being generic over `T: ActorEntity`, a product payload can't be sent to the order actor.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    /// Looks an entity up by its [`unique_key`](ActorEntity::unique_key).
    FindByKey {
        key: String,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
