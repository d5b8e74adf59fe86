//! # Mock Clients
//!
//! [`MockClient<T>`] hands out a real [`ResourceClient<T>`] whose requests are answered
//! from a queue of expectations instead of by a running actor. It is the tool for
//! testing an actor against mocked dependencies: the order actor runs for real while
//! the user and product actors are replaced by scripted answers.
//!
//! | | MockClient | Real actor |
//! |---|---|---|
//! | State | none, scripted replies | real store |
//! | Error injection | `return_err` | needs the right state |
//! | Use case | logic *around* a client | the actor itself, full system |
//!
//! Expectations are consumed in order. A request that does not match the next
//! expectation (wrong kind or wrong id) panics the mock task, which the caller
//! observes as [`FrameworkError::ActorDropped`]. Call [`MockClient::verify`] at the end
//! of a test to assert every expectation was used.
//!
//! ```rust,ignore
//! let mut users = MockClient::<User>::new();
//! users.expect_get(UserId(1)).return_ok(Some(client_user));
//! let user_client = UserClient::new(users.client());
//! // ... exercise code that calls user_client.get(UserId(1)) ...
//! users.verify();
//! ```
//!
//! For one-off request inspection use [`create_mock_client`] with [`expect_action`].

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    FindByKey {
        key: String,
        response: Result<Option<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations. Must be called inside a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .expect("mock expectation lock poisoned")
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: expected, response })) => {
                        assert_eq!(id, expected, "MockClient: get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::FindByKey { key, respond_to },
                        Some(Expectation::FindByKey { key: expected, response }),
                    ) => {
                        assert_eq!(key, expected, "MockClient: find_by_key called with unexpected key");
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: expected, response }),
                    ) => {
                        assert_eq!(id, expected, "MockClient: action called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("MockClient: unexpected request {:?}", RequestKind::of(&request));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `find_by_key` lookup.
    pub fn expect_find_by_key(&mut self, key: impl Into<String>) -> FindByKeyExpectationBuilder<T> {
        FindByKeyExpectationBuilder {
            key: key.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics unless all expectations were met.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .expect("mock expectation lock poisoned")
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

#[derive(Debug)]
enum RequestKind {
    Create,
    Get,
    List,
    FindByKey,
    Update,
    Delete,
    Action,
}

impl RequestKind {
    fn of<T: ActorEntity>(request: &ResourceRequest<T>) -> Self {
        match request {
            ResourceRequest::Create { .. } => RequestKind::Create,
            ResourceRequest::Get { .. } => RequestKind::Get,
            ResourceRequest::List { .. } => RequestKind::List,
            ResourceRequest::FindByKey { .. } => RequestKind::FindByKey,
            ResourceRequest::Update { .. } => RequestKind::Update,
            ResourceRequest::Delete { .. } => RequestKind::Delete,
            ResourceRequest::Action { .. } => RequestKind::Action,
        }
    }
}

fn push<T: ActorEntity>(expectations: &Expectations<T>, expectation: Expectation<T>) {
    expectations
        .lock()
        .expect("mock expectation lock poisoned")
        .push_back(expectation);
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        push(&self.expectations, Expectation::Get { id: self.id, response: Ok(value) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Get { id: self.id, response: Err(error) });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        push(&self.expectations, Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Create { response: Err(error) });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        push(&self.expectations, Expectation::List { response: Ok(items) });
    }
}

/// Builder for `find_by_key` expectations.
pub struct FindByKeyExpectationBuilder<T: ActorEntity> {
    key: String,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> FindByKeyExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        push(&self.expectations, Expectation::FindByKey { key: self.key, response: Ok(value) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Expectations<T>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        push(&self.expectations, Expectation::Action { id: self.id, response: Ok(result) });
    }

    pub fn return_err(self, error: FrameworkError) {
        push(&self.expectations, Expectation::Action { id: self.id, response: Err(error) });
    }
}

/// Creates a client and the receiver its requests land on, for asserting on raw requests.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is an Action.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
