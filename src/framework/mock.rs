//! # Mock Framework
//!
//! Utilities for testing resource clients without spawning a real actor.
//!
//! Use [`MockClient`] to queue the responses the "actor" should give, then
//! call [`MockClient::verify`] once the code under test has run.

use crate::framework::{ActorEntity, FrameworkError, ResourceClient, ResourceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

/// An expected request and the response to send back.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mock = MockClient::<Application>::new();
/// mock.expect_create().return_ok(ApplicationId(1));
///
/// let client = ApplicationClient::new(mock.client());
/// // exercise client...
/// mock.verify();
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();

                match (request, expectation) {
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
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

    pub fn expect_create(&self) -> ExpectationBuilder<T, T::Id> {
        self.builder(|response| Expectation::Create { response })
    }

    pub fn expect_get(&self) -> ExpectationBuilder<T, Option<T>> {
        self.builder(|response| Expectation::Get { response })
    }

    pub fn expect_list(&self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    pub fn expect_action(&self) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(|response| Expectation::Action { response })
    }

    fn builder<R>(
        &self,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if any queued expectation was not consumed.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Queues the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back((self.wrap)(response));
    }
}
