//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`MockClient`] to queue canned replies, or [`create_mock_client`] plus
//! [`expect_request`] to inspect each command as it arrives and answer it by hand.

use crate::framework::{Component, ComponentClient, FrameworkError, Request};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{mpsc, oneshot};

type Expectations<C> = Arc<Mutex<VecDeque<Result<<C as Component>::Reply, FrameworkError>>>>;

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// A mock client that answers requests from a queue of expected replies.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Dealership>::new();
/// mock.expect_request().return_ok(DealershipReply::TestDriveQueueSize(2));
///
/// let client = DealershipClient::new(mock.client());
/// assert_eq!(client.test_drive_queue_size().await?, 2);
/// mock.verify();
/// ```
pub struct MockClient<C: Component> {
    client: ComponentClient<C>,
    expectations: Expectations<C>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<C: Component> MockClient<C> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<Request<C>>(100);
        let expectations: Expectations<C> = Arc::new(Mutex::new(VecDeque::new()));
        let queued = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(Request { command, respond_to }) = receiver.recv().await {
                let next = lock(&queued).pop_front();
                match next {
                    Some(response) => {
                        let _ = respond_to.send(response);
                    }
                    None => panic!("Unexpected request: {command:?}"),
                }
            }
        });

        Self {
            client: ComponentClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ComponentClient<C> {
        self.client.clone()
    }

    /// Expects one more request.
    pub fn expect_request(&mut self) -> RequestExpectationBuilder<C> {
        RequestExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = lock(&self.expectations).len();
        if remaining != 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

impl<C: Component> Default for MockClient<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for request expectations.
pub struct RequestExpectationBuilder<C: Component> {
    expectations: Expectations<C>,
}

impl<C: Component> RequestExpectationBuilder<C> {
    /// Sets the expectation to return a successful reply.
    pub fn return_ok(self, reply: C::Reply) {
        lock(&self.expectations).push_back(Ok(reply));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        lock(&self.expectations).push_back(Err(error));
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client whose requests land on a receiver the test controls.
///
/// The test reads each command with [`expect_request`], asserts on it, and
/// answers through the returned responder. This makes it possible to check
/// exactly what a client wrapper sends, not just what it does with the reply.
pub fn create_mock_client<C: Component>(
    buffer_size: usize,
) -> (ComponentClient<C>, mpsc::Receiver<Request<C>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ComponentClient::new(sender), receiver)
}

/// Waits for the next request, returning its command and responder.
pub async fn expect_request<C: Component>(
    receiver: &mut mpsc::Receiver<Request<C>>,
) -> Option<(C::Command, oneshot::Sender<Result<C::Reply, FrameworkError>>)> {
    receiver
        .recv()
        .await
        .map(|Request { command, respond_to }| (command, respond_to))
}
