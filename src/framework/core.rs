//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`Component`]: The trait a stateful component implements to be driven by an actor.
//! - [`ComponentActor`]: The generic actor that owns a component and serializes access to it.
//! - [`ComponentClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Failures of the plumbing itself (closed channels) or of the component.

use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any component must implement to be driven by a [`ComponentActor`].
///
/// # Architecture Note
/// The component is ordinary synchronous code that takes `&mut self`. The actor
/// owns it and handles one command at a time, so a command that touches several
/// parts of the component (for example recording a sale and marking the car sold)
/// is never observed half done.
///
/// Associated types pin the message vocabulary: a component only accepts its own
/// `Command` enum and only answers with its own `Reply` enum.
pub trait Component: Send + 'static {
    /// Requests the component understands.
    type Command: Send + Debug;

    /// Successful answers.
    type Reply: Send + Debug;

    /// Domain errors returned by [`Component::handle`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Applies one command.
    fn handle(&mut self, command: Self::Command) -> Result<Self::Reply, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Component error: {0}")]
    Component(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor: a command plus where to send the answer.
#[derive(Debug)]
pub struct Request<C: Component> {
    pub command: C::Command,
    pub respond_to: Response<C::Reply>,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a single component.
///
/// This struct is the "Server" half of the actor. It owns the component and the
/// receiver end of the channel; no `Mutex` is needed because nothing else can
/// reach the component.
pub struct ComponentActor<C: Component> {
    receiver: mpsc::Receiver<Request<C>>,
    component: C,
}

impl<C: Component> ComponentActor<C> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the capacity of the request channel. When it is full,
    /// callers wait until there is space.
    pub fn new(component: C, buffer_size: usize) -> (Self, ComponentClient<C>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self { receiver, component };
        (actor, ComponentClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped, then hands the
    /// component back.
    pub async fn run(mut self) -> C {
        // Just the type name (e.g., "Dealership" instead of "dealership::dealership::Dealership")
        let component_type = std::any::type_name::<C>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(component_type, "Actor started");

        let mut handled: u64 = 0;
        while let Some(Request { command, respond_to }) = self.receiver.recv().await {
            debug!(component_type, ?command, "Request");
            let result = self
                .component
                .handle(command)
                .map_err(|e| {
                    warn!(component_type, error = %e, "Request failed");
                    FrameworkError::Component(Box::new(e))
                });
            handled += 1;
            // The caller may have given up waiting; nothing to do then.
            let _ = respond_to.send(result);
        }

        info!(component_type, handled, "Shutdown");
        self.component
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe handle for sending commands to a [`ComponentActor`].
///
/// Holds only a sender, so it is cheap to clone and share across tasks.
pub struct ComponentClient<C: Component> {
    sender: mpsc::Sender<Request<C>>,
}

// Derive would require `C: Clone`.
impl<C: Component> Clone for ComponentClient<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<C: Component> ComponentClient<C> {
    pub fn new(sender: mpsc::Sender<Request<C>>) -> Self {
        Self { sender }
    }

    pub async fn request(&self, command: C::Command) -> Result<C::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(Request { command, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
