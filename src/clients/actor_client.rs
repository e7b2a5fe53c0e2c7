use crate::framework::{Component, ComponentClient, FrameworkError};
use async_trait::async_trait;

/// Trait for component-specific clients to inherit the raw request path.
///
/// Implementors only say how to reach the generic client and how to turn a
/// [`FrameworkError`] into their own error type; `request` is provided.
#[async_trait]
pub trait ActorClient<C: Component>: Send + Sync {
    /// The component-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ComponentClient.
    fn inner(&self) -> &ComponentClient<C>;

    /// Map framework errors to the specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send one command and wait for the reply.
    #[tracing::instrument(skip(self))]
    async fn request(&self, command: C::Command) -> Result<C::Reply, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().request(command).await.map_err(Self::map_error)
    }
}
