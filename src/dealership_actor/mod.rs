//! The dealership as an actor: commands, replies and the component impl.

pub mod actions;
pub mod component;

pub use actions::*;

use crate::clients::DealershipClient;
use crate::dealership::Dealership;
use crate::framework::ComponentActor;

/// Creates the dealership actor around `dealership` and its client.
pub fn new(dealership: Dealership, buffer_size: usize) -> (ComponentActor<Dealership>, DealershipClient) {
    let (actor, generic_client) = ComponentActor::new(dealership, buffer_size);
    (actor, DealershipClient::new(generic_client))
}
