//! Type-safe wrappers around [`ComponentClient`](crate::framework::ComponentClient).

pub mod actor_client;
pub mod dealership_client;

pub use actor_client::*;
pub use dealership_client::*;
