//! Generic actor framework for a single stateful component.
//!
//! # Main Components
//!
//! - [`Component`] - Trait a synchronous component implements to be driven by an actor
//! - [`ComponentActor`] - Generic actor that owns the component
//! - [`ComponentClient`] - Typed, cloneable handle for sending it commands
//! - [`FrameworkError`] - Channel and component failures
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

pub use core::*;
