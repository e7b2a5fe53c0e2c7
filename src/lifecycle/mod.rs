//! Startup, shutdown and logging setup.

pub mod dealership_system;
pub mod tracing;

pub use dealership_system::*;
pub use self::tracing::setup_tracing;
