//! # Dealership
//!
//! In-memory core of a car dealership: inventory, customers, test drives,
//! sales with undo, an inter-department workflow graph and budget-based
//! recommendations.
//!
//! ## Layers
//!
//! ### 1. The Core
//! Plain synchronous data structures, each in its own module, composed by
//! [`Dealership`](dealership::Dealership):
//! - [`inventory`]: [`InventoryStore`](inventory::InventoryStore), a linked list of cars with
//!   a [`PriceIndex`](inventory::PriceIndex) binary search tree kept in step with it.
//! - [`customer_directory`], [`test_drive_queue`], [`sale_ledger`]: map, FIFO and LIFO.
//! - [`workflow`]: the Sales → Finance → Service cycle and its breadth-first walk.
//! - [`recommender`]: max-heap ranking by budget headroom and popularity.
//! - [`catalog`] and [`order_log`]: the flat-file load and export formats.
//!
//! ### 2. The Engine ([`framework`])
//! A generic actor that owns one [`Component`](framework::Component) and feeds it
//! commands one at a time over a Tokio channel. No locks: the actor task is the
//! only owner.
//!
//! ### 3. The Interface ([`clients`])
//! [`DealershipClient`](clients::DealershipClient) wraps the generic client with
//! one typed async method per operation.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`DealershipSystem`](lifecycle::DealershipSystem) spawns the actor and shuts it
//! down; [`setup_tracing`](lifecycle::setup_tracing) installs logging.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod catalog;
pub mod clients;
pub mod config;
pub mod customer_directory;
pub mod dealership;
pub mod dealership_actor;
pub mod error;
pub mod framework;
pub mod inventory;
pub mod lifecycle;
pub mod model;
pub mod order_log;
pub mod recommender;
pub mod sale_ledger;
pub mod test_drive_queue;
pub mod workflow;
