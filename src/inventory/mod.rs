//! Car inventory: the owning store and the price-ordered index over it.

pub mod price_index;
pub mod store;

pub use price_index::{InOrder, PriceIndex};
pub use store::{InventoryStore, Iter};
