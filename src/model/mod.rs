//! Pure data structures shared by every dealership component.

pub mod car;
pub mod customer;
pub mod sale;
pub mod test_drive;

pub use car::*;
pub use customer::*;
pub use sale::*;
pub use test_drive::*;
