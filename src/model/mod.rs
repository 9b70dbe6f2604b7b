//! Pure data structures (DTOs) for the order desk.
//!
//! Nothing in here performs I/O. The [`Session`](crate::lifecycle::Session) builds
//! these values from operator input and hands them to the
//! [`OrderStore`](crate::store::OrderStore).

pub mod line_item;
pub mod money;
pub mod order;

pub use line_item::*;
pub use money::*;
pub use order::*;
