//! Product listings, including the sales counters updated when an order completes.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
