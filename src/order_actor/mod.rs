//! Order details: purchase attempts and their paid flag.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
