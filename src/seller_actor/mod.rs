//! Seller accounts: the identity every product listing points at.

pub mod entity;
pub mod error;

pub use error::*;
