//! Typed clients over the record actors.

#[macro_use]
mod macros;

pub mod cascade_client;
pub mod order_client;
pub mod product_client;
pub mod seller_client;

pub use cascade_client::*;
pub use order_client::*;
pub use product_client::*;
pub use seller_client::*;
