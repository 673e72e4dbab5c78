//! System orchestration, startup, and shutdown logic.

pub mod storefront_system;
pub mod telemetry;

pub use storefront_system::*;
pub use telemetry::*;
