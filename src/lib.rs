//! # Storefront
//!
//! Record store for a digital-goods storefront: sellers list downloadable
//! products, customers place orders against them, and completed orders feed
//! each product's sales counters.
//!
//! Every record type lives in its own actor ([`actor_framework::ResourceActor`]);
//! callers use the typed clients in [`clients`], wired together by
//! [`app_system::StorefrontSystem`].
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use storefront::app_system::StorefrontSystem;
//! use storefront::config::StorefrontConfig;
//! use storefront::domain::SellerCreate;
//!
//! let system = StorefrontSystem::new(&StorefrontConfig::default());
//! let seller_id = system.seller_client.create_seller(SellerCreate::new("ada", "ada@example.com")).await?;
//! let report = system.cascade_client.delete_seller(seller_id).await?;
//! assert_eq!(report.sellers.len(), 1);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod clients;
pub mod config;
pub mod domain;
pub mod order_actor;
pub mod product_actor;
pub mod seller_actor;

#[cfg(test)]
mod mock_framework;
