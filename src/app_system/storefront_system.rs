use thiserror::Error;
use tracing::{error, info, instrument};
use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::{CascadeClient, OrderDetailClient, ProductClient, SellerClient};
use crate::config::StorefrontConfig;
use crate::domain::{OrderDetail, Product, Seller};

/// Errors raised while running or stopping the system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTask(#[from] tokio::task::JoinError),
}

/// The application system that owns every record actor.
///
/// Starts the actors, wires the clients that need foreign-key checks to the
/// tables they reference, and handles shutdown.
pub struct StorefrontSystem {
    pub seller_client: SellerClient,
    pub product_client: ProductClient,
    pub order_client: OrderDetailClient,
    pub cascade_client: CascadeClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Must be called from within a tokio runtime.
    #[instrument(name = "storefront_system", skip(config))]
    pub fn new(config: &StorefrontConfig) -> Self {
        let buffer_size = config.actor_buffer_size;
        info!(buffer_size, "Starting storefront system");

        // Referenced tables first
        let (seller_actor, seller_inner) = ResourceActor::<Seller>::new(buffer_size, sequential_ids("seller"));
        let seller_client = SellerClient::new(seller_inner);
        let seller_handle = tokio::spawn(seller_actor.run());

        let (product_actor, product_inner) = ResourceActor::<Product>::new(buffer_size, sequential_ids("product"));
        let product_client = ProductClient::new(product_inner, seller_client.clone());
        let product_handle = tokio::spawn(product_actor.run());

        let (order_actor, order_inner) = ResourceActor::<OrderDetail>::new(buffer_size, sequential_ids("order"));
        let order_client = OrderDetailClient::new(order_inner, product_client.clone());
        let order_handle = tokio::spawn(order_actor.run());

        let cascade_client = CascadeClient::new(seller_client.clone(), product_client.clone(), order_client.clone());

        Self {
            seller_client,
            product_client,
            order_client,
            cascade_client,
            handles: vec![seller_handle, product_handle, order_handle],
        }
    }

    /// Drops every client, which closes the actor channels, then waits for the actors.
    ///
    /// Clones of the clients held elsewhere keep their actors alive, so drop
    /// them before calling this.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.cascade_client);
        drop(self.order_client);
        drop(self.product_client);
        drop(self.seller_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
