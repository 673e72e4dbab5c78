use thiserror::Error;
use tracing::{error, info, instrument};
use crate::clients::{OrderDetailClient, ProductClient, SellerClient};
use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::seller_actor::SellerError;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CascadeError {
    #[error(transparent)]
    Seller(#[from] SellerError),
    #[error(transparent)]
    Product(#[from] ProductError),
    #[error(transparent)]
    Order(#[from] OrderError),
}

/// Ids removed by a cascading delete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CascadeReport {
    pub sellers: Vec<String>,
    pub products: Vec<String>,
    pub orders: Vec<String>,
}

/// Deletes parent records together with everything that references them:
/// seller → products → order details.
///
/// The parent goes first so no new children can be attached to it while the
/// children are being swept.
#[derive(Clone)]
pub struct CascadeClient {
    seller_client: SellerClient,
    product_client: ProductClient,
    order_client: OrderDetailClient,
}

impl CascadeClient {
    pub fn new(seller_client: SellerClient, product_client: ProductClient, order_client: OrderDetailClient) -> Self {
        Self {
            seller_client,
            product_client,
            order_client,
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: String) -> Result<CascadeReport, CascadeError> {
        info!("Processing delete_product request");

        self.product_client.delete_product(id.clone()).await.map_err(|e| {
            error!(error = %e, "Product delete failed");
            e
        })?;
        let orders = self.order_client.delete_orders_for_product(id.clone()).await?;

        info!(orders = orders.len(), "Product deleted");
        Ok(CascadeReport {
            sellers: Vec::new(),
            products: vec![id],
            orders,
        })
    }

    #[instrument(skip(self))]
    pub async fn delete_seller(&self, id: String) -> Result<CascadeReport, CascadeError> {
        info!("Processing delete_seller request");

        self.seller_client.delete_seller(id.clone()).await.map_err(|e| {
            error!(error = %e, "Seller delete failed");
            e
        })?;
        let products = self.product_client.delete_products_by_seller(id.clone()).await?;

        let mut orders = Vec::new();
        for product_id in &products {
            orders.extend(self.order_client.delete_orders_for_product(product_id.clone()).await?);
        }

        info!(products = products.len(), orders = orders.len(), "Seller deleted");
        Ok(CascadeReport {
            sellers: vec![id],
            products,
            orders,
        })
    }
}
