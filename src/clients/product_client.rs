use tracing::{debug, error, info, instrument, warn};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::clients::SellerClient;
use crate::domain::{Product, ProductCreate, ProductPatch};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError, SalesSummary};

/// Client for interacting with the Product actor.
///
/// Holds a [`SellerClient`] so listings can only point at registered sellers.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
    seller_client: SellerClient,
}

crate::impl_client_methods!(ProductClient, Product, ProductError, product, products);

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>, seller_client: SellerClient) -> Self {
        Self { inner, seller_client }
    }

    /// Lists a product for an existing seller.
    ///
    /// The seller is checked again once the row exists: a cascade that removed
    /// the seller in between may have swept before the insert landed, so the
    /// new row is withdrawn instead of being left without a seller.
    #[instrument(skip(self), fields(seller_id = %params.seller_id))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<String, ProductError> {
        debug!("Sending request");
        let seller_id = params.seller_id.clone();
        self.check_seller(&seller_id).await?;

        let id = self.inner.create(params).await?;

        if let Err(e) = self.check_seller(&seller_id).await {
            warn!(product_id = %id, "Seller removed while listing, withdrawing product");
            match self.inner.delete(id.clone()).await {
                Ok(()) | Err(FrameworkError::NotFound(_)) => {}
                Err(rollback) => error!(product_id = %id, error = %rollback, "Failed to withdraw product"),
            }
            return Err(e);
        }

        info!(product_id = %id, "Product listed");
        Ok(id)
    }

    async fn check_seller(&self, seller_id: &str) -> Result<(), ProductError> {
        match self.seller_client.get_seller(seller_id.to_string()).await {
            Ok(Some(seller)) => {
                debug!(seller = %seller.username, "Seller validation successful");
                Ok(())
            }
            Ok(None) => {
                error!("Seller not found");
                Err(ProductError::InvalidSeller(seller_id.to_string()))
            }
            Err(e) => {
                error!(error = %e, "Seller validation failed");
                Err(ProductError::InvalidSeller(format!("Seller validation failed: {}", e)))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn products_by_seller(&self, seller_id: String) -> Result<Vec<Product>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.list_where(move |p: &Product| p.seller_id == seller_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_product(&self, id: String, patch: ProductPatch) -> Result<Product, ProductError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Counts one completed sale of `amount` against the product.
    #[instrument(skip(self))]
    pub async fn record_sale(&self, id: String, amount: u64) -> Result<SalesSummary, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::RecordSale { amount }).await {
            Ok(ProductActionResult::RecordSale(summary)) => {
                info!(total_sales = summary.total_sales, total_sales_amount = summary.total_sales_amount, "Sale recorded");
                Ok(summary)
            }
            Ok(other) => Err(ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
            Err(FrameworkError::Rejected(reason)) => Err(ProductError::CounterError(reason)),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn sales_summary(&self, id: String) -> Result<SalesSummary, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::SalesSummary).await? {
            ProductActionResult::SalesSummary(summary) => Ok(summary),
            other => Err(ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", other))),
        }
    }

    /// Removes the product row only; see [`crate::clients::CascadeClient::delete_product`].
    #[instrument(skip(self))]
    pub(crate) async fn delete_product(&self, id: String) -> Result<(), ProductError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    #[instrument(skip(self))]
    pub(crate) async fn delete_products_by_seller(&self, seller_id: String) -> Result<Vec<String>, ProductError> {
        debug!("Sending request");
        Ok(self.inner.delete_where(move |p: &Product| p.seller_id == seller_id).await?)
    }
}
