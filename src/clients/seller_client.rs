use tracing::{debug, info, instrument};
use crate::actor_framework::ResourceClient;
use crate::domain::{Seller, SellerCreate, SellerPatch};
use crate::seller_actor::SellerError;

/// Client for interacting with the Seller actor.
#[derive(Clone)]
pub struct SellerClient {
    inner: ResourceClient<Seller>,
}

crate::impl_basic_client!(SellerClient, Seller, SellerError, seller, sellers);

impl SellerClient {
    #[instrument(skip(self))]
    pub async fn create_seller(&self, params: SellerCreate) -> Result<String, SellerError> {
        debug!("Sending request");
        let id = self.inner.create(params).await?;
        info!(seller_id = %id, "Seller registered");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub async fn update_seller(&self, id: String, patch: SellerPatch) -> Result<Seller, SellerError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Removes the seller row only. Use [`crate::clients::CascadeClient::delete_seller`]
    /// to take the seller's products and orders with it.
    #[instrument(skip(self))]
    pub(crate) async fn delete_seller(&self, id: String) -> Result<(), SellerError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }
}
