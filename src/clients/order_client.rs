use tracing::{debug, error, info, instrument, warn};
use crate::actor_framework::{FrameworkError, ResourceClient};
use crate::clients::ProductClient;
use crate::domain::{OrderDetail, OrderDetailCreate, OrderDetailPatch};
use crate::order_actor::{OrderDetailAction, OrderDetailActionResult, OrderError, entity::ALREADY_PAID};
use crate::product_actor::SalesSummary;

/// Client for interacting with the OrderDetail actor.
///
/// This client handles the orchestration around an order: it checks the
/// product exists before opening an order, and feeds completed orders into
/// the product's sales counters.
#[derive(Clone)]
pub struct OrderDetailClient {
    inner: ResourceClient<OrderDetail>,
    product_client: ProductClient,
}

crate::impl_client_methods!(OrderDetailClient, OrderDetail, OrderError, order, orders);

/// Outcome of [`OrderDetailClient::complete_order`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedOrder {
    pub order: OrderDetail,
    pub product_sales: SalesSummary,
}

impl OrderDetailClient {
    pub fn new(inner: ResourceClient<OrderDetail>, product_client: ProductClient) -> Self {
        Self { inner, product_client }
    }

    /// Opens an order against an existing product.
    ///
    /// Like listings, the product is checked again after the insert so an order
    /// racing a cascade delete is withdrawn rather than orphaned.
    #[instrument(skip(self), fields(product_id = %params.product_id))]
    pub async fn create_order(&self, params: OrderDetailCreate) -> Result<String, OrderError> {
        info!("Processing create_order request");
        let product_id = params.product_id.clone();
        self.check_product(&product_id).await?;

        let id = self.inner.create(params).await?;

        if let Err(e) = self.check_product(&product_id).await {
            warn!(order_id = %id, "Product removed while ordering, withdrawing order");
            match self.inner.delete(id.clone()).await {
                Ok(()) | Err(FrameworkError::NotFound(_)) => {}
                Err(rollback) => error!(order_id = %id, error = %rollback, "Failed to withdraw order"),
            }
            return Err(e);
        }

        info!(order_id = %id, "Order created");
        Ok(id)
    }

    async fn check_product(&self, product_id: &str) -> Result<(), OrderError> {
        match self.product_client.get_product(product_id.to_string()).await {
            Ok(Some(product)) => {
                info!(product_name = %product, "Product validation successful");
                Ok(())
            }
            Ok(None) => {
                error!("Product not found");
                Err(OrderError::InvalidProduct(product_id.to_string()))
            }
            Err(e) => {
                error!(error = %e, "Product validation failed");
                Err(OrderError::InvalidProduct(format!("Product validation failed: {}", e)))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn orders_for_product(&self, product_id: String) -> Result<Vec<OrderDetail>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.list_where(move |o: &OrderDetail| o.product_id == product_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn update_order(&self, id: String, patch: OrderDetailPatch) -> Result<OrderDetail, OrderError> {
        debug!("Sending request");
        match self.inner.update(id.clone(), patch).await {
            Err(FrameworkError::Rejected(reason)) if reason == ALREADY_PAID => Err(OrderError::AlreadyPaid(id)),
            other => Ok(other?),
        }
    }

    /// Marks the order paid, then records the sale on its product.
    ///
    /// An order can only be completed once; a repeat call fails with
    /// [`OrderError::AlreadyPaid`] and leaves the product counters alone.
    /// If the sale cannot be recorded the paid flag is withdrawn again, so the
    /// order stays unpaid and the completion can be retried.
    #[instrument(skip(self))]
    pub async fn complete_order(&self, id: String) -> Result<CompletedOrder, OrderError> {
        info!("Processing complete_order request");

        let order = match self.inner.perform_action(id.clone(), OrderDetailAction::MarkPaid).await {
            Ok(OrderDetailActionResult::MarkPaid(order)) => order,
            Ok(other) => {
                return Err(OrderError::ActorCommunicationError(format!("Unexpected result: {:?}", other)));
            }
            Err(FrameworkError::Rejected(reason)) if reason == ALREADY_PAID => {
                warn!("Order was already paid");
                return Err(OrderError::AlreadyPaid(id));
            }
            Err(e) => {
                error!(error = %e, "Failed to mark order paid");
                return Err(e.into());
            }
        };
        info!(amount = order.amount, "Order marked paid");

        match self.product_client.record_sale(order.product_id.clone(), order.amount).await {
            Ok(product_sales) => Ok(CompletedOrder { order, product_sales }),
            Err(e) => {
                error!(error = %e, "Sale not recorded, reverting payment flag");
                if let Err(revert) = self.inner.perform_action(id, OrderDetailAction::RevertPaid).await {
                    error!(error = %revert, "Failed to revert payment flag");
                }
                Err(OrderError::SaleNotRecorded(e.to_string()))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn delete_order(&self, id: String) -> Result<(), OrderError> {
        debug!("Sending request");
        Ok(self.inner.delete(id).await?)
    }

    #[instrument(skip(self))]
    pub(crate) async fn delete_orders_for_product(&self, product_id: String) -> Result<Vec<String>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.delete_where(move |o: &OrderDetail| o.product_id == product_id).await?)
    }
}
