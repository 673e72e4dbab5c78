use tracing::{error, info, Instrument};
use storefront::app_system::{setup_tracing, StorefrontSystem};
use storefront::config::StorefrontConfig;
use storefront::domain::{OrderDetailCreate, ProductCreate, SellerCreate, StoredFile};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = StorefrontConfig::load().map_err(|e| e.to_string())?;
    setup_tracing(&config.log_level);

    info!(upload_dir = %config.upload_dir, "Starting storefront");

    let system = StorefrontSystem::new(&config);

    let seller_id = system
        .seller_client
        .create_seller(SellerCreate::new("alice", "alice@example.com"))
        .await
        .map_err(|e| e.to_string())?;

    let file = StoredFile::new(config.upload_dir.clone(), "field-guide.pdf").map_err(|e| e.to_string())?;
    let span = tracing::info_span!("listing");
    let product_id = async {
        info!("Listing product");
        system
            .product_client
            .create_product(ProductCreate {
                seller_id: seller_id.clone(),
                name: "Field Guide".to_string(),
                description: "A printable field guide".to_string(),
                price: 12.0,
                file,
            })
            .await
            .map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    let checkout = async {
        let order_id = system
            .order_client
            .create_order(OrderDetailCreate {
                customer_email: "bob@example.com".to_string(),
                product_id: product_id.clone(),
                amount: 1200,
                stripe_payment_intent: "pi_demo_0001".to_string(),
            })
            .await?;
        system.order_client.complete_order(order_id).await
    }
    .instrument(span)
    .await;

    match checkout {
        Ok(completed) => info!(
            order_id = %completed.order.id,
            total_sales = completed.product_sales.total_sales,
            total_sales_amount = completed.product_sales.total_sales_amount,
            "Order completed"
        ),
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    if let Ok(Some(product)) = system.product_client.get_product(product_id).await {
        info!(product = %product, file = %product.file, "Product state");
    }

    match system.cascade_client.delete_seller(seller_id).await {
        Ok(report) => info!(products = report.products.len(), orders = report.orders.len(), "Seller removed"),
        Err(e) => error!(error = %e, "Seller removal failed"),
    }

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Storefront stopped");
    Ok(())
}
