//! Demo: seeds a customer and two products, then places one order that fits
//! the stock and one that does not.

use order_intake::config::SystemConfig;
use order_intake::model::{CustomerCreate, OrderLineRequest, ProductCreate};
use order_intake::runtime::{setup_tracing, OrderSystem};
use rust_decimal::Decimal;
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    let system = OrderSystem::with_config(&config);

    let customer_id = system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%customer_id, "Customer registered");

    let widget = system
        .product_client
        .create_product(ProductCreate {
            name: "Widget".to_string(),
            price: Decimal::new(1000, 2),
            quantity: 5,
        })
        .await
        .map_err(|e| e.to_string())?;
    let gadget = system
        .product_client
        .create_product(ProductCreate {
            name: "Gadget".to_string(),
            price: Decimal::new(2000, 2),
            quantity: 3,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(%widget, %gadget, "Catalog seeded");

    let service = system.create_order_service();

    let span = tracing::info_span!("first_order");
    let result = service
        .execute(
            customer_id.clone(),
            vec![
                OrderLineRequest::new(widget.clone(), 2),
                OrderLineRequest::new(gadget.clone(), 1),
            ],
        )
        .instrument(span)
        .await;
    match result {
        Ok(order) => info!(order_id = %order.id, total = %order.total(), "Order placed"),
        Err(e) => error!(error = %e, "Order failed"),
    }

    let span = tracing::info_span!("oversized_order");
    let result = service
        .execute(customer_id, vec![OrderLineRequest::new(gadget.clone(), 10)])
        .instrument(span)
        .await;
    match result {
        Ok(order) => error!(order_id = %order.id, "Oversized order was accepted"),
        Err(e) => warn!(error = %e, "Order rejected"),
    }

    for id in [widget, gadget] {
        let stock = system
            .product_client
            .check_stock(id.clone())
            .await
            .map_err(|e| e.to_string())?;
        info!(product_id = %id, stock, "Remaining stock");
    }

    drop(service);
    system.shutdown().await?;
    Ok(())
}
