//! # Create Order Service
//!
//! Validates a customer's order request against the catalog, persists the
//! order and writes back the reduced stock levels.
//!
//! ## Checks
//!
//! Performed in this order, the first failure wins:
//!
//! 1. Every requested quantity is at least 1 (no store is contacted otherwise).
//! 2. The customer exists.
//! 3. The catalog knows at least one of the requested products.
//! 4. The catalog knows every requested product (first unknown id, input order).
//! 5. No requested quantity exceeds available stock (first short product, input order).
//!
//! Requesting exactly the available stock is allowed.
//!
//! ## Writes
//!
//! Only when every check passes: one `OrderStore::create`, then one
//! `ProductStore::update_quantity` carrying `stock - ordered` for every
//! persisted line. Stock is matched to lines by product id, never by
//! position, because the order store may return lines in any order.
//!
//! Two concurrent calls for the same product can both pass the stock check.
//! Guarding against that is the product store's job.

use crate::model::{
    CustomerId, NewOrderLine, Order, OrderCreate, OrderLineRequest, Product, ProductId,
    QuantityUpdate,
};
use crate::service::CreateOrderError;
use crate::stores::{CustomerStore, OrderStore, ProductStore};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Order creation over interface-typed store handles.
pub struct CreateOrderService<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> CreateOrderService<C, P, O>
where
    C: CustomerStore,
    P: ProductStore,
    O: OrderStore,
{
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }

    /// Places an order for `customer_id`.
    ///
    /// A zero quantity is rejected before the customer is looked up, so it
    /// wins over `CustomerNotFound`.
    ///
    /// Lines naming the same product are merged first: the merged line keeps
    /// the position of the first occurrence and sums the quantities. A sum
    /// beyond `u32::MAX` can never be in stock and fails as `InsufficientStock`.
    ///
    /// Not idempotent. Calling it twice with the same input creates two
    /// orders and decrements stock twice.
    #[instrument(skip(self, products), fields(%customer_id, lines = products.len()))]
    pub async fn execute(
        &self,
        customer_id: CustomerId,
        products: Vec<OrderLineRequest>,
    ) -> Result<Order, CreateOrderError> {
        debug!(?products, "execute called");

        if let Some(line) = products.iter().find(|line| line.quantity == 0) {
            warn!(product_id = %line.product_id, "Rejected zero quantity");
            return Err(CreateOrderError::InvalidQuantity(line.product_id.clone()));
        }

        let Some(customer) = self.customers.find_by_id(&customer_id).await? else {
            warn!("Customer not found");
            return Err(CreateOrderError::CustomerNotFound);
        };

        let requested = merge_duplicates(products);
        let ids: Vec<ProductId> = requested.iter().map(|line| line.product_id.clone()).collect();

        let found = self.products.find_all_by_id(&ids).await?;
        if found.is_empty() {
            warn!("No requested product exists");
            return Err(CreateOrderError::NoProductsFound);
        }
        let catalog: HashMap<ProductId, Product> = found
            .into_iter()
            .map(|product| (product.id.clone(), product))
            .collect();

        if let Some(line) = requested
            .iter()
            .find(|line| !catalog.contains_key(&line.product_id))
        {
            warn!(product_id = %line.product_id, "Product not found");
            return Err(CreateOrderError::ProductNotFound(line.product_id.clone()));
        }

        if let Some(line) = requested.iter().find(|line| {
            catalog
                .get(&line.product_id)
                .is_some_and(|product| line.quantity > u64::from(product.quantity))
        }) {
            warn!(product_id = %line.product_id, requested = line.quantity, "Insufficient stock");
            return Err(CreateOrderError::InsufficientStock(line.product_id.clone()));
        }

        let lines = requested
            .iter()
            .map(|line| new_order_line(line, &catalog))
            .collect::<Result<Vec<_>, _>>()?;

        let order = self
            .orders
            .create(OrderCreate {
                customer,
                products: lines,
            })
            .await?;

        let updates = remaining_stock(&order, &catalog);
        self.products.update_quantity(&updates).await?;

        info!(
            order_id = %order.id,
            lines = order.ordered_lines.len(),
            total = %order.total(),
            "Order created"
        );
        Ok(order)
    }
}

/// A requested product after merging. The sum is kept in `u64`; any sum
/// above `u32::MAX` exceeds every possible stock level.
#[derive(Debug, PartialEq)]
struct MergedLine {
    product_id: ProductId,
    quantity: u64,
}

/// Folds repeated product ids into the first occurrence.
fn merge_duplicates(lines: Vec<OrderLineRequest>) -> Vec<MergedLine> {
    let mut merged: Vec<MergedLine> = Vec::with_capacity(lines.len());
    let mut position: HashMap<ProductId, usize> = HashMap::with_capacity(lines.len());

    for line in lines {
        match position.get(&line.product_id) {
            Some(&index) => {
                let existing = &mut merged[index];
                existing.quantity = existing.quantity.saturating_add(u64::from(line.quantity));
            }
            None => {
                position.insert(line.product_id.clone(), merged.len());
                merged.push(MergedLine {
                    product_id: line.product_id,
                    quantity: u64::from(line.quantity),
                });
            }
        }
    }
    merged
}

/// Pairs a checked line with its catalog price.
fn new_order_line(
    line: &MergedLine,
    catalog: &HashMap<ProductId, Product>,
) -> Result<NewOrderLine, CreateOrderError> {
    let product = catalog
        .get(&line.product_id)
        .ok_or_else(|| CreateOrderError::ProductNotFound(line.product_id.clone()))?;
    let quantity = u32::try_from(line.quantity)
        .map_err(|_| CreateOrderError::InsufficientStock(line.product_id.clone()))?;
    Ok(NewOrderLine {
        product_id: line.product_id.clone(),
        quantity,
        price: product.price,
    })
}

/// Stock left for each persisted line, from the snapshot taken before the order.
fn remaining_stock(order: &Order, catalog: &HashMap<ProductId, Product>) -> Vec<QuantityUpdate> {
    order
        .ordered_lines
        .iter()
        .filter_map(|line| match catalog.get(&line.product_id) {
            Some(product) => Some(QuantityUpdate {
                id: line.product_id.clone(),
                quantity: product.quantity.saturating_sub(line.quantity),
            }),
            None => {
                warn!(product_id = %line.product_id, "Stored line has no catalog entry");
                None
            }
        })
        .collect()
}
