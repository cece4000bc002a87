use crate::clients::{CustomerClient, OrderClient, ProductClient};
use crate::config::SystemConfig;
use crate::service::CreateOrderService;
use crate::{customer_actor, order_actor, product_actor};
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The order service wired to the in-process actor stores.
pub type ActorOrderService = CreateOrderService<CustomerClient, ProductClient, OrderClient>;

/// Owns the customer, product and order actors.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
///
/// let customer_id = system.customer_client.create_customer(customer).await?;
/// let product_id = system.product_client.create_product(product).await?;
///
/// let service = system.create_order_service();
/// let order = service
///     .execute(customer_id, vec![OrderLineRequest::new(product_id, 2)])
///     .await?;
///
/// drop(service);
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub order_client: OrderClient,
    handles: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts the system with [`SystemConfig::default`].
    pub fn new() -> Self {
        Self::with_config(&SystemConfig::default())
    }

    /// Spawns each actor in its own task with the configured channel buffer.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn with_config(config: &SystemConfig) -> Self {
        let (customer_actor, customer_client) = customer_actor::new(config.buffer_size);
        let (product_actor, product_client) = product_actor::new(config.buffer_size);
        let (order_actor, order_client) = order_actor::new(config.buffer_size);

        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(order_actor.run(())),
        ];
        info!(buffer_size = config.buffer_size, "Order system started");

        Self {
            customer_client,
            product_client,
            order_client,
            handles,
        }
    }

    /// A [`CreateOrderService`] backed by clones of this system's clients.
    pub fn create_order_service(&self) -> ActorOrderService {
        CreateOrderService::new(
            self.customer_client.clone(),
            self.product_client.clone(),
            self.order_client.clone(),
        )
    }

    /// Drops the clients and waits for every actor task to finish.
    ///
    /// Actors stop once every client clone is gone, so services obtained from
    /// [`create_order_service`](Self::create_order_service) must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.customer_client);
        drop(self.product_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
