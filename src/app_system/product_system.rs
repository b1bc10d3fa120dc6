use tracing::{error, info, instrument};

use crate::clients::ProductClient;
use crate::domain::Product;
use crate::product_actor;

const PRODUCT_CHANNEL_CAPACITY: usize = 32;

/// Owns the store actor's lifecycle.
///
/// Responsible for starting the actor, handing out its client and waiting for
/// it to stop on shutdown.
pub struct ProductSystem {
    pub product_client: ProductClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ProductSystem {
    /// Spawn the store actor pre-loaded with `seed`.
    #[instrument(name = "product_system", skip(seed), fields(seed_len = seed.len()))]
    pub fn new(seed: Vec<Product>) -> Self {
        info!("Starting product system");

        let (product_actor, product_client) =
            product_actor::new(PRODUCT_CHANNEL_CAPACITY, seed);
        let product_handle = tokio::spawn(product_actor.run());

        Self {
            product_client,
            handles: vec![product_handle],
        }
    }

    /// Drop this system's client and wait for the actor to finish.
    ///
    /// The actor stops once every client clone is gone, so callers must drop
    /// their own clones (e.g. the router) first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down product system");

        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Product system shutdown complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_catalog;

    #[tokio::test]
    async fn test_system_serves_seed_and_shuts_down() {
        let system = ProductSystem::new(sample_catalog());

        let products = system.product_client.list_products().await.unwrap();
        assert_eq!(products.len(), 3);

        system.shutdown().await.unwrap();
    }
}
