use tokio::task::JoinHandle;
use tracing::{error, info, instrument, warn};

use crate::actor_framework::ResourceActor;
use crate::clients::{InvoiceClient, ProductClient};
use crate::dashboard::{DashboardError, DashboardStats};
use crate::domain::{Invoice, Product};
use crate::fixtures;
use super::{StoreConfig, SystemError};

/// The running store: one actor per collection and the clients that reach them.
///
/// Responsible for starting the actors, seeding them, and shutting them down.
/// Clients are cheap to clone; hand them to whatever needs the store instead
/// of sharing the coordinator.
pub struct BackOffice {
    pub products: ProductClient,
    pub invoices: InvoiceClient,
    handles: Vec<JoinHandle<()>>,
}

impl BackOffice {
    /// Spawns both actors on the current tokio runtime.
    #[instrument(name = "back_office", skip(config), fields(seeded = config.seed_fixtures))]
    pub fn start(config: StoreConfig) -> Self {
        info!("Starting back office");

        let (mut product_actor, product_client) = ResourceActor::<Product>::new(config.buffer_size, config.latency);
        let (mut invoice_actor, invoice_client) = ResourceActor::<Invoice>::new(config.buffer_size, config.latency);

        if config.seed_fixtures {
            product_actor = product_actor.with_records(fixtures::products());
            invoice_actor = invoice_actor.with_records(fixtures::invoices());
        }

        let handles = vec![
            tokio::spawn(product_actor.run()),
            tokio::spawn(invoice_actor.run()),
        ];

        info!("Back office started");

        Self {
            products: ProductClient::new(product_client),
            invoices: InvoiceClient::new(invoice_client),
            handles,
        }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, DashboardError> {
        DashboardStats::collect(&self.products, &self.invoices).await
    }

    /// Stops both actors once their queued requests are served. Clones of
    /// the clients held elsewhere get `ActorClosed` afterwards.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down back office");

        if let Err(e) = self.products.shutdown().await {
            warn!(error = %e, "Product actor already stopped");
        }
        if let Err(e) = self.invoices.shutdown().await {
            warn!(error = %e, "Invoice actor already stopped");
        }

        let mut result = Ok(());
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                result = Err(SystemError::TaskFailed(e));
            }
        }

        info!("Back office shutdown complete");
        result
    }
}
