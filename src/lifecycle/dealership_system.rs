use crate::clients::DealershipClient;
use crate::config::DealershipConfig;
use crate::dealership::Dealership;
use crate::error::DealershipError;
use tracing::{error, info};

/// Runtime orchestrator for the dealership actor.
///
/// `DealershipSystem` is responsible for:
/// - **Lifecycle Management**: Spawning the actor task and stopping it again
/// - **Configuration**: Sizing the request channel from [`DealershipConfig`]
///
/// # Example
///
/// ```ignore
/// let system = DealershipSystem::start(&DealershipConfig::default());
///
/// let id = system.client.add_car(CarCreate::new("Ford", "Focus", 18000.0, 5)).await?;
/// let recs = system.client.recommend(30000.0).await?;
///
/// // Gracefully shut down when done
/// let dealership = system.shutdown().await?;
/// ```
pub struct DealershipSystem {
    /// Client for the dealership actor. Clone it to share across tasks.
    pub client: DealershipClient,

    /// Actor task; yields the dealership back once every client is gone.
    handle: tokio::task::JoinHandle<Dealership>,
}

impl DealershipSystem {
    /// Spawns the dealership actor around an empty [`Dealership`].
    ///
    /// Sample data is not seeded here; call
    /// [`DealershipClient::seed_sample_data`] when `config.seed_sample_data` asks for it.
    pub fn start(config: &DealershipConfig) -> Self {
        Self::start_with(Dealership::new(), config)
    }

    /// Spawns the dealership actor around an existing [`Dealership`].
    pub fn start_with(dealership: Dealership, config: &DealershipConfig) -> Self {
        let (actor, client) = crate::dealership_actor::new(dealership, config.channel_buffer);
        let handle = tokio::spawn(actor.run());
        info!(channel_buffer = config.channel_buffer, "Dealership system started");
        Self { client, handle }
    }

    /// Gracefully shuts down the system and returns the final dealership state.
    ///
    /// Dropping this system's client closes the channel once no clones remain;
    /// the actor drains what is queued and exits its loop. Clones held elsewhere
    /// keep the actor alive, so drop them first.
    ///
    /// # Errors
    ///
    /// [`DealershipError::ActorCommunication`] if the actor task panicked or
    /// was cancelled.
    pub async fn shutdown(self) -> Result<Dealership, DealershipError> {
        info!("Shutting down system...");

        drop(self.client);

        match self.handle.await {
            Ok(dealership) => {
                info!(
                    cars = dealership.inventory().len(),
                    customers = dealership.customers().len(),
                    sales = dealership.ledger().len(),
                    "System shutdown complete."
                );
                Ok(dealership)
            }
            Err(e) => {
                error!("Actor task failed: {:?}", e);
                Err(DealershipError::ActorCommunication(format!("Actor task failed: {e}")))
            }
        }
    }
}
