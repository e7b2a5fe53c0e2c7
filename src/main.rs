//! Demo: seed the dealership, recommend, sell, undo, walk the workflow, and
//! serve a test drive.

use dealership::catalog::read_catalog_files;
use dealership::config::DealershipConfig;
use dealership::lifecycle::{setup_tracing, DealershipSystem};
use dealership::model::{CarId, CustomerId};
use dealership::order_log::OrderLogEntry;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = DealershipConfig::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting dealership");

    let system = DealershipSystem::start(&config);
    let client = &system.client;

    if config.seed_sample_data {
        client.seed_sample_data().await.map_err(|e| e.to_string())?;
    }

    match read_catalog_files(&config.names_path, &config.prices_path) {
        Ok(entries) => {
            let ids = client.load_catalog(entries).await.map_err(|e| e.to_string())?;
            info!(loaded = ids.len(), "Catalog cars added");
        }
        Err(e) => warn!(error = %e, "Catalog not loaded"),
    }

    let customer = client
        .find_customer(CustomerId(1))
        .await
        .map_err(|e| e.to_string())?;
    if let Some(customer) = customer {
        let span = tracing::info_span!("recommendation", customer = %customer.name);
        async {
            let recs = client.recommend(customer.budget).await.map_err(|e| e.to_string())?;
            for (rank, candidate) in recs.top(config.recommendation_depth).iter().enumerate() {
                info!(
                    rank = rank + 1,
                    car = %candidate.car.catalog_name(),
                    price = candidate.car.price,
                    score = candidate.score,
                    "Recommended"
                );
            }
            Ok::<_, String>(())
        }
        .instrument(span)
        .await?;
    }

    let span = tracing::info_span!("sale");
    async {
        let sale_id = client
            .record_sale(CustomerId(1), CarId(1), 25000.0, None)
            .await
            .map_err(|e| e.to_string())?;
        let history = client.sales_history().await.map_err(|e| e.to_string())?;
        let car = client.find_car(CarId(1)).await.map_err(|e| e.to_string())?;
        if let (Some(sale), Some(car)) = (history.first(), car) {
            match OrderLogEntry::for_sale(sale, &car, "Red") {
                Ok(entry) => info!(%sale_id, line = %entry.to_line(), "Order log entry"),
                Err(e) => warn!(%sale_id, error = %e, "Order log entry not built"),
            }
        }

        let undone = client.undo_last_sale().await.map_err(|e| e.to_string())?;
        info!(undone = ?undone.map(|s| s.id), "Last sale undone");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let order = client.workflow_bfs(0).await.map_err(|e| e.to_string())?;
    info!(?order, "Workflow from Sales");

    if let Some(drive) = client.process_next_test_drive().await.map_err(|e| e.to_string())? {
        info!(customer_id = %drive.customer_id, car_id = %drive.car_id, "Test drive processed");
    }

    client.check_consistency().await.map_err(|e| e.to_string())?;

    system.shutdown().await.map_err(|e| e.to_string())?;
    info!("Application completed successfully");
    Ok(())
}
