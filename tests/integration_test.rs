use dealership::config::DealershipConfig;
use dealership::error::DealershipError;
use dealership::lifecycle::DealershipSystem;
use dealership::model::{CarCreate, CarId, CustomerCreate, CustomerId};
use dealership::workflow::Department;

fn config() -> DealershipConfig {
    DealershipConfig {
        channel_buffer: 8,
        ..DealershipConfig::default()
    }
}

/// Full end-to-end test with the real actor.
#[tokio::test]
async fn test_full_dealership_scenario() {
    let system = DealershipSystem::start(&config());
    let client = system.client.clone();

    client.seed_sample_data().await.expect("Failed to seed");

    // Inventory is listed most recent first, and by ascending price.
    let listed: Vec<u32> = client
        .list_inventory()
        .await
        .expect("Failed to list")
        .iter()
        .map(|c| c.id.0)
        .collect();
    assert_eq!(listed, vec![5, 4, 3, 2, 1]);

    let prices: Vec<f64> = client
        .cars_by_price()
        .await
        .expect("Failed to list by price")
        .iter()
        .map(|c| c.price)
        .collect();
    assert_eq!(prices, vec![18000.0, 22000.0, 25000.0, 45000.0, 55000.0]);

    // John (budget 30000): Civic 0.4567, Focus 0.43, Camry 0.3567.
    let recs = client.recommend(30000.0).await.expect("Failed to recommend");
    let models: Vec<&str> = recs.iter().map(|c| c.car.model.as_str()).collect();
    assert_eq!(models, vec!["Civic", "Focus", "Camry"]);

    // Selling the Camry removes it from recommendations; undo brings it back.
    let sale_id = client
        .record_sale(CustomerId(1), CarId(1), 25000.0, None)
        .await
        .expect("Failed to record sale");
    assert_eq!(sale_id.0, 1);
    let camry = client.find_car(CarId(1)).await.unwrap().expect("Camry not found");
    assert!(!camry.is_available);
    let recs = client.recommend(30000.0).await.unwrap();
    assert!(recs.iter().all(|c| c.car.id != CarId(1)));

    let undone = client.undo_last_sale().await.unwrap().expect("Nothing undone");
    assert_eq!(undone.car_id, CarId(1));
    assert!(!undone.sold_at.is_empty());
    assert!(client.find_car(CarId(1)).await.unwrap().unwrap().is_available);
    assert!(client.sales_history().await.unwrap().is_empty());
    assert!(client.undo_last_sale().await.unwrap().is_none());

    // Test drives come out in request order.
    let first = client.process_next_test_drive().await.unwrap().expect("Queue empty");
    assert_eq!((first.customer_id, first.car_id), (CustomerId(1), CarId(1)));
    assert_eq!(client.test_drive_queue_size().await.unwrap(), 1);

    let order = client.workflow_bfs(0).await.unwrap();
    assert_eq!(order, vec![Department::Sales, Department::Finance, Department::Service]);

    client.check_consistency().await.expect("Inconsistent state");

    drop(client);
    let dealership = system.shutdown().await.expect("Shutdown failed");
    assert_eq!(dealership.inventory().len(), 5);
}

#[tokio::test]
async fn test_domain_errors_survive_the_actor() {
    let system = DealershipSystem::start(&config());

    assert_eq!(
        system.client.recommend(0.0).await.unwrap_err(),
        DealershipError::InvalidBudget(0.0)
    );
    assert_eq!(
        system.client.workflow_bfs(3).await.unwrap_err(),
        DealershipError::UnknownDepartment(3)
    );
    assert_eq!(
        system
            .client
            .add_car(CarCreate::new("Ford", "Focus", -1.0, 5))
            .await
            .unwrap_err(),
        DealershipError::InvalidPrice(-1.0)
    );

    // A rejected command leaves the actor running.
    let id = system
        .client
        .add_car(CarCreate::new("Ford", "Focus", 18000.0, 5))
        .await
        .unwrap();
    assert_eq!(id, CarId(1));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_customers_and_removal() {
    let system = DealershipSystem::start(&config());
    let client = &system.client;

    let alice = client
        .register_customer(CustomerCreate::new("Alice", "555-0100", "alice@example.com", 40000.0))
        .await
        .unwrap();
    let bob = client
        .register_customer(CustomerCreate::new("Bob", "555-0101", "bob@example.com", 20000.0))
        .await
        .unwrap();
    assert_eq!((alice, bob), (CustomerId(1), CustomerId(2)));

    let names: Vec<String> = client
        .list_customers()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert!(client.find_customer(CustomerId(9)).await.unwrap().is_none());

    let focus = client.add_car(CarCreate::new("Ford", "Focus", 18000.0, 5)).await.unwrap();
    let removed = client.remove_car(focus).await.unwrap().expect("Not removed");
    assert_eq!(removed.model, "Focus");
    assert!(client.remove_car(focus).await.unwrap().is_none());
    assert!(client.cars_by_price().await.unwrap().is_empty());
    client.check_consistency().await.unwrap();

    system.shutdown().await.unwrap();
}

/// Many tasks hammering one client: every id is handed out exactly once.
#[tokio::test]
async fn test_concurrent_adds_get_unique_ids() {
    let system = DealershipSystem::start(&config());

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            client
                .add_car(CarCreate::new("Brand", format!("Model{i}"), 1000.0 + i as f64, 1))
                .await
                .unwrap()
        }));
    }
    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().0);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<u32>>());

    let dealership = system.shutdown().await.unwrap();
    dealership.check_consistency().unwrap();
}
