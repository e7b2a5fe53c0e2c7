use crate::catalog::CatalogEntry;
use crate::clients::actor_client::ActorClient;
use crate::dealership::{now_timestamp, Dealership};
use crate::dealership_actor::{DealershipCommand, DealershipReply};
use crate::error::DealershipError;
use crate::framework::{ComponentClient, FrameworkError};
use crate::model::{
    CarCreate, CarId, CarRecord, CustomerCreate, CustomerId, CustomerRecord, SaleCreate, SaleId,
    SaleRecord, TestDriveRequest,
};
use crate::recommender::Recommendations;
use crate::workflow::Department;
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the dealership actor.
#[derive(Clone)]
pub struct DealershipClient {
    inner: ComponentClient<Dealership>,
}

impl DealershipClient {
    pub fn new(inner: ComponentClient<Dealership>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Dealership> for DealershipClient {
    type Error = DealershipError;

    fn inner(&self) -> &ComponentClient<Dealership> {
        &self.inner
    }

    /// Domain errors come back as themselves; channel failures become
    /// [`DealershipError::ActorCommunication`].
    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::Component(inner) => match inner.downcast::<DealershipError>() {
                Ok(err) => *err,
                Err(other) => DealershipError::ActorCommunication(other.to_string()),
            },
            other => DealershipError::ActorCommunication(other.to_string()),
        }
    }
}

fn unexpected(reply: DealershipReply) -> DealershipError {
    DealershipError::ActorCommunication(format!("Unexpected reply: {reply:?}"))
}

impl DealershipClient {
    // --- Inventory ---

    #[instrument(skip(self))]
    pub async fn add_car(&self, car: CarCreate) -> Result<CarId, DealershipError> {
        match self.request(DealershipCommand::AddCar(car)).await? {
            DealershipReply::CarAdded(id) => Ok(id),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn remove_car(&self, id: CarId) -> Result<Option<CarRecord>, DealershipError> {
        match self.request(DealershipCommand::RemoveCar(id)).await? {
            DealershipReply::CarRemoved(car) => Ok(car),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_car(&self, id: CarId) -> Result<Option<CarRecord>, DealershipError> {
        match self.request(DealershipCommand::FindCar(id)).await? {
            DealershipReply::Car(car) => Ok(car),
            other => Err(unexpected(other)),
        }
    }

    /// Most recently added first.
    #[instrument(skip(self))]
    pub async fn list_inventory(&self) -> Result<Vec<CarRecord>, DealershipError> {
        match self.request(DealershipCommand::ListInventory).await? {
            DealershipReply::Cars(cars) => Ok(cars),
            other => Err(unexpected(other)),
        }
    }

    /// Ascending price, equal prices in insertion order.
    #[instrument(skip(self))]
    pub async fn cars_by_price(&self) -> Result<Vec<CarRecord>, DealershipError> {
        match self.request(DealershipCommand::CarsByPrice).await? {
            DealershipReply::Cars(cars) => Ok(cars),
            other => Err(unexpected(other)),
        }
    }

    // --- Customers ---

    #[instrument(skip(self))]
    pub async fn register_customer(&self, customer: CustomerCreate) -> Result<CustomerId, DealershipError> {
        match self.request(DealershipCommand::RegisterCustomer(customer)).await? {
            DealershipReply::CustomerRegistered(id) => Ok(id),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn find_customer(&self, id: CustomerId) -> Result<Option<CustomerRecord>, DealershipError> {
        match self.request(DealershipCommand::FindCustomer(id)).await? {
            DealershipReply::Customer(customer) => Ok(customer),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> Result<Vec<CustomerRecord>, DealershipError> {
        match self.request(DealershipCommand::ListCustomers).await? {
            DealershipReply::Customers(customers) => Ok(customers),
            other => Err(unexpected(other)),
        }
    }

    // --- Test drives ---

    /// Queues a test drive, stamped with the current local time unless
    /// `requested_at` is given.
    #[instrument(skip(self))]
    pub async fn request_test_drive(
        &self,
        customer_id: CustomerId,
        car_id: CarId,
        requested_at: Option<String>,
    ) -> Result<(), DealershipError> {
        let requested_at = requested_at.unwrap_or_else(now_timestamp);
        match self
            .request(DealershipCommand::RequestTestDrive {
                customer_id,
                car_id,
                requested_at,
            })
            .await?
        {
            DealershipReply::TestDriveQueued => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn process_next_test_drive(&self) -> Result<Option<TestDriveRequest>, DealershipError> {
        match self.request(DealershipCommand::ProcessNextTestDrive).await? {
            DealershipReply::TestDrive(request) => Ok(request),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn test_drive_queue_size(&self) -> Result<usize, DealershipError> {
        match self.request(DealershipCommand::TestDriveQueueSize).await? {
            DealershipReply::TestDriveQueueSize(size) => Ok(size),
            other => Err(unexpected(other)),
        }
    }

    /// Queue contents, oldest first, without dequeuing.
    #[instrument(skip(self))]
    pub async fn pending_test_drives(&self) -> Result<Vec<TestDriveRequest>, DealershipError> {
        match self.request(DealershipCommand::PendingTestDrives).await? {
            DealershipReply::TestDrives(requests) => Ok(requests),
            other => Err(unexpected(other)),
        }
    }

    // --- Sales ---

    /// Records a sale and marks the car sold, stamped with the current local
    /// time unless `sold_at` is given.
    #[instrument(skip(self))]
    pub async fn record_sale(
        &self,
        customer_id: CustomerId,
        car_id: CarId,
        amount: f64,
        sold_at: Option<String>,
    ) -> Result<SaleId, DealershipError> {
        let sale = SaleCreate {
            customer_id,
            car_id,
            amount,
            sold_at: sold_at.unwrap_or_else(now_timestamp),
        };
        debug!(?sale, "record_sale called");
        match self.request(DealershipCommand::RecordSale(sale)).await? {
            DealershipReply::SaleRecorded(id) => Ok(id),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn undo_last_sale(&self) -> Result<Option<SaleRecord>, DealershipError> {
        match self.request(DealershipCommand::UndoLastSale).await? {
            DealershipReply::SaleUndone(sale) => Ok(sale),
            other => Err(unexpected(other)),
        }
    }

    /// Most recent sale first.
    #[instrument(skip(self))]
    pub async fn sales_history(&self) -> Result<Vec<SaleRecord>, DealershipError> {
        match self.request(DealershipCommand::SalesHistory).await? {
            DealershipReply::Sales(sales) => Ok(sales),
            other => Err(unexpected(other)),
        }
    }

    // --- Workflow & recommendations ---

    #[instrument(skip(self))]
    pub async fn workflow_bfs(&self, start: usize) -> Result<Vec<Department>, DealershipError> {
        match self.request(DealershipCommand::WorkflowBfs(start)).await? {
            DealershipReply::Departments(order) => Ok(order),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn workflow_edges(&self) -> Result<Vec<(Department, Vec<Department>)>, DealershipError> {
        match self.request(DealershipCommand::WorkflowEdges).await? {
            DealershipReply::WorkflowEdges(edges) => Ok(edges),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn recommend(&self, budget: f64) -> Result<Recommendations, DealershipError> {
        match self.request(DealershipCommand::Recommend(budget)).await? {
            DealershipReply::Recommendations(recs) => Ok(recs),
            other => Err(unexpected(other)),
        }
    }

    // --- Bulk data & maintenance ---

    #[instrument(skip(self, entries), fields(entries = entries.len()))]
    pub async fn load_catalog(&self, entries: Vec<CatalogEntry>) -> Result<Vec<CarId>, DealershipError> {
        match self.request(DealershipCommand::LoadCatalog(entries)).await? {
            DealershipReply::CatalogLoaded(ids) => Ok(ids),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn seed_sample_data(&self) -> Result<(), DealershipError> {
        match self.request(DealershipCommand::SeedSampleData).await? {
            DealershipReply::Done => Ok(()),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn check_consistency(&self) -> Result<(), DealershipError> {
        match self.request(DealershipCommand::CheckConsistency).await? {
            DealershipReply::Done => Ok(()),
            other => Err(unexpected(other)),
        }
    }
}
