//! Message vocabulary of the dealership actor.

use crate::catalog::CatalogEntry;
use crate::model::{
    CarCreate, CarId, CarRecord, CustomerCreate, CustomerId, CustomerRecord, SaleCreate, SaleId,
    SaleRecord, TestDriveRequest,
};
use crate::recommender::Recommendations;
use crate::workflow::Department;

/// Every operation the dealership accepts.
#[derive(Debug)]
pub enum DealershipCommand {
    AddCar(CarCreate),
    RemoveCar(CarId),
    FindCar(CarId),
    ListInventory,
    CarsByPrice,
    RegisterCustomer(CustomerCreate),
    FindCustomer(CustomerId),
    ListCustomers,
    RequestTestDrive {
        customer_id: CustomerId,
        car_id: CarId,
        requested_at: String,
    },
    ProcessNextTestDrive,
    TestDriveQueueSize,
    PendingTestDrives,
    RecordSale(SaleCreate),
    UndoLastSale,
    SalesHistory,
    WorkflowBfs(usize),
    WorkflowEdges,
    Recommend(f64),
    LoadCatalog(Vec<CatalogEntry>),
    SeedSampleData,
    CheckConsistency,
}

/// Answers, one variant per command.
#[derive(Debug, Clone)]
pub enum DealershipReply {
    CarAdded(CarId),
    CarRemoved(Option<CarRecord>),
    Car(Option<CarRecord>),
    Cars(Vec<CarRecord>),
    CustomerRegistered(CustomerId),
    Customer(Option<CustomerRecord>),
    Customers(Vec<CustomerRecord>),
    TestDriveQueued,
    TestDrive(Option<TestDriveRequest>),
    TestDriveQueueSize(usize),
    TestDrives(Vec<TestDriveRequest>),
    SaleRecorded(SaleId),
    SaleUndone(Option<SaleRecord>),
    Sales(Vec<SaleRecord>),
    Departments(Vec<Department>),
    WorkflowEdges(Vec<(Department, Vec<Department>)>),
    Recommendations(Recommendations),
    CatalogLoaded(Vec<CarId>),
    Done,
}
