//! [`Component`] implementation that lets the actor drive a [`Dealership`].

use super::{DealershipCommand, DealershipReply};
use crate::dealership::Dealership;
use crate::error::DealershipError;
use crate::framework::Component;

impl Component for Dealership {
    type Command = DealershipCommand;
    type Reply = DealershipReply;
    type Error = DealershipError;

    fn handle(&mut self, command: DealershipCommand) -> Result<DealershipReply, DealershipError> {
        use DealershipCommand as C;
        use DealershipReply as R;

        let reply = match command {
            C::AddCar(params) => R::CarAdded(self.add_car(params)?),
            C::RemoveCar(id) => R::CarRemoved(self.remove_car(id)),
            C::FindCar(id) => R::Car(self.find_car(id).cloned()),
            C::ListInventory => R::Cars(self.cars().cloned().collect()),
            C::CarsByPrice => R::Cars(self.cars_by_price().cloned().collect()),
            C::RegisterCustomer(params) => R::CustomerRegistered(self.register_customer(params)),
            C::FindCustomer(id) => R::Customer(self.find_customer(id).cloned()),
            C::ListCustomers => {
                R::Customers(self.customers().list().into_iter().cloned().collect())
            }
            C::RequestTestDrive {
                customer_id,
                car_id,
                requested_at,
            } => {
                self.request_test_drive(customer_id, car_id, requested_at);
                R::TestDriveQueued
            }
            C::ProcessNextTestDrive => R::TestDrive(self.process_next_test_drive()),
            C::TestDriveQueueSize => R::TestDriveQueueSize(self.test_drives().size()),
            C::PendingTestDrives => R::TestDrives(self.test_drives().iter().cloned().collect()),
            C::RecordSale(params) => R::SaleRecorded(self.record_sale(params)),
            C::UndoLastSale => R::SaleUndone(self.undo_last_sale()),
            C::SalesHistory => R::Sales(self.ledger().history().cloned().collect()),
            C::WorkflowBfs(start) => R::Departments(self.workflow().breadth_first_from(start)?),
            C::WorkflowEdges => R::WorkflowEdges(self.workflow().edges()),
            C::Recommend(budget) => R::Recommendations(self.recommend(budget)?),
            C::LoadCatalog(entries) => {
                R::CatalogLoaded(self.load_catalog(entries, &mut rand::thread_rng())?)
            }
            C::SeedSampleData => {
                self.seed_sample_data();
                R::Done
            }
            C::CheckConsistency => {
                self.check_consistency()?;
                R::Done
            }
        };
        Ok(reply)
    }
}
