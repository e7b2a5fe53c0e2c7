//! FIFO of test-drive requests.
//!
//! The queue only records intent: it never checks that the car or the
//! customer exists. Callers that want validation do it before enqueueing.

use crate::model::{CarId, CustomerId, TestDriveRequest};
use std::collections::VecDeque;
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct TestDriveQueue {
    requests: VecDeque<TestDriveRequest>,
}

impl TestDriveQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, customer_id: CustomerId, car_id: CarId, requested_at: impl Into<String>) {
        self.requests
            .push_back(TestDriveRequest::new(customer_id, car_id, requested_at));
        info!(%customer_id, %car_id, size = self.requests.len(), "Test drive queued");
    }

    /// Pops the oldest request, or `None` when nothing is waiting.
    pub fn dequeue_next(&mut self) -> Option<TestDriveRequest> {
        let request = self.requests.pop_front();
        match &request {
            Some(r) => info!(customer_id = %r.customer_id, car_id = %r.car_id, "Test drive dequeued"),
            None => debug!("No test drive requests in queue"),
        }
        request
    }

    pub fn size(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Waiting requests, oldest first, without removing them.
    pub fn iter(&self) -> impl Iterator<Item = &TestDriveRequest> {
        self.requests.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dequeue_in_arrival_order() {
        let mut queue = TestDriveQueue::new();
        queue.enqueue(CustomerId(1), CarId(1), "t1");
        queue.enqueue(CustomerId(2), CarId(3), "t2");
        assert_eq!(queue.size(), 2);

        let first = queue.dequeue_next().unwrap();
        assert_eq!((first.customer_id, first.car_id), (CustomerId(1), CarId(1)));
        let second = queue.dequeue_next().unwrap();
        assert_eq!(second.requested_at, "t2");
        assert!(queue.dequeue_next().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_unknown_ids_are_accepted() {
        let mut queue = TestDriveQueue::new();
        queue.enqueue(CustomerId(999), CarId(999), "later");
        assert_eq!(queue.iter().count(), 1);
        assert_eq!(queue.size(), 1);
    }
}
