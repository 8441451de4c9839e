use std::sync::Arc;
use utopia_core::memory::{InMemoryPassengerRepository, InMemoryPaymentRepository};
use utopia_core::{fixtures, PassengerService, PaymentService};
use utopia_store::{DbClient, PostgresPassengerRepository, PostgresPaymentRepository};

#[derive(Clone)]
pub struct AppState {
    pub passengers: Arc<PassengerService>,
    pub payments: Arc<PaymentService>,
}

impl AppState {
    /// Process-local stores, optionally seeded with the sample rows.
    pub fn in_memory(seed: bool) -> Self {
        let (passengers, payments) = if seed {
            (
                InMemoryPassengerRepository::with_rows(fixtures::passengers()),
                InMemoryPaymentRepository::with_rows(fixtures::payments()),
            )
        } else {
            (InMemoryPassengerRepository::new(), InMemoryPaymentRepository::new())
        };

        Self {
            passengers: Arc::new(PassengerService::new(Arc::new(passengers))),
            payments: Arc::new(PaymentService::new(Arc::new(payments))),
        }
    }

    pub fn postgres(db: &DbClient) -> Self {
        Self {
            passengers: Arc::new(PassengerService::new(Arc::new(PostgresPassengerRepository::new(
                db.pool.clone(),
            )))),
            payments: Arc::new(PaymentService::new(Arc::new(PostgresPaymentRepository::new(
                db.pool.clone(),
            )))),
        }
    }
}
