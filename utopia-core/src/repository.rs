use async_trait::async_trait;

use crate::{Passenger, PassengerFields, Payment, PaymentFields};

/// Raised by a store when a write would duplicate a unique column.
#[derive(Debug, thiserror::Error)]
#[error("Unique constraint violated on {field}")]
pub struct UniqueViolation {
    pub field: String,
}

/// Repository trait for passenger data access
#[async_trait]
pub trait PassengerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Passenger>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Passenger>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_booking_id(
        &self,
        booking_id: i32,
    ) -> Result<Option<Passenger>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_passport_id(
        &self,
        passport_id: &str,
    ) -> Result<Option<Passenger>, Box<dyn std::error::Error + Send + Sync>>;

    /// Persist a new passenger; the store assigns the id.
    async fn insert(
        &self,
        fields: &PassengerFields,
    ) -> Result<Passenger, Box<dyn std::error::Error + Send + Sync>>;

    /// Overwrite the row with `passenger.passenger_id`.
    async fn update(
        &self,
        passenger: &Passenger,
    ) -> Result<Passenger, Box<dyn std::error::Error + Send + Sync>>;

    async fn delete_by_id(&self, id: i32) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Repository trait for payment data access
#[async_trait]
pub trait PaymentRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Payment>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Payment>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_booking_uuid(
        &self,
        booking_uuid: &str,
    ) -> Result<Option<Payment>, Box<dyn std::error::Error + Send + Sync>>;

    async fn find_by_stripe_uuid(
        &self,
        stripe_uuid: &str,
    ) -> Result<Option<Payment>, Box<dyn std::error::Error + Send + Sync>>;

    /// Persist a new payment; the store assigns the id.
    async fn insert(
        &self,
        fields: &PaymentFields,
    ) -> Result<Payment, Box<dyn std::error::Error + Send + Sync>>;

    /// Overwrite the row with `payment.payment_id`.
    async fn update(
        &self,
        payment: &Payment,
    ) -> Result<Payment, Box<dyn std::error::Error + Send + Sync>>;

    async fn delete_by_id(&self, id: i32) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
