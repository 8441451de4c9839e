use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::entity::Entity;
use crate::repository::{PassengerRepository, PaymentRepository, UniqueViolation};
use crate::{Passenger, PassengerFields, Payment, PaymentFields};

struct Table<T> {
    rows: Vec<T>,
    /// `None` once the id space is used up.
    next_id: Option<i32>,
}

/// Insertion-ordered in-memory collection with sequential ids starting at 1.
/// Enforces the entity's unique key the way a storage constraint would.
pub struct MemoryStore<T> {
    table: RwLock<Table<T>>,
}

pub type InMemoryPassengerRepository = MemoryStore<Passenger>;
pub type InMemoryPaymentRepository = MemoryStore<Payment>;

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Seed with existing rows; new ids continue after the highest one.
    pub fn with_rows(rows: Vec<T>) -> Self {
        let next_id = match rows.iter().map(T::id).max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self {
            table: RwLock::new(Table { rows, next_id }),
        }
    }

    async fn all(&self) -> Vec<T> {
        self.table.read().await.rows.clone()
    }

    async fn get(&self, id: i32) -> Option<T> {
        self.find(|row| row.id() == id).await
    }

    async fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.table.read().await.rows.iter().find(|row| predicate(row)).cloned()
    }

    async fn insert_with(
        &self,
        unique_value: &str,
        build: impl FnOnce(i32) -> T,
    ) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|row| row.unique_value() == unique_value) {
            return Err(Box::new(UniqueViolation {
                field: T::UNIQUE_FIELD.to_string(),
            }));
        }

        let id = table
            .next_id
            .ok_or_else(|| format!("No {} ids left to assign", T::KIND))?;
        let row = build(id);
        table.next_id = id.checked_add(1);
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn replace(&self, row: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
        let mut table = self.table.write().await;
        if table
            .rows
            .iter()
            .any(|other| other.id() != row.id() && other.unique_value() == row.unique_value())
        {
            return Err(Box::new(UniqueViolation {
                field: T::UNIQUE_FIELD.to_string(),
            }));
        }

        let slot = table
            .rows
            .iter_mut()
            .find(|existing| existing.id() == row.id())
            .ok_or_else(|| format!("No {} row with id {}", T::KIND, row.id()))?;
        *slot = row.clone();
        Ok(row)
    }

    async fn remove(&self, id: i32) {
        self.table.write().await.rows.retain(|row| row.id() != id);
    }
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PassengerRepository for MemoryStore<Passenger> {
    async fn find_all(&self) -> Result<Vec<Passenger>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.all().await)
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Passenger>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.get(id).await)
    }

    async fn find_by_booking_id(
        &self,
        booking_id: i32,
    ) -> Result<Option<Passenger>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.find(|p| p.passenger_booking_id == booking_id).await)
    }

    async fn find_by_passport_id(
        &self,
        passport_id: &str,
    ) -> Result<Option<Passenger>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.find(|p| p.passenger_passport_id == passport_id).await)
    }

    async fn insert(
        &self,
        fields: &PassengerFields,
    ) -> Result<Passenger, Box<dyn std::error::Error + Send + Sync>> {
        self.insert_with(&fields.passport_id, |id| Passenger::from_fields(id, fields.clone()))
            .await
    }

    async fn update(
        &self,
        passenger: &Passenger,
    ) -> Result<Passenger, Box<dyn std::error::Error + Send + Sync>> {
        self.replace(passenger.clone()).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.remove(id).await;
        Ok(())
    }
}

#[async_trait]
impl PaymentRepository for MemoryStore<Payment> {
    async fn find_all(&self) -> Result<Vec<Payment>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.all().await)
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Payment>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.get(id).await)
    }

    async fn find_by_booking_uuid(
        &self,
        booking_uuid: &str,
    ) -> Result<Option<Payment>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.find(|p| p.payment_booking_uuid == booking_uuid).await)
    }

    async fn find_by_stripe_uuid(
        &self,
        stripe_uuid: &str,
    ) -> Result<Option<Payment>, Box<dyn std::error::Error + Send + Sync>> {
        Ok(self.find(|p| p.payment_stripe_uuid == stripe_uuid).await)
    }

    async fn insert(
        &self,
        fields: &PaymentFields,
    ) -> Result<Payment, Box<dyn std::error::Error + Send + Sync>> {
        self.insert_with(&fields.stripe_uuid, |id| Payment::from_fields(id, fields.clone()))
            .await
    }

    async fn update(
        &self,
        payment: &Payment,
    ) -> Result<Payment, Box<dyn std::error::Error + Send + Sync>> {
        self.replace(payment.clone()).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.remove(id).await;
        Ok(())
    }
}
