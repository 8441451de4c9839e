use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::entity::Entity;
use crate::filter::{self, FilterMap};
use crate::repository::PassengerRepository;
use crate::services::{deleted_message, storage};
use crate::validation::{ensure_unique, require, store_error, WriteTarget};
use crate::{CoreError, CoreResult, Passenger, PassengerFields};

/// Passenger operations. Passport ids are unique across all passengers.
pub struct PassengerService {
    repo: Arc<dyn PassengerRepository>,
    write_lock: Mutex<()>,
}

impl PassengerService {
    pub fn new(repo: Arc<dyn PassengerRepository>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn find_all(&self) -> CoreResult<Vec<Passenger>> {
        self.repo.find_all().await.map_err(storage)
    }

    pub async fn find_by_id(&self, id: i32) -> CoreResult<Passenger> {
        let found = self.repo.find_by_id(id).await.map_err(storage)?;
        require(found, id)
    }

    pub async fn find_by_booking_id(&self, booking_id: i32) -> CoreResult<Passenger> {
        let found = self.repo.find_by_booking_id(booking_id).await.map_err(storage)?;
        require(found, booking_id)
    }

    pub async fn find_by_passport_id(&self, passport_id: &str) -> CoreResult<Passenger> {
        let found = self.repo.find_by_passport_id(passport_id).await.map_err(storage)?;
        require(found, passport_id)
    }

    pub async fn find_by_search_and_filter(&self, filters: &FilterMap) -> CoreResult<Vec<Passenger>> {
        let passengers = self.find_all().await?;
        let total = passengers.len();
        let matched = filter::apply(passengers, filters);
        debug!("Passenger search matched {} of {} with {:?}", matched.len(), total, filters);
        Ok(matched)
    }

    pub async fn validate_for_insert(&self, fields: &PassengerFields) -> CoreResult<()> {
        self.check_passport_id(WriteTarget::Insert, &fields.passport_id).await
    }

    /// Existence of `id`, then passport uniqueness against every other
    /// passenger. Returns the passenger as it would be saved.
    pub async fn validate_for_update(&self, id: i32, fields: &PassengerFields) -> CoreResult<Passenger> {
        let existing = self.find_by_id(id).await?;
        self.check_passport_id(WriteTarget::Update(id), &fields.passport_id).await?;
        Ok(Passenger::from_fields(existing.passenger_id, fields.clone()))
    }

    pub async fn insert(&self, fields: PassengerFields) -> CoreResult<Passenger> {
        let _guard = self.write_lock.lock().await;

        self.validate_for_insert(&fields).await.inspect_err(rejected)?;
        let passenger = self
            .repo
            .insert(&fields)
            .await
            .map_err(|e| store_error::<Passenger>(e, &fields.passport_id))?;

        info!("Passenger {} created for booking {}", passenger.passenger_id, passenger.passenger_booking_id);
        Ok(passenger)
    }

    pub async fn update(&self, id: i32, fields: PassengerFields) -> CoreResult<Passenger> {
        let _guard = self.write_lock.lock().await;

        let passenger = self.validate_for_update(id, &fields).await.inspect_err(rejected)?;
        let passenger = self
            .repo
            .update(&passenger)
            .await
            .map_err(|e| store_error::<Passenger>(e, &fields.passport_id))?;

        info!("Passenger {} updated", passenger.passenger_id);
        Ok(passenger)
    }

    pub async fn delete(&self, id: i32) -> CoreResult<String> {
        let _guard = self.write_lock.lock().await;

        let passenger = self.find_by_id(id).await?;
        self.repo.delete_by_id(passenger.passenger_id).await.map_err(storage)?;

        info!("Passenger {} deleted", id);
        Ok(deleted_message(Passenger::KIND, id))
    }

    async fn check_passport_id(&self, target: WriteTarget, passport_id: &str) -> CoreResult<()> {
        let holder = self.repo.find_by_passport_id(passport_id).await.map_err(storage)?;
        ensure_unique(target, passport_id, holder.as_ref())
    }
}

fn rejected(err: &CoreError) {
    warn!("Passenger write rejected: {}", err);
}
