use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::entity::Entity;
use crate::filter::{self, FilterMap};
use crate::repository::PaymentRepository;
use crate::services::{deleted_message, storage};
use crate::validation::{ensure_unique, require, store_error, WriteTarget};
use crate::{CoreError, CoreResult, Payment, PaymentCandidate, PaymentFields, PaymentStatus};

/// Payment operations: lookups, search, and validated writes.
///
/// Check-then-write sequences are serialized by `write_lock`, so two
/// concurrent inserts cannot both pass the stripe-uuid uniqueness check.
pub struct PaymentService {
    repo: Arc<dyn PaymentRepository>,
    write_lock: Mutex<()>,
}

impl PaymentService {
    pub fn new(repo: Arc<dyn PaymentRepository>) -> Self {
        Self {
            repo,
            write_lock: Mutex::new(()),
        }
    }

    pub async fn find_all(&self) -> CoreResult<Vec<Payment>> {
        self.repo.find_all().await.map_err(storage)
    }

    pub async fn find_by_id(&self, id: i32) -> CoreResult<Payment> {
        let found = self.repo.find_by_id(id).await.map_err(storage)?;
        require(found, id)
    }

    pub async fn find_by_booking_uuid(&self, booking_uuid: &str) -> CoreResult<Payment> {
        let found = self.repo.find_by_booking_uuid(booking_uuid).await.map_err(storage)?;
        require(found, booking_uuid)
    }

    pub async fn find_by_stripe_uuid(&self, stripe_uuid: &str) -> CoreResult<Payment> {
        let found = self.repo.find_by_stripe_uuid(stripe_uuid).await.map_err(storage)?;
        require(found, stripe_uuid)
    }

    pub async fn find_by_search_and_filter(&self, filters: &FilterMap) -> CoreResult<Vec<Payment>> {
        let payments = self.find_all().await?;
        let total = payments.len();
        let matched = filter::apply(payments, filters);
        debug!("Payment search matched {} of {} with {:?}", matched.len(), total, filters);
        Ok(matched)
    }

    /// Status check, then stripe-uuid uniqueness against every payment.
    pub async fn validate_for_insert(&self, candidate: &PaymentCandidate) -> CoreResult<PaymentFields> {
        let status: PaymentStatus = candidate.status.parse()?;
        self.check_stripe_uuid(WriteTarget::Insert, &candidate.stripe_uuid).await?;

        Ok(PaymentFields {
            booking_uuid: candidate.booking_uuid.clone(),
            stripe_uuid: candidate.stripe_uuid.clone(),
            status,
        })
    }

    /// Status check, existence of `id`, then stripe-uuid uniqueness against
    /// every other payment. Returns the payment as it would be saved.
    pub async fn validate_for_update(&self, id: i32, candidate: &PaymentCandidate) -> CoreResult<Payment> {
        let status: PaymentStatus = candidate.status.parse()?;
        let existing = self.find_by_id(id).await?;
        self.check_stripe_uuid(WriteTarget::Update(id), &candidate.stripe_uuid).await?;

        Ok(Payment::from_fields(
            existing.payment_id,
            PaymentFields {
                booking_uuid: candidate.booking_uuid.clone(),
                stripe_uuid: candidate.stripe_uuid.clone(),
                status,
            },
        ))
    }

    pub async fn insert(&self, booking_uuid: &str, stripe_uuid: &str, status: &str) -> CoreResult<Payment> {
        let candidate = PaymentCandidate::new(booking_uuid, stripe_uuid, status);
        let _guard = self.write_lock.lock().await;

        let fields = self.validate_for_insert(&candidate).await.inspect_err(rejected)?;
        let payment = self
            .repo
            .insert(&fields)
            .await
            .map_err(|e| store_error::<Payment>(e, &fields.stripe_uuid))?;

        info!("Payment {} created with status {}", payment.payment_id, payment.payment_status);
        Ok(payment)
    }

    pub async fn update(
        &self,
        id: i32,
        booking_uuid: &str,
        stripe_uuid: &str,
        status: &str,
    ) -> CoreResult<Payment> {
        let candidate = PaymentCandidate::new(booking_uuid, stripe_uuid, status);
        let _guard = self.write_lock.lock().await;

        let payment = self.validate_for_update(id, &candidate).await.inspect_err(rejected)?;
        let payment = self
            .repo
            .update(&payment)
            .await
            .map_err(|e| store_error::<Payment>(e, stripe_uuid))?;

        info!("Payment {} updated", payment.payment_id);
        Ok(payment)
    }

    pub async fn delete(&self, id: i32) -> CoreResult<String> {
        let _guard = self.write_lock.lock().await;

        let payment = self.find_by_id(id).await?;
        self.repo.delete_by_id(payment.payment_id).await.map_err(storage)?;

        info!("Payment {} deleted", id);
        Ok(deleted_message(Payment::KIND, id))
    }

    async fn check_stripe_uuid(&self, target: WriteTarget, stripe_uuid: &str) -> CoreResult<()> {
        let holder = self.repo.find_by_stripe_uuid(stripe_uuid).await.map_err(storage)?;
        ensure_unique(target, stripe_uuid, holder.as_ref())
    }
}

fn rejected(err: &CoreError) {
    warn!("Payment write rejected: {}", err);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::memory::InMemoryPaymentRepository;
    use crate::EntityKind;

    const TAKEN_STRIPE_UUID: &str = "a2bf6dd9-b296-4e03-b1ee-55acfd1c196d";

    fn service() -> PaymentService {
        PaymentService::new(Arc::new(InMemoryPaymentRepository::with_rows(fixtures::payments())))
    }

    fn empty_service() -> PaymentService {
        PaymentService::new(Arc::new(InMemoryPaymentRepository::new()))
    }

    #[tokio::test]
    async fn test_find_all() {
        assert_eq!(service().find_all().await.unwrap(), fixtures::payments());
        assert!(empty_service().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id() {
        assert_eq!(service().find_by_id(1).await.unwrap(), fixtures::payment());

        let err = service().find_by_id(-1).await.unwrap_err();
        assert!(matches!(err, CoreError::NotFound { entity: EntityKind::Payment, .. }));
    }

    #[tokio::test]
    async fn test_find_by_natural_keys() {
        let svc = service();
        let payment = fixtures::payment();

        assert_eq!(svc.find_by_booking_uuid(&payment.payment_booking_uuid).await.unwrap(), payment);
        assert_eq!(svc.find_by_stripe_uuid(&payment.payment_stripe_uuid).await.unwrap(), payment);

        assert!(matches!(
            svc.find_by_booking_uuid("NotAValidUuid").await,
            Err(CoreError::NotFound { .. })
        ));
        assert!(matches!(
            svc.find_by_stripe_uuid("NotAValidUuid").await,
            Err(CoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_search_and_filter() {
        let svc = service();
        let mut filters = FilterMap::new();
        filters.insert("paymentStatus".to_string(), "PENDING".to_string());

        let ids: Vec<i32> = svc
            .find_by_search_and_filter(&filters)
            .await
            .unwrap()
            .iter()
            .map(|p| p.payment_id)
            .collect();
        assert_eq!(ids, vec![5, 6, 7, 8]);

        filters.insert("paymentId".to_string(), "-1".to_string());
        assert!(svc.find_by_search_and_filter(&filters).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_valid() {
        let actual = empty_service()
            .insert("NewBookingUuid", "NewStripeUuid", "PENDING")
            .await
            .unwrap();

        assert_eq!(actual.payment_id, 1);
        assert_eq!(actual.payment_booking_uuid, "NewBookingUuid");
        assert_eq!(actual.payment_stripe_uuid, "NewStripeUuid");
        assert_eq!(actual.payment_status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn test_insert_without_ids_left() {
        let mut last = fixtures::payment();
        last.payment_id = i32::MAX;
        let svc = PaymentService::new(Arc::new(InMemoryPaymentRepository::with_rows(vec![last])));

        let err = svc.insert("NewBookingUuid", "NewStripeUuid", "PENDING").await.unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));
        assert_eq!(svc.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_duplicate_stripe_uuid() {
        let svc = service();
        let err = svc.insert("NewBookingUuid", TAKEN_STRIPE_UUID, "PENDING").await.unwrap_err();
        assert!(matches!(err, CoreError::AlreadyExists { entity: EntityKind::Payment, .. }));
        assert_eq!(svc.find_all().await.unwrap().len(), 9);
    }

    #[tokio::test]
    async fn test_insert_invalid_status() {
        let svc = service();
        let err = svc.insert("NewBookingUuid", "NewStripeUuid", "NotAStatus").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidEnumValue { .. }));

        // Status is checked before uniqueness
        let err = svc.insert("NewBookingUuid", TAKEN_STRIPE_UUID, "NotAStatus").await.unwrap_err();
        assert!(matches!(err, CoreError::InvalidEnumValue { .. }));
    }

    #[tokio::test]
    async fn test_update_valid() {
        let svc = service();
        let actual = svc.update(1, "NewBookingUuid", "NewStripeUuid", "PENDING").await.unwrap();

        assert_eq!(actual.payment_id, 1);
        assert_eq!(actual.payment_stripe_uuid, "NewStripeUuid");
        assert_eq!(svc.find_by_id(1).await.unwrap(), actual);
    }

    #[tokio::test]
    async fn test_update_keeps_own_stripe_uuid() {
        let svc = service();
        let actual = svc.update(1, "NewBookingUuid", TAKEN_STRIPE_UUID, "REJECTED").await.unwrap();
        assert_eq!(actual.payment_status, PaymentStatus::Rejected);
    }

    #[tokio::test]
    async fn test_update_duplicate_stripe_uuid() {
        let svc = service();
        let other = fixtures::payments()[2].payment_stripe_uuid.clone();
        let err = svc.update(1, "NewBookingUuid", &other, "PENDING").await.unwrap_err();
        assert!(matches!(err, CoreError::AlreadyExists { .. }));
        assert_eq!(svc.find_by_id(1).await.unwrap(), fixtures::payment());
    }

    #[tokio::test]
    async fn test_update_invalid_status_and_missing_id() {
        let err = service()
            .update(1, "NewBookingUuid", "NewStripeUuid", "NotAValidStatus")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidEnumValue { .. }));

        let err = empty_service()
            .update(1, "NewBookingUuid", "NewStripeUuid", "PENDING")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete() {
        let svc = service();
        assert_eq!(svc.delete(1).await.unwrap(), "Payment with ID: 1 was deleted.");
        assert!(matches!(svc.delete(1).await, Err(CoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_concurrent_inserts_of_same_stripe_uuid() {
        let svc = Arc::new(empty_service());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let svc = svc.clone();
                tokio::spawn(async move {
                    svc.insert(&format!("booking-{}", i), "SharedStripeUuid", "PENDING").await
                })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }
        assert_eq!(created, 1);
        assert_eq!(svc.find_all().await.unwrap().len(), 1);
    }
}
