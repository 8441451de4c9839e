use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::entity::{Entity, EntityKind};
use crate::filter::{FieldAccessor, Filterable};
use crate::CoreError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Confirmed,
    Rejected,
}

impl PaymentStatus {
    pub const ALL: [PaymentStatus; 3] = [
        PaymentStatus::Pending,
        PaymentStatus::Confirmed,
        PaymentStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Confirmed => "CONFIRMED",
            PaymentStatus::Rejected => "REJECTED",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive parse. Anything outside the closed set is rejected.
impl FromStr for PaymentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaymentStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::InvalidEnumValue {
                field: "paymentStatus",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub payment_id: i32,
    pub payment_booking_uuid: String,
    pub payment_stripe_uuid: String,
    pub payment_status: PaymentStatus,
}

/// Validated business fields of a payment, without identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentFields {
    pub booking_uuid: String,
    pub stripe_uuid: String,
    pub status: PaymentStatus,
}

/// Business fields as supplied by a caller; the status is still raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentCandidate {
    pub booking_uuid: String,
    pub stripe_uuid: String,
    pub status: String,
}

impl PaymentCandidate {
    pub fn new(booking_uuid: impl Into<String>, stripe_uuid: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            booking_uuid: booking_uuid.into(),
            stripe_uuid: stripe_uuid.into(),
            status: status.into(),
        }
    }
}

impl Payment {
    pub fn from_fields(payment_id: i32, fields: PaymentFields) -> Self {
        Self {
            payment_id,
            payment_booking_uuid: fields.booking_uuid,
            payment_stripe_uuid: fields.stripe_uuid,
            payment_status: fields.status,
        }
    }
}

impl Entity for Payment {
    const KIND: EntityKind = EntityKind::Payment;
    const UNIQUE_FIELD: &'static str = "paymentStripeUuid";

    fn id(&self) -> i32 {
        self.payment_id
    }

    fn unique_value(&self) -> &str {
        &self.payment_stripe_uuid
    }
}

impl Filterable for Payment {
    const FIELDS: &'static [(&'static str, FieldAccessor<Self>)] = &[
        ("paymentId", |p: &Payment| p.payment_id.to_string()),
        ("paymentBookingUuid", |p: &Payment| p.payment_booking_uuid.clone()),
        ("paymentStripeUuid", |p: &Payment| p.payment_stripe_uuid.clone()),
        ("paymentStatus", |p: &Payment| p.payment_status.to_string()),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_is_exact() {
        assert_eq!("PENDING".parse::<PaymentStatus>().unwrap(), PaymentStatus::Pending);
        assert_eq!("REJECTED".parse::<PaymentStatus>().unwrap(), PaymentStatus::Rejected);

        for bad in ["pending", "NotAStatus", "", " CONFIRMED"] {
            let err = bad.parse::<PaymentStatus>().unwrap_err();
            assert!(matches!(err, CoreError::InvalidEnumValue { field: "paymentStatus", .. }));
        }
    }

    #[test]
    fn test_payment_serialization() {
        let payment = Payment::from_fields(
            1,
            PaymentFields {
                booking_uuid: "b-1".to_string(),
                stripe_uuid: "s-1".to_string(),
                status: PaymentStatus::Confirmed,
            },
        );
        let json = serde_json::to_string(&payment).expect("Failed to serialize");
        assert_eq!(
            json,
            r#"{"paymentId":1,"paymentBookingUuid":"b-1","paymentStripeUuid":"s-1","paymentStatus":"CONFIRMED"}"#
        );
    }
}
