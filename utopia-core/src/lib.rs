pub mod entity;
pub mod passenger;
pub mod payment;
pub mod filter;
pub mod validation;
pub mod repository;
pub mod memory;
pub mod services;
pub mod fixtures;

pub use entity::{Entity, EntityKind};
pub use passenger::{Passenger, PassengerFields};
pub use payment::{Payment, PaymentCandidate, PaymentFields, PaymentStatus};
pub use filter::{FilterMap, Filterable, SEARCH_TERMS_KEY};
pub use services::{PassengerService, PaymentService};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: EntityKind, key: String },
    #[error("{entity} already exists with {field} {value}")]
    AlreadyExists {
        entity: EntityKind,
        field: String,
        value: String,
    },
    #[error("Invalid value for {field}: {value}")]
    InvalidEnumValue { field: &'static str, value: String },
    #[error("Storage error: {0}")]
    Storage(String),
}

impl CoreError {
    pub fn not_found(entity: EntityKind, key: impl ToString) -> Self {
        CoreError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
