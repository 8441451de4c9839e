use serde::Serialize;
use std::fmt;

/// The record types managed by the utopia services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Passenger,
    Payment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Passenger => write!(f, "Passenger"),
            EntityKind::Payment => write!(f, "Payment"),
        }
    }
}

/// A persisted record with an assigned identity and one natural key that
/// must stay unique across its collection.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    const KIND: EntityKind;
    /// Filter/JSON name of the unique natural key.
    const UNIQUE_FIELD: &'static str;

    fn id(&self) -> i32;
    fn unique_value(&self) -> &str;
}
