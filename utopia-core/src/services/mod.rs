pub mod passenger;
pub mod payment;

pub use passenger::PassengerService;
pub use payment::PaymentService;

/// Confirmation returned by a successful delete.
pub fn deleted_message(entity: crate::EntityKind, id: i32) -> String {
    format!("{} with ID: {} was deleted.", entity, id)
}

pub(crate) fn storage(err: Box<dyn std::error::Error + Send + Sync>) -> crate::CoreError {
    crate::CoreError::Storage(err.to_string())
}
