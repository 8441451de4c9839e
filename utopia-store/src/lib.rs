pub mod app_config;
pub mod database;
pub mod passenger_repo;
pub mod payment_repo;

pub use database::DbClient;
pub use passenger_repo::PostgresPassengerRepository;
pub use payment_repo::PostgresPaymentRepository;
