use async_trait::async_trait;
use sqlx::PgPool;
use utopia_core::repository::PassengerRepository;
use utopia_core::{Passenger, PassengerFields};

use crate::database::write_error;

pub struct PostgresPassengerRepository {
    pool: PgPool,
}

impl PostgresPassengerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PASSENGER_COLUMNS: &str = "passenger_id, passenger_booking_id, passenger_passport_id, \
    passenger_first_name, passenger_last_name, passenger_date_of_birth, passenger_sex, \
    passenger_address, passenger_is_veteran";

#[derive(sqlx::FromRow)]
struct PassengerRow {
    passenger_id: i32,
    passenger_booking_id: i32,
    passenger_passport_id: String,
    passenger_first_name: String,
    passenger_last_name: String,
    passenger_date_of_birth: String,
    passenger_sex: String,
    passenger_address: String,
    passenger_is_veteran: bool,
}

impl From<PassengerRow> for Passenger {
    fn from(row: PassengerRow) -> Self {
        Passenger {
            passenger_id: row.passenger_id,
            passenger_booking_id: row.passenger_booking_id,
            passenger_passport_id: row.passenger_passport_id,
            passenger_first_name: row.passenger_first_name,
            passenger_last_name: row.passenger_last_name,
            passenger_date_of_birth: row.passenger_date_of_birth,
            passenger_sex: row.passenger_sex,
            passenger_address: row.passenger_address,
            passenger_is_veteran: row.passenger_is_veteran,
        }
    }
}

#[async_trait]
impl PassengerRepository for PostgresPassengerRepository {
    async fn find_all(&self) -> Result<Vec<Passenger>, Box<dyn std::error::Error + Send + Sync>> {
        let sql = format!("SELECT {} FROM passenger ORDER BY passenger_id", PASSENGER_COLUMNS);
        let rows = sqlx::query_as::<_, PassengerRow>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Passenger::from).collect())
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Passenger>, Box<dyn std::error::Error + Send + Sync>> {
        let sql = format!("SELECT {} FROM passenger WHERE passenger_id = $1", PASSENGER_COLUMNS);
        let row = sqlx::query_as::<_, PassengerRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Passenger::from))
    }

    async fn find_by_booking_id(
        &self,
        booking_id: i32,
    ) -> Result<Option<Passenger>, Box<dyn std::error::Error + Send + Sync>> {
        let sql = format!(
            "SELECT {} FROM passenger WHERE passenger_booking_id = $1 ORDER BY passenger_id LIMIT 1",
            PASSENGER_COLUMNS
        );
        let row = sqlx::query_as::<_, PassengerRow>(&sql)
            .bind(booking_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Passenger::from))
    }

    async fn find_by_passport_id(
        &self,
        passport_id: &str,
    ) -> Result<Option<Passenger>, Box<dyn std::error::Error + Send + Sync>> {
        let sql = format!("SELECT {} FROM passenger WHERE passenger_passport_id = $1", PASSENGER_COLUMNS);
        let row = sqlx::query_as::<_, PassengerRow>(&sql)
            .bind(passport_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Passenger::from))
    }

    async fn insert(
        &self,
        fields: &PassengerFields,
    ) -> Result<Passenger, Box<dyn std::error::Error + Send + Sync>> {
        let sql = format!(
            r#"
            INSERT INTO passenger (
                passenger_booking_id, passenger_passport_id, passenger_first_name, passenger_last_name,
                passenger_date_of_birth, passenger_sex, passenger_address, passenger_is_veteran
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            PASSENGER_COLUMNS
        );
        let row = sqlx::query_as::<_, PassengerRow>(&sql)
            .bind(fields.booking_id)
            .bind(&fields.passport_id)
            .bind(&fields.first_name)
            .bind(&fields.last_name)
            .bind(&fields.date_of_birth)
            .bind(&fields.sex)
            .bind(&fields.address)
            .bind(fields.is_veteran)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| write_error(e, "passenger_passport_id"))?;

        Ok(row.into())
    }

    async fn update(
        &self,
        passenger: &Passenger,
    ) -> Result<Passenger, Box<dyn std::error::Error + Send + Sync>> {
        let sql = format!(
            r#"
            UPDATE passenger
            SET passenger_booking_id = $2, passenger_passport_id = $3, passenger_first_name = $4,
                passenger_last_name = $5, passenger_date_of_birth = $6, passenger_sex = $7,
                passenger_address = $8, passenger_is_veteran = $9
            WHERE passenger_id = $1
            RETURNING {}
            "#,
            PASSENGER_COLUMNS
        );
        let row = sqlx::query_as::<_, PassengerRow>(&sql)
            .bind(passenger.passenger_id)
            .bind(passenger.passenger_booking_id)
            .bind(&passenger.passenger_passport_id)
            .bind(&passenger.passenger_first_name)
            .bind(&passenger.passenger_last_name)
            .bind(&passenger.passenger_date_of_birth)
            .bind(&passenger.passenger_sex)
            .bind(&passenger.passenger_address)
            .bind(passenger.passenger_is_veteran)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| write_error(e, "passenger_passport_id"))?
            .ok_or_else(|| format!("No Passenger row with id {}", passenger.passenger_id))?;

        Ok(row.into())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("DELETE FROM passenger WHERE passenger_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
