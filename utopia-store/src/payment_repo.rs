use async_trait::async_trait;
use sqlx::PgPool;
use utopia_core::repository::PaymentRepository;
use utopia_core::{Payment, PaymentFields, PaymentStatus};

use crate::database::write_error;

pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const SELECT_PAYMENT: &str =
    "SELECT payment_id, payment_booking_uuid, payment_stripe_uuid, payment_status FROM payment";

#[derive(sqlx::FromRow)]
struct PaymentRow {
    payment_id: i32,
    payment_booking_uuid: String,
    payment_stripe_uuid: String,
    payment_status: String,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = Box<dyn std::error::Error + Send + Sync>;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let status: PaymentStatus = row.payment_status.parse()?;
        Ok(Payment {
            payment_id: row.payment_id,
            payment_booking_uuid: row.payment_booking_uuid,
            payment_stripe_uuid: row.payment_stripe_uuid,
            payment_status: status,
        })
    }
}

impl PostgresPaymentRepository {
    async fn fetch_one_where(
        &self,
        clause: &str,
        value: &str,
    ) -> Result<Option<Payment>, Box<dyn std::error::Error + Send + Sync>> {
        let sql = format!("{} WHERE {} = $1 ORDER BY payment_id LIMIT 1", SELECT_PAYMENT, clause);
        let row = sqlx::query_as::<_, PaymentRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Payment::try_from).transpose()
    }
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn find_all(&self) -> Result<Vec<Payment>, Box<dyn std::error::Error + Send + Sync>> {
        let rows = sqlx::query_as::<_, PaymentRow>(&format!("{} ORDER BY payment_id", SELECT_PAYMENT))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Payment::try_from).collect()
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<Payment>, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, PaymentRow>(&format!("{} WHERE payment_id = $1", SELECT_PAYMENT))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Payment::try_from).transpose()
    }

    async fn find_by_booking_uuid(
        &self,
        booking_uuid: &str,
    ) -> Result<Option<Payment>, Box<dyn std::error::Error + Send + Sync>> {
        self.fetch_one_where("payment_booking_uuid", booking_uuid).await
    }

    async fn find_by_stripe_uuid(
        &self,
        stripe_uuid: &str,
    ) -> Result<Option<Payment>, Box<dyn std::error::Error + Send + Sync>> {
        self.fetch_one_where("payment_stripe_uuid", stripe_uuid).await
    }

    async fn insert(
        &self,
        fields: &PaymentFields,
    ) -> Result<Payment, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, PaymentRow>(
            r#"
            INSERT INTO payment (payment_booking_uuid, payment_stripe_uuid, payment_status)
            VALUES ($1, $2, $3)
            RETURNING payment_id, payment_booking_uuid, payment_stripe_uuid, payment_status
            "#,
        )
        .bind(&fields.booking_uuid)
        .bind(&fields.stripe_uuid)
        .bind(fields.status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| write_error(e, "payment_stripe_uuid"))?;

        Payment::try_from(row)
    }

    async fn update(
        &self,
        payment: &Payment,
    ) -> Result<Payment, Box<dyn std::error::Error + Send + Sync>> {
        let row = sqlx::query_as::<_, PaymentRow>(
            r#"
            UPDATE payment
            SET payment_booking_uuid = $2, payment_stripe_uuid = $3, payment_status = $4
            WHERE payment_id = $1
            RETURNING payment_id, payment_booking_uuid, payment_stripe_uuid, payment_status
            "#,
        )
        .bind(payment.payment_id)
        .bind(&payment.payment_booking_uuid)
        .bind(&payment.payment_stripe_uuid)
        .bind(payment.payment_status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| write_error(e, "payment_stripe_uuid"))?
        .ok_or_else(|| format!("No Payment row with id {}", payment.payment_id))?;

        Payment::try_from(row)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        sqlx::query("DELETE FROM payment WHERE payment_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
