//! PostgreSQL-backed dashboard repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::DashboardRepository;
use crate::errors::AppError;
use crate::models::appointment::{AppointmentRecord, AppointmentStatus};
use crate::models::review::ReviewRecord;

/// Appointment columns joined with client and service.
const APPOINTMENT_SELECT: &str = r#"
    SELECT
        a.id,
        a.start_time,
        a.status,
        a.client_id,
        c.name AS client_name,
        a.service_id,
        s.name AS service_name,
        s.price_cents,
        a.created_at
    FROM appointments a
    INNER JOIN clients c ON c.id = a.client_id
    INNER JOIN services s ON s.id = a.service_id
"#;

/// Tie-break on creation so equal start times keep booking order.
const APPOINTMENT_ORDER: &str = "ORDER BY a.start_time ASC, a.created_at ASC";

#[derive(Debug, Clone)]
pub struct PgRepository {
    pool: PgPool,
}

impl PgRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DashboardRepository for PgRepository {
    async fn find_appointments_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError> {
        let sql = format!(
            "{APPOINTMENT_SELECT} WHERE a.start_time BETWEEN $1 AND $2 {APPOINTMENT_ORDER}"
        );
        let rows = sqlx::query_as::<_, AppointmentRecord>(&sql)
            .bind(from)
            .bind(to)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count_appointments_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM appointments WHERE start_time BETWEEN $1 AND $2",
        )
        .bind(from)
        .bind(to)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn count_appointments_between_with_status(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        status: AppointmentStatus,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM appointments WHERE start_time BETWEEN $1 AND $2 AND status = $3",
        )
        .bind(from)
        .bind(to)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn find_first_appointment_after(
        &self,
        after: NaiveDateTime,
    ) -> Result<Option<AppointmentRecord>, AppError> {
        let sql =
            format!("{APPOINTMENT_SELECT} WHERE a.start_time > $1 {APPOINTMENT_ORDER} LIMIT 1");
        let row = sqlx::query_as::<_, AppointmentRecord>(&sql)
            .bind(after)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_appointments_after(
        &self,
        after: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError> {
        let sql = format!("{APPOINTMENT_SELECT} WHERE a.start_time > $1 {APPOINTMENT_ORDER}");
        let rows = sqlx::query_as::<_, AppointmentRecord>(&sql)
            .bind(after)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count_appointments_by_client(&self, client_id: Uuid) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM appointments WHERE client_id = $1",
        )
        .bind(client_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn find_first_client_appointment_after_with_status(
        &self,
        client_id: Uuid,
        after: NaiveDateTime,
        status: AppointmentStatus,
    ) -> Result<Option<AppointmentRecord>, AppError> {
        let sql = format!(
            "{APPOINTMENT_SELECT}
             WHERE a.client_id = $1 AND a.start_time > $2 AND a.status = $3
             {APPOINTMENT_ORDER} LIMIT 1"
        );
        let row = sqlx::query_as::<_, AppointmentRecord>(&sql)
            .bind(client_id)
            .bind(after)
            .bind(status)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn find_client_appointments_after(
        &self,
        client_id: Uuid,
        after: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError> {
        let sql = format!(
            "{APPOINTMENT_SELECT} WHERE a.client_id = $1 AND a.start_time > $2 {APPOINTMENT_ORDER}"
        );
        let rows = sqlx::query_as::<_, AppointmentRecord>(&sql)
            .bind(client_id)
            .bind(after)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count_clients_created_after(&self, after: NaiveDateTime) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM clients WHERE created_at > $1",
        )
        .bind(after)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }

    async fn find_recent_reviews(&self, limit: i64) -> Result<Vec<ReviewRecord>, AppError> {
        let rows = sqlx::query_as::<_, ReviewRecord>(
            r#"
            SELECT r.id, r.client_id, c.name AS client_name, r.rating, r.comment, r.created_at
            FROM reviews r
            INNER JOIN clients c ON c.id = r.client_id
            ORDER BY r.created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
