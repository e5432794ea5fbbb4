//! Data access for the dashboard: connection pool and the read-only
//! repository the aggregation service queries.

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::appointment::{AppointmentRecord, AppointmentStatus};
use crate::models::review::ReviewRecord;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

pub type DynDashboardRepository = Arc<dyn DashboardRepository>;

/// Read-only lookups over appointments, clients and reviews.
///
/// Time ranges passed as `from`/`to` are inclusive on both ends; `after`
/// bounds are exclusive. Lists of appointments come back ordered by start
/// time ascending.
#[async_trait]
pub trait DashboardRepository: Send + Sync + std::fmt::Debug {
    async fn find_appointments_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError>;

    async fn count_appointments_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, AppError>;

    async fn count_appointments_between_with_status(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        status: AppointmentStatus,
    ) -> Result<i64, AppError>;

    /// Earliest appointment of any client and status starting after `after`.
    async fn find_first_appointment_after(
        &self,
        after: NaiveDateTime,
    ) -> Result<Option<AppointmentRecord>, AppError>;

    async fn find_appointments_after(
        &self,
        after: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError>;

    /// All-time appointment count for one client, any status.
    async fn count_appointments_by_client(&self, client_id: Uuid) -> Result<i64, AppError>;

    async fn find_first_client_appointment_after_with_status(
        &self,
        client_id: Uuid,
        after: NaiveDateTime,
        status: AppointmentStatus,
    ) -> Result<Option<AppointmentRecord>, AppError>;

    async fn find_client_appointments_after(
        &self,
        client_id: Uuid,
        after: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError>;

    async fn count_clients_created_after(&self, after: NaiveDateTime) -> Result<i64, AppError>;

    /// Most recently created reviews, newest first.
    async fn find_recent_reviews(&self, limit: i64) -> Result<Vec<ReviewRecord>, AppError>;

    /// Connectivity check used by the readiness check.
    async fn ping(&self) -> Result<(), AppError>;
}

/// Create a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}
