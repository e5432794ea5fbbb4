//! In-memory dashboard repository for tests and local experiments.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::db::DashboardRepository;
use crate::errors::AppError;
use crate::models::appointment::{AppointmentRecord, AppointmentStatus};
use crate::models::client::Client;
use crate::models::review::ReviewRecord;

/// Fixed snapshot of booking records, mirroring the Postgres query semantics.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    clients: Vec<Client>,
    appointments: Vec<AppointmentRecord>,
    reviews: Vec<ReviewRecord>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.clients.push(client);
        self
    }

    pub fn with_appointment(mut self, appointment: AppointmentRecord) -> Self {
        self.appointments.push(appointment);
        self
    }

    pub fn with_appointments(
        mut self,
        appointments: impl IntoIterator<Item = AppointmentRecord>,
    ) -> Self {
        self.appointments.extend(appointments);
        self
    }

    pub fn with_review(mut self, review: ReviewRecord) -> Self {
        self.reviews.push(review);
        self
    }

    /// Appointments matching `filter`, ordered by start time, then booking time.
    fn select(&self, filter: impl Fn(&AppointmentRecord) -> bool) -> Vec<AppointmentRecord> {
        let mut rows: Vec<AppointmentRecord> =
            self.appointments.iter().filter(|&a| filter(a)).cloned().collect();
        rows.sort_by_key(|a| (a.start_time, a.created_at));
        rows
    }

    fn count(&self, filter: impl Fn(&AppointmentRecord) -> bool) -> i64 {
        self.appointments.iter().filter(|&a| filter(a)).count() as i64
    }
}

#[async_trait]
impl DashboardRepository for MemoryRepository {
    async fn find_appointments_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError> {
        Ok(self.select(|a| a.start_time >= from && a.start_time <= to))
    }

    async fn count_appointments_between(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<i64, AppError> {
        Ok(self.count(|a| a.start_time >= from && a.start_time <= to))
    }

    async fn count_appointments_between_with_status(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        status: AppointmentStatus,
    ) -> Result<i64, AppError> {
        Ok(self.count(|a| a.start_time >= from && a.start_time <= to && a.status == status))
    }

    async fn find_first_appointment_after(
        &self,
        after: NaiveDateTime,
    ) -> Result<Option<AppointmentRecord>, AppError> {
        Ok(self.select(|a| a.start_time > after).into_iter().next())
    }

    async fn find_appointments_after(
        &self,
        after: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError> {
        Ok(self.select(|a| a.start_time > after))
    }

    async fn count_appointments_by_client(&self, client_id: Uuid) -> Result<i64, AppError> {
        Ok(self.count(|a| a.client_id == client_id))
    }

    async fn find_first_client_appointment_after_with_status(
        &self,
        client_id: Uuid,
        after: NaiveDateTime,
        status: AppointmentStatus,
    ) -> Result<Option<AppointmentRecord>, AppError> {
        Ok(self
            .select(|a| a.client_id == client_id && a.start_time > after && a.status == status)
            .into_iter()
            .next())
    }

    async fn find_client_appointments_after(
        &self,
        client_id: Uuid,
        after: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError> {
        Ok(self.select(|a| a.client_id == client_id && a.start_time > after))
    }

    async fn count_clients_created_after(&self, after: NaiveDateTime) -> Result<i64, AppError> {
        Ok(self.clients.iter().filter(|c| c.created_at > after).count() as i64)
    }

    async fn find_recent_reviews(&self, limit: i64) -> Result<Vec<ReviewRecord>, AppError> {
        let mut rows = self.reviews.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        rows.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
