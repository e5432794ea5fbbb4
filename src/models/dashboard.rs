//! Dashboard summary shapes and their wire representation.

use serde::Serialize;

use crate::models::appointment::AppointmentView;
use crate::models::review::RecentReview;

/// Establishment-wide overview for the business owner.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessSummary {
    pub monthly_revenue: f64,
    pub appointments_today: i64,
    pub confirmed_appointments_today: i64,
    pub next_appointment_time: Option<String>,
    pub next_appointment_description: Option<String>,
    pub new_customers: i64,
    pub top_upcoming_appointments: Vec<AppointmentView>,
    pub top_customers: Vec<TopCustomer>,
    pub recent_reviews: Vec<RecentReview>,
}

/// Overview of a single client's own bookings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSummary {
    pub next_appointment: Option<AppointmentView>,
    pub total_appointments: i64,
    pub upcoming_appointments: Vec<AppointmentView>,
}

/// Highest-spending client of the current month.
///
/// `appointment_count` is the client's all-time count while the ranking uses
/// month-scoped spend.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopCustomer {
    pub name: String,
    pub total_spend: i64,
    pub appointment_count: i64,
}

/// One of the two dashboard views.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardSummary {
    Business(BusinessSummary),
    Client(ClientSummary),
}

impl From<BusinessSummary> for DashboardSummary {
    fn from(s: BusinessSummary) -> Self {
        Self::Business(s)
    }
}

impl From<ClientSummary> for DashboardSummary {
    fn from(s: ClientSummary) -> Self {
        Self::Client(s)
    }
}

/// Flat response body shared by both dashboard routes.
///
/// Fields belonging to the other view serialize as `null`.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub monthly_revenue: Option<f64>,
    pub appointments_today: Option<i64>,
    pub confirmed_appointments_today: Option<i64>,
    pub next_appointment_time: Option<String>,
    pub next_appointment_description: Option<String>,
    pub new_customers: Option<i64>,
    pub top_upcoming_appointments: Option<Vec<AppointmentView>>,
    pub top_customers: Option<Vec<TopCustomer>>,
    pub recent_reviews: Option<Vec<RecentReview>>,
    pub next_appointment: Option<AppointmentView>,
    pub total_appointments: Option<i64>,
    pub upcoming_appointments: Option<Vec<AppointmentView>>,
}

impl From<DashboardSummary> for SummaryResponse {
    fn from(summary: DashboardSummary) -> Self {
        match summary {
            DashboardSummary::Business(b) => Self {
                monthly_revenue: Some(b.monthly_revenue),
                appointments_today: Some(b.appointments_today),
                confirmed_appointments_today: Some(b.confirmed_appointments_today),
                next_appointment_time: b.next_appointment_time,
                next_appointment_description: b.next_appointment_description,
                new_customers: Some(b.new_customers),
                top_upcoming_appointments: Some(b.top_upcoming_appointments),
                top_customers: Some(b.top_customers),
                recent_reviews: Some(b.recent_reviews),
                ..Self::default()
            },
            DashboardSummary::Client(c) => Self {
                next_appointment: c.next_appointment,
                total_appointments: Some(c.total_appointments),
                upcoming_appointments: Some(c.upcoming_appointments),
                ..Self::default()
            },
        }
    }
}
