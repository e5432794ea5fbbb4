//! Dashboard aggregation: business-wide and per-client summaries.
//!
//! Both computations take "now" as an argument so results depend only on the
//! stored records and the supplied instant.

use std::collections::HashMap;

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use uuid::Uuid;

use crate::db::DashboardRepository;
use crate::errors::AppError;
use crate::models::appointment::{AppointmentRecord, AppointmentStatus, AppointmentView};
use crate::models::dashboard::{BusinessSummary, ClientSummary, TopCustomer};
use crate::models::money;
use crate::models::review::RecentReview;

/// Upcoming appointments shown on the business dashboard.
pub const TOP_UPCOMING_LIMIT: usize = 5;

/// Clients listed in the monthly spend ranking.
pub const TOP_CUSTOMERS_LIMIT: usize = 3;

/// Reviews shown in the recent feed.
pub const RECENT_REVIEWS_LIMIT: i64 = 5;

/// Day windows end at 23:59:59, not at the next midnight.
const LAST_SECOND_OF_DAY: i64 = 24 * 60 * 60 - 1;

/// Inclusive `[00:00:00, 23:59:59]` bounds of `date`.
pub fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    (start, start + TimeDelta::seconds(LAST_SECOND_OF_DAY))
}

/// Inclusive bounds from the first day 00:00:00 to the last day 23:59:59 of
/// the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let first = date - Days::new(u64::from(date.day0()));
    let last = first + Months::new(1) - Days::new(1);
    (day_bounds(first).0, day_bounds(last).1)
}

/// ISO-8601 local timestamp with the shortest exact time part:
/// `2026-03-14T11:30`, `2026-03-14T11:30:15` or `2026-03-14T11:30:15.250`.
pub fn format_timestamp(at: NaiveDateTime) -> String {
    let mut out = at.format("%Y-%m-%dT%H:%M").to_string();
    if at.second() != 0 || at.nanosecond() != 0 {
        out.push_str(&at.format(":%S").to_string());
    }
    if at.nanosecond() != 0 {
        // %.f picks 3, 6 or 9 digits.
        out.push_str(&at.format("%.f").to_string());
    }
    out
}

/// Build the establishment-wide dashboard as of `now`.
pub async fn business_summary(
    repo: &dyn DashboardRepository,
    now: NaiveDateTime,
) -> Result<BusinessSummary, AppError> {
    let (day_start, day_end) = day_bounds(now.date());
    let (month_start, month_end) = month_bounds(now.date());

    let (
        month_appointments,
        appointments_today,
        confirmed_appointments_today,
        next_appointment,
        new_customers,
        upcoming,
        reviews,
    ) = tokio::try_join!(
        repo.find_appointments_between(month_start, month_end),
        repo.count_appointments_between(day_start, day_end),
        repo.count_appointments_between_with_status(
            day_start,
            day_end,
            AppointmentStatus::Confirmed
        ),
        repo.find_first_appointment_after(now),
        repo.count_clients_created_after(month_start),
        repo.find_appointments_after(now),
        repo.find_recent_reviews(RECENT_REVIEWS_LIMIT),
    )?;

    // No status filter: cancelled bookings still count toward revenue.
    let revenue_cents: i64 = month_appointments.iter().map(|a| a.price_cents).sum();

    let top_customers = top_customers(repo, &month_appointments).await?;

    tracing::debug!(
        month_appointments = month_appointments.len(),
        appointments_today,
        upcoming = upcoming.len(),
        "Computed business dashboard"
    );

    Ok(BusinessSummary {
        monthly_revenue: money::cents_to_major(revenue_cents),
        appointments_today,
        confirmed_appointments_today,
        next_appointment_time: next_appointment.as_ref().map(|a| format_timestamp(a.start_time)),
        next_appointment_description: next_appointment
            .as_ref()
            .map(AppointmentRecord::description),
        new_customers,
        top_upcoming_appointments: earliest(upcoming, TOP_UPCOMING_LIMIT),
        top_customers,
        recent_reviews: reviews.into_iter().map(RecentReview::from).collect(),
    })
}

/// Build the dashboard for one client as of `now`.
///
/// Unknown clients produce an empty summary rather than an error.
pub async fn client_summary(
    repo: &dyn DashboardRepository,
    client_id: Uuid,
    now: NaiveDateTime,
) -> Result<ClientSummary, AppError> {
    let (next_appointment, total_appointments, upcoming) = tokio::try_join!(
        repo.find_first_client_appointment_after_with_status(
            client_id,
            now,
            AppointmentStatus::Confirmed
        ),
        repo.count_appointments_by_client(client_id),
        repo.find_client_appointments_after(client_id, now),
    )?;

    tracing::debug!(%client_id, total_appointments, "Computed client dashboard");

    Ok(ClientSummary {
        next_appointment: next_appointment.map(AppointmentView::from),
        total_appointments,
        upcoming_appointments: earliest(upcoming, usize::MAX),
    })
}

/// Sort by start time, then booking time, and keep at most `limit` entries.
fn earliest(mut appointments: Vec<AppointmentRecord>, limit: usize) -> Vec<AppointmentView> {
    appointments.sort_by_key(|a| (a.start_time, a.created_at));
    appointments
        .into_iter()
        .take(limit)
        .map(AppointmentView::from)
        .collect()
}

/// Monthly spend accumulated for one client.
#[derive(Debug, Clone, PartialEq)]
struct CustomerSpend {
    client_id: Uuid,
    name: String,
    spend_cents: i64,
}

/// Group appointments by client and rank by total spend, highest first.
///
/// Clients with equal spend keep the order in which they first appear.
fn rank_by_spend(appointments: &[AppointmentRecord]) -> Vec<CustomerSpend> {
    let mut totals: Vec<CustomerSpend> = Vec::new();
    let mut index: HashMap<Uuid, usize> = HashMap::new();

    for a in appointments {
        match index.get(&a.client_id) {
            Some(&i) => totals[i].spend_cents += a.price_cents,
            None => {
                index.insert(a.client_id, totals.len());
                totals.push(CustomerSpend {
                    client_id: a.client_id,
                    name: a.client_name.clone(),
                    spend_cents: a.price_cents,
                });
            }
        }
    }

    totals.sort_by(|a, b| b.spend_cents.cmp(&a.spend_cents));
    totals
}

/// Top spenders of the month, each with their all-time appointment count.
async fn top_customers(
    repo: &dyn DashboardRepository,
    month_appointments: &[AppointmentRecord],
) -> Result<Vec<TopCustomer>, AppError> {
    let mut result = Vec::with_capacity(TOP_CUSTOMERS_LIMIT);
    for spend in rank_by_spend(month_appointments)
        .into_iter()
        .take(TOP_CUSTOMERS_LIMIT)
    {
        let appointment_count = repo.count_appointments_by_client(spend.client_id).await?;
        result.push(TopCustomer {
            name: spend.name,
            total_spend: money::round_to_major(spend.spend_cents),
            appointment_count,
        });
    }
    Ok(result)
}
