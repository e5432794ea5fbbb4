//! Appointment records as read by the dashboard, and their API view.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::money;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "appointment_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

/// Appointment row joined with its client and service.
#[derive(Debug, Clone, FromRow, PartialEq)]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub start_time: NaiveDateTime,
    pub status: AppointmentStatus,
    pub client_id: Uuid,
    pub client_name: String,
    pub service_id: Uuid,
    pub service_name: String,
    pub price_cents: i64,
    pub created_at: NaiveDateTime,
}

impl AppointmentRecord {
    /// Human readable one-liner, e.g. `"Ana Souza - Haircut"`.
    pub fn description(&self) -> String {
        format!("{} - {}", self.client_name, self.service_name)
    }
}

/// Appointment as exposed in dashboard responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentView {
    pub id: Uuid,
    pub client_id: Uuid,
    pub client_name: String,
    pub service_name: String,
    pub service_price: f64,
    pub start_time: NaiveDateTime,
    pub status: AppointmentStatus,
    pub created_at: NaiveDateTime,
}

impl From<AppointmentRecord> for AppointmentView {
    fn from(a: AppointmentRecord) -> Self {
        Self {
            id: a.id,
            client_id: a.client_id,
            client_name: a.client_name,
            service_name: a.service_name,
            service_price: money::cents_to_major(a.price_cents),
            start_time: a.start_time,
            status: a.status,
            created_at: a.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record() -> AppointmentRecord {
        let at = NaiveDate::from_ymd_opt(2026, 3, 14)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        AppointmentRecord {
            id: Uuid::nil(),
            start_time: at,
            status: AppointmentStatus::Confirmed,
            client_id: Uuid::nil(),
            client_name: "Ana Souza".to_string(),
            service_id: Uuid::nil(),
            service_name: "Haircut".to_string(),
            price_cents: 4550,
            created_at: at,
        }
    }

    #[test]
    fn status_serializes_uppercase() {
        let json = serde_json::to_string(&AppointmentStatus::Confirmed).unwrap();
        assert_eq!(json, "\"CONFIRMED\"");
        let parsed: AppointmentStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, AppointmentStatus::Cancelled);
    }

    #[test]
    fn description_joins_client_and_service() {
        assert_eq!(record().description(), "Ana Souza - Haircut");
    }

    #[test]
    fn view_converts_price_to_major_units() {
        let view = AppointmentView::from(record());
        assert_eq!(view.service_price, 45.5);
        assert_eq!(view.service_name, "Haircut");
    }

    #[test]
    fn view_uses_camel_case_keys() {
        let json = serde_json::to_value(AppointmentView::from(record())).unwrap();
        assert_eq!(json["clientName"], "Ana Souza");
        assert_eq!(json["startTime"], "2026-03-14T09:30:00");
        assert_eq!(json["status"], "CONFIRMED");
        assert!(json.get("price_cents").is_none());
    }
}
