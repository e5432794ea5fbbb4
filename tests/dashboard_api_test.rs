//! Router-level tests for the dashboard API using the in-memory repository.
//!
//! Run with: `cargo test --test dashboard_api_test`

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use booking_dashboard::config::AppConfig;
use booking_dashboard::db::{DashboardRepository, MemoryRepository};
use booking_dashboard::errors::AppError;
use booking_dashboard::models::appointment::AppointmentStatus::{
    Cancelled, Completed, Confirmed, Pending,
};
use booking_dashboard::models::appointment::{AppointmentRecord, AppointmentStatus};
use booking_dashboard::models::client::Client;
use booking_dashboard::models::review::ReviewRecord;
use booking_dashboard::services::clock::FixedClock;
use booking_dashboard::{routes, AppState};
use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, 0)
        .unwrap()
}

/// Wednesday 10 June 2026, 09:00.
fn now() -> NaiveDateTime {
    at(2026, 6, 10, 9, 0)
}

fn config() -> AppConfig {
    AppConfig {
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        host: "127.0.0.1".to_string(),
        port: 0,
        frontend_url: "http://localhost:5173".to_string(),
    }
}

fn app(repo: impl DashboardRepository + 'static) -> Router {
    routes::router(AppState {
        repo: Arc::new(repo),
        clock: Arc::new(FixedClock(now())),
        config: config(),
    })
}

fn client(name: &str, created_at: NaiveDateTime) -> Client {
    Client {
        id: Uuid::new_v4(),
        name: name.to_string(),
        created_at,
    }
}

fn appointment(
    client: &Client,
    service: &str,
    price_cents: i64,
    start_time: NaiveDateTime,
    status: AppointmentStatus,
) -> AppointmentRecord {
    AppointmentRecord {
        id: Uuid::new_v4(),
        start_time,
        status,
        client_id: client.id,
        client_name: client.name.clone(),
        service_id: Uuid::new_v4(),
        service_name: service.to_string(),
        price_cents,
        created_at: at(2026, 5, 1, 12, 0),
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn business_dashboard_populates_business_fields_only() {
    let ana = client("Ana Souza", at(2026, 6, 2, 8, 0));
    let bruno = client("Bruno Lima", at(2025, 11, 20, 8, 0));
    let repo = MemoryRepository::new()
        .with_client(ana.clone())
        .with_client(bruno.clone())
        .with_appointments([
            appointment(&ana, "Coloring", 12_000, at(2026, 6, 10, 8, 0), Completed),
            appointment(&bruno, "Haircut", 4_550, at(2026, 6, 10, 14, 30), Confirmed),
            appointment(&bruno, "Beard Trim", 2_500, at(2026, 6, 3, 10, 0), Cancelled),
        ])
        .with_review(ReviewRecord {
            id: Uuid::new_v4(),
            client_id: ana.id,
            client_name: ana.name.clone(),
            rating: 5,
            comment: "Loved it".to_string(),
            created_at: at(2026, 6, 9, 18, 0),
        });

    let (status, body) = get(app(repo), "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["monthlyRevenue"], json!(190.5));
    assert_eq!(body["appointmentsToday"], 2);
    assert_eq!(body["confirmedAppointmentsToday"], 1);
    assert_eq!(body["nextAppointmentTime"], "2026-06-10T14:30");
    assert_eq!(body["nextAppointmentDescription"], "Bruno Lima - Haircut");
    assert_eq!(body["newCustomers"], 1);
    assert_eq!(body["topUpcomingAppointments"].as_array().unwrap().len(), 1);
    assert_eq!(
        body["topCustomers"],
        json!([
            { "name": "Ana Souza", "totalSpend": 120, "appointmentCount": 1 },
            { "name": "Bruno Lima", "totalSpend": 71, "appointmentCount": 2 },
        ])
    );
    assert_eq!(
        body["recentReviews"],
        json!([{ "clientName": "Ana Souza", "rating": 5, "comment": "Loved it" }])
    );

    assert!(body["nextAppointment"].is_null());
    assert!(body["totalAppointments"].is_null());
    assert!(body["upcomingAppointments"].is_null());
}

#[tokio::test]
async fn business_dashboard_without_future_appointments() {
    let (status, body) = get(app(MemoryRepository::new()), "/api/dashboard").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["nextAppointmentTime"].is_null());
    assert!(body["nextAppointmentDescription"].is_null());
    assert_eq!(body["topUpcomingAppointments"], json!([]));
    assert_eq!(body["appointmentsToday"], 0);
}

#[tokio::test]
async fn client_dashboard_populates_client_fields_only() {
    let ana = client("Ana Souza", at(2025, 1, 1, 8, 0));
    let repo = MemoryRepository::new()
        .with_client(ana.clone())
        .with_appointments([
            appointment(&ana, "Haircut", 4_500, at(2026, 6, 10, 11, 0), Pending),
            appointment(&ana, "Coloring", 12_000, at(2026, 6, 12, 15, 0), Confirmed),
            appointment(&ana, "Haircut", 4_500, at(2026, 5, 2, 15, 0), Completed),
        ]);

    let (status, body) = get(app(repo), &format!("/api/dashboard/{}", ana.id)).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["totalAppointments"], 3);
    assert_eq!(body["nextAppointment"]["serviceName"], "Coloring");
    assert_eq!(body["nextAppointment"]["status"], "CONFIRMED");
    assert_eq!(body["nextAppointment"]["servicePrice"], json!(120.0));
    let upcoming: Vec<&str> = body["upcomingAppointments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["serviceName"].as_str().unwrap())
        .collect();
    assert_eq!(upcoming, vec!["Haircut", "Coloring"]);

    assert!(body["monthlyRevenue"].is_null());
    assert!(body["appointmentsToday"].is_null());
    assert!(body["topCustomers"].is_null());
    assert!(body["recentReviews"].is_null());
}

#[tokio::test]
async fn unknown_client_is_not_an_error() {
    let uri = format!("/api/dashboard/{}", Uuid::new_v4());
    let (status, body) = get(app(MemoryRepository::new()), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalAppointments"], 0);
    assert_eq!(body["upcomingAppointments"], json!([]));
    assert!(body["nextAppointment"].is_null());
}

#[tokio::test]
async fn malformed_client_id_is_rejected() {
    let (status, _) = get(app(MemoryRepository::new()), "/api/dashboard/not-a-uuid").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_endpoints_report_ok() {
    let response = app(MemoryRepository::new())
        .oneshot(Request::builder().uri("/health/live").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let (status, body) = get(app(MemoryRepository::new()), "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["database"], "connected");
}

/// Repository whose every call fails, to exercise error propagation.
#[derive(Debug)]
struct UnavailableRepository;

fn unavailable<T>() -> Result<T, AppError> {
    Err(AppError::Database(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl DashboardRepository for UnavailableRepository {
    async fn find_appointments_between(
        &self,
        _: NaiveDateTime,
        _: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError> {
        unavailable()
    }
    async fn count_appointments_between(
        &self,
        _: NaiveDateTime,
        _: NaiveDateTime,
    ) -> Result<i64, AppError> {
        unavailable()
    }
    async fn count_appointments_between_with_status(
        &self,
        _: NaiveDateTime,
        _: NaiveDateTime,
        _: AppointmentStatus,
    ) -> Result<i64, AppError> {
        unavailable()
    }
    async fn find_first_appointment_after(
        &self,
        _: NaiveDateTime,
    ) -> Result<Option<AppointmentRecord>, AppError> {
        unavailable()
    }
    async fn find_appointments_after(
        &self,
        _: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError> {
        unavailable()
    }
    async fn count_appointments_by_client(&self, _: Uuid) -> Result<i64, AppError> {
        unavailable()
    }
    async fn find_first_client_appointment_after_with_status(
        &self,
        _: Uuid,
        _: NaiveDateTime,
        _: AppointmentStatus,
    ) -> Result<Option<AppointmentRecord>, AppError> {
        unavailable()
    }
    async fn find_client_appointments_after(
        &self,
        _: Uuid,
        _: NaiveDateTime,
    ) -> Result<Vec<AppointmentRecord>, AppError> {
        unavailable()
    }
    async fn count_clients_created_after(&self, _: NaiveDateTime) -> Result<i64, AppError> {
        unavailable()
    }
    async fn find_recent_reviews(&self, _: i64) -> Result<Vec<ReviewRecord>, AppError> {
        unavailable()
    }
    async fn ping(&self) -> Result<(), AppError> {
        unavailable()
    }
}

#[tokio::test]
async fn store_failures_surface_as_internal_errors() {
    let (status, body) = get(app(UnavailableRepository), "/api/dashboard").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");

    let uri = format!("/api/dashboard/{}", Uuid::new_v4());
    let (status, _) = get(app(UnavailableRepository), &uri).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, body) = get(app(UnavailableRepository), "/health/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["database"].as_str().unwrap().starts_with("error:"));
}
