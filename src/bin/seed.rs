//! Seed script for development: populates a fresh database with sample
//! clients, services, appointments and reviews around the current date.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env).

use anyhow::Context;
use booking_dashboard::models::appointment::AppointmentStatus;
use chrono::{Local, NaiveDateTime, TimeDelta};
use sqlx::PgPool;
use uuid::Uuid;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = booking_dashboard::db::create_pool(&db_url, 5).await?;

    // Run migrations first
    sqlx::migrate!("./migrations").run(&pool).await?;

    println!("=== Booking Dashboard Seed Script ===");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
        .fetch_one(&pool)
        .await?;
    if count > 0 {
        println!("[skip] Clients already exist ({count})");
        return Ok(());
    }

    let now = Local::now().naive_local();
    let clients = seed_clients(&pool, now).await?;
    let services = seed_services(&pool).await?;
    seed_appointments(&pool, now, &clients, &services).await?;
    seed_reviews(&pool, now, &clients).await?;

    println!("\n=== Seed complete! ===");
    Ok(())
}

async fn seed_clients(pool: &PgPool, now: NaiveDateTime) -> anyhow::Result<Vec<Uuid>> {
    let clients = [
        ("Ana Souza", "ana@example.com", 400),
        ("Bruno Lima", "bruno@example.com", 120),
        ("Carla Mendes", "carla@example.com", 45),
        ("Diego Rocha", "diego@example.com", 3),
        ("Elisa Prado", "elisa@example.com", 1),
    ];

    let mut ids = Vec::with_capacity(clients.len());
    for (name, email, days_ago) in clients {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO clients (name, email, created_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(email)
        .bind(now - TimeDelta::days(days_ago))
        .fetch_one(pool)
        .await?;
        ids.push(id);
    }

    println!("[done] Created {} clients", ids.len());
    Ok(ids)
}

async fn seed_services(pool: &PgPool) -> anyhow::Result<Vec<Uuid>> {
    let services = [
        ("Haircut", 4_500_i64, 30),
        ("Coloring", 12_000, 90),
        ("Beard Trim", 2_500, 20),
        ("Manicure", 3_550, 45),
    ];

    let mut ids = Vec::with_capacity(services.len());
    for (name, price_cents, duration_minutes) in services {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO services (name, price_cents, duration_minutes)
             VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(price_cents)
        .bind(duration_minutes)
        .fetch_one(pool)
        .await?;
        ids.push(id);
    }

    println!("[done] Created {} services", ids.len());
    Ok(ids)
}

async fn seed_appointments(
    pool: &PgPool,
    now: NaiveDateTime,
    clients: &[Uuid],
    services: &[Uuid],
) -> anyhow::Result<()> {
    // (client index, service index, offset in hours from now, status)
    let appointments = [
        (0, 1, -72, AppointmentStatus::Completed),
        (0, 0, -24 * 40, AppointmentStatus::Completed),
        (1, 0, -5, AppointmentStatus::Completed),
        (1, 2, -2, AppointmentStatus::Cancelled),
        (2, 3, 1, AppointmentStatus::Confirmed),
        (3, 0, 2, AppointmentStatus::Pending),
        (0, 3, 26, AppointmentStatus::Confirmed),
        (4, 1, 50, AppointmentStatus::Pending),
        (2, 0, 98, AppointmentStatus::Confirmed),
        (1, 1, 170, AppointmentStatus::Confirmed),
    ];

    for (client, service, offset_hours, status) in appointments {
        sqlx::query(
            "INSERT INTO appointments (client_id, service_id, start_time, status)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(clients[client])
        .bind(services[service])
        .bind(now + TimeDelta::hours(offset_hours))
        .bind(status)
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} appointments", appointments.len());
    Ok(())
}

async fn seed_reviews(pool: &PgPool, now: NaiveDateTime, clients: &[Uuid]) -> anyhow::Result<()> {
    let reviews = [
        (0, 5, "Great cut, as always.", 60),
        (1, 4, "Friendly staff, slight wait.", 30),
        (2, 5, "Loved the new color!", 20),
        (0, 3, "Good, but the room was cold.", 8),
        (3, 5, "Quick and precise beard trim.", 2),
        (1, 4, "Solid service.", 1),
    ];

    for (client, rating, comment, days_ago) in reviews {
        sqlx::query(
            "INSERT INTO reviews (client_id, rating, comment, created_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(clients[client])
        .bind(rating)
        .bind(comment)
        .bind(now - TimeDelta::days(days_ago))
        .execute(pool)
        .await?;
    }

    println!("[done] Created {} reviews", reviews.len());
    Ok(())
}
