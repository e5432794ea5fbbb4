//! Domain records and DTOs for the booking dashboard.

pub mod appointment;
pub mod client;
pub mod dashboard;
pub mod money;
pub mod review;
