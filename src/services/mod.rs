//! Business logic services.

pub mod clock;
pub mod dashboard;
