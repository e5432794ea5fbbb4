pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use db::DynDashboardRepository;
use services::clock::Clock;

/// Shared application state passed to all Axum handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub repo: DynDashboardRepository,
    pub clock: Arc<dyn Clock>,
    pub config: config::AppConfig,
}
