pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;
pub mod telemetry;

pub use config::Config;

use services::IntentService;

#[derive(Clone)]
pub struct AppState {
    pub intent_service: IntentService,
}
