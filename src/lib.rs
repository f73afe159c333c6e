//! Smart Calendar
//!
//! Scheduling core for a personal calendar: events are filed by day, double-booking a
//! location is rejected, and every add/edit/delete outcome is published to observable
//! view models. A REST JSON API exposes the same use cases.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod presentation;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
    pub calendar: Arc<presentation::CalendarController>,
}

impl AppState {
    pub fn new(config: AppConfig, services: services::Services) -> Self {
        let calendar = presentation::CalendarController::new(services.events.clone());
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
            calendar: Arc::new(calendar),
        }
    }
}
