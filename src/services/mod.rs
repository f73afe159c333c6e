//! Business logic services

pub mod color_scheme;
pub mod conflicts;
pub mod events;
pub mod weather;

use crate::{models::category::CategoryCatalog, repository::SharedEventRepository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub events: events::EventsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: SharedEventRepository, categories: CategoryCatalog) -> Self {
        Self {
            events: events::EventsService::new(repository, categories),
        }
    }
}
