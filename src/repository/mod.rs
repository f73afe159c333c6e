//! Repository layer for event storage

pub mod events;
pub mod memory;

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::{error::AppResult, models::event::Event};

pub use events::SqliteEventRepository;
pub use memory::InMemoryEventRepository;

/// Storage contract the services depend on.
///
/// Every call is atomic with respect to the store. Multi-step sequences
/// (read, merge, write) are serialized by the caller.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn exists(&self, id: Uuid) -> AppResult<bool>;

    async fn get(&self, id: Uuid) -> AppResult<Option<Event>>;

    /// Insert, or overwrite the whole record stored under the same id
    async fn save(&self, event: &Event) -> AppResult<()>;

    /// Remove an event. Absent ids are ignored.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Events whose start falls on `date`, ordered by start then id
    async fn events_for_day(&self, date: NaiveDate) -> AppResult<Vec<Event>>;
}

pub type SharedEventRepository = Arc<dyn EventRepository>;

/// Source of fresh event identifiers
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Random (v4) UUIDs
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}
