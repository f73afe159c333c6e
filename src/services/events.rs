//! Events service (add, edit, delete, day and month views)

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;
use validator::Validate;

use super::conflicts::find_conflict;
use crate::{
    error::{AppError, AppResult},
    models::{
        category::{Category, CategoryCatalog},
        event::{CreateEvent, Event, UpdateEvent},
    },
    repository::{IdGenerator, SharedEventRepository, UuidGenerator},
};

pub const EVENT_DELETED: &str = "Event deleted successfully";

/// A value an edit request may or may not carry
pub trait FieldValue {
    fn is_supplied(&self) -> bool {
        true
    }
}

impl FieldValue for String {
    fn is_supplied(&self) -> bool {
        !self.trim().is_empty()
    }
}

impl FieldValue for NaiveDateTime {}

impl FieldValue for Category {}

impl<T: FieldValue> FieldValue for Option<T> {
    fn is_supplied(&self) -> bool {
        self.as_ref().is_some_and(FieldValue::is_supplied)
    }
}

/// Drop values that count as "not supplied" (blank strings)
pub fn supplied<T: FieldValue>(value: Option<T>) -> Option<T> {
    value.filter(FieldValue::is_supplied)
}

/// Use the supplied value when meaningful, otherwise keep the existing one
pub fn merge_field<T: FieldValue>(value: Option<T>, existing: T) -> T {
    supplied(value).unwrap_or(existing)
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Event {} not found", id))
}

fn invalid_range() -> AppError {
    AppError::InvalidTimeRange("End time cannot be before start time".to_string())
}

#[derive(Clone)]
pub struct EventsService {
    repository: SharedEventRepository,
    ids: Arc<dyn IdGenerator>,
    categories: Arc<CategoryCatalog>,
    /// Held by every mutating use case so read-check-write sequences never interleave
    writer: Arc<Mutex<()>>,
}

impl EventsService {
    pub fn new(repository: SharedEventRepository, categories: CategoryCatalog) -> Self {
        Self::with_id_generator(repository, categories, Arc::new(UuidGenerator))
    }

    pub fn with_id_generator(
        repository: SharedEventRepository,
        categories: CategoryCatalog,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        Self {
            repository,
            ids,
            categories: Arc::new(categories),
            writer: Arc::new(Mutex::new(())),
        }
    }

    pub fn categories(&self) -> &CategoryCatalog {
        &self.categories
    }

    /// Create an event unless it double-books its location
    pub async fn add(&self, data: CreateEvent) -> AppResult<Event> {
        if data.end < data.start {
            tracing::warn!("Rejected new event '{}': end before start", data.title);
            return Err(invalid_range());
        }
        data.validate()?;
        if !data.title.is_supplied() {
            return Err(AppError::Validation("Title must not be blank".to_string()));
        }
        let category = self.categories.resolve(&data.category)?;

        let _writer = self.writer.lock().await;

        let candidate = Event {
            id: self.ids.next_id(),
            title: data.title,
            start: data.start,
            end: data.end,
            location: data.location,
            category,
            reminder_message: supplied(data.reminder_message),
        };

        let same_day = self.repository.events_for_day(candidate.day()).await?;
        if let Some(existing) = find_conflict(&candidate, &same_day) {
            tracing::warn!(
                location = %candidate.location,
                "Rejected {}: overlaps {}",
                candidate,
                existing
            );
            return Err(AppError::SchedulingConflict {
                message: "Conflict: overlapping events".to_string(),
                event: Box::new(candidate),
            });
        }

        self.repository.save(&candidate).await?;
        tracing::info!(id = %candidate.id, "Added event {}", candidate);
        Ok(candidate)
    }

    /// Merge the supplied fields into a stored event and save the result.
    ///
    /// Edits are not checked for double-booking; only `add` enforces that.
    pub async fn edit(&self, id: Uuid, data: UpdateEvent) -> AppResult<Event> {
        let _writer = self.writer.lock().await;

        let current = self.repository.get(id).await?.ok_or_else(|| not_found(id))?;
        data.validate()?;

        let start = merge_field(data.start, current.start);
        let end = merge_field(data.end, current.end);
        if end < start {
            tracing::warn!(id = %id, "Rejected edit of {}: end before start", current);
            return Err(invalid_range());
        }

        let category = supplied(data.category)
            .map(|name| self.categories.resolve(&name))
            .transpose()?;

        let updated = Event {
            id: current.id,
            title: merge_field(data.title, current.title),
            start,
            end,
            location: merge_field(data.location, current.location),
            category: merge_field(category, current.category),
            reminder_message: merge_field(data.reminder_message.map(Some), current.reminder_message),
        };

        self.repository.save(&updated).await?;
        tracing::info!(id = %updated.id, "Edited event {}", updated);
        Ok(updated)
    }

    /// Delete an event, reporting missing ids as `NotFound`
    pub async fn delete(&self, id: Uuid) -> AppResult<String> {
        let _writer = self.writer.lock().await;

        if !self.repository.exists(id).await? {
            tracing::warn!(id = %id, "Delete of unknown event");
            return Err(not_found(id));
        }

        self.repository.delete(id).await?;
        tracing::info!(id = %id, "Deleted event");
        Ok(EVENT_DELETED.to_string())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Event> {
        self.repository.get(id).await?.ok_or_else(|| not_found(id))
    }

    pub async fn events_for_day(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        self.repository.events_for_day(date).await
    }

    /// All events starting in the given month, ordered by start
    pub async fn events_for_month(&self, year: i32, month: u32) -> AppResult<Vec<Event>> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::Validation(format!("Invalid month {}-{}", year, month)))?;

        let mut events = Vec::new();
        for day in first.iter_days().take_while(|d| d.month() == month) {
            events.extend(self.repository.events_for_day(day).await?);
        }
        Ok(events)
    }
}
