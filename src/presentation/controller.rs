//! Calendar controller: runs event use cases and presents their outcomes

use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::{
    events::{
        AddEventPresenter, AddEventState, DeleteEventPresenter, DeleteEventState,
        EditEventPresenter, EditEventState,
    },
    view_model::ViewModel,
};
use crate::{
    error::AppResult,
    models::event::{CreateEvent, Event, UpdateEvent},
    services::events::EventsService,
};

/// View models exposed to views for subscription and state reads
#[derive(Clone)]
pub struct CalendarViews {
    pub add_event: Arc<ViewModel<AddEventState>>,
    pub edit_event: Arc<ViewModel<EditEventState>>,
    pub delete_event: Arc<ViewModel<DeleteEventState>>,
}

impl Default for CalendarViews {
    fn default() -> Self {
        Self {
            add_event: Arc::new(ViewModel::new("add-event")),
            edit_event: Arc::new(ViewModel::new("edit-event")),
            delete_event: Arc::new(ViewModel::new("delete-event")),
        }
    }
}

pub struct CalendarController {
    events: EventsService,
    views: CalendarViews,
    /// Held from the start of a mutating use case until its outcome is presented,
    /// so view states always reflect the order in which writes happened
    publishing: Mutex<()>,
    add_presenter: AddEventPresenter,
    edit_presenter: EditEventPresenter,
    delete_presenter: DeleteEventPresenter,
}

impl CalendarController {
    pub fn new(events: EventsService) -> Self {
        let views = CalendarViews::default();
        Self {
            events,
            add_presenter: AddEventPresenter::new(views.add_event.clone()),
            edit_presenter: EditEventPresenter::new(views.edit_event.clone()),
            delete_presenter: DeleteEventPresenter::new(views.delete_event.clone()),
            views,
            publishing: Mutex::new(()),
        }
    }

    pub fn views(&self) -> &CalendarViews {
        &self.views
    }

    pub fn events(&self) -> &EventsService {
        &self.events
    }

    pub async fn add_event(&self, data: CreateEvent) -> AppResult<Event> {
        let _publishing = self.publishing.lock().await;
        let outcome = self.events.add(data).await;
        self.add_presenter.present(&outcome);
        outcome
    }

    pub async fn edit_event(&self, id: Uuid, data: UpdateEvent) -> AppResult<Event> {
        let _publishing = self.publishing.lock().await;
        let outcome = self.events.edit(id, data).await;
        self.edit_presenter.present(&outcome);
        outcome
    }

    /// Delete an event; on success the view also lists what is left on its day
    pub async fn delete_event(&self, id: Uuid) -> AppResult<String> {
        let _publishing = self.publishing.lock().await;
        let day = self.events.get(id).await.ok().map(|e| e.day());
        let outcome = self.events.delete(id).await;

        let remaining = match (&outcome, day) {
            (Ok(_), Some(day)) => self.events.events_for_day(day).await.unwrap_or_else(|e| {
                tracing::warn!(id = %id, "Could not reload {} after delete: {}", day, e);
                Vec::new()
            }),
            _ => Vec::new(),
        };
        self.delete_presenter.present(id, &outcome, remaining);
        outcome
    }

    pub async fn get_event(&self, id: Uuid) -> AppResult<Event> {
        self.events.get(id).await
    }

    pub async fn events_for_day(&self, date: NaiveDate) -> AppResult<Vec<Event>> {
        self.events.events_for_day(date).await
    }

    pub async fn events_for_month(&self, year: i32, month: u32) -> AppResult<Vec<Event>> {
        self.events.events_for_month(year, month).await
    }
}
