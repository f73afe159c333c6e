//! Presenters for the add, edit and delete event flows

use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use super::view_model::ViewModel;
use crate::{
    error::{AppError, AppResult, FailureKind},
    models::event::Event,
};

pub const EVENT_ADDED: &str = "Event added successfully";

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct AddEventState {
    /// Event created by the last successful add
    pub event: Option<Event>,
    /// Candidate rejected by the last add, when it double-booked a location
    pub rejected: Option<Event>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub error_kind: Option<FailureKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct EditEventState {
    /// Last successfully edited event; survives later failures
    pub event: Option<Event>,
    pub error: Option<String>,
    pub error_kind: Option<FailureKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct DeleteEventState {
    pub deleted_id: Option<Uuid>,
    pub message: Option<String>,
    /// Events still filed on the deleted event's day
    pub remaining: Vec<Event>,
    pub error: Option<String>,
    pub error_kind: Option<FailureKind>,
}

fn failure(error: &AppError) -> (Option<String>, Option<FailureKind>) {
    (Some(error.user_message()), Some(error.kind()))
}

pub struct AddEventPresenter {
    view: Arc<ViewModel<AddEventState>>,
}

impl AddEventPresenter {
    pub fn new(view: Arc<ViewModel<AddEventState>>) -> Self {
        Self { view }
    }

    pub fn present(&self, outcome: &AppResult<Event>) {
        self.view.update(|state| match outcome {
            Ok(event) => {
                *state = AddEventState {
                    event: Some(event.clone()),
                    message: Some(EVENT_ADDED.to_string()),
                    ..Default::default()
                };
            }
            Err(e) => {
                let (error, error_kind) = failure(e);
                *state = AddEventState {
                    rejected: e.event().cloned(),
                    error,
                    error_kind,
                    ..Default::default()
                };
            }
        });
    }
}

pub struct EditEventPresenter {
    view: Arc<ViewModel<EditEventState>>,
}

impl EditEventPresenter {
    pub fn new(view: Arc<ViewModel<EditEventState>>) -> Self {
        Self { view }
    }

    pub fn present(&self, outcome: &AppResult<Event>) {
        self.view.update(|state| match outcome {
            Ok(event) => {
                state.event = Some(event.clone());
                state.error = None;
                state.error_kind = None;
            }
            Err(e) => (state.error, state.error_kind) = failure(e),
        });
    }
}

pub struct DeleteEventPresenter {
    view: Arc<ViewModel<DeleteEventState>>,
}

impl DeleteEventPresenter {
    pub fn new(view: Arc<ViewModel<DeleteEventState>>) -> Self {
        Self { view }
    }

    pub fn present(&self, id: Uuid, outcome: &AppResult<String>, remaining: Vec<Event>) {
        self.view.update(|state| match outcome {
            Ok(message) => {
                *state = DeleteEventState {
                    deleted_id: Some(id),
                    message: Some(message.clone()),
                    remaining,
                    ..Default::default()
                };
            }
            Err(e) => {
                let (error, error_kind) = failure(e);
                *state = DeleteEventState {
                    error,
                    error_kind,
                    ..Default::default()
                };
            }
        });
    }
}
