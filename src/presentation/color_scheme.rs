//! Color scheme presenter and controller

use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::view_model::ViewModel;
use crate::{
    error::{AppResult, FailureKind},
    models::color_scheme::ColorScheme,
    services::color_scheme::ColorSchemeService,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ColorSchemeState {
    pub base: Option<String>,
    pub monochromatic: Vec<String>,
    pub analogous: Vec<String>,
    pub complementary: Vec<String>,
    pub neutral: Vec<String>,
    pub error: Option<String>,
    pub error_kind: Option<FailureKind>,
}

pub struct ColorSchemePresenter {
    view: Arc<ViewModel<ColorSchemeState>>,
}

impl ColorSchemePresenter {
    pub fn new(view: Arc<ViewModel<ColorSchemeState>>) -> Self {
        Self { view }
    }

    /// A failure wipes every palette so stale colors are never shown next to the error
    pub fn present(&self, outcome: &AppResult<ColorScheme>) {
        self.view.update(|state| {
            *state = match outcome {
                Ok(scheme) => ColorSchemeState {
                    base: Some(scheme.base.clone()),
                    monochromatic: scheme.monochromatic.clone(),
                    analogous: scheme.analogous.clone(),
                    complementary: scheme.complementary.clone(),
                    neutral: scheme.neutral.clone(),
                    ..Default::default()
                },
                Err(e) => ColorSchemeState {
                    error: Some(e.user_message()),
                    error_kind: Some(e.kind()),
                    ..Default::default()
                },
            }
        });
    }
}

pub struct ColorSchemeController {
    service: ColorSchemeService,
    view: Arc<ViewModel<ColorSchemeState>>,
    presenter: ColorSchemePresenter,
}

impl ColorSchemeController {
    pub fn new(service: ColorSchemeService) -> Self {
        let view = Arc::new(ViewModel::new("color-scheme"));
        Self {
            service,
            presenter: ColorSchemePresenter::new(view.clone()),
            view,
        }
    }

    pub fn view(&self) -> &Arc<ViewModel<ColorSchemeState>> {
        &self.view
    }

    pub async fn generate(&self, hex_color: &str) -> AppResult<ColorScheme> {
        let outcome = self.service.scheme(hex_color).await;
        self.presenter.present(&outcome);
        outcome
    }
}
