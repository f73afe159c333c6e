//! Weather presenter and controller

use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

use super::view_model::ViewModel;
use crate::{
    error::{AppResult, FailureKind},
    models::weather::WeatherInfo,
    services::weather::WeatherService,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct WeatherState {
    pub location: Option<String>,
    pub current: Option<String>,
    pub today_range: Option<String>,
    pub conditions: Option<String>,
    pub error: Option<String>,
    pub error_kind: Option<FailureKind>,
}

/// Human-readable description of a WMO weather interpretation code
pub fn describe_weather_code(code: i32, is_day: bool) -> String {
    let text = match code {
        0 if is_day => "Clear sky",
        0 => "Clear sky (night)",
        1 | 2 => "Partly cloudy",
        3 => "Overcast",
        45 | 48 => "Foggy",
        51 | 53 | 55 => "Drizzle",
        56 | 57 => "Freezing drizzle",
        61 | 63 | 65 => "Rain",
        66 | 67 => "Freezing rain",
        71 | 73 | 75 => "Snowfall",
        77 => "Snow grains",
        80..=82 => "Rain showers",
        85 | 86 => "Snow showers",
        95 => "Thunderstorm",
        96 | 97 => "Thunderstorm with hail",
        _ => return format!("Unknown conditions (code {})", code),
    };
    text.to_string()
}

pub struct WeatherPresenter {
    view: Arc<ViewModel<WeatherState>>,
}

impl WeatherPresenter {
    pub fn new(view: Arc<ViewModel<WeatherState>>) -> Self {
        Self { view }
    }

    pub fn present(&self, outcome: &AppResult<WeatherInfo>) {
        self.view.update(|state| {
            *state = match outcome {
                Ok(info) => WeatherState {
                    location: Some(info.location_name.clone()),
                    current: Some(format!("Current: {:.1} °C", info.current_temp_c)),
                    today_range: Some(format!(
                        "Today: {:.1} °C ~ {:.1} °C",
                        info.today_min_temp_c, info.today_max_temp_c
                    )),
                    conditions: Some(describe_weather_code(info.weather_code, info.is_day)),
                    ..Default::default()
                },
                Err(e) => WeatherState {
                    error: Some(e.user_message()),
                    error_kind: Some(e.kind()),
                    ..Default::default()
                },
            }
        });
    }
}

pub struct WeatherController {
    service: WeatherService,
    view: Arc<ViewModel<WeatherState>>,
    presenter: WeatherPresenter,
}

impl WeatherController {
    pub fn new(service: WeatherService) -> Self {
        let view = Arc::new(ViewModel::new("weather"));
        Self {
            service,
            presenter: WeatherPresenter::new(view.clone()),
            view,
        }
    }

    pub fn view(&self) -> &Arc<ViewModel<WeatherState>> {
        &self.view
    }

    pub async fn current(&self, address: &str) -> AppResult<WeatherInfo> {
        let outcome = self.service.current(address).await;
        self.presenter.present(&outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn info() -> WeatherInfo {
        WeatherInfo {
            location_name: "Toronto, Canada".to_string(),
            current_temp_c: 4.5,
            today_min_temp_c: 1.0,
            today_max_temp_c: 6.0,
            weather_code: 61,
            is_day: true,
        }
    }

    #[test]
    fn test_weather_codes() {
        assert_eq!(describe_weather_code(0, true), "Clear sky");
        assert_eq!(describe_weather_code(0, false), "Clear sky (night)");
        assert_eq!(describe_weather_code(2, false), "Partly cloudy");
        assert_eq!(describe_weather_code(81, true), "Rain showers");
        assert_eq!(describe_weather_code(97, true), "Thunderstorm with hail");
        assert_eq!(describe_weather_code(42, true), "Unknown conditions (code 42)");
    }

    #[test]
    fn test_present_success_then_failure() {
        let view = Arc::new(ViewModel::new("weather"));
        let presenter = WeatherPresenter::new(view.clone());

        presenter.present(&Ok(info()));
        let state = view.state();
        assert_eq!(state.current.as_deref(), Some("Current: 4.5 °C"));
        assert_eq!(state.today_range.as_deref(), Some("Today: 1.0 °C ~ 6.0 °C"));
        assert_eq!(state.conditions.as_deref(), Some("Rain"));

        presenter.present(&Err(AppError::Gateway(
            "Failed to fetch weather: timeout".to_string(),
        )));
        let state = view.state();
        assert!(state.location.is_none());
        assert!(state.current.is_none());
        assert!(state.today_range.is_none());
        assert!(state.conditions.is_none());
        assert_eq!(state.error.as_deref(), Some("Failed to fetch weather: timeout"));
    }
}
