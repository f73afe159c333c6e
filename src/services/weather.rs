//! Current weather lookup service

use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::weather::{Location, WeatherInfo},
};

/// Geocoding and forecast provider supplied by the host
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherGateway: Send + Sync {
    async fn resolve_location(&self, address: &str) -> AppResult<Location>;

    async fn current_weather(&self, location: &Location) -> AppResult<WeatherInfo>;
}

#[derive(Clone)]
pub struct WeatherService {
    gateway: Arc<dyn WeatherGateway>,
}

impl WeatherService {
    pub fn new(gateway: Arc<dyn WeatherGateway>) -> Self {
        Self { gateway }
    }

    pub async fn current(&self, address: &str) -> AppResult<WeatherInfo> {
        if address.trim().is_empty() {
            return Err(AppError::Validation("Address must not be empty.".to_string()));
        }

        let lookup = async {
            let location = self.gateway.resolve_location(address).await?;
            self.gateway.current_weather(&location).await
        };

        lookup.await.map_err(|e| {
            tracing::warn!("Weather lookup for '{}' failed: {}", address, e);
            AppError::Gateway(format!("Failed to fetch weather: {}", e.user_message()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;

    fn toronto() -> Location {
        Location {
            display_name: "Toronto, Canada".to_string(),
            latitude: 43.65,
            longitude: -79.38,
        }
    }

    #[tokio::test]
    async fn test_current_weather_for_resolved_location() {
        let mut gateway = MockWeatherGateway::new();
        gateway
            .expect_resolve_location()
            .withf(|address| address == "Toronto")
            .returning(|_| Ok(toronto()));
        gateway.expect_current_weather().returning(|location| {
            Ok(WeatherInfo {
                location_name: location.display_name.clone(),
                current_temp_c: 4.5,
                today_min_temp_c: 1.0,
                today_max_temp_c: 6.0,
                weather_code: 3,
                is_day: true,
            })
        });

        let service = WeatherService::new(Arc::new(gateway));
        let info = service.current("Toronto").await.unwrap();

        assert_eq!(info.location_name, "Toronto, Canada");
        assert_eq!(info.weather_code, 3);
    }

    #[tokio::test]
    async fn test_blank_address_is_rejected() {
        let mut gateway = MockWeatherGateway::new();
        gateway.expect_resolve_location().never();

        let service = WeatherService::new(Arc::new(gateway));
        let err = service.current("   ").await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::InvalidInput);
    }

    #[tokio::test]
    async fn test_gateway_failure() {
        let mut gateway = MockWeatherGateway::new();
        gateway
            .expect_resolve_location()
            .returning(|_| Err(AppError::Gateway("no such place".to_string())));
        gateway.expect_current_weather().never();

        let service = WeatherService::new(Arc::new(gateway));
        let err = service.current("Atlantis").await.unwrap_err();

        assert_eq!(err.kind(), FailureKind::ServiceUnavailable);
        assert_eq!(err.user_message(), "Failed to fetch weather: no such place");
    }
}
