//! Weather models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A geographic location resolved from a free-text address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Current conditions plus today's range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherInfo {
    pub location_name: String,
    pub current_temp_c: f64,
    pub today_min_temp_c: f64,
    pub today_max_temp_c: f64,
    /// WMO weather interpretation code
    pub weather_code: i32,
    pub is_day: bool,
}
