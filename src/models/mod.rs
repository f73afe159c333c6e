//! Data models for Smart Calendar

pub mod category;
pub mod color_scheme;
pub mod event;
pub mod weather;

// Re-export commonly used types
pub use category::{Category, CategoryCatalog};
pub use color_scheme::{ColorScheme, SchemeMode};
pub use event::{CreateEvent, Event, UpdateEvent};
pub use weather::{Location, WeatherInfo};

/// Unicode-aware case-insensitive comparison used for every user-typed name
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}
