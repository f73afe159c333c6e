//! Presentation pipeline: presenters write use-case outcomes into view models,
//! view models notify their observers.

pub mod color_scheme;
pub mod controller;
pub mod events;
pub mod observer;
pub mod view_model;
pub mod weather;

pub use controller::{CalendarController, CalendarViews};
pub use observer::{ObserverRegistry, SubscriptionHandle};
pub use view_model::ViewModel;
