//! Event model (time-boxed calendar bookings)

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::category::Category;

/// Event record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Event {
    /// Assigned at creation, kept across edits
    pub id: Uuid,
    pub title: String,
    /// Local start (timezone-naive)
    pub start: NaiveDateTime,
    /// Local end, never before start
    pub end: NaiveDateTime,
    /// Free text, used as the double-booking key
    pub location: String,
    pub category: Category,
    /// Advisory text only
    pub reminder_message: Option<String>,
}

impl Event {
    /// Calendar day the event is filed under
    pub fn day(&self) -> NaiveDate {
        self.start.date()
    }

    /// Case-insensitive location match
    pub fn same_location(&self, other: &Event) -> bool {
        super::eq_ignore_case(&self.location, &other.location)
    }

    /// Closed-interval overlap. Touching endpoints overlap.
    pub fn overlaps(&self, other: &Event) -> bool {
        !(self.end < other.start || self.start > other.end)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} - {}) [{}]",
            self.title,
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.category
        )
    }
}

/// Create event request
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEvent {
    #[validate(length(min = 1, max = 200, message = "Title must be between 1 and 200 characters"))]
    pub title: String,
    /// Start (YYYY-MM-DDTHH:MM:SS)
    pub start: NaiveDateTime,
    /// End (YYYY-MM-DDTHH:MM:SS)
    pub end: NaiveDateTime,
    #[serde(default)]
    pub location: String,
    /// Category name, matched case-insensitively against the configured list
    pub category: String,
    #[serde(default)]
    pub reminder_message: Option<String>,
}

/// Update event request. Missing, empty or whitespace-only values keep the stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEvent {
    #[validate(length(max = 200, message = "Title must be at most 200 characters"))]
    pub title: Option<String>,
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub reminder_message: Option<String>,
}

/// Query parameters for the day view
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct DayQuery {
    /// Day (YYYY-MM-DD)
    pub date: NaiveDate,
}

/// Query parameters for the month view
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct MonthQuery {
    pub year: i32,
    /// Month number (1-12)
    pub month: u32,
}


#[cfg(test)]
mod tests {
    use super::fixtures::{at, event};

    #[test]
    fn test_touching_endpoints_overlap() {
        let a = event("A", at(1, 10, 0), at(1, 11, 0), "Office");
        let b = event("B", at(1, 11, 0), at(1, 12, 0), "Office");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_intervals_do_not_overlap() {
        let a = event("A", at(1, 9, 0), at(1, 9, 59), "Office");
        let b = event("B", at(1, 10, 0), at(1, 11, 0), "Office");
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_location_match_ignores_case() {
        let a = event("A", at(1, 9, 0), at(1, 10, 0), "Office");
        let b = event("B", at(1, 9, 0), at(1, 10, 0), "OFFICE");
        let c = event("C", at(1, 9, 0), at(1, 10, 0), "Office 2");
        let d = event("D", at(1, 9, 0), at(1, 10, 0), "CAFÉ");
        let e = event("E", at(1, 9, 0), at(1, 10, 0), "café");
        assert!(a.same_location(&b));
        assert!(!a.same_location(&c));
        assert!(d.same_location(&e));
    }

    #[test]
    fn test_day_uses_start_date() {
        let overnight = event("Night", at(1, 23, 0), at(2, 1, 0), "Home");
        assert_eq!(overnight.day(), at(1, 0, 0).date());
    }

    #[test]
    fn test_display() {
        let e = event("Standup", at(1, 9, 0), at(1, 9, 30), "Office");
        assert_eq!(e.to_string(), "Standup (09:00 - 09:30) [Business]");
    }
}
