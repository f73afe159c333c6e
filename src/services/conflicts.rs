//! Double-booking detection
//!
//! Two events conflict when their locations match (ignoring case) and their closed
//! `[start, end]` intervals intersect. Touching endpoints count as a conflict: an event
//! ending at 11:00 blocks one starting at 11:00 in the same place.

use crate::models::event::Event;

/// Whether two events would double-book a location
pub fn conflicts(a: &Event, b: &Event) -> bool {
    a.same_location(b) && a.overlaps(b)
}

/// First event of the candidate's day bucket that conflicts with it
pub fn find_conflict<'a>(candidate: &Event, same_day: &'a [Event]) -> Option<&'a Event> {
    same_day
        .iter()
        .find(|existing| existing.id != candidate.id && conflicts(candidate, existing))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::fixtures::{at, event};

    #[test]
    fn test_overlap_is_symmetric() {
        let events = [
            event("A", at(1, 9, 0), at(1, 10, 0), "Office"),
            event("B", at(1, 9, 30), at(1, 11, 0), "office"),
            event("C", at(1, 10, 0), at(1, 10, 0), "Office"),
            event("D", at(1, 10, 1), at(1, 12, 0), "Office"),
            event("E", at(1, 8, 0), at(1, 13, 0), "OFFICE"),
            event("F", at(1, 9, 0), at(1, 10, 0), "Remote"),
        ];
        for a in &events {
            for b in &events {
                assert_eq!(conflicts(a, b), conflicts(b, a), "{} vs {}", a.title, b.title);
            }
        }
    }

    #[test]
    fn test_touching_endpoints_conflict() {
        let a = event("A", at(1, 10, 0), at(1, 11, 0), "Room 1");
        let b = event("B", at(1, 11, 0), at(1, 12, 0), "Room 1");
        assert!(conflicts(&a, &b));
    }

    #[test]
    fn test_zero_duration_event_inside_interval_conflicts() {
        let a = event("A", at(1, 10, 0), at(1, 11, 0), "Room 1");
        let b = event("B", at(1, 10, 30), at(1, 10, 30), "Room 1");
        assert!(conflicts(&a, &b));
    }

    #[test]
    fn test_different_locations_never_conflict() {
        let a = event("A", at(1, 10, 0), at(1, 11, 0), "Room 1");
        let b = event("B", at(1, 10, 0), at(1, 11, 0), "Room 2");
        assert!(!conflicts(&a, &b));
    }

    #[test]
    fn test_find_conflict_returns_blocking_event() {
        let standup = event("Standup", at(1, 9, 0), at(1, 9, 30), "Office");
        let lunch = event("Lunch", at(1, 12, 0), at(1, 13, 0), "Office");
        let existing = vec![lunch, standup.clone()];
        let candidate = event("Sync", at(1, 9, 15), at(1, 9, 45), "Office");

        assert_eq!(find_conflict(&candidate, &existing), Some(&standup));
    }

    #[test]
    fn test_find_conflict_ignores_same_id() {
        let standup = event("Standup", at(1, 9, 0), at(1, 9, 30), "Office");
        let existing = vec![standup.clone()];
        assert!(find_conflict(&standup, &existing).is_none());
    }
}
