use crate::model::SchemaError;
use crate::parser::Event;
use chrono::{DateTime, Utc};

/// The gameweek in play, or the upcoming one between gameweeks.
pub fn current_gameweek(events: &[Event]) -> Option<&Event> {
    events.iter().find(|e| e.is_current || e.is_next)
}

/// Next deadline to hit: the upcoming gameweek, or the current one if it is still open.
pub fn next_deadline(events: &[Event]) -> Result<Option<(u32, DateTime<Utc>)>, SchemaError> {
    match events
        .iter()
        .find(|e| e.is_next || (e.is_current && !e.finished))
    {
        Some(event) => Ok(Some((event.id, event.deadline()?))),
        None => Ok(None),
    }
}

/// Most recently finished gameweek, by position in the event list.
pub fn latest_finished(events: &[Event]) -> Option<&Event> {
    events.iter().filter(|e| e.finished).last()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::bootstrap_parser::fixtures::event;

    fn season() -> Vec<Event> {
        let mut gw1 = event(1, "2024-08-16T17:30:00Z");
        gw1.finished = true;
        let mut gw2 = event(2, "2024-08-24T10:00:00Z");
        gw2.finished = true;
        gw2.is_current = true;
        let mut gw3 = event(3, "2024-08-31T10:00:00Z");
        gw3.is_next = true;
        vec![gw1, gw2, gw3]
    }

    #[test]
    fn current_prefers_first_flagged_event() {
        assert_eq!(current_gameweek(&season()).map(|e| e.id), Some(2));
        assert!(current_gameweek(&[event(1, "2024-08-16T17:30:00Z")]).is_none());
    }

    #[test]
    fn next_deadline_skips_finished_current() {
        let (gw, deadline) = next_deadline(&season()).unwrap().unwrap();
        assert_eq!(gw, 3);
        assert_eq!(deadline.to_rfc3339(), "2024-08-31T10:00:00+00:00");
    }

    #[test]
    fn unfinished_current_gameweek_is_the_next_deadline() {
        let mut gw = event(5, "2024-09-21T10:00:00Z");
        gw.is_current = true;
        assert_eq!(next_deadline(&[gw]).unwrap().map(|(id, _)| id), Some(5));
    }

    #[test]
    fn no_upcoming_gameweek_means_no_deadline() {
        let mut gw38 = event(38, "2025-05-25T14:00:00Z");
        gw38.is_current = true;
        gw38.finished = true;
        assert!(next_deadline(&[gw38]).unwrap().is_none());
    }

    #[test]
    fn latest_finished_is_the_last_one() {
        assert_eq!(latest_finished(&season()).map(|e| e.id), Some(2));
        assert!(latest_finished(&[event(1, "2024-08-16T17:30:00Z")]).is_none());
    }
}
