//! Filtering, searching and ordering of the visible event list.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::event::{Event, EventType};
use crate::status::{self, Status};

/// Category filter, one per filter button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Majors,
    SuperHalfs,
    Custom,
}

impl Filter {
    pub fn matches(self, kind: EventType) -> bool {
        match self {
            Filter::All => true,
            Filter::Majors => kind == EventType::Major,
            Filter::SuperHalfs => kind == EventType::SuperHalf,
            Filter::Custom => kind == EventType::Custom,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Filter::All => "All",
            Filter::Majors => "Majors",
            Filter::SuperHalfs => "SuperHalfs",
            Filter::Custom => "Custom",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "majors" => Ok(Filter::Majors),
            "superhalfs" => Ok(Filter::SuperHalfs),
            "custom" => Ok(Filter::Custom),
            other => Err(format!(
                "Unknown filter '{other}'. Expected all, majors, superhalfs or custom"
            )),
        }
    }
}

/// Select and order the events to display.
///
/// Events pass the category filter and the free-text query, then sort
/// ascending by their next relevant date so soon-to-open and soon-to-close
/// races surface first. Events without a relevant date sink to the bottom,
/// keeping their relative order.
pub fn visible<'a>(
    events: &'a [Event],
    filter: Filter,
    query: &str,
    now: NaiveDateTime,
) -> Vec<&'a Event> {
    let query = query.trim().to_lowercase();

    let mut selected: Vec<&Event> = events
        .iter()
        .filter(|e| filter.matches(e.kind))
        .filter(|e| query.is_empty() || haystack(e).contains(&query))
        .collect();

    selected.sort_by(|a, b| {
        match (next_relevant_date(a, now), next_relevant_date(b, now)) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    });

    selected
}

/// The date the event is moving toward: `opens` while upcoming, `closes`
/// for every other status.
pub fn next_relevant_date(event: &Event, now: NaiveDateTime) -> Option<NaiveDate> {
    if status::classify(event, now) == Status::Upcoming {
        event.opens
    } else {
        event.closes
    }
}

/// Searchable text for one event: name, location, notes and type,
/// space-joined and lowercased.
fn haystack(event: &Event) -> String {
    format!(
        "{} {} {} {}",
        event.name,
        event.location.as_deref().unwrap_or(""),
        event.notes.as_deref().unwrap_or(""),
        event.kind
    )
    .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(id: &str, kind: EventType, opens: Option<&str>, closes: Option<&str>) -> Event {
        Event {
            id: id.into(),
            name: format!("{id} race"),
            location: Some("Testville".into()),
            kind,
            opens: opens.and_then(crate::event::parse_date),
            closes: closes.and_then(crate::event::parse_date),
            notes: None,
        }
    }

    fn at(date: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn filter_restricts_by_type() {
        let events = vec![
            event("major", EventType::Major, Some("2025-01-01"), Some("2025-02-01")),
            event("half", EventType::SuperHalf, Some("2025-01-01"), Some("2025-02-01")),
            event("custom", EventType::Custom, Some("2025-01-01"), Some("2025-02-01")),
        ];
        let now = at("2025-01-15");

        let majors = visible(&events, Filter::Majors, "", now);
        assert!(majors.iter().all(|e| e.kind == EventType::Major));
        assert_eq!(majors.len(), 1);

        let halfs = visible(&events, Filter::SuperHalfs, "", now);
        assert_eq!(ids(&halfs), vec!["half"]);

        let custom = visible(&events, Filter::Custom, "", now);
        assert_eq!(ids(&custom), vec!["custom"]);

        assert_eq!(visible(&events, Filter::All, "", now).len(), 3);
    }

    #[test]
    fn query_matches_across_fields_case_insensitively() {
        let mut berlin = event("berlin", EventType::Major, Some("2025-09-25"), Some("2025-11-06"));
        berlin.name = "Berlin Marathon".into();
        berlin.location = Some("Berlin, DE".into());
        berlin.notes = Some("Lottery registration".into());
        let other = event("other", EventType::Custom, Some("2025-01-01"), Some("2025-02-01"));
        let events = vec![berlin, other];
        let now = at("2025-06-01");

        assert_eq!(ids(&visible(&events, Filter::All, "BERLIN", now)), vec!["berlin"]);
        assert_eq!(ids(&visible(&events, Filter::All, "lottery", now)), vec!["berlin"]);
        // Matches on the type name too.
        assert_eq!(ids(&visible(&events, Filter::All, "major", now)), vec!["berlin"]);
        assert!(visible(&events, Filter::All, "zurich", now).is_empty());
    }

    #[test]
    fn blank_query_matches_everything() {
        let events = vec![
            event("a", EventType::Custom, Some("2025-01-01"), Some("2025-02-01")),
            event("b", EventType::Custom, Some("2025-01-01"), Some("2025-02-01")),
        ];
        let now = at("2025-01-15");
        assert_eq!(visible(&events, Filter::All, "", now).len(), 2);
        assert_eq!(visible(&events, Filter::All, "   ", now).len(), 2);
    }

    #[test]
    fn sorts_by_next_relevant_date() {
        // A is upcoming (relevant date = opens Dec 1);
        // B is open (relevant date = closes Nov 20). B surfaces first.
        let a = event("a", EventType::Custom, Some("2025-12-01"), Some("2025-12-15"));
        let b = event("b", EventType::Custom, Some("2025-11-01"), Some("2025-11-20"));
        let events = vec![a, b];
        let now = at("2025-11-10");

        assert_eq!(ids(&visible(&events, Filter::All, "", now)), vec!["b", "a"]);
    }

    #[test]
    fn undated_events_sink_to_the_bottom_stably() {
        let events = vec![
            event("undated-1", EventType::Custom, None, None),
            event("undated-2", EventType::Custom, None, None),
            event("dated", EventType::Custom, Some("2025-01-01"), Some("2025-02-01")),
        ];
        let now = at("2025-01-15");

        assert_eq!(
            ids(&visible(&events, Filter::All, "", now)),
            vec!["dated", "undated-1", "undated-2"]
        );
    }

    #[test]
    fn visible_is_idempotent() {
        let events = vec![
            event("a", EventType::Major, Some("2025-12-01"), Some("2025-12-15")),
            event("b", EventType::Custom, Some("2025-11-01"), Some("2025-11-20")),
            event("c", EventType::SuperHalf, None, None),
        ];
        let now = at("2025-11-10");

        let first = ids(&visible(&events, Filter::All, "race", now));
        let second = ids(&visible(&events, Filter::All, "race", now));
        assert_eq!(first, second);
    }

    #[test]
    fn open_ended_event_has_no_relevant_date() {
        // Open with no close date: nothing to count toward, sorts last.
        let open_ended = event("open-ended", EventType::Custom, Some("2025-01-01"), None);
        let closing = event("closing", EventType::Custom, Some("2025-01-01"), Some("2025-06-01"));
        let events = vec![open_ended, closing];
        let now = at("2025-02-01");

        assert_eq!(
            ids(&visible(&events, Filter::All, "", now)),
            vec!["closing", "open-ended"]
        );
    }
}
