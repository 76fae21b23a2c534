//! Status classification for ballot windows.
//!
//! Comparisons happen at calendar-day granularity: an event is `Open` from
//! the start of its opens day through the end of its closes day, inclusive
//! on both ends.

use chrono::NaiveDateTime;

use crate::event::Event;

/// Where an event sits relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Dates are missing, so nothing can be derived.
    Unknown,
    /// Registration has not opened yet.
    Upcoming,
    /// Registration is open right now.
    Open,
    /// Registration has closed.
    Closed,
}

/// Color tag for rendering a status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Gray,
    Yellow,
    Green,
    Red,
}

impl Status {
    pub fn label(self) -> &'static str {
        match self {
            Status::Unknown => "No dates",
            Status::Upcoming => "Upcoming",
            Status::Open => "Open",
            Status::Closed => "Closed",
        }
    }

    pub fn color(self) -> StatusColor {
        match self {
            Status::Unknown => StatusColor::Gray,
            Status::Upcoming => StatusColor::Yellow,
            Status::Open => StatusColor::Green,
            Status::Closed => StatusColor::Red,
        }
    }
}

/// Classify an event against `now`, truncated to the calendar day.
///
/// An event with an opens date but no closes date counts as indefinitely
/// open once its opens day arrives; before that it stays `Unknown`.
pub fn classify(event: &Event, now: NaiveDateTime) -> Status {
    let Some(opens) = event.opens else {
        return Status::Unknown;
    };
    let today = now.date();

    match event.closes {
        None if today < opens => Status::Unknown,
        None => Status::Open,
        Some(closes) => {
            if today < opens {
                Status::Upcoming
            } else if today <= closes {
                Status::Open
            } else {
                Status::Closed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;
    use chrono::NaiveDate;

    fn event(opens: Option<&str>, closes: Option<&str>) -> Event {
        Event {
            id: "test".into(),
            name: "Test Race".into(),
            location: None,
            kind: EventType::Custom,
            opens: opens.and_then(crate::event::parse_date),
            closes: closes.and_then(crate::event::parse_date),
            notes: None,
        }
    }

    fn at(date: &str) -> NaiveDateTime {
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn missing_opens_is_unknown() {
        let e = event(None, Some("2025-06-01"));
        assert_eq!(classify(&e, at("2025-05-01")), Status::Unknown);
    }

    #[test]
    fn day_axis_partitions_into_three_regions() {
        // Window: May 10 through May 20, inclusive.
        let e = event(Some("2025-05-10"), Some("2025-05-20"));

        assert_eq!(classify(&e, at("2025-05-09")), Status::Upcoming);
        assert_eq!(classify(&e, at("2025-05-10")), Status::Open);
        assert_eq!(classify(&e, at("2025-05-15")), Status::Open);
        assert_eq!(classify(&e, at("2025-05-20")), Status::Open);
        assert_eq!(classify(&e, at("2025-05-21")), Status::Closed);
    }

    #[test]
    fn every_day_gets_exactly_one_status() {
        let e = event(Some("2025-05-10"), Some("2025-05-20"));
        let start = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();

        let mut seen_closed = false;
        let mut last = Status::Upcoming;
        for offset in 0..40 {
            let day = start + chrono::Duration::days(offset);
            let status = classify(&e, day.and_hms_opt(0, 0, 0).unwrap());
            // Statuses only ever move forward: upcoming -> open -> closed.
            match (last, status) {
                (Status::Open, Status::Upcoming) | (Status::Closed, Status::Open) => {
                    panic!("status regressed on {day}")
                }
                _ => {}
            }
            if status == Status::Closed {
                seen_closed = true;
            }
            last = status;
        }
        assert!(seen_closed);
    }

    #[test]
    fn no_close_date_is_open_once_opened() {
        let e = event(Some("2025-05-10"), None);
        assert_eq!(classify(&e, at("2025-05-10")), Status::Open);
        assert_eq!(classify(&e, at("2026-01-01")), Status::Open);
    }

    #[test]
    fn no_close_date_before_opens_is_unknown() {
        let e = event(Some("2025-05-10"), None);
        assert_eq!(classify(&e, at("2025-05-09")), Status::Unknown);
    }

    #[test]
    fn closes_before_opens_classifies_closed_after_closes() {
        // Inverted window: never validly open, but still reaches Closed.
        let e = event(Some("2025-01-10"), Some("2025-01-01"));
        assert_eq!(classify(&e, at("2025-01-15")), Status::Closed);
        // Before the opens day it still reads as upcoming.
        assert_eq!(classify(&e, at("2025-01-05")), Status::Upcoming);
    }

    #[test]
    fn labels_and_colors() {
        assert_eq!(Status::Unknown.label(), "No dates");
        assert_eq!(Status::Upcoming.color(), StatusColor::Yellow);
        assert_eq!(Status::Open.color(), StatusColor::Green);
        assert_eq!(Status::Closed.color(), StatusColor::Red);
    }
}
