//! The fixed default event list, used when no stored data exists.

use crate::event::{Event, EventType, parse_date};

fn seed(
    id: &str,
    name: &str,
    location: &str,
    kind: EventType,
    opens: &str,
    closes: &str,
    notes: &str,
) -> Event {
    Event {
        id: id.into(),
        name: name.into(),
        location: Some(location.into()),
        kind,
        opens: parse_date(opens),
        closes: parse_date(closes),
        notes: Some(notes.into()),
    }
}

/// The preloaded sample events: the six marathon Majors and four SuperHalfs.
pub fn seed_events() -> Vec<Event> {
    use EventType::{Major, SuperHalf};

    vec![
        seed(
            "london-2026",
            "London Marathon",
            "London, UK",
            Major,
            "2025-04-25",
            "2025-05-02",
            "Public ballot: opened Apr 25 2025, closed May 2 2025. Results emailed mid-June 2025; successful entrants had until 10 Jul 2025 to register & pay.",
        ),
        seed(
            "berlin-2026",
            "Berlin Marathon",
            "Berlin, DE",
            Major,
            "2025-09-25",
            "2025-11-06",
            "Lottery registration for 2026 entries: Sep 25 – Nov 6, 2025 (official SCC/Berlin site).",
        ),
        seed(
            "chicago-2026",
            "Chicago Marathon",
            "Chicago, USA",
            Major,
            "2025-10-21",
            "2025-11-18",
            "Application window for 2026 (guaranteed & non-guaranteed) opened Oct 21, 2025 and closed Nov 18, 2025 (Chicago Marathon official site).",
        ),
        seed(
            "tokyo-2026",
            "Tokyo Marathon",
            "Tokyo, JP",
            Major,
            "2025-08-15",
            "2025-08-29",
            "Entry period for Tokyo Marathon 2026: Aug 15–29, 2025 (official Tokyo Marathon site).",
        ),
        seed(
            "newyork-2026",
            "New York City Marathon",
            "New York, USA",
            Major,
            "2025-02-11",
            "2025-02-25",
            "Non-guaranteed entry drawing for 2025 was open Feb 11–25, 2025; dates vary by year—check NYRR for 2026 schedule.",
        ),
        seed(
            "boston-2026",
            "Boston Marathon (qualifier registration)",
            "Boston, USA",
            Major,
            "2025-09-08",
            "2025-09-12",
            "Qualifier registration for 2026 took place Sep 8–12, 2025 (BAA official).",
        ),
        seed(
            "lisbon-half-2025",
            "Lisbon Half (SuperHalfs)",
            "Lisbon, PT",
            SuperHalf,
            "2025-02-01",
            "2025-03-09",
            "Event date Mar 9, 2025; registration windows vary—check race site.",
        ),
        seed(
            "prague-half-2025",
            "Prague Half (SuperHalfs)",
            "Prague, CZ",
            SuperHalf,
            "2025-03-01",
            "2025-04-05",
            "Event date Apr 5, 2025; registration windows vary—check race site.",
        ),
        seed(
            "copenhagen-half-2025",
            "Copenhagen Half (SuperHalfs)",
            "Copenhagen, DK",
            SuperHalf,
            "2025-02-01",
            "2025-08-15",
            "Registration windows vary—confirm on SuperHalfs/race site.",
        ),
        seed(
            "valencia-half-2025",
            "Valencia Half (SuperHalfs)",
            "Valencia, ES",
            SuperHalf,
            "2025-04-01",
            "2025-09-01",
            "Event date and registration vary—check race site.",
        ),
    ]
}
