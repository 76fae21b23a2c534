//! Live countdown text for ballot windows.
//!
//! Countdowns compare the full-precision "now" against the window dates at
//! local midnight, so the text ticks down second by second while status
//! classification stays day-granular.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::event::Event;

/// The countdown line shown on an event card, recomputed every tick.
pub fn countdown(event: &Event, now: NaiveDateTime) -> String {
    let Some(opens) = event.opens else {
        return "No opens date".to_string();
    };
    let opens_at = opens.and_time(NaiveTime::MIN);

    if now < opens_at {
        return format!("Opens {}", human_duration(opens_at - now));
    }

    match event.closes {
        Some(closes) => {
            let closes_at = closes.and_time(NaiveTime::MIN);
            format!("Closes {}", human_duration(closes_at - now))
        }
        None => "Open (no close date)".to_string(),
    }
}

/// Render a signed duration using its largest nonzero unit pair:
/// "in 3d 5h", "in 2h 14m", "9m 42s ago", "in 17s".
pub fn human_duration(delta: Duration) -> String {
    let total = delta.num_seconds();
    let secs = total.unsigned_abs();

    let days = secs / 86_400;
    let hours = (secs / 3_600) % 24;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;

    let body = if days > 0 {
        format!("{days}d {hours}h")
    } else if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    };

    if total >= 0 {
        format!("in {body}")
    } else {
        format!("{body} ago")
    }
}
