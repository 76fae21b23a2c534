//! Ballot-window event types.
//!
//! An `Event` describes one race registration window: when entries open,
//! when they close, and where the race is. Dates are local calendar dates
//! with no time component, matching how race organisers announce windows.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A tracked race registration window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: EventType,
    /// When registration opens (local calendar date).
    #[serde(default, deserialize_with = "lenient_date")]
    pub opens: Option<NaiveDate>,
    /// When registration closes.
    #[serde(default, deserialize_with = "lenient_date")]
    pub closes: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Event category, used by the filter buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventType {
    Major,
    SuperHalf,
    #[default]
    Custom,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            EventType::Major => "Major",
            EventType::SuperHalf => "SuperHalf",
            EventType::Custom => "Custom",
        };
        write!(f, "{s}")
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "major" => Ok(EventType::Major),
            "superhalf" | "super-half" => Ok(EventType::SuperHalf),
            "custom" => Ok(EventType::Custom),
            other => Err(format!(
                "Unknown event type '{other}'. Expected major, superhalf or custom"
            )),
        }
    }
}

/// A not-yet-stored event, as entered by the user.
///
/// The store validates and assigns an id when the draft is added.
#[derive(Debug, Clone, Default)]
pub struct EventDraft {
    pub name: String,
    pub location: Option<String>,
    pub kind: EventType,
    pub opens: Option<NaiveDate>,
    pub closes: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Parse a YYYY-MM-DD string, treating blanks and garbage as "no date".
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Deserialize an opens/closes field leniently: absent, null, empty or
/// unparseable values all become `None` rather than failing the record.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}
