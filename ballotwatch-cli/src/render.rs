//! Terminal rendering for ballotwatch types.
//!
//! This module provides an extension trait that adds colored terminal
//! rendering to ballotwatch-core types using owo_colors.

use ballotwatch_core::countdown;
use ballotwatch_core::event::Event;
use ballotwatch_core::status::{self, StatusColor};
use chrono::{NaiveDate, NaiveDateTime};
use owo_colors::OwoColorize;

/// Extension trait for rendering with colors, against an explicit "now".
pub trait Render {
    fn render(&self, now: NaiveDateTime) -> String;
}

impl Render for Event {
    fn render(&self, now: NaiveDateTime) -> String {
        let status = status::classify(self, now);
        let dot = colorize_dot(status.color());

        let mut lines = Vec::new();
        lines.push(format!(
            "{} {}  {}",
            dot,
            self.name.bold(),
            format!(
                "{} · {}",
                self.location.as_deref().unwrap_or("-"),
                self.kind
            )
            .dimmed()
        ));
        lines.push(format!(
            "   Opens: {}   Closes: {}   [{}]",
            format_date(self.opens),
            format_date(self.closes),
            status.label()
        ));
        lines.push(format!("   {}", countdown::countdown(self, now)));
        if let Some(notes) = &self.notes {
            lines.push(format!("   {}", notes.dimmed()));
        }
        lines.push(format!("   {}", format!("id: {}", self.id).dimmed()));

        lines.join("\n")
    }
}

/// Colorize the status dot according to its color tag.
fn colorize_dot(color: StatusColor) -> String {
    let dot = "●";
    match color {
        StatusColor::Green => dot.green().to_string(),
        StatusColor::Yellow => dot.yellow().to_string(),
        StatusColor::Red => dot.red().to_string(),
        StatusColor::Gray => dot.dimmed().to_string(),
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}
