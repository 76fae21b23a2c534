use anyhow::Result;
use ballotwatch_core::store::Store;
use ballotwatch_core::view::{self, Filter};
use chrono::NaiveDateTime;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &Store, filter: Filter, query: &str) -> Result<()> {
    let now = chrono::Local::now().naive_local();
    print_events(store, filter, query, now);
    Ok(())
}

/// Print the visible event cards for a given "now". Shared with watch mode,
/// which calls this once per tick.
pub fn print_events(store: &Store, filter: Filter, query: &str, now: NaiveDateTime) {
    let visible = view::visible(store.events(), filter, query, now);

    if visible.is_empty() {
        println!("{}", "No races match your filters.".dimmed());
        return;
    }

    for (i, event) in visible.iter().enumerate() {
        println!("{}", event.render(now));
        if i < visible.len() - 1 {
            println!();
        }
    }
}
