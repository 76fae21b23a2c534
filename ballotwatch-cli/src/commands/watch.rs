use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use ballotwatch_core::store::Store;
use ballotwatch_core::view::Filter;
use owo_colors::OwoColorize;

use super::list;

/// Redraw the event list once per second until Ctrl-C.
pub async fn run(store: &Store, filter: Filter, query: &str) -> Result<()> {
    let mut tick = tokio::time::interval(Duration::from_secs(1));

    loop {
        tokio::select! {
            _ = tick.tick() => {
                let now = chrono::Local::now();

                // Clear the screen and move the cursor home.
                print!("\x1b[2J\x1b[H");
                println!(
                    "Now: {}   {}",
                    now.format("%Y-%m-%d %H:%M:%S").bold(),
                    "(Ctrl-C to exit)".dimmed()
                );
                println!();
                list::print_events(store, filter, query, now.naive_local());
                std::io::stdout().flush()?;
            }
            _ = tokio::signal::ctrl_c() => {
                println!();
                return Ok(());
            }
        }
    }
}
