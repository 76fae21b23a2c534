mod commands;
mod render;

use anyhow::Result;
use ballotwatch_core::config::BallotwatchConfig;
use ballotwatch_core::store::Store;
use ballotwatch_core::view::Filter;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ballotwatch")]
#[command(about = "Track race-registration ballot windows with live countdowns")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show tracked races with their status and countdown
    List {
        /// Only show one category (all, majors, superhalfs, custom)
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Only show races matching this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Live view of the race list, redrawn every second (Ctrl-C to exit)
    Watch {
        /// Only show one category (all, majors, superhalfs, custom)
        #[arg(short, long, default_value = "all")]
        filter: String,

        /// Only show races matching this text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Add a race to track
    Add {
        /// Race name (prompted for when omitted)
        name: Option<String>,

        /// Location (city, country)
        #[arg(short, long)]
        location: Option<String>,

        /// Event type (major, superhalf, custom)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Registration opens date (YYYY-MM-DD, prompted for when omitted)
        #[arg(long)]
        opens: Option<String>,

        /// Registration closes date (YYYY-MM-DD)
        #[arg(long)]
        closes: Option<String>,

        /// Free-text notes
        #[arg(long)]
        notes: Option<String>,
    },
    /// Remove a tracked race by id
    Remove {
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the collection as pretty JSON
    Export {
        /// Also copy the JSON to the system clipboard
        #[arg(long)]
        clipboard: bool,
    },
    /// Restore the preloaded sample events, discarding stored ones
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { filter, query } => {
            let store = open_store()?;
            commands::list::run(&store, parse_filter(&filter)?, query.as_deref().unwrap_or(""))
        }
        Commands::Watch { filter, query } => {
            let store = open_store()?;
            commands::watch::run(&store, parse_filter(&filter)?, query.as_deref().unwrap_or(""))
                .await
        }
        Commands::Add {
            name,
            location,
            kind,
            opens,
            closes,
            notes,
        } => {
            let mut store = open_store()?;
            commands::add::run(&mut store, name, location, kind, opens, closes, notes)
        }
        Commands::Remove { id, yes } => {
            let mut store = open_store()?;
            commands::remove::run(&mut store, &id, yes)
        }
        Commands::Export { clipboard } => {
            let store = open_store()?;
            commands::export::run(&store, clipboard)
        }
        Commands::Reset { yes } => {
            let mut store = open_store()?;
            commands::reset::run(&mut store, yes)
        }
    }
}

fn open_store() -> Result<Store> {
    let config = BallotwatchConfig::load()?;
    Ok(Store::open(config.events_path()))
}

fn parse_filter(s: &str) -> Result<Filter> {
    s.parse().map_err(|e: String| anyhow::anyhow!(e))
}
