use anyhow::Result;
use ballotwatch_core::event::{self, EventDraft, EventType};
use ballotwatch_core::store::Store;
use chrono::{NaiveDate, Utc};
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

pub fn run(
    store: &mut Store,
    name: Option<String>,
    location: Option<String>,
    kind: Option<String>,
    opens: Option<String>,
    closes: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let interactive = name.is_none() || opens.is_none();

    // --- Name ---
    let name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("  Name")
            .interact_text()?,
    };

    // --- Opens ---
    let opens = if let Some(s) = opens {
        Some(parse_date_arg(&s)?)
    } else {
        Some(prompt_with_retry("  Opens (YYYY-MM-DD)", parse_date_arg)?)
    };

    // --- Closes ---
    let closes = if let Some(s) = closes {
        Some(parse_date_arg(&s)?)
    } else if interactive {
        prompt_optional_date("  Closes (YYYY-MM-DD, skip)")?
    } else {
        None
    };

    // --- Type ---
    let kind = match kind {
        Some(s) => s
            .parse::<EventType>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None if interactive => prompt_kind()?,
        None => EventType::default(),
    };

    // --- Location / Notes ---
    let location = resolve_optional_text(location, interactive, "  Where? (skip)")?;
    let notes = resolve_optional_text(notes, interactive, "  Notes (skip)")?;

    let draft = EventDraft {
        name,
        location,
        kind,
        opens,
        closes,
        notes,
    };
    let event = store.add(draft, Utc::now())?;

    if interactive {
        println!();
    }
    println!(
        "{}",
        format!("  Added: {} ({})", event.name, event.id).green()
    );

    Ok(())
}

/// Parse a strict YYYY-MM-DD argument.
fn parse_date_arg(input: &str) -> Result<NaiveDate> {
    event::parse_date(input)
        .ok_or_else(|| anyhow::anyhow!("Invalid date \"{input}\". Expected YYYY-MM-DD"))
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<F>(prompt: &str, parse: F) -> Result<NaiveDate>
where
    F: Fn(&str) -> Result<NaiveDate>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

/// Prompt for an optional date: empty input skips, bad input retries.
fn prompt_optional_date(prompt: &str) -> Result<Option<NaiveDate>> {
    loop {
        let input: String = Input::new()
            .with_prompt(prompt)
            .default(String::new())
            .show_default(false)
            .interact_text()?;
        if input.trim().is_empty() {
            return Ok(None);
        }
        match parse_date_arg(&input) {
            Ok(date) => return Ok(Some(date)),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

fn prompt_kind() -> Result<EventType> {
    let items = ["Custom", "Major", "SuperHalf"];
    let selection = Select::new()
        .with_prompt("  Type")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(items[selection].parse().unwrap_or_default())
}

/// A flag value wins; otherwise prompt in interactive mode. Empty means none.
fn resolve_optional_text(
    value: Option<String>,
    interactive: bool,
    prompt: &str,
) -> Result<Option<String>> {
    if let Some(v) = value {
        return Ok(if v.is_empty() { None } else { Some(v) });
    }
    if !interactive {
        return Ok(None);
    }
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false)
        .interact_text()?;
    Ok(if input.is_empty() { None } else { Some(input) })
}
