use anyhow::Result;
use ballotwatch_core::store::Store;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(store: &Store, clipboard: bool) -> Result<()> {
    let json = store.export_json()?;

    if !clipboard {
        println!("{json}");
        return Ok(());
    }

    let confirmed = Confirm::new()
        .with_prompt("Export events to clipboard as JSON?")
        .default(true)
        .interact()?;
    if !confirmed {
        println!("{}", "Aborted.".dimmed());
        return Ok(());
    }

    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(json)?;
    println!(
        "{}",
        format!("Exported {} events to clipboard", store.events().len()).green()
    );

    Ok(())
}
