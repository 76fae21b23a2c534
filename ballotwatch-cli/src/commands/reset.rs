use anyhow::Result;
use ballotwatch_core::store::Store;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(store: &mut Store, yes: bool) -> Result<()> {
    if !yes {
        let confirmed = Confirm::new()
            .with_prompt("Reset to the preloaded sample events? This will overwrite your stored events.")
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Aborted.".dimmed());
            return Ok(());
        }
    }

    store.reset()?;
    println!(
        "{}",
        format!("Restored {} sample events", store.events().len()).green()
    );

    Ok(())
}
