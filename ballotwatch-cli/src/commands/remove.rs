use anyhow::Result;
use ballotwatch_core::store::Store;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

pub fn run(store: &mut Store, id: &str, yes: bool) -> Result<()> {
    let Some(event) = store.events().iter().find(|e| e.id == id) else {
        let available: Vec<_> = store.events().iter().map(|e| e.id.as_str()).collect();
        anyhow::bail!("No event with id '{}'. Known ids: {}", id, available.join(", "));
    };
    let name = event.name.clone();

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove \"{name}\"?"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Aborted.".dimmed());
            return Ok(());
        }
    }

    store.remove(id)?;
    println!("{}", format!("Removed: {name}").green());

    Ok(())
}
