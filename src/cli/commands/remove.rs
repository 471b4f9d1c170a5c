//! Remove command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Confirm, Select};

use crate::cli::Context;
use crate::error::Error;

pub fn execute(ctx: &Context, name: Option<&str>, yes: bool) -> Result<()> {
    let store = ctx.store.load()?;

    if store.profiles.is_empty() {
        ctx.print_warning("No profiles configured.");
        return Ok(());
    }

    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let names: Vec<&str> = store.profiles.iter().map(|p| p.name.as_str()).collect();
            let selection = Select::new()
                .with_prompt("Select a profile to remove")
                .items(&names)
                .default(0)
                .interact()?;
            names[selection].to_string()
        }
    };

    if store.find_profile(&name).is_none() {
        return Err(Error::NotFound(name).into());
    }

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove profile '{}'?", name))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{}", "Cancelled.".dimmed());
            return Ok(());
        }
    }

    ctx.store.remove(&name)?;

    ctx.print_success(&format!("Removed profile '{}'", name.cyan()));
    if ctx.store.list_profiles()?.is_empty() {
        println!(
            "  {}",
            "No profiles remaining. Add one with 'modelenv add'".dimmed()
        );
    }
    Ok(())
}
