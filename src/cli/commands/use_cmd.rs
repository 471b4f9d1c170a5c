//! Use command implementation

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;

use super::display_value;
use crate::cli::Context;
use crate::env::ProcessEnv;
use crate::error::Error;

pub fn execute(ctx: &Context, name: Option<&str>) -> Result<()> {
    let store = ctx.store.load()?;

    if store.profiles.is_empty() {
        ctx.print_warning("No profiles configured.");
        println!("  {}", "Add one with 'modelenv add'".dimmed());
        return Ok(());
    }

    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let names: Vec<&str> = store.profiles.iter().map(|p| p.name.as_str()).collect();
            let selection = Select::new()
                .with_prompt("Select a profile")
                .items(&names)
                .default(0)
                .interact()?;
            names[selection].to_string()
        }
    };

    let Some(profile) = store.find_profile(&name).cloned() else {
        return Err(Error::NotFound(name).into());
    };

    ctx.store.set_current(&name)?;

    // Keep a copy of the startup file before the rewrite touches it
    if ctx.rc_file.exists() {
        ctx.backup_manager().create_backup(&ctx.rc_file)?;
    }

    let mut env = ProcessEnv;
    let report = ctx.writer().apply(&profile, &store.keys, &mut env)?;

    println!();
    ctx.print_success(&format!("Switched to profile '{}'", profile.name.cyan()));
    for applied in &report.keys {
        if let Some(value) = &applied.value {
            println!(
                "  {}={}",
                applied.key.key.dimmed(),
                display_value(&applied.key, value).cyan()
            );
        }
    }
    println!();
    ctx.print_success(&format!("Updated {} configuration", report.shell));
    println!(
        "  {}",
        format!("File: {}", report.rc_path.display()).dimmed()
    );
    ctx.print_reload_hint();
    Ok(())
}
