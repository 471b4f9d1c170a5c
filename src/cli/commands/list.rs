//! List command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::Context;

/// Get terminal width, defaulting to 80 if unable to detect
fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Truncate a string to fit within max_width, adding "..." if truncated
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}

pub fn execute(ctx: &Context) -> Result<()> {
    let store = ctx.store.load()?;

    if store.profiles.is_empty() {
        ctx.print_warning("No profiles configured.");
        println!("  {}", "Add one with 'modelenv add'".dimmed());
        return Ok(());
    }

    // The model-name column; any store schema without a model-ish key
    // just shows the placeholder.
    let model_key = store.keys.iter().find(|k| k.key.contains("MODEL"));
    let model_header = model_key.map(|k| k.key.as_str()).unwrap_or("MODEL");

    let name_w = 24;
    let value_w = terminal_width().saturating_sub(name_w + 8).max(10);

    println!();
    println!("{}", "■ Configured profiles".green());
    println!();
    println!(
        "  {}",
        format!("{:<name_w$} {}", "NAME", model_header, name_w = name_w).dimmed()
    );
    println!("  {}", "─".repeat(name_w + 20).dimmed());

    for profile in &store.profiles {
        let marker = if store.current_profile.as_deref() == Some(profile.name.as_str()) {
            "●".green().to_string()
        } else {
            " ".to_string()
        };
        let name = format!("{:<name_w$}", truncate(&profile.name, name_w), name_w = name_w);
        let model = match model_key.and_then(|k| profile.value(&k.key)) {
            Some(value) => truncate(value, value_w).cyan().to_string(),
            None => "default".dimmed().to_string(),
        };
        let incomplete = if profile.is_complete(&store.keys) {
            String::new()
        } else {
            format!(" {}", "⚠ incomplete".yellow())
        };
        println!("{} {} {}{}", marker, name.white(), model, incomplete);
    }

    println!();
    match store.current() {
        Some(current) => println!("Current profile: {}", current.name.cyan()),
        None => println!(
            "{}",
            "No profile selected. Use 'modelenv use <name>' to select one.".dimmed()
        ),
    }
    println!();
    Ok(())
}
