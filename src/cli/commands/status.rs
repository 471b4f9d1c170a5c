//! Status command implementation

use anyhow::Result;
use colored::Colorize;

use super::display_value;
use crate::cli::Context;
use crate::env::{EnvWriter, ProcessEnv};

pub fn execute(ctx: &Context) -> Result<()> {
    let store = ctx.store.load()?;
    let snapshot = EnvWriter::snapshot(&store.keys, &ProcessEnv);

    println!();
    println!("{}", "■ Configuration".green());
    println!("  File: {}", ctx.store.path().display());
    println!();

    println!("{}", "■ Current profile".green());
    match store.current() {
        Some(profile) => {
            println!("  {:<30} {}", "Name", profile.name.cyan());
            match &profile.description {
                Some(description) => println!("  {:<30} {}", "Description", description),
                None => println!("  {:<30} {}", "Description", "Not set".dimmed()),
            }
            for key in &store.keys {
                match profile.value(&key.key) {
                    Some(value) => {
                        println!("  {:<30} {}", key.key, display_value(key, value).cyan())
                    }
                    None => println!("  {:<30} {}", key.key, "Not set".dimmed()),
                }
            }
            if !profile.is_complete(&store.keys) {
                ctx.print_warning("Profile is missing required values");
            }
        }
        None => {
            println!("  {} No profile currently selected", "✗".red());
            println!("  {}", "Select one with 'modelenv use <name>'".dimmed());
        }
    }
    println!();

    println!("{}", "■ Environment variables".green());
    for (key, value) in &snapshot {
        match value {
            Some(value) => println!(
                "  {} {:<30} {}",
                "✓".green(),
                key.key,
                display_value(key, value).cyan()
            ),
            None => println!("  {} {:<30} {}", "✗".red(), key.key, "Not set".dimmed()),
        }
    }

    if snapshot.iter().any(|(key, value)| key.required && value.is_none()) {
        println!();
        println!(
            "  {}",
            "Required variables are not set for this session.".dimmed()
        );
        println!("  {}", "Run 'modelenv use <name>' to set them.".dimmed());
    }
    println!();
    Ok(())
}
