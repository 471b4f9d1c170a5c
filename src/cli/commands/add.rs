//! Add command implementation

use std::collections::BTreeMap;

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;

use crate::cli::Context;
use crate::model::Profile;

/// Prompt for a profile, one recognized key at a time. Required keys
/// are validated non-empty at the prompt; the core validation runs
/// again before the upsert.
pub fn execute(ctx: &Context) -> Result<()> {
    let keys = ctx.store.recognized_keys()?;

    let name: String = Input::new()
        .with_prompt("Profile name")
        .validate_with(|input: &String| {
            if input.trim().is_empty() {
                Err("name is required")
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let mut values = BTreeMap::new();
    for key in &keys {
        let value: String = if key.required {
            Input::new()
                .with_prompt(key.key.clone())
                .validate_with(|input: &String| {
                    if input.trim().is_empty() {
                        Err("a value is required")
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?
        } else {
            Input::new()
                .with_prompt(format!("{} (optional)", key.key))
                .allow_empty(true)
                .interact_text()?
        };
        let value = value.trim();
        if !value.is_empty() {
            values.insert(key.key.clone(), value.to_string());
        }
    }

    let description: String = Input::new()
        .with_prompt("Description (optional)")
        .allow_empty(true)
        .interact_text()?;

    let profile = Profile {
        name: name.trim().to_string(),
        values,
        description: Some(description.trim().to_string()).filter(|d| !d.is_empty()),
    };
    profile.validate(&keys)?;

    let name = profile.name.clone();
    ctx.store.upsert(profile)?;

    println!();
    ctx.print_success(&format!("Profile '{}' saved", name.cyan()));
    println!(
        "  {}",
        format!("Select it with 'modelenv use {}'", name).dimmed()
    );
    Ok(())
}
