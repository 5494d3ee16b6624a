use std::process::ExitCode;

use anyhow::bail;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use holovault_core::glyph::{self, Glyph, GlyphSlot};

use crate::app::AppContext;
use crate::cli::InitArgs;

pub fn run(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<ExitCode> {
    let slot = ctx.slot();

    if slot.load().is_some() && !args.force {
        bail!("A glyph is already configured. Re-run with --force to replace it.");
    }

    let glyph = match &args.glyph {
        Some(input) => Glyph::new(input.trim().to_uppercase())?,
        None if args.no_input => Glyph::generate()?,
        None => prompt_for_glyph()?,
    };

    slot.save(&glyph)?;
    ctx.persist_config()?;

    println!("Active glyph: {}", glyph.as_str().bold());
    println!(
        "{}",
        "Record it somewhere safe. Entries stored under this glyph are \
         unreadable without it - a wrong glyph looks like an empty vault."
            .dimmed()
    );
    println!("Vault database: {}", ctx.vault_path.display());

    Ok(ExitCode::SUCCESS)
}

fn prompt_for_glyph() -> anyhow::Result<Glyph> {
    let theme = ColorfulTheme::default();

    let choice = Select::with_theme(&theme)
        .with_prompt("How do you want to set the glyph?")
        .items(&["Generate a new glyph", "Enter an existing glyph"])
        .default(0)
        .interact()?;

    if choice == 0 {
        loop {
            let glyph = Glyph::generate()?;
            println!("Generated glyph: {}", glyph.as_str().bold());
            let accepted = Confirm::with_theme(&theme)
                .with_prompt("Use this glyph?")
                .default(true)
                .interact()?;
            if accepted {
                return Ok(glyph);
            }
        }
    }

    let input: String = Input::with_theme(&theme)
        .with_prompt("Glyph (8 characters, A-Z0-9)")
        .validate_with(|value: &String| -> Result<(), &str> {
            if glyph::validate(&value.trim().to_uppercase()) {
                Ok(())
            } else {
                Err("Glyph must be exactly 8 characters from A-Z0-9")
            }
        })
        .interact_text()?;

    Ok(Glyph::new(input.trim().to_uppercase())?)
}
