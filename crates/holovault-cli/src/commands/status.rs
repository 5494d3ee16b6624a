use std::process::ExitCode;

use owo_colors::OwoColorize;

use holovault_core::glyph::GlyphSlot;

use crate::app::AppContext;

pub fn run(ctx: &AppContext) -> anyhow::Result<ExitCode> {
    let mut healthy = true;

    println!("Vault database: {}", ctx.vault_path.display());

    match ctx.open_vault() {
        Ok(vault) => {
            println!("  {} store reachable", "ok".green());

            match ctx.slot().load() {
                Some(glyph) => {
                    println!("  {} glyph configured", "ok".green());
                    let entries = vault.list(&glyph)?;
                    println!("  {} entries in the active partition", entries.len());
                }
                None => {
                    healthy = false;
                    println!(
                        "  {} no glyph configured (run `holovault init`)",
                        "!!".yellow()
                    );
                }
            }
        }
        Err(err) => {
            healthy = false;
            println!("  {} store unreachable: {:#}", "!!".red(), err);
        }
    }

    if healthy {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
