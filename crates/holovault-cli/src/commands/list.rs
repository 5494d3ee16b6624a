use std::process::ExitCode;

use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::format_stored_at;

pub fn run(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<ExitCode> {
    let glyph = ctx.require_glyph()?;
    let vault = ctx.open_vault()?;

    let entries = vault.list(&glyph)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(ExitCode::SUCCESS);
    }

    if entries.is_empty() {
        println!("No entries in the active partition.");
        return Ok(ExitCode::SUCCESS);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["ID", "TYPE", "STORED AT", "SIZE"]);
    for entry in &entries {
        table.add_row(vec![
            entry.id.clone(),
            entry.kind.to_string(),
            format_stored_at(entry),
            format!("{} B", entry.data.len()),
        ]);
    }
    println!("{table}");

    Ok(ExitCode::SUCCESS)
}
