use std::io::{IsTerminal, Read};
use std::process::ExitCode;

use anyhow::{bail, Context};

use crate::app::AppContext;
use crate::cli::PutArgs;
use crate::helpers::parse_value;

pub fn run(ctx: &AppContext, args: &PutArgs) -> anyhow::Result<ExitCode> {
    let glyph = ctx.require_glyph()?;
    let vault = ctx.open_vault()?;

    let raw = read_raw_value(args)?;
    let value = parse_value(&raw);

    vault.put(&args.id, &value, &glyph)?;
    println!("Stored '{}'", args.id);

    Ok(ExitCode::SUCCESS)
}

fn read_raw_value(args: &PutArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    if let Some(value) = &args.value {
        return Ok(value.clone());
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        bail!("No value given. Pass VALUE, --file, or pipe data on stdin.");
    }
    let mut raw = String::new();
    stdin.read_to_string(&mut raw)?;
    Ok(raw.trim_end().to_string())
}
