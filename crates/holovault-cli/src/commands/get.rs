use std::process::ExitCode;

use crate::app::AppContext;
use crate::cli::GetArgs;

pub fn run(ctx: &AppContext, args: &GetArgs) -> anyhow::Result<ExitCode> {
    let glyph = ctx.require_glyph()?;
    let vault = ctx.open_vault()?;

    // Absence and wrong-key both exit nonzero without an error message.
    match vault.get(&args.id, &glyph)? {
        Some(value) => {
            if args.compact {
                println!("{}", serde_json::to_string(&value)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::FAILURE),
    }
}
