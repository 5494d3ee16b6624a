use std::process::ExitCode;

use crate::app::AppContext;
use crate::cli::RmArgs;

pub fn run(ctx: &AppContext, args: &RmArgs) -> anyhow::Result<ExitCode> {
    let vault = ctx.open_vault()?;

    if vault.remove(&args.id)? {
        println!("Evicted '{}'", args.id);
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("No entry with id '{}'", args.id);
        Ok(ExitCode::FAILURE)
    }
}
