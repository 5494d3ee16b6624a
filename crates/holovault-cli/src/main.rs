//! Holovault CLI - a glyph-keyed holographic vault for a single device.
//!
//! This is the command-line interface for Holovault. It provides onboarding
//! for the active glyph and put/get/list/rm/status over the core library.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;

use std::process::ExitCode;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let ctx = AppContext::resolve(&cli)?;

    match &cli.command {
        Commands::Init(args) => commands::init::run(&ctx, args),
        Commands::Put(args) => commands::put::run(&ctx, args),
        Commands::Get(args) => commands::get::run(&ctx, args),
        Commands::List(args) => commands::list::run(&ctx, args),
        Commands::Rm(args) => commands::rm::run(&ctx, args),
        Commands::Status => commands::status::run(&ctx),
    }
}
