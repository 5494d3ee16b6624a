use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use holovault_core::VERSION;

/// Holovault - a glyph-keyed holographic vault for a single device
#[derive(Parser)]
#[command(name = "holovault")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the vault database
    #[arg(short, long, global = true, env = "HOLOVAULT_PATH")]
    pub vault: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up the active glyph for this device
    Init(InitArgs),

    /// Store a value under an id
    Put(PutArgs),

    /// Retrieve and print the value stored under an id
    Get(GetArgs),

    /// List the entries in the active partition
    List(ListArgs),

    /// Evict the entry stored under an id
    Rm(RmArgs),

    /// Show vault health and configuration
    Status,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Use this glyph instead of prompting (8 characters, A-Z0-9)
    #[arg(long, value_name = "GLYPH")]
    pub glyph: Option<String>,

    /// Replace an already-configured glyph
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts (generates a glyph unless --glyph is given)
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `put` command
#[derive(Args)]
pub struct PutArgs {
    /// Entry id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Value to store; parsed as JSON, falling back to a plain string
    #[arg(value_name = "VALUE")]
    pub value: Option<String>,

    /// Read the value from a file instead
    #[arg(long, value_name = "PATH", conflicts_with = "value")]
    pub file: Option<PathBuf>,
}

/// Arguments for the `get` command
#[derive(Args)]
pub struct GetArgs {
    /// Entry id
    #[arg(value_name = "ID")]
    pub id: String,

    /// Print compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Print raw records as JSON (ciphertext included, never decoded)
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `rm` command
#[derive(Args)]
pub struct RmArgs {
    /// Entry id
    #[arg(value_name = "ID")]
    pub id: String,
}
