//! LinkBox CLI: manage a local bookmark collection from the terminal.

mod commands;
mod prompt;
mod settings;

use std::io;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use linkbox_core::{AlwaysConfirm, BookmarkStore, LoadPolicy, Storage, StoreOptions};

use crate::commands::Command;
use crate::prompt::TerminalGate;

#[derive(Parser)]
#[command(name = "linkbox", about = "Local bookmark manager", version)]
struct Cli {
    /// Database file (defaults to ~/.config/linkbox/linkbox.db)
    #[arg(long, env = "LINKBOX_DB", global = true)]
    db: Option<PathBuf>,

    /// Skip confirmation prompts for destructive commands
    #[arg(short, long, global = true)]
    yes: bool,

    /// Refuse to start if stored data is unreadable instead of using defaults
    #[arg(long, global = true)]
    strict: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let path = settings::resolve_database_path(cli.db.as_deref()).map_err(|e| anyhow!(e))?;
    log::debug!("Using database {:?}", path);
    let storage = Storage::open(&path)
        .with_context(|| format!("Could not open database {}", path.display()))?;

    let mut options = StoreOptions::default();
    if cli.strict {
        options = options.load_policy(LoadPolicy::FailFast);
    }
    options = if cli.yes {
        options.gate(AlwaysConfirm)
    } else {
        options.gate(TerminalGate)
    };

    let mut store = BookmarkStore::open_with(storage, options)?;
    commands::run(&mut store, cli.command, &mut io::stdout().lock())
}
