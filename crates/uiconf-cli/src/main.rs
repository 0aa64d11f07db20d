//! uiconf CLI
//!
//! Resolves layered UI configuration from the command line: user overrides
//! from a file, built-in platform defaults and URL query overrides.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose { "debug" } else { "warn" };
    uiconf_core::logging::init(directive)
        .map_err(|e| CliError::user(format!("failed to initialize logging: {e}")))?;
    tracing::debug!("Verbose mode enabled");

    let Some(command) = cli.command else {
        println!("{} UI configuration inspector", "uiconf".green().bold());
        println!();
        println!("Run {} for available commands.", "uiconf --help".cyan());
        return Ok(());
    };

    let context = context::load(&cli.sources)?;
    match command {
        Commands::Get {
            key,
            fallback,
            kind,
            json,
        } => commands::run_get(&context, &key, fallback.as_deref(), kind, json),
        Commands::Resolve { keys, json } => commands::run_resolve(&context, &keys, json),
        Commands::Modes { name, json } => commands::run_modes(&context, name.as_deref(), json),
        Commands::Platforms { json } => commands::run_platforms(&context, json),
    }
}
