//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// uiconf - Inspect how layered UI configuration resolves
#[derive(Parser, Debug)]
#[command(name = "uiconf")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(flatten)]
    pub sources: SourceArgs,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Where resolution reads its inputs from
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SourceArgs {
    /// Active platform, general to specific (repeatable)
    #[arg(short, long = "platform", global = true, default_value = "core")]
    pub platforms: Vec<String>,

    /// User configuration file (JSON, or TOML with a .toml extension)
    #[arg(short, long, global = true, env = "UICONF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Page URL whose query string may carry `vm<key>` overrides
    #[arg(long, global = true)]
    pub url: Option<String>,
}

/// How `get` reads the resolved value
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueKind {
    /// The value as stored
    #[default]
    Raw,
    /// Boolean reading
    Bool,
    /// Numeric reading
    Number,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a single key
    ///
    /// Examples:
    ///   uiconf get tabsPlacement -p mobile -p ios
    ///   uiconf get keyboardHeight --as number
    ///   uiconf get hoverCSS --as bool --fallback true
    Get {
        /// Configuration key
        key: String,

        /// Value returned when nothing defines the key
        #[arg(long)]
        fallback: Option<String>,

        /// Read the value as raw, bool or number
        #[arg(long = "as", value_enum, default_value_t)]
        kind: ValueKind,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Resolve several keys (every well-known key when none are given)
    Resolve {
        /// Configuration keys
        keys: Vec<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List registered modes, or show one mode's settings
    Modes {
        /// Mode to show
        name: Option<String>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List built-in platform defaults and which are active
    Platforms {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
