// pathify/src/cli/args.rs
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "pathify",
    author,
    version,
    about,
    long_about = None,
    disable_help_subcommand = true
)]
/// Bookmark directories and jump back to them with fuzzy search
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[arg(long = "no-color", help = "disable colored output")]
    pub no_color: bool,

    #[arg(long = "generate-config", help = "print the default configuration as TOML")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Record the current directory in the path list
    Add(Extra),
    /// Record the current directory in the marked list
    Mark(Extra),
    /// Fuzzy search the path list and print the selection
    Find(Extra),
    /// Fuzzy search the marked list and print the selection
    Marked(Extra),
    /// Remove a path from both lists
    Delete {
        /// exact path to remove, surrounding whitespace is ignored
        #[arg(allow_hyphen_values = true)]
        path: Option<String>,
        #[command(flatten)]
        extra: Extra,
    },
    /// Print a shell completion script: bash, zsh or fish
    Completion { shell: String },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// Trailing arguments after a command, accepted and ignored.
#[derive(Args, Debug, Default, PartialEq, Eq)]
pub struct Extra {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub ignored: Vec<String>,
}
