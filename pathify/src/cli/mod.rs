// pathify/src/cli/mod.rs
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::domain::list_kind::ListKind;
use crate::infrastructure::di::ServiceContainer;
use crossterm::style::Stylize;
use std::io;
use tracing::{instrument, warn};

pub mod args;
pub mod completion;
pub mod error;
pub mod path_commands;

pub const USAGE: &str = "Usage: pathify <command> [<args>]";

#[instrument(skip_all, level = "debug")]
pub fn execute_command(cli: Cli, services: &ServiceContainer) -> CliResult<()> {
    if cli.generate_config {
        println!("{}", crate::config::generate_default_config());
        return Ok(());
    }

    // a missing storage directory surfaces again as a file error in the command
    if let Err(e) = services.ensure_storage() {
        warn!("Cannot prepare storage: {}", e);
        report_error(&e.to_string(), cli.no_color);
    }

    match cli.command {
        Some(Commands::Add(_)) => path_commands::add(services),
        Some(Commands::Mark(_)) => path_commands::mark(services),
        Some(Commands::Find(_)) => path_commands::find(services, ListKind::General),
        Some(Commands::Marked(_)) => path_commands::find(services, ListKind::Marked),
        Some(Commands::Delete { path, .. }) => path_commands::delete(services, path, cli.no_color),
        Some(Commands::Completion { shell }) => handle_completion(&shell),
        Some(Commands::Unknown(args)) => {
            let name = args.first().map(String::as_str).unwrap_or_default();
            println!("Unknown command: {}", name);
            Ok(())
        }
        None => {
            println!("{}", USAGE);
            Ok(())
        }
    }
}

fn handle_completion(shell: &str) -> CliResult<()> {
    match shell.to_lowercase().as_str() {
        "bash" => {
            eprintln!("# Outputting bash completion script for pathify");
            eprintln!("# To use, run one of:");
            eprintln!("# - eval \"$(pathify completion bash)\"                  # one-time use");
            eprintln!("# - pathify completion bash >> ~/.bashrc                 # add to bashrc");
            eprintln!("#");
        }
        "zsh" => {
            eprintln!("# Outputting zsh completion script for pathify");
            eprintln!("# To use, run one of:");
            eprintln!("# - eval \"$(pathify completion zsh)\"                   # one-time use");
            eprintln!("# - pathify completion zsh > ~/.zfunc/_pathify           # save to fpath directory");
            eprintln!("#");
        }
        "fish" => {
            eprintln!("# Outputting fish completion script for pathify");
            eprintln!("# To use, run one of:");
            eprintln!("# - pathify completion fish | source                     # one-time use");
            eprintln!("# - pathify completion fish > ~/.config/fish/completions/pathify.fish");
            eprintln!("#");
        }
        _ => {}
    }

    completion::generate_completion(shell, &mut io::stdout()).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidInput => CliError::InvalidInput(e.to_string()),
        _ => CliError::CommandFailed(e.to_string()).context("Failed to generate completion script"),
    })
}

/// Print a user facing error on stderr, red unless colors are disabled.
pub fn report_error(msg: &str, no_color: bool) {
    if no_color {
        eprintln!("{}", msg);
    } else {
        eprintln!("{}", msg.red());
    }
}
