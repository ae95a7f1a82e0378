//! # magnet CLI Entry Point
//!
//! Parses global flags with clap, then hands the verb and its raw arguments
//! to the dispatcher. Arguments after the verb are passed through untouched
//! (including `--list` and `--help` for `pull`) so each handler can validate
//! its own positions.
//!
//! ## Command Structure
//!
//! - **Project**: `new`, `config`, `help`, `version`
//! - **Build**: `generate`, `build`, `go`, `clean`
//! - **Dependencies**: `pull`, `remove`, `switch`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use magnet::commands;
use magnet::logging;
use magnet::process::SystemRunner;
use magnet::ui;

#[derive(Parser, Debug)]
#[command(name = "magnet")]
#[command(about = "Scaffolds C++ projects, manages submodule dependencies and generates CMake files", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(allow_external_subcommands = true, disable_help_subcommand = true)]
struct Cli {
    /// Show diagnostics (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only print errors
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Command to run (see `magnet help`)
    #[command(subcommand)]
    command: Option<Command>,
}

/// Any verb. Parsing stops at the verb so its arguments, flags included,
/// reach the handler untouched.
#[derive(Subcommand, Debug)]
enum Command {
    #[command(external_subcommand)]
    Verb(Vec<String>),
}

impl Cli {
    fn verb_and_args(self) -> (Option<String>, Vec<String>) {
        match self.command {
            Some(Command::Verb(mut words)) if !words.is_empty() => {
                let verb = words.remove(0);
                (Some(verb), words)
            }
            _ => (None, Vec::new()),
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let color = !cli.no_color && std::env::var_os("NO_COLOR").is_none();
    if !color {
        colored::control::set_override(false);
    }
    logging::init_logging(cli.verbose, cli.quiet, color);

    let root = std::env::current_dir().context("Failed to read the current directory")?;
    let (verb, args) = cli.verb_and_args();

    match commands::run(&root, verb.as_deref(), args, &SystemRunner) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            ui::report(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Cli {
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_after_verb_reach_handler() {
        let cli = parse(&["magnet", "remove", "-v"]);
        assert_eq!(cli.verbose, 0);
        assert_eq!(cli.verb_and_args(), (Some("remove".to_string()), vec!["-v".to_string()]));
    }

    #[test]
    fn test_help_after_verb_is_an_argument() {
        let cli = parse(&["magnet", "pull", "--help"]);
        assert_eq!(cli.verb_and_args(), (Some("pull".to_string()), vec!["--help".to_string()]));
    }

    #[test]
    fn test_global_flags_before_verb() {
        let cli = parse(&["magnet", "-vv", "--no-color", "switch", "glfw", "--quiet"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(!cli.quiet);
        assert_eq!(
            cli.verb_and_args(),
            (
                Some("switch".to_string()),
                vec!["glfw".to_string(), "--quiet".to_string()]
            )
        );
    }

    #[test]
    fn test_no_verb() {
        assert_eq!(parse(&["magnet"]).verb_and_args(), (None, Vec::new()));
    }
}
