//! # Cubik CLI Library
//!
//! This library provides the command-line interface for the cubik cube
//! engine. It exposes subcommands for scrambling, applying move sequences,
//! checking states, and driving the external solver.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```
//! use std::io;
//! let args = vec!["cubik", "scramble", "--length", "10", "--seed", "42"];
//! let code = cubik_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `scramble`: Generate a scramble sequence and the resulting state
//! - `apply`: Apply a move sequence to a cube state
//! - `check`: Check whether a cube state is solved
//! - `solve`: Solve a cube state with the external solver
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
mod config;
mod error;
pub mod exit_code;
pub mod ui;

use cli::{Commands, CubikCli};
use commands::{
    handle_apply_command, handle_cfg_command, handle_check_command, handle_scramble_command,
    handle_solve_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate
/// subcommand handler.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["scramble", "apply", "check", "solve", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = CubikCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    if writeln!(err, "{}", e).is_err()
                        || writeln!(err).is_err()
                        || writeln!(err, "Cubik Cube CLI").is_err()
                        || writeln!(err, "Usage: cubik <command> [options]\n").is_err()
                        || writeln!(err, "Commands:").is_err()
                    {
                        return exit_code::ERROR;
                    }
                    for c in COMMANDS {
                        if writeln!(err, "  {}", c).is_err() {
                            return exit_code::ERROR;
                        }
                    }
                    if writeln!(err, "\nFor full help, run: cubik --help").is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => {
            let result = match cli.cmd {
                Commands::Scramble {
                    length,
                    seed,
                    double_chance,
                } => handle_scramble_command(length, seed, double_chance, out),
                Commands::Apply { moves, state } => handle_apply_command(&moves, state, out),
                Commands::Check { state } => handle_check_command(&state, out),
                Commands::Solve { state, solver } => handle_solve_command(&state, solver, out),
                Commands::Cfg => handle_cfg_command(out, err),
            };
            match result {
                Ok(()) => exit_code::SUCCESS,
                Err(e) => {
                    if writeln!(err, "Error: {}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::ERROR
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_module_exports_commands_enum() {
        let cli = CubikCli::try_parse_from(["cubik", "cfg"]).unwrap();
        match cli.cmd {
            Commands::Cfg => {}
            _ => panic!("Expected Commands::Cfg variant"),
        }
    }

    #[test]
    fn test_cli_types_preserve_all_subcommands() {
        let commands = vec![
            vec!["cubik", "scramble"],
            vec!["cubik", "scramble", "--length", "10", "--seed", "42"],
            vec!["cubik", "apply", "--moves", "R U R'"],
            vec![
                "cubik",
                "check",
                "--state",
                "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB",
            ],
            vec!["cubik", "solve", "--state", "UUU", "--solver", "echo"],
            vec!["cubik", "cfg"],
        ];

        for cmd_args in commands {
            let result = CubikCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
    }

    #[test]
    fn test_unknown_command_lists_commands_on_stderr() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["cubik", "juggle"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);

        let err_str = String::from_utf8(err).unwrap();
        assert!(err_str.contains("Commands:"));
        assert!(err_str.contains("scramble"));
        assert!(err_str.contains("solve"));
    }

    #[test]
    fn test_help_prints_to_stdout_with_success() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let code = run(["cubik", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(!out.is_empty(), "help text should land on stdout");
        assert!(err.is_empty(), "help should not touch stderr");
    }
}
