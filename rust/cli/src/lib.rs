//! # Cardroom CLI Library
//!
//! This library provides the command-line interface for the cardroom
//! Texas Hold'em engine.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same with an
//! explicit input stream for the interactive `play` command.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cardroom", "play", "--players", "3", "--hands", "10"];
//! let code = cardroom_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `deal`: Deal a single hand for inspection
//! - `eval`: Rank 5 to 7 cards
//! - `play`: Hot-seat play at one terminal, or automatic check/call with `--auto`
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{CardroomCli, Commands};
use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
};
use macros::write_or_exit;

pub use error::CliError;

const COMMANDS: &[&str] = &["deal", "eval", "play", "cfg"];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// Interactive input is read from the process's stdin.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["cardroom", "deal", "--seed", "42"];
/// let code = cardroom_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading interactive input from `input`.
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new("fold\n");
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = cardroom_cli::run_with_input(
///     ["cardroom", "play", "--seed", "7"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8_lossy(&out).contains("uncontested"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match CardroomCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Cardroom Hold'em CLI");
            write_or_exit!(err, "Usage: cardroom <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: cardroom --help");
            return exit_code::ERROR;
        }
    };

    match dispatch(cli.cmd, input, out, err) {
        Ok(()) => exit_code::SUCCESS,
        Err(e @ CliError::Interrupted(_)) => {
            let _ = ui::display_warning(err, &e.to_string());
            exit_code::for_error(&e)
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::for_error(&e)
        }
    }
}

fn dispatch(
    cmd: Commands,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Deal { seed, players } => {
            let cfg = config::load()?.with_overrides(seed, players)?;
            handle_deal_command(&cfg, out)
        }
        Commands::Play {
            hands,
            seed,
            players,
            auto,
        } => {
            let cfg = config::load()?.with_overrides(seed, players)?;
            handle_play_command(&cfg, hands, auto, out, err, input)
        }
    }
}
