//! Process exit codes returned by [`crate::run`].

use crate::error::CliError;

pub const SUCCESS: i32 = 0;

/// Bad arguments, bad configuration, I/O or engine failures.
pub const ERROR: i32 = 2;

/// 128 + SIGINT.
pub const INTERRUPTED: i32 = 130;

/// Exit code for a command that failed with `err`.
pub fn for_error(err: &CliError) -> i32 {
    match err {
        CliError::Interrupted(_) => INTERRUPTED,
        _ => ERROR,
    }
}
