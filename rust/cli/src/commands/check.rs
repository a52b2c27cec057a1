//! Check command handler.
//!
//! Decodes a 54-character facelet string and reports whether it describes a
//! solved cube.

use std::io::Write;

use cubik_engine::notation;

use crate::error::CliError;

/// Handle the check command.
///
/// Prints `Solved: yes` or `Solved: no`; invalid notation maps to
/// [`CliError::Engine`] and exit code 2.
pub fn handle_check_command(state: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let cube = notation::decode(state.trim())?;
    writeln!(out, "Solved: {}", if cube.is_solved() { "yes" } else { "no" })?;
    Ok(())
}
