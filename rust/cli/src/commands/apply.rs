//! Apply command handler.
//!
//! Applies a whitespace-separated move sequence to a cube state and prints
//! the resulting state together with its solved status.

use std::io::Write;

use cubik_engine::facelet::CubeState;
use cubik_engine::moves::Move;
use cubik_engine::notation;
use cubik_engine::transform;

use crate::error::CliError;

/// Handle the apply command.
///
/// The starting state defaults to a solved cube when `state` is `None`.
/// Bad move tokens and bad notation map to [`CliError::Engine`].
pub fn handle_apply_command(
    moves: &str,
    state: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cube = match state {
        Some(notation) => notation::decode(notation.trim())?,
        None => CubeState::solved(),
    };
    let sequence = Move::parse_sequence(moves)?;

    transform::apply_all(&mut cube, &sequence);

    writeln!(out, "State: {}", notation::encode(&cube))?;
    writeln!(out, "Solved: {}", if cube.is_solved() { "yes" } else { "no" })?;
    Ok(())
}
