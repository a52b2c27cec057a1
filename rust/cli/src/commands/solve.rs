//! Solve command handler.
//!
//! Hands a cube state to the external solver process and prints the returned
//! move sequence. The solver contract: the state is appended as the final
//! argument, the solution arrives on stdout, and failures are reported as a
//! single stdout line starting with `ERROR:`.

use std::io::Write;
use std::process::Command;

use cubik_engine::moves::{self, Move};
use cubik_engine::notation;
use cubik_engine::transform;

use crate::config;
use crate::error::CliError;

/// Handle the solve command.
///
/// Validates the state before spawning anything; an already solved cube
/// short-circuits with an empty solution.
pub fn handle_solve_command(
    state: &str,
    solver: Option<String>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let state = state.trim();
    let mut cube = notation::decode(state)?;
    if cube.is_solved() {
        writeln!(out, "Already solved")?;
        return Ok(());
    }

    let solver_cmd = match solver {
        Some(cmd) => cmd,
        None => {
            config::load()
                .map_err(|e| CliError::Config(e.to_string()))?
                .solver
        }
    };

    let output = spawn_solver(&solver_cmd, state)?;
    let solution = parse_solver_output(&output)?;

    // Replay the solution through the engine to check it actually solves
    transform::apply_all(&mut cube, &solution);

    writeln!(out, "Solution: {}", moves::format_sequence(&solution))?;
    writeln!(out, "Moves: {}", solution.len())?;
    writeln!(out, "Verified: {}", if cube.is_solved() { "yes" } else { "no" })?;
    Ok(())
}

fn spawn_solver(solver_cmd: &str, state: &str) -> Result<String, CliError> {
    let mut parts = solver_cmd.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| CliError::Config("solver command is empty".into()))?;

    let output = Command::new(program)
        .args(parts)
        .arg(state)
        .output()
        .map_err(|e| CliError::Solver(format!("failed to run `{}`: {}", solver_cmd, e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(CliError::Solver(format!(
            "solver exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Parse solver stdout into a move sequence.
///
/// A line starting with `ERROR:` carries the solver's own failure message.
pub fn parse_solver_output(stdout: &str) -> Result<Vec<Move>, CliError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(CliError::Solver("solver produced no output".into()));
    }
    if let Some(message) = trimmed.strip_prefix("ERROR:") {
        return Err(CliError::Solver(message.trim().to_string()));
    }
    Move::parse_sequence(trimmed)
        .map_err(|e| CliError::Solver(format!("unreadable solver output: {}", e)))
}
