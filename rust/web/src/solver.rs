//! External solver integration.
//!
//! The solver is a separate executable. It receives the 54-character facelet
//! string as its final argument and prints the solution sequence on stdout;
//! failures come back as a single stdout line starting with `ERROR:`.

use thiserror::Error;
use tokio::process::Command;
use warp::http::StatusCode;

use cubik_engine::errors::CubeError;
use cubik_engine::moves::Move;
use cubik_engine::notation;

use crate::errors::IntoErrorResponse;

#[derive(Debug, Error)]
pub enum SolverError {
    #[error("{0}")]
    InvalidState(#[from] CubeError),
    #[error("failed to run solver `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
    #[error("solver reported: {0}")]
    Unsolvable(String),
    #[error("unreadable solver output: {0}")]
    Malformed(String),
}

impl IntoErrorResponse for SolverError {
    fn status_code(&self) -> StatusCode {
        match self {
            SolverError::InvalidState(_) => StatusCode::BAD_REQUEST,
            SolverError::Unsolvable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            SolverError::Spawn { .. } | SolverError::Malformed(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SolverError::InvalidState(_) => "invalid_cube_input",
            SolverError::Unsolvable(_) => "unsolvable_state",
            SolverError::Spawn { .. } => "solver_unavailable",
            SolverError::Malformed(_) => "solver_malformed_output",
        }
    }

    fn error_message(&self) -> String {
        self.to_string()
    }
}

/// Spawns the configured solver command per request.
#[derive(Debug, Clone)]
pub struct CommandSolver {
    command: String,
}

impl CommandSolver {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    /// Solve the given facelet string.
    ///
    /// The state is validated through the engine codec before any process
    /// is spawned; an already solved cube yields an empty solution.
    pub async fn solve(&self, state: &str) -> Result<Vec<Move>, SolverError> {
        let state = state.trim();
        let cube = notation::decode(state)?;
        if cube.is_solved() {
            return Ok(Vec::new());
        }

        let mut parts = self.command.split_whitespace();
        let program = parts.next().ok_or_else(|| {
            SolverError::Malformed("solver command is empty".to_string())
        })?;

        let output = Command::new(program)
            .args(parts)
            .arg(state)
            .output()
            .await
            .map_err(|source| SolverError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SolverError::Malformed(format!(
                "solver exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        parse_solver_output(&String::from_utf8_lossy(&output.stdout))
    }
}

fn parse_solver_output(stdout: &str) -> Result<Vec<Move>, SolverError> {
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Err(SolverError::Malformed("solver produced no output".into()));
    }
    if let Some(message) = trimmed.strip_prefix("ERROR:") {
        return Err(SolverError::Unsolvable(message.trim().to_string()));
    }
    Move::parse_sequence(trimmed).map_err(|e| SolverError::Malformed(e.to_string()))
}
