//! Shared cube state for the web server.
//!
//! The server owns one cube. Every mutation returns a fresh [`CubeView`]
//! snapshot so handlers never hand out references into the lock.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use warp::http::StatusCode;

use cubik_engine::errors::CubeError;
use cubik_engine::facelet::CubeState;
use cubik_engine::moves::{self, Move};
use cubik_engine::notation;
use cubik_engine::scramble::Scrambler;
use cubik_engine::transform;

use crate::errors::IntoErrorResponse;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("{0}")]
    Engine(#[from] CubeError),
    #[error("cube storage lock poisoned")]
    StoragePoisoned,
}

impl IntoErrorResponse for StateError {
    fn status_code(&self) -> StatusCode {
        match self {
            StateError::Engine(_) => StatusCode::BAD_REQUEST,
            StateError::StoragePoisoned => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            StateError::Engine(_) => "invalid_cube_input",
            StateError::StoragePoisoned => "storage_poisoned",
        }
    }

    fn error_message(&self) -> String {
        self.to_string()
    }
}

/// JSON view of the cube carried by every cube endpoint response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CubeView {
    pub state: String,
    pub solved: bool,
}

impl CubeView {
    fn of(cube: &CubeState) -> Self {
        Self {
            state: notation::encode(cube),
            solved: cube.is_solved(),
        }
    }
}

/// Result of a scramble request: the sequence that was applied plus the
/// seed to reproduce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrambleOutcome {
    pub seed: u64,
    pub sequence: String,
    pub cube: CubeView,
}

/// The server's single shared cube behind a read-write lock.
#[derive(Debug)]
pub struct CubeStore {
    cube: RwLock<CubeState>,
}

impl Default for CubeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeStore {
    pub fn new() -> Self {
        Self {
            cube: RwLock::new(CubeState::solved()),
        }
    }

    pub fn snapshot(&self) -> Result<CubeView, StateError> {
        let cube = self.cube.read().map_err(|_| StateError::StoragePoisoned)?;
        Ok(CubeView::of(&cube))
    }

    pub fn reset(&self) -> Result<CubeView, StateError> {
        let mut cube = self.cube.write().map_err(|_| StateError::StoragePoisoned)?;
        *cube = CubeState::solved();
        Ok(CubeView::of(&cube))
    }

    /// Replace the cube with a decoded 54-character facelet string.
    pub fn set_state(&self, state: &str) -> Result<CubeView, StateError> {
        let next = notation::decode(state.trim())?;
        let mut cube = self.cube.write().map_err(|_| StateError::StoragePoisoned)?;
        *cube = next;
        Ok(CubeView::of(&cube))
    }

    /// Apply a whitespace-separated move sequence to the current cube.
    ///
    /// The sequence is parsed in full before the lock is taken, so a bad
    /// token never leaves a half-applied cube behind.
    pub fn apply_moves(&self, tokens: &str) -> Result<CubeView, StateError> {
        let sequence = Move::parse_sequence(tokens)?;
        let mut cube = self.cube.write().map_err(|_| StateError::StoragePoisoned)?;
        transform::apply_all(&mut cube, &sequence);
        Ok(CubeView::of(&cube))
    }

    /// Scramble from the solved state with a fresh or caller-provided seed.
    pub fn scramble(
        &self,
        length: usize,
        seed: Option<u64>,
        double_chance: Option<f64>,
    ) -> Result<ScrambleOutcome, StateError> {
        let seed = seed.unwrap_or_else(rand::random);
        let mut scrambler = Scrambler::new_with_seed(seed);
        if let Some(chance) = double_chance {
            scrambler = scrambler.with_double_chance(chance);
        }
        let sequence = scrambler.generate(length);

        let mut cube = self.cube.write().map_err(|_| StateError::StoragePoisoned)?;
        *cube = CubeState::solved();
        transform::apply_all(&mut cube, &sequence);
        Ok(ScrambleOutcome {
            seed,
            sequence: moves::format_sequence(&sequence),
            cube: CubeView::of(&cube),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_store_is_solved() {
        let store = CubeStore::new();
        let view = store.snapshot().unwrap();
        assert!(view.solved);
        assert_eq!(view.state.len(), 54);
    }

    #[test]
    fn apply_and_reset_round_trip() {
        let store = CubeStore::new();
        let view = store.apply_moves("R U2 F'").unwrap();
        assert!(!view.solved);

        let view = store.reset().unwrap();
        assert!(view.solved);
    }

    #[test]
    fn bad_token_leaves_cube_untouched() {
        let store = CubeStore::new();
        store.apply_moves("R").unwrap();
        let before = store.snapshot().unwrap();

        let result = store.apply_moves("U X2");
        assert!(matches!(result, Err(StateError::Engine(_))));
        assert_eq!(store.snapshot().unwrap(), before);
    }

    #[test]
    fn set_state_replaces_the_cube() {
        let store = CubeStore::new();
        store.apply_moves("L D").unwrap();
        let scrambled = store.snapshot().unwrap();

        store.reset().unwrap();
        let view = store.set_state(&scrambled.state).unwrap();
        assert_eq!(view, scrambled);
    }

    #[test]
    fn scramble_is_reproducible_by_seed() {
        let store = CubeStore::new();
        let first = store.scramble(15, Some(42), None).unwrap();
        let second = store.scramble(15, Some(42), None).unwrap();
        assert_eq!(first.sequence, second.sequence);
        assert_eq!(first.cube, second.cube);
        assert_eq!(first.seed, 42);
        assert!(!first.cube.solved);
    }

    #[test]
    fn scramble_restarts_from_solved() {
        let store = CubeStore::new();
        store.apply_moves("R U R' U'").unwrap();
        let outcome = store.scramble(10, Some(7), None).unwrap();

        // Replaying the sequence from solved must land on the same state
        let replay = CubeStore::new();
        let view = replay.apply_moves(&outcome.sequence).unwrap();
        assert_eq!(view, outcome.cube);
    }
}
