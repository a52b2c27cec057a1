use serde::{Deserialize, Serialize};

use crate::errors::CubeError;
use crate::facelet::Face;

/// Turn direction for a single move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Clockwise,
    Counterclockwise,
}

/// A single face turn. A double move rotates 180 degrees and is
/// direction-independent.
///
/// Moves are consumed once by [`crate::transform::apply`]; this crate keeps
/// no move history.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
    #[serde(default)]
    pub double: bool,
}

impl Move {
    pub fn clockwise(face: Face) -> Move {
        Move {
            face,
            direction: Direction::Clockwise,
            double: false,
        }
    }

    pub fn counterclockwise(face: Face) -> Move {
        Move {
            face,
            direction: Direction::Counterclockwise,
            double: false,
        }
    }

    pub fn double(face: Face) -> Move {
        Move {
            face,
            direction: Direction::Clockwise,
            double: true,
        }
    }

    /// Parse one of the 18 external move tokens: a face letter optionally
    /// suffixed with `'` (counterclockwise) or `2` (double).
    ///
    /// An unrecognized face identifier or suffix is an
    /// [`CubeError::InvalidMove`]; this is the only error path into the move
    /// transform.
    pub fn parse(token: &str) -> Result<Move, CubeError> {
        let invalid = || CubeError::InvalidMove(token.to_string());
        let mut chars = token.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(invalid)?;
        match chars.as_str() {
            "" => Ok(Move::clockwise(face)),
            "'" => Ok(Move::counterclockwise(face)),
            "2" => Ok(Move::double(face)),
            _ => Err(invalid()),
        }
    }

    /// Parse a whitespace-separated move sequence, e.g. a solver solution
    /// like `"R U R' U'"`.
    pub fn parse_sequence(sequence: &str) -> Result<Vec<Move>, CubeError> {
        sequence.split_whitespace().map(Move::parse).collect()
    }

    /// The token for this move in external notation.
    pub fn token(&self) -> String {
        let mut token = String::with_capacity(2);
        token.push(self.face.letter());
        if self.double {
            token.push('2');
        } else if self.direction == Direction::Counterclockwise {
            token.push('\'');
        }
        token
    }

    /// The move undoing this one. A double move is its own inverse.
    pub fn inverse(&self) -> Move {
        if self.double {
            return *self;
        }
        let direction = match self.direction {
            Direction::Clockwise => Direction::Counterclockwise,
            Direction::Counterclockwise => Direction::Clockwise,
        };
        Move {
            face: self.face,
            direction,
            double: false,
        }
    }
}

/// Render a move sequence as space-separated tokens.
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::token)
        .collect::<Vec<_>>()
        .join(" ")
}
