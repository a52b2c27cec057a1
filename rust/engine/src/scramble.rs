use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::facelet::{CubeState, Face};
use crate::moves::{Direction, Move};
use crate::transform;

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Independent probability that any generated move is a double turn,
/// overriding the sampled direction.
pub const DEFAULT_DOUBLE_CHANCE: f64 = 0.1;

const SCRAMBLE_FACES: [Face; 6] = [Face::U, Face::D, Face::L, Face::R, Face::F, Face::B];

/// Deterministic scramble generator.
///
/// Draws moves uniformly over the 6 faces and 2 directions. There is no
/// anti-repeat rule; consecutive same-face moves may cancel, which is a
/// tunable policy choice rather than a defect.
#[derive(Debug)]
pub struct Scrambler {
    rng: ChaCha20Rng,
    double_chance: f64,
}

impl Scrambler {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            double_chance: DEFAULT_DOUBLE_CHANCE,
        }
    }

    pub fn with_double_chance(mut self, chance: f64) -> Self {
        self.double_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Generate `length` random moves without applying them.
    pub fn generate(&mut self, length: usize) -> Vec<Move> {
        (0..length)
            .map(|_| {
                let face = SCRAMBLE_FACES[self.rng.random_range(0..SCRAMBLE_FACES.len())];
                let direction = if self.rng.random_bool(0.5) {
                    Direction::Clockwise
                } else {
                    Direction::Counterclockwise
                };
                let double = self.rng.random_bool(self.double_chance);
                Move {
                    face,
                    direction,
                    double,
                }
            })
            .collect()
    }

    /// Generate `length` moves, apply them to `cube` in order, and return
    /// the applied sequence. Length 0 leaves the cube untouched.
    pub fn scramble(&mut self, cube: &mut CubeState, length: usize) -> Vec<Move> {
        let moves = self.generate(length);
        transform::apply_all(cube, &moves);
        moves
    }
}
