//! Scramble command handler.
//!
//! Generates a random move sequence, applies it to a solved cube, and prints
//! both the sequence and the resulting state. Supports optional seeding for
//! deterministic scrambles.

use std::io::Write;

use cubik_engine::facelet::CubeState;
use cubik_engine::moves;
use cubik_engine::notation;
use cubik_engine::scramble::Scrambler;
use cubik_engine::transform;

use crate::config;
use crate::error::CliError;

/// Handle the scramble command.
///
/// CLI flags override configured values; the seed falls back to the
/// configured seed and then to a random one.
pub fn handle_scramble_command(
    length: Option<usize>,
    seed: Option<u64>,
    double_chance: Option<f64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;

    let length = length.unwrap_or(cfg.scramble_length);
    if length == 0 {
        return Err(CliError::InvalidInput("length must be >= 1".into()));
    }
    let double_chance = double_chance.unwrap_or(cfg.double_chance);
    if !(0.0..=1.0).contains(&double_chance) {
        return Err(CliError::InvalidInput(
            "double_chance must be within 0..=1".into(),
        ));
    }
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut scrambler = Scrambler::new_with_seed(seed).with_double_chance(double_chance);
    let sequence = scrambler.generate(length);

    let mut cube = CubeState::solved();
    transform::apply_all(&mut cube, &sequence);

    writeln!(out, "Seed: {}", seed)?;
    writeln!(out, "Scramble: {}", moves::format_sequence(&sequence))?;
    writeln!(out, "State: {}", notation::encode(&cube))?;
    Ok(())
}
