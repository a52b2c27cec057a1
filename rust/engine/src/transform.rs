//! Face-turn application.
//!
//! A clockwise quarter turn is the composition of two cyclic permutations on
//! disjoint sticker sets: the turned face's own 3x3 grid rotates 90 degrees,
//! and the four 3-sticker strips on the adjacent faces cycle one step. The
//! six per-face adjacency rules below are the load-bearing part of the
//! engine; the index reversals on the B-facing strips are required because
//! the back face's columns are mirrored relative to the others.

use crate::facelet::{CubeState, Face, FaceGrid};
use crate::moves::{Direction, Move};

/// Apply a single move to the cube in place.
///
/// A counterclockwise turn is three clockwise turns; a double turn is two,
/// regardless of direction. Deterministic, and a pure permutation: no sticker
/// is ever created or destroyed.
pub fn apply(cube: &mut CubeState, mv: Move) {
    let turns = if mv.double {
        2
    } else {
        match mv.direction {
            Direction::Clockwise => 1,
            Direction::Counterclockwise => 3,
        }
    };
    for _ in 0..turns {
        turn_clockwise(cube, mv.face);
    }
}

/// Apply a sequence of moves in order.
pub fn apply_all(cube: &mut CubeState, moves: &[Move]) {
    for &mv in moves {
        apply(cube, mv);
    }
}

fn turn_clockwise(cube: &mut CubeState, face: Face) {
    let rotated = rotate_grid_clockwise(cube.face(face));
    *cube.face_mut(face) = rotated;
    cycle_adjacent_strips(cube, face);
}

fn rotate_grid_clockwise(grid: &FaceGrid) -> FaceGrid {
    let mut out = *grid;
    for (r, row) in out.iter_mut().enumerate() {
        for (c, cell) in row.iter_mut().enumerate() {
            *cell = grid[2 - c][r];
        }
    }
    out
}

fn cycle_adjacent_strips(cube: &mut CubeState, face: Face) {
    match face {
        // Top rows of F -> L, R -> F, B -> R, L -> B
        Face::U => {
            let tmp = cube.front[0];
            cube.front[0] = cube.right[0];
            cube.right[0] = cube.back[0];
            cube.back[0] = cube.left[0];
            cube.left[0] = tmp;
        }
        // Bottom rows cycle the opposite way around
        Face::D => {
            let tmp = cube.front[2];
            cube.front[2] = cube.left[2];
            cube.left[2] = cube.back[2];
            cube.back[2] = cube.right[2];
            cube.right[2] = tmp;
        }
        // Left columns of U and F, right column of B (mirrored), left column of D
        Face::L => {
            let tmp = [cube.up[0][0], cube.up[1][0], cube.up[2][0]];
            for r in 0..3 {
                cube.up[r][0] = cube.back[2 - r][2];
            }
            for r in 0..3 {
                cube.back[r][2] = cube.down[2 - r][0];
            }
            for r in 0..3 {
                cube.down[r][0] = cube.front[r][0];
            }
            for r in 0..3 {
                cube.front[r][0] = tmp[r];
            }
        }
        // Right columns of U, F, D and the mirrored left column of B
        Face::R => {
            let tmp = [cube.up[0][2], cube.up[1][2], cube.up[2][2]];
            for r in 0..3 {
                cube.up[r][2] = cube.front[r][2];
            }
            for r in 0..3 {
                cube.front[r][2] = cube.down[r][2];
            }
            for r in 0..3 {
                cube.down[r][2] = cube.back[2 - r][0];
            }
            for r in 0..3 {
                cube.back[r][0] = tmp[2 - r];
            }
        }
        // U bottom row, R left column, D top row, L right column
        Face::F => {
            let tmp = cube.up[2];
            for c in 0..3 {
                cube.up[2][c] = cube.left[2 - c][2];
            }
            for r in 0..3 {
                cube.left[r][2] = cube.down[0][r];
            }
            for c in 0..3 {
                cube.down[0][c] = cube.right[2 - c][0];
            }
            for r in 0..3 {
                cube.right[r][0] = tmp[r];
            }
        }
        // U top row, L left column, D bottom row, R right column
        Face::B => {
            let tmp = cube.up[0];
            for c in 0..3 {
                cube.up[0][c] = cube.right[c][2];
            }
            for r in 0..3 {
                cube.right[r][2] = cube.down[2][2 - r];
            }
            for c in 0..3 {
                cube.down[2][c] = cube.left[c][0];
            }
            for r in 0..3 {
                cube.left[r][0] = tmp[2 - r];
            }
        }
    }
}
