//! # cubik-engine: Cube State & Move Engine
//!
//! A deterministic 3x3x3 twisty-puzzle engine. Provides the facelet data
//! model, the face-rotation transform that keeps all six faces consistent
//! under quarter and half turns, seeded scramble generation, the solved-state
//! predicate, and the 54-character notation codec consumed by external
//! solvers.
//!
//! ## Core Modules
//!
//! - [`facelet`] - Face, Color, and CubeState representation plus the solved
//!   constructor and solved predicate
//! - [`moves`] - Move representation and the 18-token move notation
//! - [`transform`] - Quarter/half turn application
//! - [`scramble`] - Deterministic scramble generation with ChaCha20 RNG
//! - [`notation`] - Facelet-string encoding and decoding
//! - [`errors`] - Error types for move and notation parsing
//!
//! ## Quick Start
//!
//! ```rust
//! use cubik_engine::facelet::CubeState;
//! use cubik_engine::moves::Move;
//! use cubik_engine::transform;
//!
//! let mut cube = CubeState::solved();
//! assert!(cube.is_solved());
//!
//! // Turn the right face clockwise
//! transform::apply(&mut cube, Move::parse("R").expect("valid token"));
//! assert!(!cube.is_solved());
//!
//! // Three more quarter turns bring the face back
//! for _ in 0..3 {
//!     transform::apply(&mut cube, Move::parse("R").expect("valid token"));
//! }
//! assert!(cube.is_solved());
//! ```
//!
//! ## Deterministic Scrambles
//!
//! All scrambles are reproducible using seeded RNG:
//!
//! ```rust
//! use cubik_engine::scramble::Scrambler;
//!
//! // Same seed produces the same move sequence
//! let a = Scrambler::new_with_seed(42).generate(20);
//! let b = Scrambler::new_with_seed(42).generate(20);
//! assert_eq!(a, b);
//! ```

pub mod errors;
pub mod facelet;
pub mod moves;
pub mod notation;
pub mod scramble;
pub mod transform;
