use cubik_engine::facelet::CubeState;
use cubik_engine::moves::Move;
use cubik_engine::scramble::{Scrambler, DEFAULT_SCRAMBLE_LENGTH};
use cubik_engine::transform;

#[test]
fn same_seed_yields_identical_scramble() {
    let a = Scrambler::new_with_seed(12345).generate(DEFAULT_SCRAMBLE_LENGTH);
    let b = Scrambler::new_with_seed(12345).generate(DEFAULT_SCRAMBLE_LENGTH);
    assert_eq!(a, b, "same seed must yield identical move sequence");
}

#[test]
fn different_seeds_yield_different_scrambles() {
    let a = Scrambler::new_with_seed(1).generate(DEFAULT_SCRAMBLE_LENGTH);
    let b = Scrambler::new_with_seed(2).generate(DEFAULT_SCRAMBLE_LENGTH);
    assert_ne!(
        a, b,
        "different seeds should produce different sequences (high probability)"
    );
}

#[test]
fn zero_length_scramble_leaves_cube_solved() {
    let mut cube = CubeState::solved();
    let moves = Scrambler::new_with_seed(9).scramble(&mut cube, 0);
    assert!(moves.is_empty());
    assert!(cube.is_solved());
    assert_eq!(cube, CubeState::solved());
}

#[test]
fn inverse_replay_in_reverse_order_returns_to_solved() {
    let mut cube = CubeState::solved();
    let moves = Scrambler::new_with_seed(2024).scramble(&mut cube, 20);
    assert!(!cube.is_solved(), "a 20-move scramble should not stay solved");

    let undo: Vec<Move> = moves.iter().rev().map(Move::inverse).collect();
    transform::apply_all(&mut cube, &undo);
    assert!(cube.is_solved(), "inverse replay must restore the solved state");
}

#[test]
fn double_chance_bounds_are_respected() {
    let none = Scrambler::new_with_seed(7)
        .with_double_chance(0.0)
        .generate(100);
    assert!(none.iter().all(|mv| !mv.double));

    let all = Scrambler::new_with_seed(7)
        .with_double_chance(1.0)
        .generate(100);
    assert!(all.iter().all(|mv| mv.double));
}

#[test]
fn generated_moves_cover_all_faces_over_time() {
    let moves = Scrambler::new_with_seed(55).generate(200);
    let faces: std::collections::HashSet<_> = moves.iter().map(|mv| mv.face).collect();
    assert_eq!(faces.len(), 6, "200 draws should hit every face");
}
