//! End-to-end workflows across subcommands.
//!
//! These tests chain commands the way a user would: scramble a cube, carry
//! the printed state into apply, and verify with check.

fn run_ok(args: Vec<&str>) -> String {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = cubik_cli::run(args.clone(), &mut out, &mut err);
    assert_eq!(
        code,
        0,
        "command {:?} failed: {}",
        args,
        String::from_utf8_lossy(&err)
    );
    String::from_utf8(out).unwrap()
}

fn line_value<'a>(output: &'a str, prefix: &str) -> &'a str {
    output
        .lines()
        .find(|l| l.starts_with(prefix))
        .map(|l| l[prefix.len()..].trim())
        .unwrap_or_else(|| panic!("missing `{}` line in output:\n{}", prefix, output))
}

#[test]
fn test_scramble_then_undo_restores_solved() {
    let scramble = run_ok(vec![
        "cubik",
        "scramble",
        "--length",
        "12",
        "--seed",
        "99",
        "--double-chance",
        "0.0",
    ]);
    let sequence = line_value(&scramble, "Scramble:");
    let state = line_value(&scramble, "State:");

    // Invert the printed sequence by hand: reverse order, flip primes
    let inverse: Vec<String> = sequence
        .split_whitespace()
        .rev()
        .map(|token| match token.strip_suffix('\'') {
            Some(base) => base.to_string(),
            None => format!("{}'", token),
        })
        .collect();
    let inverse = inverse.join(" ");

    let undone = run_ok(vec![
        "cubik", "apply", "--moves", &inverse, "--state", state,
    ]);
    assert!(undone.contains("Solved: yes"), "undo must restore solved");
}

#[test]
fn test_scramble_state_matches_applying_the_sequence() {
    let scramble = run_ok(vec![
        "cubik", "scramble", "--length", "8", "--seed", "1234",
    ]);
    let sequence = line_value(&scramble, "Scramble:");
    let state = line_value(&scramble, "State:");

    let applied = run_ok(vec!["cubik", "apply", "--moves", sequence]);
    assert_eq!(
        line_value(&applied, "State:"),
        state,
        "replaying the scramble from solved must land on the printed state"
    );
}

#[test]
fn test_check_agrees_with_apply_solved_flag() {
    let applied = run_ok(vec!["cubik", "apply", "--moves", "R2 R2"]);
    assert!(applied.contains("Solved: yes"));

    let state = line_value(&applied, "State:");
    let checked = run_ok(vec!["cubik", "check", "--state", state]);
    assert!(checked.contains("Solved: yes"));
}

#[cfg(unix)]
#[test]
fn test_solve_workflow_with_stub_solver() {
    use std::os::unix::fs::PermissionsExt;

    // Stub solver answering a fixed two-move solution
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("solver.sh");
    std::fs::write(&script, "#!/bin/sh\necho \"U' R'\"\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    let solver = script.display().to_string();

    let applied = run_ok(vec!["cubik", "apply", "--moves", "R U"]);
    let state = line_value(&applied, "State:");

    let solved = run_ok(vec![
        "cubik", "solve", "--state", state, "--solver", &solver,
    ]);
    assert!(solved.contains("Solution: U' R'"));
    assert!(solved.contains("Moves: 2"));
}

#[cfg(unix)]
#[test]
fn test_solve_surfaces_solver_error_line() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("solver.sh");
    std::fs::write(&script, "#!/bin/sh\necho \"ERROR: Invalid cube state\"\n").unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
    let solver = script.display().to_string();

    let applied = run_ok(vec!["cubik", "apply", "--moves", "B'"]);
    let state = line_value(&applied, "State:");

    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = cubik_cli::run(
        vec!["cubik", "solve", "--state", state, "--solver", &solver],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    assert!(String::from_utf8_lossy(&err).contains("Invalid cube state"));
}
