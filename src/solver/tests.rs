use crate::solver::GameSolver;
use crate::solver::constants::SKIP_MARKER;

#[test]
fn test_solver_finds_solutions() {
    let mut solver = GameSolver::new();
    let solutions = solver.solve([2.0, 3.0, 4.0, 8.0]);
    assert!(!solutions.is_empty());
}

#[test]
fn test_all_ones_has_no_solution() {
    let mut solver = GameSolver::new();
    assert!(solver.solve([1.0, 1.0, 1.0, 1.0]).is_empty());
}

#[test]
fn test_3388_division_family_is_surfaced() {
    let mut solver = GameSolver::new();
    let solutions = solver.solve([3.0, 3.0, 8.0, 8.0]);
    assert!(!solutions.is_empty());
    assert!(solutions.iter().any(|s| s.contains('/')));
}

#[test]
fn test_solutions_are_distinct() {
    let mut solver = GameSolver::new();
    for input in [[2.0, 3.0, 4.0, 8.0], [3.0, 3.0, 8.0, 8.0]] {
        let solutions = solver.solve(input);
        for (i, a) in solutions.iter().enumerate() {
            for b in solutions.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}

#[test]
fn test_sequential_results_come_before_grouped() {
    let mut solver = GameSolver::new();
    let solutions = solver.solve([2.0, 3.0, 4.0, 8.0]);

    if let Some(first_grouped) = solutions.iter().position(|s| s.starts_with(SKIP_MARKER)) {
        assert!(
            solutions[first_grouped..]
                .iter()
                .all(|s| s.starts_with(SKIP_MARKER))
        );
    }
}

#[test]
fn test_solve_is_idempotent() {
    let mut solver = GameSolver::new();
    let first = solver.solve([2.0, 3.0, 4.0, 8.0]);
    let second = solver.solve([2.0, 3.0, 4.0, 8.0]);
    assert_eq!(first, second);

    // a fresh solver with a cold cache agrees as well
    let mut fresh = GameSolver::new();
    assert_eq!(fresh.solve([2.0, 3.0, 4.0, 8.0]), first);
}
