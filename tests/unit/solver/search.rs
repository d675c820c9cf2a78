//! Tests for Algorithm X: full cover, partial cover and solution
//! disjointness

use blockpack::solver::search::{DlxSolver, RowKey, Solution};
use std::collections::BTreeSet;

fn key(values: &[usize]) -> RowKey {
    values.iter().copied().collect()
}

fn as_row_sets(solution: &Solution) -> BTreeSet<RowKey> {
    solution.iter().cloned().collect()
}

#[test]
fn test_trivial_cover_has_exactly_one_solution() {
    let mut solver = DlxSolver::full_cover(3);
    solver.add_row(&[0, 1]);
    solver.add_row(&[1, 2]);
    solver.add_row(&[0, 2]);
    solver.add_row(&[0, 1, 2]);

    let solutions = solver.solve();

    assert_eq!(solutions.len(), 1, "only the full row covers all columns");
    assert_eq!(as_row_sets(&solutions[0]), [key(&[0, 1, 2])].into());
}

#[test]
fn test_overlapping_rows_yield_two_solutions() {
    let mut solver = DlxSolver::full_cover(4);
    solver.add_row(&[0, 1]);
    solver.add_row(&[2, 3]);
    solver.add_row(&[0, 2]);
    solver.add_row(&[1, 3]);

    let solutions = solver.solve();

    let found: BTreeSet<BTreeSet<RowKey>> = solutions.iter().map(as_row_sets).collect();
    let expected: BTreeSet<BTreeSet<RowKey>> = [
        [key(&[0, 1]), key(&[2, 3])].into(),
        [key(&[0, 2]), key(&[1, 3])].into(),
    ]
    .into();

    assert_eq!(solutions.len(), 2);
    assert_eq!(found, expected);
}

#[test]
fn test_partial_cover_ignores_optional_columns() {
    // Columns 0 and 1 are optional, 2 and 3 mandatory.
    let mut solver = DlxSolver::new(2, 2);
    solver.add_row(&[0, 2]);
    solver.add_row(&[1, 3]);
    solver.add_row(&[2, 3]);

    let solutions = solver.solve();

    let found: BTreeSet<BTreeSet<RowKey>> = solutions.iter().map(as_row_sets).collect();
    let expected: BTreeSet<BTreeSet<RowKey>> = [
        [key(&[2, 3])].into(),
        [key(&[0, 2]), key(&[1, 3])].into(),
    ]
    .into();

    assert_eq!(found, expected);
}

#[test]
fn test_partial_cover_still_excludes_conflicts_on_optional_columns() {
    // Both rows touch optional column 0; they cannot appear together.
    let mut solver = DlxSolver::new(1, 2);
    solver.add_row(&[0, 1]);
    solver.add_row(&[0, 2]);
    solver.add_row(&[2]);

    let solutions = solver.solve();

    let found: BTreeSet<BTreeSet<RowKey>> = solutions.iter().map(as_row_sets).collect();
    let expected: BTreeSet<BTreeSet<RowKey>> =
        [[key(&[0, 1]), key(&[2])].into()].into();

    assert_eq!(found, expected);
}

#[test]
fn test_unsatisfiable_mandatory_column_yields_no_solutions() {
    let mut solver = DlxSolver::full_cover(2);
    solver.add_row(&[0]);

    assert!(solver.solve().is_empty(), "column 1 can never be covered");
}

#[test]
fn test_solutions_are_disjoint_and_cover_all_mandatory_columns() {
    let mut solver = DlxSolver::new(1, 3);
    solver.add_row(&[0, 1]);
    solver.add_row(&[2, 3]);
    solver.add_row(&[1, 2]);
    solver.add_row(&[3]);
    solver.add_row(&[0, 3]);

    let mandatory: BTreeSet<usize> = (1..4).collect();

    for solution in solver.solve() {
        let mut covered_mandatory = BTreeSet::new();
        for row in &solution {
            for &col in row.iter().filter(|&&col| col >= 1) {
                assert!(
                    covered_mandatory.insert(col),
                    "mandatory column {col} covered twice in {solution:?}"
                );
            }
        }
        assert_eq!(
            covered_mandatory, mandatory,
            "every mandatory column must be covered exactly once"
        );
    }
}

#[test]
fn test_solve_restores_matrix_and_can_run_again() {
    let mut solver = DlxSolver::full_cover(3);
    solver.add_row(&[0, 1]);
    solver.add_row(&[2]);
    solver.add_row(&[0, 1, 2]);

    let digest = solver.matrix().link_digest();
    let first = solver.solve();
    assert_eq!(solver.matrix().link_digest(), digest);

    let second = solver.solve();
    assert_eq!(first, second, "solve must be repeatable");
    assert_eq!(first.len(), 2);
}
