//! Tests for placement enumeration and the encode/decode round trip

use blockpack::parts::catalog::rectangle_part;
use blockpack::pipeline::encoder::PlacementEncoder;
use blockpack::solver::search::DlxSolver;
use blockpack::spatial::builder::build_box;
use blockpack::spatial::point::Point;
use std::collections::BTreeSet;

#[test]
fn test_domino_on_a_square_world_emits_four_rows() {
    let world = build_box(2, 2, 1);
    let mut solver = DlxSolver::full_cover(world.len());
    let mut encoder = PlacementEncoder::new();

    encoder.encode_part(&world, &mut solver, &rectangle_part(3, 2, 1));

    // Two horizontal and two vertical placements fit a 2x2 world.
    assert_eq!(solver.rows(), 4);
}

#[test]
fn test_placements_leaving_the_world_are_rejected() {
    let world = build_box(3, 1, 1);
    let mut solver = DlxSolver::full_cover(world.len());
    let mut encoder = PlacementEncoder::new();

    encoder.encode_part(&world, &mut solver, &rectangle_part(3, 2, 1));

    // Only the two horizontal placements fit a 3x1 strip.
    assert_eq!(solver.rows(), 2);
}

#[test]
fn test_decoded_placements_reproduce_the_encoded_ones() {
    let world = build_box(2, 2, 1);
    let mut solver = DlxSolver::full_cover(world.len());
    let mut encoder = PlacementEncoder::new();

    encoder.encode_part(&world, &mut solver, &rectangle_part(3, 2, 1));

    for solution in solver.solve() {
        let placements = encoder.placements_for(&solution);
        assert_eq!(placements.len(), solution.len(), "every row must decode");

        let mut covered = BTreeSet::new();
        for placed in &placements {
            assert_eq!(placed.part_id, 3);
            for point in placed.covered_points() {
                assert!(world.contains(point), "decoded placement leaves the world");
                assert!(covered.insert(point), "placements overlap at {point:?}");
            }
        }
        assert_eq!(covered.len(), world.len(), "solution must cover the world");
    }
}

#[test]
fn test_row_fingerprints_decode_individually() {
    let world = build_box(2, 1, 1);
    let mut solver = DlxSolver::full_cover(world.len());
    let mut encoder = PlacementEncoder::new();

    encoder.encode_part(&world, &mut solver, &rectangle_part(3, 2, 1));

    let key: BTreeSet<usize> = (0..2).collect();
    let placed = encoder
        .placement_of(&key)
        .expect("the only placement covers both indices");
    assert_eq!(placed.anchor, Point::flat(0, 0));
}

#[test]
fn test_identity_columns_force_exact_occurrence_counts() {
    let world = build_box(2, 1, 1);
    // Box cells optional, two mandatory identity columns for two units.
    let mut solver = DlxSolver::new(world.len(), 2);
    let mut encoder = PlacementEncoder::new();

    encoder.encode_part_occurrences(
        &world,
        &mut solver,
        &rectangle_part(2, 1, 1),
        &[world.len(), world.len() + 1],
    );

    let solutions = solver.solve();
    assert!(!solutions.is_empty());
    for solution in &solutions {
        assert_eq!(solution.len(), 2, "both occurrences must be placed");
        let placements = encoder.placements_for(solution);
        let anchors: BTreeSet<Point> = placements.iter().map(|p| p.anchor).collect();
        assert_eq!(anchors.len(), 2, "occurrences occupy distinct cells");
    }
}

#[test]
fn test_fallback_rows_decode_to_nothing() {
    let world = build_box(2, 1, 1);
    let mut solver = DlxSolver::full_cover(world.len());
    let encoder = PlacementEncoder::new();

    encoder.encode_fallback_rows(&world, &mut solver);

    let solutions = solver.solve();
    assert_eq!(solutions.len(), 1, "fallbacks alone cover the world one way");
    assert!(encoder.placements_for(&solutions[0]).is_empty());
}
