//! Decomposition of a world into rectangular part placements
//!
//! The decomposer iterates over decreasing part sizes. Each iteration
//! covers the remaining world with the standard pack for that size;
//! partial iterations may leave points for smaller parts. Solutions
//! accumulate across iterations by subtracting placed points and
//! re-solving the residual, until an exact decomposition exists (unit
//! parts guarantee one at size 1).

use crate::parts::catalog::standard_part_pack;
use crate::parts::part::Part;
use crate::pipeline::encoder::{PlacedPart, PlacementEncoder};
use crate::solver::search::DlxSolver;
use crate::spatial::world::World;
use bitvec::prelude::*;
use std::collections::BTreeMap;

/// A part together with its occurrence count in a solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartCount {
    /// The part shape
    pub part: Part,
    /// Number of occurrences
    pub count: usize,
}

/// One decomposition: occurrence counts per part id plus the ordered
/// placement list
#[derive(Debug, Clone, Default)]
pub struct DecomposeSolution {
    /// Parts used, keyed by part id
    pub parts: BTreeMap<u64, PartCount>,
    /// Placements in selection order
    pub placements: Vec<PlacedPart>,
}

impl DecomposeSolution {
    /// Total number of part occurrences
    pub fn num_parts(&self) -> usize {
        self.parts.values().map(|pc| pc.count).sum()
    }

    // Parent placements come first so extension preserves the order the
    // cascade discovered them in.
    fn merged_onto(&self, parent: &Self) -> Self {
        let mut parts = parent.parts.clone();
        for (id, pc) in &self.parts {
            parts
                .entry(*id)
                .and_modify(|existing| existing.count += pc.count)
                .or_insert_with(|| pc.clone());
        }

        let mut placements = parent.placements.clone();
        placements.extend(self.placements.iter().cloned());

        Self { parts, placements }
    }
}

/// Decompose a world, iterating part sizes from the configured largest
/// edge down to 1
///
/// `part_size_percent` sets the largest edge relative to the world's
/// smaller side. Every returned solution exactly covers the world.
pub fn decompose(world: &World, part_size_percent: u32, three_d: bool) -> Vec<DecomposeSolution> {
    let smaller_side = world.width().min(world.height());
    let min_edge =
        ((f64::from(smaller_side) * f64::from(part_size_percent) / 100.0).round() as i32).max(1);

    let mut result: Option<Vec<DecomposeSolution>> = None;

    for part_size in (1..=min_edge).rev() {
        let pack = standard_part_pack(part_size, three_d);
        let partial = part_size > 1;

        match result.take() {
            None => {
                result = Some(decompose_once(world, &pack, partial));
            }
            Some(current) => {
                let mut extended = Vec::new();
                for solution in &current {
                    if extend_decompose(world, &pack, solution, &mut extended) {
                        // First exact residual wins; remaining solutions
                        // are not explored.
                        break;
                    }
                }

                result = if extended.is_empty() {
                    Some(current)
                } else {
                    Some(extended)
                };
            }
        }
    }

    result.unwrap_or_default()
}

/// Cover a world with the given parts in a single solver run
///
/// In partial mode, single-point fallback rows let the solver leave
/// points uncovered (skipped when the part list already contains a unit
/// part, which covers any point by itself). Fallback rows decode to no
/// placement, so the returned solutions may cover the world only
/// partially.
pub fn decompose_once(world: &World, parts: &[Part], partial: bool) -> Vec<DecomposeSolution> {
    let mut solver = DlxSolver::full_cover(world.len());
    let mut encoder = PlacementEncoder::new();

    for part in parts {
        encoder.encode_part(world, &mut solver, part);
    }
    if partial && !parts.iter().any(Part::is_unit) {
        encoder.encode_fallback_rows(world, &mut solver);
    }

    solver
        .solve()
        .iter()
        .map(|solution| {
            let placements = encoder.placements_for(solution);
            let mut parts_used = BTreeMap::new();
            for placed in &placements {
                if let Some(part) = parts.iter().find(|p| p.id() == placed.part_id) {
                    parts_used
                        .entry(part.id())
                        .and_modify(|pc: &mut PartCount| pc.count += 1)
                        .or_insert_with(|| PartCount {
                            part: part.clone(),
                            count: 1,
                        });
                }
            }
            DecomposeSolution {
                parts: parts_used,
                placements,
            }
        })
        .collect()
}

// Subtracts the parent solution's placed points from the world and
// decomposes the residual with the given pack, appending each extended
// solution. Returns true when the residual is empty (exact parent).
fn extend_decompose(
    world: &World,
    pack: &[Part],
    parent: &DecomposeSolution,
    out: &mut Vec<DecomposeSolution>,
) -> bool {
    let mut covered = bitvec![0; world.len()];
    for placed in &parent.placements {
        for point in placed.covered_points() {
            if let Some(index) = world.index_of(point) {
                covered.set(index, true);
            }
        }
    }

    let residual_points: Vec<_> = world
        .points()
        .iter()
        .enumerate()
        .filter(|(index, _)| !covered[*index])
        .map(|(_, &point)| point)
        .collect();

    if residual_points.is_empty() {
        return true;
    }

    let residual = World::new(residual_points, world.width(), world.height(), world.depth());

    for sub in decompose_once(&residual, pack, false) {
        out.push(sub.merged_onto(parent));
    }

    false
}
