//! Placement enumeration into DLX rows, and decoding back
//!
//! For every (part, orientation, anchor) triple that fits entirely
//! inside the world, the encoder emits one DLX row covering the world
//! indices of the occupied points, optionally extended by a mandatory
//! part-identity column. The fingerprint of each emitted row is mapped
//! back to its placement so solver output can be decoded.

use crate::parts::orientation::PartOrientation;
use crate::parts::part::Part;
use crate::solver::search::{DlxSolver, RowKey, Solution};
use crate::spatial::point::Point;
use crate::spatial::world::World;
use std::collections::HashMap;

/// A decoded placement: a part orientation anchored in a world
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedPart {
    /// Id of the placed part
    pub part_id: u64,
    /// The orientation the part was placed in
    pub orientation: PartOrientation,
    /// World point the orientation's origin is anchored at
    pub anchor: Point,
}

impl PlacedPart {
    /// The world points this placement occupies
    pub fn covered_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.orientation.points().iter().map(|&p| self.anchor + p)
    }
}

/// Emits placement rows into a solver and decodes solutions back
#[derive(Debug, Default)]
pub struct PlacementEncoder {
    decode: HashMap<RowKey, PlacedPart>,
}

impl PlacementEncoder {
    /// Create an encoder with an empty decode map
    pub fn new() -> Self {
        Self {
            decode: HashMap::new(),
        }
    }

    /// Emit one row per fitting placement of the part, without identity
    /// columns
    ///
    /// Used by the decomposer, where a part may occur any number of
    /// times. Row values are the world indices of the covered points.
    pub fn encode_part(&mut self, world: &World, solver: &mut DlxSolver, part: &Part) {
        self.encode_rows(world, solver, part, &[]);
    }

    /// Emit rows for a part with a fixed occurrence count
    ///
    /// Each occurrence owns one mandatory identity column; every fitting
    /// placement is emitted once per occurrence so the solver enforces
    /// the exact count. `identity_cols` lists the occurrence columns.
    pub fn encode_part_occurrences(
        &mut self,
        world: &World,
        solver: &mut DlxSolver,
        part: &Part,
        identity_cols: &[usize],
    ) {
        self.encode_rows(world, solver, part, identity_cols);
    }

    /// Emit one single-point fallback row per world point
    ///
    /// Fallback rows let a partial decomposition leave points uncovered;
    /// they carry no placement and decode to nothing.
    pub fn encode_fallback_rows(&self, world: &World, solver: &mut DlxSolver) {
        for index in 0..world.len() {
            solver.add_row(&[index]);
        }
    }

    /// Decode a solver solution into its placements, selection order
    /// preserved
    ///
    /// Rows without a mapped placement (fallback rows) are skipped.
    pub fn placements_for(&self, solution: &Solution) -> Vec<PlacedPart> {
        solution
            .iter()
            .filter_map(|key| self.decode.get(key))
            .cloned()
            .collect()
    }

    /// Look up the placement a single row fingerprint decodes to
    pub fn placement_of(&self, key: &RowKey) -> Option<&PlacedPart> {
        self.decode.get(key)
    }

    fn encode_rows(
        &mut self,
        world: &World,
        solver: &mut DlxSolver,
        part: &Part,
        identity_cols: &[usize],
    ) {
        for orientation in part.orientations() {
            world.for_each_point(|world, anchor| {
                let Some(mut values) = fitted_indices(world, orientation, anchor) else {
                    return;
                };

                if identity_cols.is_empty() {
                    self.remember(&values, part.id(), orientation, anchor);
                    solver.add_row(&values);
                } else {
                    for &identity in identity_cols {
                        values.push(identity);
                        self.remember(&values, part.id(), orientation, anchor);
                        solver.add_row(&values);
                        values.pop();
                    }
                }
            });
        }
    }

    fn remember(&mut self, values: &[usize], part_id: u64, orientation: &PartOrientation, anchor: Point) {
        self.decode.insert(
            values.iter().copied().collect(),
            PlacedPart {
                part_id,
                orientation: orientation.clone(),
                anchor,
            },
        );
    }
}

// World indices covered by anchoring the orientation at the point, or
// None if any covered point leaves the world.
fn fitted_indices(world: &World, orientation: &PartOrientation, anchor: Point) -> Option<Vec<usize>> {
    let mut values = Vec::with_capacity(orientation.len());
    for &offset in orientation.points() {
        values.push(world.index_of(anchor + offset)?);
    }
    Some(values)
}
