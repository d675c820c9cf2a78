//! Worlds: finite lattice point sets with point/index bijection
//!
//! A world is the universe to be covered (decomposition) or inhabited
//! (packing). Points are kept in insertion order and mapped to dense
//! indices in `[0, N)`; the mapping is bijective and immutable once the
//! world is constructed.

use crate::spatial::point::Point;
use std::collections::HashMap;

/// An immutable set of lattice points with a dense index mapping
#[derive(Debug, Clone)]
pub struct World {
    points: Vec<Point>,
    index: HashMap<Point, usize>,
    width: i32,
    height: i32,
    depth: i32,
}

impl World {
    /// Create a world from an ordered point list and its coordinate bounds
    ///
    /// Duplicate points keep their first index; the point list retains
    /// insertion order so indices are stable across clones.
    pub fn new(points: Vec<Point>, width: i32, height: i32, depth: i32) -> Self {
        let mut index = HashMap::with_capacity(points.len());
        for (i, point) in points.iter().enumerate() {
            index.entry(*point).or_insert(i);
        }

        Self {
            points,
            index,
            width,
            height,
            depth,
        }
    }

    /// Number of points in the world
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the world has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check whether a point belongs to the world
    pub fn contains(&self, point: Point) -> bool {
        self.index.contains_key(&point)
    }

    /// Dense index of a point, if it belongs to the world
    pub fn index_of(&self, point: Point) -> Option<usize> {
        self.index.get(&point).copied()
    }

    /// Point at a dense index, if the index is in range
    pub fn point_at(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// All points in index order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Horizontal bound of the coordinate range
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Vertical bound of the coordinate range
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Depth bound of the coordinate range (1 for 2D worlds)
    pub const fn depth(&self) -> i32 {
        self.depth
    }

    /// Invoke a visitor for every point of the world, in index order
    ///
    /// The closure receives the world itself alongside each point so
    /// visitors can test membership of neighboring points.
    pub fn for_each_point<F>(&self, mut visitor: F)
    where
        F: FnMut(&Self, Point),
    {
        for &point in &self.points {
            visitor(self, point);
        }
    }
}
