//! Standard part packs
//!
//! The pack for a given size contains every rectangle (2D) or box (3D)
//! whose edges all lie in `[1, size]`. Shapes equal up to rotation are
//! one part with multiple orientations, so only canonical dimension
//! tuples are enumerated.

use crate::math::primes::PrimeSequence;
use crate::parts::orientation::PartOrientation;
use crate::parts::part::Part;
use crate::spatial::point::Point;

/// Build the standard pack of parts for a part size
///
/// Shapes are enumerated by ascending largest edge, so a pack for size
/// `s` is a prefix of the pack for any larger size and every shape
/// receives the same prime id in all packs that contain it.
pub fn standard_part_pack(size: i32, three_d: bool) -> Vec<Part> {
    let mut ids = PrimeSequence::new();
    let mut parts = Vec::new();

    for largest in 1..=size.max(1) {
        for dims in canonical_dims(largest, three_d) {
            let id = ids.next().unwrap_or(u64::MAX);
            parts.push(Part::new(id, box_orientation(dims), three_d));
        }
    }

    parts
}

/// Build a single rectangular part with the given id and dimensions
pub fn rectangle_part(id: u64, width: i32, height: i32) -> Part {
    Part::new(id, box_orientation((width, height, 1)), false)
}

// Dimension tuples (w, h, d) with w >= h >= d and w == largest, each
// describing one shape up to rotation.
fn canonical_dims(largest: i32, three_d: bool) -> Vec<(i32, i32, i32)> {
    let mut dims = Vec::new();
    for h in 1..=largest {
        if three_d {
            for d in 1..=h {
                dims.push((largest, h, d));
            }
        } else {
            dims.push((largest, h, 1));
        }
    }
    dims
}

fn box_orientation((w, h, d): (i32, i32, i32)) -> PartOrientation {
    let mut points = Vec::with_capacity((w * h * d).max(0) as usize);
    for x in 0..w {
        for y in 0..h {
            for z in 0..d {
                points.push(Point::new(x, y, z));
            }
        }
    }
    PartOrientation::new(points)
}
