//! World construction from raster images and rectangular boxes
//!
//! An image pixel becomes a world point iff it is neither white nor fully
//! transparent. The resulting world is cropped to the tight bounding box
//! of those pixels and translated so its lower-left corner is the origin.

use crate::io::error::{PipelineError, Result};
use crate::spatial::point::Point;
use crate::spatial::world::World;
use image::Rgba;
use std::path::Path;

/// Load a world from an image file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded as an image
/// - The image contains no object pixels (all white or transparent)
pub fn from_image<P: AsRef<Path>>(path: P) -> Result<World> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| PipelineError::ImageLoad {
        path: path_buf.clone(),
        source: e,
    })?;
    let rgba = img.to_rgba8();

    let mut min_x = i32::MAX;
    let mut max_x = i32::MIN;
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;
    let mut found = false;

    for (x, y, pixel) in rgba.enumerate_pixels() {
        if is_object_pixel(pixel) {
            found = true;
            min_x = min_x.min(x as i32);
            max_x = max_x.max(x as i32);
            min_y = min_y.min(y as i32);
            max_y = max_y.max(y as i32);
        }
    }

    if !found {
        return Err(PipelineError::EmptyWorld { path: path_buf });
    }

    // Column-major scan keeps point indices in the same order the box
    // builder produces, x outermost.
    let mut points = Vec::new();
    for x in min_x..=max_x {
        for y in min_y..=max_y {
            let pixel = rgba.get_pixel(x as u32, y as u32);
            if is_object_pixel(pixel) {
                points.push(Point::flat(x - min_x, y - min_y));
            }
        }
    }

    Ok(World::new(
        points,
        max_x - min_x + 1,
        max_y - min_y + 1,
        1,
    ))
}

/// Build a fully occupied box world with the given dimensions
///
/// Every lattice point in `[0, width) × [0, height) × [0, depth)` is a
/// world point. Used by the packer as the candidate container.
pub fn build_box(width: i32, height: i32, depth: i32) -> World {
    let capacity = (width * height * depth).max(0) as usize;
    let mut points = Vec::with_capacity(capacity);

    for x in 0..width {
        for y in 0..height {
            for z in 0..depth {
                points.push(Point::new(x, y, z));
            }
        }
    }

    World::new(points, width, height, depth)
}

// White and fully transparent pixels are background.
fn is_object_pixel(pixel: &Rgba<u8>) -> bool {
    let [r, g, b, a] = pixel.0;
    a > 0 && !(r == u8::MAX && g == u8::MAX && b == u8::MAX)
}
