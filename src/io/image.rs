//! PNG rendering of placement lists with automatic cropping
//!
//! Each placement is drawn in a color derived from its position in the
//! placement list, over a transparent background, cropped to the tight
//! bounding box of the covered points.

use crate::io::configuration::{PALETTE_HUE_STEP_DEGREES, PALETTE_SATURATION, PALETTE_VALUE};
use crate::io::error::{PipelineError, Result};
use crate::pipeline::encoder::PlacedPart;
use image::{ImageBuffer, Rgba};
use ndarray::Array2;

/// Rasterize placements into a grid of placement numbers
///
/// Cell values are 0 for empty cells and `i + 1` for cells covered by
/// the `i`-th placement. 3D placements are projected onto the xy plane;
/// the topmost placement in the list wins overlapping cells. Returns
/// None when the placement list covers no points.
pub fn placement_raster(placements: &[PlacedPart]) -> Option<Array2<usize>> {
    let mut min_x = i32::MAX;
    let mut max_x = i32::MIN;
    let mut min_y = i32::MAX;
    let mut max_y = i32::MIN;
    let mut found = false;

    for placed in placements {
        for point in placed.covered_points() {
            found = true;
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }
    }

    if !found {
        return None;
    }

    let rows = (max_y - min_y + 1) as usize;
    let cols = (max_x - min_x + 1) as usize;
    let mut raster = Array2::zeros((rows, cols));

    for (number, placed) in placements.iter().enumerate() {
        for point in placed.covered_points() {
            let row = (point.y - min_y) as usize;
            let col = (point.x - min_x) as usize;
            if let Some(cell) = raster.get_mut((row, col)) {
                *cell = number + 1;
            }
        }
    }

    Some(raster)
}

/// Export a placement list as a PNG image with transparent background
///
/// # Errors
///
/// Returns an error if:
/// - The placement list covers no points
/// - The parent directory cannot be created
/// - The image cannot be saved to the given path
pub fn export_placements_as_png(placements: &[PlacedPart], output_path: &str) -> Result<()> {
    let raster = placement_raster(placements).ok_or(PipelineError::InvalidParameter {
        parameter: "placements",
        value: String::new(),
        reason: "placement list covers no points".to_string(),
    })?;

    let (rows, cols) = raster.dim();
    let mut img = ImageBuffer::new(cols as u32, rows as u32);

    for ((row, col), &value) in raster.indexed_iter() {
        let color = if value > 0 {
            palette_color(value - 1)
        } else {
            Rgba([0, 0, 0, 0])
        };
        img.put_pixel(col as u32, row as u32, color);
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| PipelineError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| PipelineError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}

/// Opaque color for a palette index, hues stepped by the golden angle
pub fn palette_color(index: usize) -> Rgba<u8> {
    let hue = (index as f64 * PALETTE_HUE_STEP_DEGREES) % 360.0;
    let [r, g, b] = hsv_to_rgb(hue, PALETTE_SATURATION, PALETTE_VALUE);
    Rgba([r, g, b, u8::MAX])
}

fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> [u8; 3] {
    let chroma = value * saturation;
    let side = (hue / 60.0) % 2.0 - 1.0;
    let secondary = chroma * (1.0 - side.abs());
    let offset = value - chroma;

    let (r, g, b) = match (hue / 60.0) as u32 {
        0 => (chroma, secondary, 0.0),
        1 => (secondary, chroma, 0.0),
        2 => (0.0, chroma, secondary),
        3 => (0.0, secondary, chroma),
        4 => (secondary, 0.0, chroma),
        _ => (chroma, 0.0, secondary),
    };

    [
        ((r + offset) * 255.0).round() as u8,
        ((g + offset) * 255.0).round() as u8,
        ((b + offset) * 255.0).round() as u8,
    ]
}
