//! Tests for placement rasterization and PNG export

use blockpack::io::image::{export_placements_as_png, palette_color, placement_raster};
use blockpack::pipeline::encoder::PlacedPart;
use blockpack::parts::orientation::PartOrientation;
use blockpack::spatial::point::Point;
use std::collections::HashSet;

fn domino_at(part_id: u64, x: i32, y: i32) -> PlacedPart {
    PlacedPart {
        part_id,
        orientation: PartOrientation::new(vec![Point::flat(0, 0), Point::flat(1, 0)]),
        anchor: Point::flat(x, y),
    }
}

#[test]
fn test_raster_numbers_cells_by_placement_order() {
    let placements = [domino_at(3, 0, 0), domino_at(3, 0, 1)];

    let raster = placement_raster(&placements).expect("placements cover points");

    assert_eq!(raster.dim(), (2, 2));
    assert_eq!(raster.get((0, 0)), Some(&1));
    assert_eq!(raster.get((0, 1)), Some(&1));
    assert_eq!(raster.get((1, 0)), Some(&2));
    assert_eq!(raster.get((1, 1)), Some(&2));
}

#[test]
fn test_raster_crops_to_the_covered_bounding_box() {
    let placements = [domino_at(3, 5, 7)];

    let raster = placement_raster(&placements).expect("placements cover points");

    assert_eq!(raster.dim(), (1, 2), "output is cropped, not anchored at zero");
}

#[test]
fn test_raster_of_no_placements_is_none() {
    assert!(placement_raster(&[]).is_none());
}

#[test]
fn test_palette_colors_are_distinct_and_opaque() {
    let mut seen = HashSet::new();
    for index in 0..8 {
        let color = palette_color(index);
        assert_eq!(color.0[3], 255, "palette colors are opaque");
        assert!(seen.insert(color.0), "palette color {index} repeats");
    }
}

#[test]
fn test_export_writes_a_png_with_transparent_gaps() {
    // Two dominoes leaving the top-right and bottom-left corners empty.
    let placements = [domino_at(3, 0, 0), domino_at(3, 1, 1)];
    let path = std::env::temp_dir().join(format!(
        "blockpack_image_{}_export.png",
        std::process::id()
    ));

    export_placements_as_png(&placements, path.to_str().expect("temp path is unicode"))
        .expect("export succeeds");

    let img = image::open(&path).expect("exported file reloads").to_rgba8();
    std::fs::remove_file(&path).ok();

    assert_eq!((img.width(), img.height()), (3, 2));
    assert_eq!(img.get_pixel(0, 0).0[3], 255, "covered cell is opaque");
    assert_eq!(img.get_pixel(2, 0).0[3], 0, "uncovered cell is transparent");
}

#[test]
fn test_export_of_no_placements_fails() {
    let path = std::env::temp_dir().join("blockpack_image_never_written.png");
    assert!(export_placements_as_png(&[], path.to_str().expect("temp path is unicode")).is_err());
}
