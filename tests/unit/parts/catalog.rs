//! Tests for the standard part packs and id assignment

use blockpack::parts::catalog::{rectangle_part, standard_part_pack};
use blockpack::parts::part::Part;

#[test]
fn test_pack_of_size_one_is_the_unit_part() {
    let pack = standard_part_pack(1, false);

    assert_eq!(pack.len(), 1);
    assert!(pack[0].is_unit());
    assert_eq!(pack[0].id(), 2, "the first prime identifies the unit part");
}

#[test]
fn test_2d_pack_of_size_two_contains_all_rectangles_up_to_two() {
    let pack = standard_part_pack(2, false);

    let sizes: Vec<usize> = pack.iter().map(Part::len).collect();
    assert_eq!(sizes, vec![1, 2, 4], "unit, domino and square in size order");

    let ids: Vec<u64> = pack.iter().map(Part::id).collect();
    assert_eq!(ids, vec![2, 3, 5], "ids are consecutive primes");
}

#[test]
fn test_packs_assign_stable_ids_across_sizes() {
    let small = standard_part_pack(2, false);
    let large = standard_part_pack(3, false);

    assert!(large.len() > small.len());
    for (small_part, large_part) in small.iter().zip(&large) {
        assert_eq!(small_part.id(), large_part.id());
        assert_eq!(small_part.orientations(), large_part.orientations());
    }
}

#[test]
fn test_3d_pack_of_size_two_adds_boxes() {
    let pack = standard_part_pack(2, true);

    // (1,1,1), (2,1,1), (2,2,1), (2,2,2)
    let sizes: Vec<usize> = pack.iter().map(Part::len).collect();
    assert_eq!(sizes, vec![1, 2, 4, 8]);
}

#[test]
fn test_rectangle_part_orientations() {
    let rect = rectangle_part(7, 3, 1);
    assert_eq!(rect.id(), 7);
    assert_eq!(rect.len(), 3);
    assert_eq!(rect.orientations().len(), 2);
}
