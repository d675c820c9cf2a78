//! Tests for batch progress bookkeeping

use blockpack::io::progress::ProgressManager;
use std::path::Path;

#[test]
fn test_tracks_started_and_completed_files() {
    let mut manager = ProgressManager::new();
    manager.initialize(3);

    manager.start_file(0, Path::new("a.png"));
    manager.start_file(1, Path::new("b.png"));
    assert_eq!(manager.started_files(), 2);
    assert_eq!(manager.completed_files(), 0);

    manager.complete_file(0);
    assert_eq!(manager.completed_files(), 1);

    manager.finish();
}

#[test]
fn test_large_batches_initialize_without_panicking() {
    let mut manager = ProgressManager::new();
    manager.initialize(100);

    for index in 0..100 {
        manager.start_file(index, Path::new("file.png"));
        manager.complete_file(index);
    }
    assert_eq!(manager.completed_files(), 100);

    manager.finish();
}

#[test]
fn test_out_of_order_completion_is_tolerated() {
    let mut manager = ProgressManager::new();
    manager.initialize(2);

    manager.start_file(1, Path::new("late.png"));
    manager.complete_file(1);
    manager.start_file(0, Path::new("early.png"));

    assert_eq!(manager.started_files(), 2);
    assert_eq!(manager.completed_files(), 1);
    manager.finish();
}
