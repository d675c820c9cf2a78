//! Tests for error construction and display formatting

use blockpack::io::error::{invalid_parameter, io_error, PipelineError};
use std::error::Error;
use std::path::PathBuf;

#[test]
fn test_empty_world_message_names_the_file() {
    let err = PipelineError::EmptyWorld {
        path: PathBuf::from("shape.png"),
    };
    assert_eq!(
        err.to_string(),
        "Image 'shape.png' contains no object pixels (all white or transparent)"
    );
    assert!(err.source().is_none());
}

#[test]
fn test_invalid_parameter_carries_value_and_reason() {
    let err = invalid_parameter("part_size_percent", &0, &"must be in [1, 100]");
    assert_eq!(
        err.to_string(),
        "Invalid parameter 'part_size_percent' = '0': must be in [1, 100]"
    );
}

#[test]
fn test_io_error_helper_mentions_the_message() {
    let err = io_error("Target file must be a PNG image");
    assert!(err.to_string().contains("Target file must be a PNG image"));
}

#[test]
fn test_file_system_errors_expose_their_source() {
    let err: PipelineError =
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert!(matches!(err, PipelineError::FileSystem { .. }));
    assert!(err.source().is_some());
}
