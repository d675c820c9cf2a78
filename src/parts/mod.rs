//! Part shapes, their orientations and the standard part catalog
//!
//! A part is a rigid rectilinear shape identified by a prime id. It owns
//! the distinct images of its shape under axis-aligned rotation; each
//! image is a normalized offset point set.

/// Standard part packs per size
pub mod catalog;
/// Canonical offset point sets under rotation
pub mod orientation;
/// Prime-identified parts owning their orientations
pub mod part;

pub use orientation::PartOrientation;
pub use part::Part;
