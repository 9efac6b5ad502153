//! Axis-aligned geometry shared by the quadtree and its hosts.
//!
//! This crate contains:
//! - The [`Region`] bounding box primitive and its quadrant split
//! - Construction errors for malformed regions

mod error;
mod region;

pub use error::{Axis, GeometryError};
pub use region::{Quadrant, Region};

/// A 2D position using glam's Vec2.
pub type Position = glam::Vec2;
