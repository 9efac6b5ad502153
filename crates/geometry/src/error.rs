//! Geometry error types.

use std::fmt;

use thiserror::Error;

/// One of the two coordinate axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// Errors that can occur when building a region.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    #[error("Inverted bounds on {axis} axis: min {min} > max {max}")]
    Inverted { axis: Axis, min: f32, max: f32 },

    #[error("Non-finite bound on {axis} axis")]
    NotFinite { axis: Axis },
}
