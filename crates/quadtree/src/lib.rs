//! Region quadtree for overlap queries over axis-aligned bounding boxes.
//!
//! The tree is entered through a root [`QuadTreeNode`] created with the
//! world region. Items implement [`BoxIntersectable`] and are stored in every
//! leaf their box touches.

mod config;
mod item;
mod node;

pub use config::{ConfigError, TreeConfig, DEPTH_LIMIT, MAX_DEPTH, MAX_ITEMS};
pub use item::BoxIntersectable;
pub use node::{QuadTreeNode, TreeStats};

// Re-export the geometry the public API is expressed in.
pub use geometry::{Quadrant, Region};
