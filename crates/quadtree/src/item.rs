//! Capability required of items stored in the tree.

use std::hash::Hash;
use std::rc::Rc;
use std::sync::Arc;

use geometry::Region;

/// An item that can be stored in a [`QuadTreeNode`](crate::QuadTreeNode).
///
/// Equality (and the matching `Hash`) decides what "the same item" means
/// for insertion, removal and containment. It may be identity (an id field)
/// or full value equality; the tree does not care which.
///
/// The bounding box must not change while the item is stored. Moving an
/// item means removing it with its old box and inserting it again.
pub trait BoxIntersectable: Eq + Hash {
    /// The region this item occupies.
    fn bounding_box(&self) -> Region;
}

impl<T: BoxIntersectable + ?Sized> BoxIntersectable for &T {
    #[inline]
    fn bounding_box(&self) -> Region {
        (**self).bounding_box()
    }
}

impl<T: BoxIntersectable + ?Sized> BoxIntersectable for Rc<T> {
    #[inline]
    fn bounding_box(&self) -> Region {
        (**self).bounding_box()
    }
}

impl<T: BoxIntersectable + ?Sized> BoxIntersectable for Arc<T> {
    #[inline]
    fn bounding_box(&self) -> Region {
        (**self).bounding_box()
    }
}
