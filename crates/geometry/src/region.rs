//! Axis-aligned regions.
//!
//! Coordinates follow screen space: y grows downward, so "north" is the
//! half of a region with the smaller y values.

use glam::Vec2;

use crate::error::{Axis, GeometryError};

/// Labels for the four quadrants produced by splitting a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Quadrant {
    /// All quadrants, in the order used by [`Region::quadrants`].
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NorthEast,
        Quadrant::NorthWest,
        Quadrant::SouthEast,
        Quadrant::SouthWest,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Immutable axis-aligned bounding box.
///
/// Always well formed: `min <= max` on both axes and every bound finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
}

impl Region {
    /// Create a region from its bounds.
    ///
    /// # Panics
    ///
    /// Panics if the bounds are not finite or `min > max` on either axis.
    /// Use [`Region::try_new`] for untrusted input.
    #[track_caller]
    pub fn new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Self {
        match Self::try_new(min_x, max_x, min_y, max_y) {
            Ok(region) => region,
            Err(e) => panic!("malformed region: {e}"),
        }
    }

    /// Create a region, rejecting malformed bounds.
    pub fn try_new(min_x: f32, max_x: f32, min_y: f32, max_y: f32) -> Result<Self, GeometryError> {
        check_axis(Axis::X, min_x, max_x)?;
        check_axis(Axis::Y, min_y, max_y)?;
        Ok(Self { min_x, max_x, min_y, max_y })
    }

    /// Create a square region from its center and half extent.
    #[track_caller]
    pub fn from_center(center: Vec2, half_extent: f32) -> Self {
        Self::new(
            center.x - half_extent,
            center.x + half_extent,
            center.y - half_extent,
            center.y + half_extent,
        )
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.min_x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.max_x
    }

    #[inline]
    pub fn min_y(&self) -> f32 {
        self.min_y
    }

    #[inline]
    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    /// Get the width of the region.
    #[inline]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Get the height of the region.
    #[inline]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Midpoint of both axes.
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            midpoint(self.min_x, self.max_x),
            midpoint(self.min_y, self.max_y),
        )
    }

    /// Check if two regions overlap. Touching edges count as overlapping.
    #[inline]
    pub fn intersects(&self, other: &Region) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// Split at the axis midpoints into four quadrants, indexed by
    /// [`Quadrant::index`]. Neighbouring quadrants share their edges.
    pub fn quadrants(&self) -> [Region; 4] {
        let mid = self.center();
        let quadrant = |min_x, max_x, min_y, max_y| Region { min_x, max_x, min_y, max_y };

        [
            quadrant(mid.x, self.max_x, self.min_y, mid.y),
            quadrant(self.min_x, mid.x, self.min_y, mid.y),
            quadrant(mid.x, self.max_x, mid.y, self.max_y),
            quadrant(self.min_x, mid.x, mid.y, self.max_y),
        ]
    }

    /// A single quadrant of this region.
    #[inline]
    pub fn quadrant(&self, which: Quadrant) -> Region {
        self.quadrants()[which.index()]
    }
}

// Halving each bound first keeps huge finite bounds from overflowing.
#[inline]
fn midpoint(min: f32, max: f32) -> f32 {
    min * 0.5 + max * 0.5
}

fn check_axis(axis: Axis, min: f32, max: f32) -> Result<(), GeometryError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(GeometryError::NotFinite { axis });
    }
    if min > max {
        return Err(GeometryError::Inverted { axis, min, max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_intersects() {
        let a = Region::new(0.0, 10.0, 0.0, 10.0);
        let b = Region::new(5.0, 15.0, 5.0, 15.0);
        let c = Region::new(20.0, 30.0, 20.0, 30.0);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        assert!(!c.intersects(&a));
    }

    #[test]
    fn test_touching_edges_intersect() {
        let a = Region::new(0.0, 10.0, 0.0, 10.0);
        let right = Region::new(10.0, 20.0, 0.0, 10.0);
        let corner = Region::new(10.0, 20.0, 10.0, 20.0);

        assert!(a.intersects(&right));
        assert!(right.intersects(&a));
        assert!(a.intersects(&corner));
    }

    #[test]
    fn test_degenerate_point_region() {
        let point = Region::new(5.0, 5.0, 5.0, 5.0);
        let a = Region::new(0.0, 10.0, 0.0, 10.0);

        assert!(point.intersects(&a));
        assert!(point.intersects(&point));
        assert_eq!(point.width(), 0.0);
    }

    #[test]
    fn test_try_new_rejects_inverted() {
        let err = Region::try_new(10.0, 0.0, 0.0, 5.0).unwrap_err();
        assert_eq!(err, GeometryError::Inverted { axis: Axis::X, min: 10.0, max: 0.0 });

        let err = Region::try_new(0.0, 10.0, 7.0, 5.0).unwrap_err();
        assert!(matches!(err, GeometryError::Inverted { axis: Axis::Y, .. }));
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        let err = Region::try_new(f32::NAN, 10.0, 0.0, 5.0).unwrap_err();
        assert_eq!(err, GeometryError::NotFinite { axis: Axis::X });

        let err = Region::try_new(0.0, 10.0, 0.0, f32::INFINITY).unwrap_err();
        assert_eq!(err, GeometryError::NotFinite { axis: Axis::Y });
    }

    #[test]
    #[should_panic(expected = "malformed region")]
    fn test_new_panics_on_inverted() {
        let _ = Region::new(0.0, 10.0, 20.0, 10.0);
    }

    #[test]
    fn test_quadrants_use_true_midpoint() {
        let region = Region::new(100.0, 200.0, 50.0, 150.0);
        let [ne, nw, se, sw] = region.quadrants();

        assert_eq!(ne, Region::new(150.0, 200.0, 50.0, 100.0));
        assert_eq!(nw, Region::new(100.0, 150.0, 50.0, 100.0));
        assert_eq!(se, Region::new(150.0, 200.0, 100.0, 150.0));
        assert_eq!(sw, Region::new(100.0, 150.0, 100.0, 150.0));
        assert_eq!(region.quadrant(Quadrant::SouthWest), sw);
    }

    #[test]
    fn test_quadrants_tile_parent() {
        let region = Region::new(-30.0, 10.0, -8.0, 24.0);
        let quads = region.quadrants();

        let area: f32 = quads.iter().map(|q| q.width() * q.height()).sum();
        assert_eq!(area, region.width() * region.height());
        for q in &quads {
            assert!(q.min_x() >= region.min_x() && q.max_x() <= region.max_x());
            assert!(q.min_y() >= region.min_y() && q.max_y() <= region.max_y());
        }
    }

    #[test]
    fn test_from_center() {
        let region = Region::from_center(Vec2::new(10.0, -4.0), 2.0);
        assert_eq!(region, Region::new(8.0, 12.0, -6.0, -2.0));
        assert_eq!(region.center(), Vec2::new(10.0, -4.0));
    }

    #[test]
    fn test_quadrant_labels_match_order() {
        let region = Region::new(0.0, 8.0, 0.0, 8.0);
        let quads = region.quadrants();
        for (i, quadrant) in Quadrant::ALL.into_iter().enumerate() {
            assert_eq!(quadrant.index(), i);
            assert_eq!(region.quadrant(quadrant), quads[i]);
        }
    }
}
