//! Moving sprites stored in the quadtree.

use std::hash::{Hash, Hasher};

use geometry::{Position, Region};
use glam::Vec2;
use quadtree::BoxIntersectable;

/// A square sprite. Identity is the id alone, so a moved copy still
/// compares equal to the one stored in the tree.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub id: u32,
    pub position: Position,
    /// Half the side length of the sprite's box.
    pub half_size: f32,
    /// Velocity in world units per second.
    pub velocity: Vec2,
}

impl Sprite {
    pub fn new(id: u32, position: Position, half_size: f32, velocity: Vec2) -> Self {
        Self {
            id,
            position,
            half_size,
            velocity,
        }
    }

    /// Advance by `dt` seconds, bouncing off the edges of `border`.
    pub fn advance(&mut self, dt: f32, border: &Region) {
        self.position += self.velocity * dt;

        let (min_x, max_x) = (border.min_x() + self.half_size, border.max_x() - self.half_size);
        let (min_y, max_y) = (border.min_y() + self.half_size, border.max_y() - self.half_size);

        if self.position.x < min_x || self.position.x > max_x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < min_y || self.position.y > max_y {
            self.velocity.y = -self.velocity.y;
        }
        // A sprite wider than the border is centred rather than clamped.
        let center = border.center();
        self.position.x = if min_x <= max_x {
            self.position.x.clamp(min_x, max_x)
        } else {
            center.x
        };
        self.position.y = if min_y <= max_y {
            self.position.y.clamp(min_y, max_y)
        } else {
            center.y
        };
    }
}

impl PartialEq for Sprite {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Sprite {}

impl Hash for Sprite {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl BoxIntersectable for Sprite {
    #[inline]
    fn bounding_box(&self) -> Region {
        Region::from_center(self.position, self.half_size)
    }
}
