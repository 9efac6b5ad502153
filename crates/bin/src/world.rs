//! World state management.
//!
//! Owns the sprites and the quadtree indexing them, and keeps the two in
//! sync as sprites move.

use std::collections::HashMap;

use geometry::Region;
use glam::Vec2;
use quadtree::{BoxIntersectable, QuadTreeNode, TreeConfig, TreeStats};
use rand::Rng;
use tracing::debug;

use crate::config::SpriteConfig;
use crate::sprite::Sprite;

/// The simulated world containing all sprites.
#[derive(Debug)]
pub struct World {
    /// Next sprite ID to assign.
    next_id: u32,
    /// All sprites by ID.
    sprites: HashMap<u32, Sprite>,
    /// World border.
    border: Region,
    /// QuadTree for overlap queries.
    tree: QuadTreeNode<Sprite>,
}

/// Per-tick summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickReport {
    /// Distinct overlapping sprite pairs.
    pub collisions: usize,
    pub stats: TreeStats,
}

impl World {
    pub fn new(border: Region, tree_config: TreeConfig) -> Self {
        Self {
            next_id: 1,
            sprites: HashMap::new(),
            border,
            tree: QuadTreeNode::with_config(border, tree_config),
        }
    }

    #[inline]
    pub fn tree(&self) -> &QuadTreeNode<Sprite> {
        &self.tree
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    #[allow(dead_code)]
    #[inline]
    pub fn get(&self, id: u32) -> Option<&Sprite> {
        self.sprites.get(&id)
    }

    /// Add a sprite and index it. Returns its ID.
    pub fn add_sprite(&mut self, position: Vec2, half_size: f32, velocity: Vec2) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let sprite = Sprite::new(id, position, half_size, velocity);
        self.tree.insert(sprite.clone());
        self.sprites.insert(id, sprite);
        id
    }

    /// Remove a sprite from the world and the tree.
    #[allow(dead_code)]
    pub fn remove_sprite(&mut self, id: u32) -> Option<Sprite> {
        let sprite = self.sprites.remove(&id)?;
        self.tree.remove(&sprite);
        Some(sprite)
    }

    /// Spawn `config.count` sprites at random positions.
    pub fn spawn_sprites(&mut self, config: &SpriteConfig, rng: &mut impl Rng) {
        for _ in 0..config.count {
            let half_size = rng.random_range(config.min_size..=config.max_size);
            let position = Vec2::new(
                rng.random_range(self.border.min_x()..=self.border.max_x()),
                rng.random_range(self.border.min_y()..=self.border.max_y()),
            );
            let velocity = Vec2::new(
                rng.random_range(-config.max_speed..=config.max_speed),
                rng.random_range(-config.max_speed..=config.max_speed),
            );
            self.add_sprite(position, half_size, velocity);
        }
        debug!("Spawned {} sprites", config.count);
    }

    /// Move every sprite by `dt` seconds.
    ///
    /// The tree does not track moving items, so each sprite is removed under
    /// its old box and inserted again under the new one.
    pub fn step(&mut self, dt: f32) {
        let border = self.border;
        for sprite in self.sprites.values_mut() {
            if sprite.velocity == Vec2::ZERO {
                continue;
            }
            self.tree.remove(sprite);
            sprite.advance(dt, &border);
            self.tree.insert(sprite.clone());
        }
    }

    /// All overlapping sprite pairs as `(lower_id, higher_id)`, sorted.
    pub fn collisions(&self) -> Vec<(u32, u32)> {
        let mut pairs = Vec::new();
        for sprite in self.sprites.values() {
            for other in self.tree.query(&sprite.bounding_box()) {
                if sprite.id < other.id {
                    pairs.push((sprite.id, other.id));
                }
            }
        }
        pairs.sort_unstable();
        pairs
    }

    /// Advance one tick and report on it.
    pub fn tick(&mut self, dt: f32) -> TickReport {
        self.step(dt);
        TickReport {
            collisions: self.collisions().len(),
            stats: self.tree.stats(),
        }
    }
}
