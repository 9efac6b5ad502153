//! Region quadtree node.
//!
//! A node is either a leaf holding a bounded set of items or an internal
//! node owning exactly four children that tile its region. Items are stored
//! in every leaf their bounding box touches, so one item can live in several
//! leaves at once. Queries collapse those copies through set semantics.

use std::collections::HashSet;
use std::fmt;

use geometry::{Quadrant, Region};
use tracing::{debug, trace};

use crate::config::TreeConfig;
use crate::item::BoxIntersectable;

enum NodeState<E> {
    Leaf(HashSet<E>),
    /// Children indexed by [`Quadrant::index`].
    Internal(Box<[QuadTreeNode<E>; 4]>),
}

/// A node of the quadtree. The root is the tree.
pub struct QuadTreeNode<E> {
    region: Region,
    depth: u32,
    config: TreeConfig,
    state: NodeState<E>,
}

/// Shape summary of a (sub)tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    pub leaves: usize,
    pub internal_nodes: usize,
    /// Deepest node depth, relative to the root of the tree (not the subtree).
    pub max_depth: u32,
    /// Item copies across all leaves. Items straddling quadrants count once
    /// per leaf they occupy.
    pub stored_entries: usize,
}

impl<E> QuadTreeNode<E> {
    /// Create a root node covering `region` with the default capacities.
    pub fn new(region: Region) -> Self {
        Self::with_config(region, TreeConfig::default())
    }

    /// Create a root node covering `region`.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`TreeConfig::validate`]. An unbounded depth
    /// would let coincident items split until the stack runs out.
    #[track_caller]
    pub fn with_config(region: Region, config: TreeConfig) -> Self {
        if let Err(e) = config.validate() {
            panic!("invalid tree config: {e}");
        }
        Self::leaf(region, 0, config)
    }

    fn leaf(region: Region, depth: u32, config: TreeConfig) -> Self {
        Self {
            region,
            depth,
            config,
            state: NodeState::Leaf(HashSet::new()),
        }
    }

    /// The region this node covers.
    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    pub fn config(&self) -> TreeConfig {
        self.config
    }

    /// True while the node has not split.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self.state, NodeState::Leaf(_))
    }

    /// Children in [`Quadrant::ALL`] order, or `None` for a leaf.
    pub fn children(&self) -> Option<[&QuadTreeNode<E>; 4]> {
        match &self.state {
            NodeState::Leaf(_) => None,
            NodeState::Internal(children) => Some(children.each_ref()),
        }
    }

    /// A single child, or `None` for a leaf.
    pub fn child(&self, quadrant: Quadrant) -> Option<&QuadTreeNode<E>> {
        match &self.state {
            NodeState::Leaf(_) => None,
            NodeState::Internal(children) => Some(&children[quadrant.index()]),
        }
    }

    /// Walk the subtree and summarise its shape.
    pub fn stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        self.collect_stats(&mut stats);
        stats
    }

    fn collect_stats(&self, stats: &mut TreeStats) {
        stats.max_depth = stats.max_depth.max(self.depth);
        match &self.state {
            NodeState::Leaf(items) => {
                stats.leaves += 1;
                stats.stored_entries += items.len();
            }
            NodeState::Internal(children) => {
                stats.internal_nodes += 1;
                for child in children.iter() {
                    child.collect_stats(stats);
                }
            }
        }
    }
}

impl<E: BoxIntersectable> QuadTreeNode<E> {
    /// Every item whose bounding box intersects `region`.
    pub fn query(&self, region: &Region) -> HashSet<&E> {
        let mut found = HashSet::new();
        self.query_into(region, &mut found);
        found
    }

    fn query_into<'a>(&'a self, region: &Region, found: &mut HashSet<&'a E>) {
        match &self.state {
            NodeState::Leaf(items) => {
                found.extend(items.iter().filter(|item| item.bounding_box().intersects(region)));
            }
            NodeState::Internal(children) => {
                for child in children.iter().filter(|c| c.region.intersects(region)) {
                    child.query_into(region, found);
                }
            }
        }
    }

    /// Every item stored anywhere in the tree.
    pub fn all_items(&self) -> HashSet<&E> {
        let mut found = HashSet::new();
        self.all_items_into(&mut found);
        found
    }

    fn all_items_into<'a>(&'a self, found: &mut HashSet<&'a E>) {
        match &self.state {
            NodeState::Leaf(items) => found.extend(items.iter()),
            NodeState::Internal(children) => {
                for child in children.iter() {
                    child.all_items_into(found);
                }
            }
        }
    }

    /// Check if an item equal to `item` is stored.
    ///
    /// Only quadrants touching the item's bounding box are searched.
    pub fn contains(&self, item: &E) -> bool {
        self.contains_within(item, &item.bounding_box())
    }

    fn contains_within(&self, item: &E, bbox: &Region) -> bool {
        match &self.state {
            NodeState::Leaf(items) => items.contains(item),
            NodeState::Internal(children) => children
                .iter()
                .filter(|c| c.region.intersects(bbox))
                .any(|c| c.contains_within(item, bbox)),
        }
    }

    /// Remove every stored copy of `item`.
    ///
    /// Returns true if at least one copy was removed.
    pub fn remove(&mut self, item: &E) -> bool {
        let bbox = item.bounding_box();
        self.remove_within(item, &bbox)
    }

    fn remove_within(&mut self, item: &E, bbox: &Region) -> bool {
        match &mut self.state {
            NodeState::Leaf(items) => items.remove(item),
            // No short-circuit: a straddling item has a copy in each child.
            NodeState::Internal(children) => children
                .iter_mut()
                .filter(|c| c.region.intersects(bbox))
                .fold(false, |removed, c| c.remove_within(item, bbox) | removed),
        }
    }
}

impl<E: BoxIntersectable + Clone> QuadTreeNode<E> {
    /// Insert an item into every leaf its bounding box touches.
    ///
    /// Inserting an item equal to one already stored has no effect.
    pub fn insert(&mut self, item: E) {
        let bbox = item.bounding_box();
        self.insert_within(item, &bbox);
    }

    fn insert_within(&mut self, item: E, bbox: &Region) {
        let at_depth_cap = self.depth >= self.config.max_depth;
        match &mut self.state {
            NodeState::Leaf(items) => {
                if at_depth_cap || items.len() < self.config.max_items {
                    items.insert(item);
                    if at_depth_cap && items.len() > self.config.max_items {
                        trace!(
                            "Leaf at depth cap {} grew past capacity to {} items",
                            self.depth,
                            items.len()
                        );
                    }
                } else {
                    self.split();
                    self.insert_within(item, bbox);
                }
            }
            NodeState::Internal(children) => {
                let mut targets = children
                    .iter_mut()
                    .filter(|c| c.region.intersects(bbox))
                    .peekable();
                while let Some(child) = targets.next() {
                    if targets.peek().is_some() {
                        child.insert_within(item.clone(), bbox);
                    } else {
                        child.insert_within(item, bbox);
                        return;
                    }
                }
            }
        }
    }

    /// Turn this leaf into an internal node and push its items down.
    fn split(&mut self) {
        let NodeState::Leaf(items) = &mut self.state else {
            unreachable!("split called on an internal node");
        };
        let items = std::mem::take(items);

        let depth = self.depth + 1;
        let config = self.config;
        let children = self.region.quadrants().map(|region| Self::leaf(region, depth, config));
        self.state = NodeState::Internal(Box::new(children));

        debug!(
            "Splitting node at depth {} ({:?}), redistributing {} items",
            self.depth,
            self.region,
            items.len()
        );

        for item in items {
            self.insert(item);
        }
    }
}

impl<E> fmt::Debug for QuadTreeNode<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("QuadTreeNode");
        s.field("region", &self.region).field("depth", &self.depth);
        match &self.state {
            NodeState::Leaf(items) => s.field("items", &items.len()),
            NodeState::Internal(_) => s.field("leaves", &self.stats().leaves),
        };
        s.finish()
    }
}
