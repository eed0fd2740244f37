/// Octree — static spatial index for frustum culling and point bucketing.
///
/// Uses single-node placement: each item is stored in exactly one node,
/// the deepest node whose AABB fully contains it (subject to the depth
/// ceiling and leaf capacity). If an item straddles a child boundary, it
/// stays in the parent, regardless of how many items the parent already holds.
///
/// Benefits:
/// - No duplication → no HashSet needed for query results
/// - O(depth) insert per object
///
/// Unlike a pre-allocated octree, nodes are created lazily: a leaf only
/// subdivides once it is full and another item arrives. Nodes live in a
/// flat array; the eight children of a node are contiguous.
///
/// Only static objects are indexed. There is no removal or rebalancing:
/// a changed scene extent means building a new octree.

use glam::Vec3;
use crate::error::Result;
use crate::math::{BoundingVolume, ContainmentType, AABB};
use crate::{spatial_debug, spatial_trace, spatial_warn};
use super::config::OctreeConfig;
use super::octree_key::OctreeKey;
use super::octree_node::{OctreeNode, OCTANT_COUNT};
use super::spatial_object::{InsertOutcome, OctreeItem, SkipReason, SpatialObject};

/// Index of the root node in the flat node array.
const ROOT: usize = 0;

/// Node/item counts for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OctreeStats {
    /// Total nodes (root included)
    pub node_count: usize,
    /// Nodes without children
    pub leaf_count: usize,
    /// Stored items
    pub item_count: usize,
    /// Items stored at subdivided nodes (straddling items)
    pub internal_item_count: usize,
    /// Deepest node depth (root = 0)
    pub max_node_depth: u32,
    /// Largest item count held by a single node
    pub max_items_per_node: usize,
}

/// Static octree spatial index.
///
/// `K` is the non-owning handle handed back by queries.
pub struct Octree<K> {
    /// Flat array of all octree nodes, root first
    nodes: Vec<OctreeNode<K>>,
    /// Maximum depth of the tree (root = depth 0)
    max_depth: u32,
    /// Items a leaf holds before it subdivides
    leaf_capacity: usize,
    /// Total number of stored items
    item_count: usize,
}

impl<K: Copy + Eq> Octree<K> {
    /// Create an empty octree covering `root_bounds`.
    ///
    /// # Arguments
    ///
    /// * `root_bounds` - World-space AABB encompassing everything to index
    /// * `max_depth` - Maximum tree depth (root = 0), at least 1
    /// * `leaf_capacity` - Items a leaf holds before subdividing, at least 1
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if any parameter is out of range.
    pub fn new(root_bounds: AABB, max_depth: u32, leaf_capacity: usize) -> Result<Self> {
        Self::with_config(OctreeConfig { root_bounds, max_depth, leaf_capacity })
    }

    /// Create an empty octree from a validated configuration.
    pub fn with_config(config: OctreeConfig) -> Result<Self> {
        config.validate()?;

        spatial_debug!(
            "galaxy3d::Octree",
            "Created octree: bounds {:?}..{:?}, max_depth {}, leaf_capacity {}",
            config.root_bounds.min,
            config.root_bounds.max,
            config.max_depth,
            config.leaf_capacity
        );

        Ok(Self {
            nodes: vec![OctreeNode::new(config.root_bounds, 0)],
            max_depth: config.max_depth,
            leaf_capacity: config.leaf_capacity,
            item_count: 0,
        })
    }

    pub fn root_bounds(&self) -> &AABB {
        self.nodes[ROOT].bounds()
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn leaf_capacity(&self) -> usize {
        self.leaf_capacity
    }

    /// Number of stored items
    pub fn len(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    /// All nodes, root first. Children of a node are contiguous.
    pub fn nodes(&self) -> &[OctreeNode<K>] {
        &self.nodes
    }

    /// The eight children of `node`, or `None` for a leaf.
    pub fn children(&self, node: &OctreeNode<K>) -> Option<&[OctreeNode<K>]> {
        node.first_child()
            .map(|first| &self.nodes[first..first + OCTANT_COUNT])
    }

    // ===== INSERT =====

    /// Index a scene object.
    ///
    /// Silently skipped (no error) if the object has no owning context,
    /// is not static, or has no usable world bounds. The outcome says what
    /// happened; most callers ignore it.
    pub fn insert<O>(&mut self, object: &O) -> InsertOutcome
    where
        O: SpatialObject<Key = K> + ?Sized,
    {
        let Some(key) = object.key() else {
            spatial_trace!("galaxy3d::Octree", "Skipping detached object");
            return InsertOutcome::Skipped(SkipReason::Detached);
        };

        if !object.is_static() {
            spatial_trace!("galaxy3d::Octree", "Skipping non-static object");
            return InsertOutcome::Skipped(SkipReason::NotStatic);
        }

        let Some(bounds) = object.world_bounds() else {
            spatial_trace!("galaxy3d::Octree", "Skipping object without world bounds");
            return InsertOutcome::Skipped(SkipReason::NoBounds);
        };

        self.insert_bounds(key, bounds)
    }

    /// Index `key` with explicit world bounds, bypassing the object checks.
    ///
    /// Bounds must be valid and fully inside the root bounds; otherwise the
    /// item is skipped so that every node keeps containing its items.
    pub fn insert_bounds(&mut self, key: K, bounds: AABB) -> InsertOutcome {
        if !bounds.is_valid() {
            spatial_trace!("galaxy3d::Octree", "Skipping invalid bounds {:?}", bounds);
            return InsertOutcome::Skipped(SkipReason::NoBounds);
        }

        if !self.root_bounds().contains(&bounds) {
            spatial_warn!(
                "galaxy3d::Octree",
                "Object bounds {:?}..{:?} leave the indexed volume, not indexed",
                bounds.min,
                bounds.max
            );
            return InsertOutcome::Skipped(SkipReason::OutOfBounds);
        }

        let depth = self.insert_iterative(OctreeItem { key, bounds });
        self.item_count += 1;
        InsertOutcome::Stored { depth }
    }

    /// Walk down from the root and store the item. Returns the depth of the
    /// node that received it.
    ///
    /// - At the depth ceiling, or in a leaf with room: store here.
    /// - A full leaf subdivides, then the item descends into the single
    ///   child containing it, or stays here if it straddles a split plane.
    fn insert_iterative(&mut self, item: OctreeItem<K>) -> u32 {
        let mut node_idx = ROOT;
        let mut depth = 0;

        loop {
            let node = &self.nodes[node_idx];
            if depth >= self.max_depth
                || (node.is_leaf() && node.items().len() < self.leaf_capacity)
            {
                self.nodes[node_idx].push_item(item);
                return depth;
            }

            if node.is_leaf() {
                self.subdivide(node_idx);
            }

            let node = &self.nodes[node_idx];
            let child_idx = node
                .child_index_containing(&item.bounds)
                .and_then(|octant| node.child_index(octant));

            match child_idx {
                Some(child_idx) => {
                    node_idx = child_idx;
                    depth += 1;
                }
                None => {
                    // Straddles a boundary — stays in current node
                    self.nodes[node_idx].push_item(item);
                    return depth;
                }
            }
        }
    }

    /// Create the eight children of a leaf. No-op on a subdivided node.
    ///
    /// Items already stored at the node stay where they are.
    fn subdivide(&mut self, node_idx: usize) {
        let node = &self.nodes[node_idx];
        if !node.is_leaf() {
            return;
        }

        let child_depth = node.depth() + 1;
        let child_bounds = node.all_octant_bounds();
        let first_child = self.nodes.len();

        self.nodes.extend(
            child_bounds
                .into_iter()
                .map(|bounds| OctreeNode::new(bounds, child_depth)),
        );
        self.nodes[node_idx].set_first_child(first_child);

        spatial_trace!(
            "galaxy3d::Octree",
            "Subdivided node {} at depth {} (children {}..{})",
            node_idx,
            child_depth - 1,
            first_child,
            first_child + OCTANT_COUNT
        );
    }

    // ===== QUERY =====

    /// Collect every stored key whose bounds are not disjoint from `volume`.
    ///
    /// `results` is cleared first. Each stored item appears at most once;
    /// order is unspecified.
    pub fn query<V>(&self, volume: &V, results: &mut Vec<K>)
    where
        V: BoundingVolume + ?Sized,
    {
        results.clear();
        self.query_recursive(ROOT, volume, results);
    }

    /// 3-way classification at each node:
    /// - `Disjoint` → skip entire subtree
    /// - `Contains` → collect all items from subtree without further testing
    /// - `Intersects` → test items of this node individually, recurse into children
    fn query_recursive<V>(&self, node_idx: usize, volume: &V, results: &mut Vec<K>)
    where
        V: BoundingVolume + ?Sized,
    {
        let node = &self.nodes[node_idx];

        match volume.classify_aabb(node.bounds()) {
            ContainmentType::Disjoint => {}

            ContainmentType::Contains => self.collect_all(node_idx, results),

            ContainmentType::Intersects => {
                results.extend(
                    node.items()
                        .iter()
                        .filter(|item| volume.intersects_aabb(&item.bounds))
                        .map(|item| item.key),
                );

                if let Some(first_child) = node.first_child() {
                    for octant in 0..OCTANT_COUNT {
                        self.query_recursive(first_child + octant, volume, results);
                    }
                }
            }
        }
    }

    /// Collect all items from a node and its entire subtree (no volume test).
    fn collect_all(&self, node_idx: usize, results: &mut Vec<K>) {
        let node = &self.nodes[node_idx];
        results.extend(node.items().iter().map(|item| item.key));

        if let Some(first_child) = node.first_child() {
            for octant in 0..OCTANT_COUNT {
                self.collect_all(first_child + octant, results);
            }
        }
    }

    // ===== POINT LOOKUP =====

    /// Key of the leaf (or depth-ceiling node) containing `point`.
    ///
    /// Returns `None` if the point lies outside the root bounds. If no child
    /// of a subdivided node claims the point (float rounding on a split
    /// plane), the key of that node is returned instead of failing.
    pub fn try_find_leaf_key(&self, point: Vec3) -> Option<OctreeKey> {
        let mut node = &self.nodes[ROOT];
        if !node.bounds().contains_point(point) {
            return None;
        }

        loop {
            if node.is_leaf() || node.depth() >= self.max_depth {
                return Some(node.key());
            }

            let child = self
                .children(node)
                .and_then(|children| {
                    children.iter().find(|child| child.bounds().contains_point(point))
                });

            match child {
                Some(child) => node = child,
                None => return Some(node.key()),
            }
        }
    }

    // ===== DIAGNOSTICS =====

    /// Walk all nodes and gather counts.
    pub fn stats(&self) -> OctreeStats {
        self.nodes.iter().fold(OctreeStats::default(), |mut stats, node| {
            stats.node_count += 1;
            stats.item_count += node.items().len();
            stats.max_node_depth = stats.max_node_depth.max(node.depth());
            stats.max_items_per_node = stats.max_items_per_node.max(node.items().len());
            if node.is_leaf() {
                stats.leaf_count += 1;
            } else {
                stats.internal_item_count += node.items().len();
            }
            stats
        })
    }
}

#[cfg(test)]
#[path = "octree_tests.rs"]
mod tests;
