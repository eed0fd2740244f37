/// A single cell of the octree.
///
/// Nodes live in the octree's flat node array. A subdivided node points at
/// its first child; the eight children are contiguous and ordered by octant
/// (bit0 = X, bit1 = Y, bit2 = Z, 0 = low half, 1 = high half).

use glam::Vec3;
use crate::math::AABB;
use super::octree_key::OctreeKey;
use super::spatial_object::OctreeItem;

/// Number of children of a subdivided node
pub const OCTANT_COUNT: usize = 8;

#[derive(Debug, Clone)]
pub struct OctreeNode<K> {
    /// World-space AABB of this node
    bounds: AABB,
    /// Depth of this node (root = 0)
    depth: u32,
    /// Index of the first of 8 contiguous children (None = leaf)
    first_child: Option<usize>,
    /// Items that fit no single child, or that arrived while this was a
    /// non-full leaf or at the depth ceiling
    items: Vec<OctreeItem<K>>,
}

impl<K> OctreeNode<K> {
    pub(crate) fn new(bounds: AABB, depth: u32) -> Self {
        Self {
            bounds,
            depth,
            first_child: None,
            items: Vec::new(),
        }
    }

    pub fn bounds(&self) -> &AABB {
        &self.bounds
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// A node is a leaf until it subdivides, and never becomes one again.
    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }

    pub fn items(&self) -> &[OctreeItem<K>] {
        &self.items
    }

    /// Key identifying this node
    pub fn key(&self) -> OctreeKey {
        OctreeKey::new(self.bounds, self.depth)
    }

    /// Index of the child for `octant` in the node array
    pub(crate) fn child_index(&self, octant: usize) -> Option<usize> {
        debug_assert!(octant < OCTANT_COUNT);
        self.first_child.map(|first| first + octant)
    }

    pub(crate) fn first_child(&self) -> Option<usize> {
        self.first_child
    }

    pub(crate) fn set_first_child(&mut self, first_child: usize) {
        debug_assert!(self.first_child.is_none(), "node subdivided twice");
        self.first_child = Some(first_child);
    }

    pub(crate) fn push_item(&mut self, item: OctreeItem<K>) {
        self.items.push(item);
    }

    /// Bounds of the child in `octant`, split at this node's center.
    ///
    /// Deterministic: the same parent bounds always give the same layout.
    pub fn octant_bounds(&self, octant: usize) -> AABB {
        self.bounds.octant(self.center(), octant)
    }

    /// Bounds of all eight children, in octant order.
    pub fn all_octant_bounds(&self) -> [AABB; OCTANT_COUNT] {
        let center = self.center();
        std::array::from_fn(|octant| self.bounds.octant(center, octant))
    }

    /// Octant whose bounds fully contain `aabb` (closed intervals).
    ///
    /// Returns `None` when the box straddles a split plane or is larger than
    /// a child. Should only be asked of a subdivided node.
    pub fn child_index_containing(&self, aabb: &AABB) -> Option<usize> {
        debug_assert!(!self.is_leaf(), "child_index_containing called on a leaf");
        let center = self.center();
        (0..OCTANT_COUNT).find(|&octant| self.bounds.octant(center, octant).contains(aabb))
    }

    fn center(&self) -> Vec3 {
        self.bounds.center()
    }
}
