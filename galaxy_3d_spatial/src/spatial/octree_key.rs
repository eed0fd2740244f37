/// OctreeKey — stable identifier of an octree node.
///
/// Built from the node's bounds and depth. Equality, hashing and ordering
/// work on the raw f32 bit patterns, so two keys are equal only if their
/// bounds and depth are bitwise identical (`-0.0 != 0.0`). Consumers must
/// treat the key as opaque beyond those semantics.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use crate::math::AABB;

#[derive(Debug, Clone, Copy)]
pub struct OctreeKey {
    bounds: AABB,
    depth: u32,
}

impl OctreeKey {
    pub(crate) fn new(bounds: AABB, depth: u32) -> Self {
        Self { bounds, depth }
    }

    /// Bounds of the node this key identifies
    pub fn bounds(&self) -> AABB {
        self.bounds
    }

    /// Depth of the node this key identifies (root = 0)
    pub fn depth(&self) -> u32 {
        self.depth
    }

    fn bits(&self) -> ([u32; 6], u32) {
        let b = &self.bounds;
        (
            [
                b.min.x.to_bits(), b.min.y.to_bits(), b.min.z.to_bits(),
                b.max.x.to_bits(), b.max.y.to_bits(), b.max.z.to_bits(),
            ],
            self.depth,
        )
    }
}

impl PartialEq for OctreeKey {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for OctreeKey {}

impl Hash for OctreeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl PartialOrd for OctreeKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OctreeKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits().cmp(&other.bits())
    }
}
