/// Three-way containment classification shared by every bounding volume.

use super::aabb::AABB;

/// Result of classifying an AABB against a bounding volume.
///
/// Used by the octree for hierarchical culling:
/// - `Disjoint` → skip the entire subtree
/// - `Contains` → collect all objects without further testing
/// - `Intersects` → test individual objects and recurse into children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainmentType {
    /// The AABB is entirely outside the volume
    Disjoint,
    /// The AABB partially overlaps the volume
    Intersects,
    /// The volume fully contains the AABB
    Contains,
}

/// A convex volume an octree can be queried with.
///
/// How touching (zero-volume) overlaps are classified is up to the
/// implementation; the octree only switches on the result.
pub trait BoundingVolume {
    /// Classify `aabb` against this volume (3-way test).
    fn classify_aabb(&self, aabb: &AABB) -> ContainmentType;

    /// Returns `true` if `aabb` is (potentially) inside or intersecting.
    fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.classify_aabb(aabb) != ContainmentType::Disjoint
    }
}

impl BoundingVolume for AABB {
    fn classify_aabb(&self, aabb: &AABB) -> ContainmentType {
        if !self.intersects(aabb) {
            ContainmentType::Disjoint
        } else if self.contains(aabb) {
            ContainmentType::Contains
        } else {
            ContainmentType::Intersects
        }
    }

    fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.intersects(aabb)
    }
}
