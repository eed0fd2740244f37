/// Contract between the octree and the objects the scene feeds into it.
///
/// The octree never owns objects. It keeps a copyable key (slot-map key,
/// entity id, index...) next to the world bounds it was given, and hands
/// the key back from queries. Keeping keys valid while they are indexed is
/// the caller's responsibility.

use crate::math::AABB;

/// An object that can be placed into an octree.
pub trait SpatialObject {
    /// Non-owning handle returned by octree queries
    type Key: Copy + Eq;

    /// Handle of this object within its owning context.
    ///
    /// `None` for objects that are not attached to any owner; those are
    /// never indexed.
    fn key(&self) -> Option<Self::Key>;

    /// Whether the object is immovable. Only static objects are indexed.
    fn is_static(&self) -> bool;

    /// Current world-space bounds, or `None` if they cannot be computed.
    fn world_bounds(&self) -> Option<AABB>;
}

/// An entry stored in an octree node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctreeItem<K> {
    /// Handle of the indexed object
    pub key: K,
    /// World bounds captured at insertion time
    pub bounds: AABB,
}

/// Why `Octree::insert` left an object out of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The object has no owning context (no key)
    Detached,
    /// The object is not flagged static
    NotStatic,
    /// World bounds are unavailable, non-finite or inverted
    NoBounds,
    /// World bounds are not fully inside the octree's root bounds
    OutOfBounds,
}

/// Result of an insertion.
///
/// Skips are expected and silent; callers are free to ignore the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The item was stored in a node at `depth`
    Stored { depth: u32 },
    /// The item was left out of the index
    Skipped(SkipReason),
}

impl InsertOutcome {
    pub fn is_stored(&self) -> bool {
        matches!(self, InsertOutcome::Stored { .. })
    }
}
