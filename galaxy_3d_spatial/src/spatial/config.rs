/// Octree construction parameters.

use glam::Vec3;
use crate::error::Result;
use crate::math::AABB;
use crate::spatial_err;

/// Hard ceiling accepted for `max_depth`.
///
/// Past this depth, cells of any realistic world extent fall below f32
/// precision and the octant splits stop being meaningful.
pub const MAX_OCTREE_DEPTH: u32 = 16;

/// Octree configuration
///
/// There is no file or environment lookup: the scene build step fills this
/// in explicitly (or starts from `Default`) and hands it to `Octree::with_config`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OctreeConfig {
    /// World-space volume covered by the tree. Fixed for the tree's lifetime.
    pub root_bounds: AABB,
    /// Maximum depth of the tree (root = depth 0). Must be >= 1.
    pub max_depth: u32,
    /// Items a leaf holds before it subdivides. Must be >= 1.
    pub leaf_capacity: usize,
}

impl Default for OctreeConfig {
    fn default() -> Self {
        Self {
            root_bounds: AABB::new(Vec3::splat(-1024.0), Vec3::splat(1024.0)),
            max_depth: 5,
            leaf_capacity: 8,
        }
    }
}

impl OctreeConfig {
    /// Check every parameter, returning `Error::InvalidConfig` on the first violation.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 || self.max_depth > MAX_OCTREE_DEPTH {
            return Err(spatial_err!(
                "galaxy3d::OctreeConfig",
                InvalidConfig,
                "max_depth must be in 1..={}, got {}",
                MAX_OCTREE_DEPTH,
                self.max_depth
            ));
        }

        if self.leaf_capacity == 0 {
            return Err(spatial_err!(
                "galaxy3d::OctreeConfig",
                InvalidConfig,
                "leaf_capacity must be >= 1"
            ));
        }

        if !self.root_bounds.is_valid() {
            return Err(spatial_err!(
                "galaxy3d::OctreeConfig",
                InvalidConfig,
                "root bounds must be finite with min <= max, got {:?}",
                self.root_bounds
            ));
        }

        Ok(())
    }
}
