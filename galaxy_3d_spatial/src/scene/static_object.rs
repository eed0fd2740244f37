/// Static scene objects fed to the octree.
///
/// A StaticObject is the minimal description the spatial index needs from
/// a renderable: a local bounding box, a world transform and flags.

use bitflags::bitflags;
use glam::Mat4;
use slotmap::new_key_type;
use crate::math::AABB;
use crate::spatial::SpatialObject;

// ===== SLOT MAP KEY =====

new_key_type! {
    /// Stable key for a StaticObject within a StaticScene.
    ///
    /// Keys remain valid even after other objects are removed.
    /// A key becomes invalid only when its own object is removed.
    pub struct SceneObjectKey;
}

// ===== FLAGS =====

bitflags! {
    /// Scene object flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SceneObjectFlags: u32 {
        /// Object never moves; only static objects are indexed
        const STATIC  = 1 << 0;
        /// Object is drawn when in view
        const VISIBLE = 1 << 1;
    }
}

impl Default for SceneObjectFlags {
    fn default() -> Self {
        SceneObjectFlags::STATIC | SceneObjectFlags::VISIBLE
    }
}

// ===== STATIC OBJECT =====

#[derive(Debug, Clone)]
pub struct StaticObject {
    /// Debug name
    name: String,
    /// Key assigned by the owning scene (None while detached)
    key: Option<SceneObjectKey>,
    /// Local-space bounds (None if the mesh has no geometry yet)
    local_bounds: Option<AABB>,
    /// Local → world transform
    world_matrix: Mat4,
    flags: SceneObjectFlags,
}

impl StaticObject {
    /// Create a detached object with default flags (STATIC | VISIBLE).
    pub fn new(name: impl Into<String>, local_bounds: Option<AABB>, world_matrix: Mat4) -> Self {
        Self {
            name: name.into(),
            key: None,
            local_bounds,
            world_matrix,
            flags: SceneObjectFlags::default(),
        }
    }

    pub fn with_flags(mut self, flags: SceneObjectFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn local_bounds(&self) -> Option<&AABB> {
        self.local_bounds.as_ref()
    }

    pub fn world_matrix(&self) -> &Mat4 {
        &self.world_matrix
    }

    pub fn flags(&self) -> SceneObjectFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: SceneObjectFlags) {
        self.flags = flags;
    }

    pub fn is_visible(&self) -> bool {
        self.flags.contains(SceneObjectFlags::VISIBLE)
    }

    pub(crate) fn set_world_matrix(&mut self, world_matrix: Mat4) {
        self.world_matrix = world_matrix;
    }

    pub(crate) fn attach(&mut self, key: SceneObjectKey) {
        self.key = Some(key);
    }

    pub(crate) fn detach(&mut self) {
        self.key = None;
    }
}

impl SpatialObject for StaticObject {
    type Key = SceneObjectKey;

    fn key(&self) -> Option<SceneObjectKey> {
        self.key
    }

    fn is_static(&self) -> bool {
        self.flags.contains(SceneObjectFlags::STATIC)
    }

    /// Local bounds transformed by the world matrix.
    ///
    /// `None` when there are no local bounds or the transform produced
    /// non-finite values.
    fn world_bounds(&self) -> Option<AABB> {
        self.local_bounds
            .map(|local| local.transformed(&self.world_matrix))
            .filter(AABB::is_valid)
    }
}
