/// StaticScene — owner of the static objects indexed by an octree.
///
/// Objects are stored in a SlotMap; the octree only keeps their keys.
/// Removing an object that is still indexed leaves a stale key in the
/// octree: rebuild the octree after editing the scene.

use glam::Mat4;
use slotmap::SlotMap;
use crate::error::Result;
use crate::spatial::{Octree, OctreeConfig};
use crate::{spatial_err, spatial_info};
use super::static_object::{SceneObjectKey, StaticObject};

pub struct StaticScene {
    objects: SlotMap<SceneObjectKey, StaticObject>,
}

impl StaticScene {
    pub fn new() -> Self {
        Self {
            objects: SlotMap::with_key(),
        }
    }

    /// Take ownership of an object and attach it to this scene.
    pub fn add(&mut self, object: StaticObject) -> SceneObjectKey {
        self.objects.insert_with_key(|key| {
            let mut object = object;
            object.attach(key);
            object
        })
    }

    /// Remove an object, returning it detached.
    pub fn remove(&mut self, key: SceneObjectKey) -> Option<StaticObject> {
        self.objects.remove(key).map(|mut object| {
            object.detach();
            object
        })
    }

    pub fn get(&self, key: SceneObjectKey) -> Option<&StaticObject> {
        self.objects.get(key)
    }

    pub fn get_mut(&mut self, key: SceneObjectKey) -> Option<&mut StaticObject> {
        self.objects.get_mut(key)
    }

    /// Move an object. Only meaningful before the octree is built.
    ///
    /// # Errors
    ///
    /// `Error::InvalidArgument` if `key` does not belong to this scene.
    pub fn set_world_matrix(&mut self, key: SceneObjectKey, world_matrix: Mat4) -> Result<()> {
        let object = self.objects.get_mut(key).ok_or_else(|| {
            spatial_err!("galaxy3d::StaticScene", InvalidArgument, "unknown scene object key {:?}", key)
        })?;
        object.set_world_matrix(world_matrix);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SceneObjectKey, &StaticObject)> {
        self.objects.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = SceneObjectKey> + '_ {
        self.objects.keys()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Build an octree over every object of the scene.
    ///
    /// Non-static objects and objects without bounds are left out.
    pub fn build_octree(&self, config: OctreeConfig) -> Result<Octree<SceneObjectKey>> {
        let mut octree = Octree::with_config(config)?;

        let mut stored = 0;
        for object in self.objects.values() {
            if octree.insert(object).is_stored() {
                stored += 1;
            }
        }

        let stats = octree.stats();
        spatial_info!(
            "galaxy3d::StaticScene",
            "Octree built: {} of {} objects indexed, {} nodes ({} leaves), depth {}",
            stored,
            self.objects.len(),
            stats.node_count,
            stats.leaf_count,
            stats.max_node_depth
        );

        Ok(octree)
    }
}

impl Default for StaticScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "static_scene_tests.rs"]
mod tests;
