/// Locality bucketing — groups static objects by the octree leaf around
/// their world-bounds center.
///
/// Objects sharing a bucket are spatially close, which is what batching
/// or coarse proximity systems need. Buckets are keyed by `OctreeKey` and
/// carry no meaning beyond equality.

use rustc_hash::FxHashMap;
use crate::spatial::{Octree, OctreeKey, SpatialObject};
use super::static_object::SceneObjectKey;
use super::static_scene::StaticScene;

/// Group the static objects of `scene` by leaf key.
///
/// Non-static objects, objects without bounds and objects whose center
/// lies outside the octree are left out. Within a bucket, objects keep
/// the scene's iteration order.
pub fn group_by_locality(
    octree: &Octree<SceneObjectKey>,
    scene: &StaticScene,
) -> FxHashMap<OctreeKey, Vec<SceneObjectKey>> {
    let mut buckets: FxHashMap<OctreeKey, Vec<SceneObjectKey>> = FxHashMap::default();

    for (key, object) in scene.iter() {
        if !object.is_static() {
            continue;
        }

        let Some(bounds) = object.world_bounds() else {
            continue;
        };

        if let Some(bucket) = octree.try_find_leaf_key(bounds.center()) {
            buckets.entry(bucket).or_default().push(key);
        }
    }

    buckets
}
