/// Camera culling strategies.
///
/// A Culler determines which scene objects are visible from a camera.
/// Implementations range from brute-force (return all) to the octree query.

use glam::Mat4;
use crate::math::Frustum;
use crate::spatial::{Octree, SpatialObject};
use super::static_object::{SceneObjectKey, StaticObject};
use super::static_scene::StaticScene;

/// Strategy for determining visible objects from a camera.
///
/// Called once per frame before drawing. `visible` is cleared and refilled.
///
/// `&mut self` allows stateful implementations (e.g. caching)
/// to maintain state across frames.
pub trait Culler {
    fn cull(
        &mut self,
        scene: &StaticScene,
        view_projection: &Mat4,
        index: Option<&Octree<SceneObjectKey>>,
        visible: &mut Vec<SceneObjectKey>,
    );
}

/// Brute-force culler — returns every VISIBLE object (no actual culling).
///
/// Suitable for small scenes or as a baseline for comparison.
/// Ignores the octree entirely.
#[derive(Debug, Default)]
pub struct BruteForceCuller;

impl BruteForceCuller {
    pub fn new() -> Self {
        Self
    }
}

impl Culler for BruteForceCuller {
    fn cull(
        &mut self,
        scene: &StaticScene,
        _view_projection: &Mat4,
        _index: Option<&Octree<SceneObjectKey>>,
        visible: &mut Vec<SceneObjectKey>,
    ) {
        visible.clear();
        visible.extend(
            scene.iter()
                .filter(|(_, object)| object.is_visible())
                .map(|(key, _)| key),
        );
    }
}

/// Frustum culler — tests object bounds against the camera frustum.
///
/// With an octree: indexed objects come from the octree query, and every
/// object the octree does not hold (non-static, or static but outside the
/// indexed volume) is tested one by one.
/// Without: every object is tested individually (O(n)).
///
/// An object without usable world bounds cannot be culled and is always
/// kept while VISIBLE.
#[derive(Debug, Default)]
pub struct FrustumCuller;

impl FrustumCuller {
    pub fn new() -> Self {
        Self
    }

    fn passes(frustum: &Frustum, object: &StaticObject) -> bool {
        object.is_visible()
            && object.world_bounds()
                .map_or(true, |bounds| frustum.intersects_aabb(&bounds))
    }

    /// Whether `octree` holds this object (same checks as `Octree::insert`).
    fn is_indexed(octree: &Octree<SceneObjectKey>, object: &StaticObject) -> bool {
        object.is_static()
            && object.world_bounds()
                .is_some_and(|bounds| octree.root_bounds().contains(&bounds))
    }
}

impl Culler for FrustumCuller {
    fn cull(
        &mut self,
        scene: &StaticScene,
        view_projection: &Mat4,
        index: Option<&Octree<SceneObjectKey>>,
        visible: &mut Vec<SceneObjectKey>,
    ) {
        let frustum = Frustum::from_view_projection(view_projection);

        match index {
            Some(octree) => {
                octree.query(&frustum, visible);
                // Drop keys of removed or hidden objects
                visible.retain(|&key| scene.get(key).is_some_and(StaticObject::is_visible));

                visible.extend(
                    scene.iter()
                        .filter(|(_, object)| !Self::is_indexed(octree, object))
                        .filter(|(_, object)| Self::passes(&frustum, object))
                        .map(|(key, _)| key),
                );
            }
            None => {
                visible.clear();
                visible.extend(
                    scene.iter()
                        .filter(|(_, object)| Self::passes(&frustum, object))
                        .map(|(key, _)| key),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::AABB;
    use crate::scene::SceneObjectFlags;
    use crate::spatial::OctreeConfig;
    use glam::Vec3;

    fn object_at(name: &str, position: Vec3) -> StaticObject {
        StaticObject::new(
            name,
            Some(AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0))),
            Mat4::from_translation(position),
        )
    }

    /// Camera at the origin looking down -Z
    fn forward_view_projection() -> Mat4 {
        let proj = Mat4::perspective_rh(std::f32::consts::FRAC_PI_4, 1.0, 0.1, 50.0);
        let view = Mat4::look_at_rh(Vec3::ZERO, Vec3::NEG_Z, Vec3::Y);
        proj * view
    }

    fn build_scene() -> (StaticScene, [SceneObjectKey; 4]) {
        let mut scene = StaticScene::new();
        let front = scene.add(object_at("front", Vec3::new(0.0, 0.0, -10.0)));
        let behind = scene.add(object_at("behind", Vec3::new(0.0, 0.0, 10.0)));
        let hidden = scene.add(
            object_at("hidden", Vec3::new(0.0, 0.0, -20.0)).with_flags(SceneObjectFlags::STATIC),
        );
        let moving = scene.add(
            object_at("moving", Vec3::new(1.0, 0.0, -15.0)).with_flags(SceneObjectFlags::VISIBLE),
        );
        (scene, [front, behind, hidden, moving])
    }

    fn config() -> OctreeConfig {
        OctreeConfig {
            root_bounds: AABB::new(Vec3::splat(-100.0), Vec3::splat(100.0)),
            max_depth: 4,
            leaf_capacity: 1,
        }
    }

    #[test]
    fn test_brute_force_returns_all_visible() {
        let (scene, [front, behind, hidden, moving]) = build_scene();
        let mut visible = Vec::new();
        BruteForceCuller::new().cull(&scene, &forward_view_projection(), None, &mut visible);

        assert_eq!(visible.len(), 3);
        assert!(visible.contains(&front));
        assert!(visible.contains(&behind));
        assert!(visible.contains(&moving));
        assert!(!visible.contains(&hidden));
    }

    #[test]
    fn test_frustum_culler_without_index() {
        let (scene, [front, behind, hidden, moving]) = build_scene();
        let mut visible = Vec::new();
        FrustumCuller::new().cull(&scene, &forward_view_projection(), None, &mut visible);

        assert!(visible.contains(&front));
        assert!(visible.contains(&moving));
        assert!(!visible.contains(&behind));
        assert!(!visible.contains(&hidden));
    }

    #[test]
    fn test_frustum_culler_with_index_matches_without() {
        let (scene, _) = build_scene();
        let octree = scene.build_octree(config()).unwrap();
        let vp = forward_view_projection();

        let mut with_index = Vec::new();
        FrustumCuller::new().cull(&scene, &vp, Some(&octree), &mut with_index);
        let mut without_index = Vec::new();
        FrustumCuller::new().cull(&scene, &vp, None, &mut without_index);

        with_index.sort();
        without_index.sort();
        assert_eq!(with_index, without_index);
    }

    #[test]
    fn test_frustum_culler_keeps_objects_outside_index() {
        let (mut scene, [front, ..]) = build_scene();
        let beyond = scene.add(object_at("beyond", Vec3::new(0.0, 0.0, -30.0)));
        let unbounded = scene.add(StaticObject::new("unbounded", None, Mat4::IDENTITY));
        let octree = scene
            .build_octree(OctreeConfig {
                root_bounds: AABB::new(Vec3::splat(-20.0), Vec3::splat(20.0)),
                ..config()
            })
            .unwrap();
        // Only front and behind fit the smaller volume
        assert_eq!(octree.len(), 2);

        let vp = forward_view_projection();
        let mut with_index = Vec::new();
        FrustumCuller::new().cull(&scene, &vp, Some(&octree), &mut with_index);
        let mut without_index = Vec::new();
        FrustumCuller::new().cull(&scene, &vp, None, &mut without_index);

        assert!(with_index.contains(&front));
        assert!(with_index.contains(&beyond));
        assert!(with_index.contains(&unbounded));
        with_index.sort();
        without_index.sort();
        assert_eq!(with_index, without_index);
    }

    #[test]
    fn test_frustum_culler_drops_removed_objects() {
        let (mut scene, [front, ..]) = build_scene();
        let octree = scene.build_octree(config()).unwrap();
        scene.remove(front);

        let mut visible = Vec::new();
        FrustumCuller::new().cull(&scene, &forward_view_projection(), Some(&octree), &mut visible);
        assert!(!visible.contains(&front));
    }
}
