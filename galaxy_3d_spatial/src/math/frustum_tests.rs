use glam::{Mat4, Vec3};
use super::*;

fn look_at_origin_frustum(fov: f32) -> Frustum {
    let projection = Mat4::perspective_rh(fov, 1.0, 0.1, 100.0);
    let view = Mat4::look_at_rh(
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::ZERO,
        Vec3::Y,
    );
    Frustum::from_view_projection(&(projection * view))
}

// ============================================================================
// Frustum construction
// ============================================================================

#[test]
fn test_frustum_from_identity_matrix() {
    let frustum = Frustum::from_view_projection(&Mat4::IDENTITY);

    for plane in &frustum.planes {
        let normal_len = plane.truncate().length();
        assert!((normal_len - 1.0).abs() < 1e-5, "plane normal should be unit length");
    }
}

#[test]
fn test_frustum_from_orthographic_projection() {
    let projection = Mat4::orthographic_rh(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&projection);

    for plane in &frustum.planes {
        let normal_len = plane.truncate().length();
        assert!((normal_len - 1.0).abs() < 1e-4, "plane normal should be unit length");
    }
}

#[test]
fn test_frustum_from_aabb_planes() {
    let frustum = Frustum::from_aabb(&AABB::new(Vec3::splat(-1.0), Vec3::splat(3.0)));
    let expected = [
        (PLANE_LEFT, Vec3::X, 1.0),
        (PLANE_RIGHT, Vec3::NEG_X, 3.0),
        (PLANE_BOTTOM, Vec3::Y, 1.0),
        (PLANE_TOP, Vec3::NEG_Y, 3.0),
        (PLANE_NEAR, Vec3::Z, 1.0),
        (PLANE_FAR, Vec3::NEG_Z, 3.0),
    ];

    for (index, normal, distance) in expected {
        let plane = frustum.planes[index];
        assert_eq!(plane.truncate(), normal, "plane {}", index);
        assert_eq!(plane.w, distance, "plane {}", index);
    }
}

// ============================================================================
// Frustum::intersects_aabb
// ============================================================================

#[test]
fn test_aabb_inside_frustum() {
    let frustum = look_at_origin_frustum(std::f32::consts::FRAC_PI_2);
    let aabb = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    assert!(frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_outside_frustum() {
    let frustum = look_at_origin_frustum(std::f32::consts::FRAC_PI_4);
    let aabb = AABB::new(Vec3::splat(100.0), Vec3::splat(101.0));
    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_behind_camera() {
    let frustum = look_at_origin_frustum(std::f32::consts::FRAC_PI_2);
    let aabb = AABB::new(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(1.0, 1.0, 12.0));
    assert!(!frustum.intersects_aabb(&aabb));
}

// ============================================================================
// Frustum::classify_aabb
// ============================================================================

#[test]
fn test_classify_box_frustum() {
    let frustum = Frustum::from_aabb(&AABB::new(Vec3::ZERO, Vec3::splat(10.0)));

    let inside = AABB::new(Vec3::splat(1.0), Vec3::splat(2.0));
    let partial = AABB::new(Vec3::splat(-1.0), Vec3::splat(1.0));
    let outside = AABB::new(Vec3::splat(-5.0), Vec3::splat(-4.0));

    assert_eq!(frustum.classify_aabb(&inside), ContainmentType::Contains);
    assert_eq!(frustum.classify_aabb(&partial), ContainmentType::Intersects);
    assert_eq!(frustum.classify_aabb(&outside), ContainmentType::Disjoint);
}

#[test]
fn test_classify_touching_face_is_intersects() {
    let frustum = Frustum::from_aabb(&AABB::new(Vec3::ZERO, Vec3::splat(10.0)));
    let neighbour = AABB::new(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(0.0, 10.0, 10.0));
    assert_eq!(frustum.classify_aabb(&neighbour), ContainmentType::Intersects);
}

#[test]
fn test_classify_agrees_with_intersects() {
    let frustum = look_at_origin_frustum(std::f32::consts::FRAC_PI_4);
    let boxes = [
        AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5)),
        AABB::new(Vec3::splat(-50.0), Vec3::splat(50.0)),
        AABB::new(Vec3::splat(100.0), Vec3::splat(101.0)),
    ];

    for aabb in &boxes {
        let classified = frustum.classify_aabb(aabb) != ContainmentType::Disjoint;
        assert_eq!(classified, frustum.intersects_aabb(aabb));
    }
}

#[test]
fn test_frustum_as_bounding_volume() {
    fn classify<V: BoundingVolume>(volume: &V, aabb: &AABB) -> ContainmentType {
        volume.classify_aabb(aabb)
    }

    let frustum = look_at_origin_frustum(std::f32::consts::FRAC_PI_2);
    let aabb = AABB::new(Vec3::splat(-0.5), Vec3::splat(0.5));
    assert_eq!(classify(&frustum, &aabb), ContainmentType::Contains);
}
