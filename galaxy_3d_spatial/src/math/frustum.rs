/// Frustum — six clipping planes for visibility culling.
///
/// Each plane is represented as a Vec4 (A, B, C, D) where:
/// - (A, B, C) is the inward-pointing normal
/// - D is the signed distance
/// - A point P is inside the frustum if dot(plane, P_homogeneous) >= 0 for all planes
///
/// The caller computes the frustum (usually from the active camera).
/// `from_view_projection()` is provided as a utility.

use glam::{Mat4, Vec3, Vec4};
use super::aabb::AABB;
use super::containment::{BoundingVolume, ContainmentType};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Six frustum planes for culling.
///
/// Each plane is (A, B, C, D) where Ax + By + Cz + D = 0.
/// Normal (A, B, C) points inward (toward the visible volume).
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// Uses the Gribb & Hartmann method. Works for both perspective
    /// and orthographic projections.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        Self::from_planes([
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            Vec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ])
    }

    /// Build a frustum from six inward-facing planes, normalizing each one.
    pub fn from_planes(mut planes: [Vec4; 6]) -> Self {
        for plane in &mut planes {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Box-shaped frustum matching `aabb` exactly, e.g. the volume of an
    /// axis-aligned orthographic camera.
    pub fn from_aabb(aabb: &AABB) -> Self {
        Self::from_planes([
            Vec4::new(1.0, 0.0, 0.0, -aabb.min.x),
            Vec4::new(-1.0, 0.0, 0.0, aabb.max.x),
            Vec4::new(0.0, 1.0, 0.0, -aabb.min.y),
            Vec4::new(0.0, -1.0, 0.0, aabb.max.y),
            Vec4::new(0.0, 0.0, 1.0, -aabb.min.z),
            Vec4::new(0.0, 0.0, -1.0, aabb.max.z),
        ])
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Uses the "positive vertex" test: for each plane, find the AABB corner
    /// most in the direction of the plane normal. If that corner is outside,
    /// the AABB is fully outside.
    ///
    /// May return false positives (conservative), never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes.iter().all(|plane| {
            let normal = plane.truncate();
            normal.dot(positive_vertex(normal, aabb)) + plane.w >= 0.0
        })
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// - If the p-vertex is outside any plane → `Disjoint` (early out)
    /// - If the n-vertex is outside any plane → at least `Intersects`
    /// - If all n-vertices are inside all planes → `Contains`
    pub fn classify_aabb(&self, aabb: &AABB) -> ContainmentType {
        let mut all_inside = true;

        for plane in &self.planes {
            let normal = plane.truncate();

            if normal.dot(positive_vertex(normal, aabb)) + plane.w < 0.0 {
                return ContainmentType::Disjoint;
            }

            if normal.dot(negative_vertex(normal, aabb)) + plane.w < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { ContainmentType::Contains } else { ContainmentType::Intersects }
    }
}

/// Corner most in the direction of the normal
fn positive_vertex(normal: Vec3, aabb: &AABB) -> Vec3 {
    Vec3::new(
        if normal.x >= 0.0 { aabb.max.x } else { aabb.min.x },
        if normal.y >= 0.0 { aabb.max.y } else { aabb.min.y },
        if normal.z >= 0.0 { aabb.max.z } else { aabb.min.z },
    )
}

/// Corner least in the direction of the normal
fn negative_vertex(normal: Vec3, aabb: &AABB) -> Vec3 {
    Vec3::new(
        if normal.x >= 0.0 { aabb.min.x } else { aabb.max.x },
        if normal.y >= 0.0 { aabb.min.y } else { aabb.max.y },
        if normal.z >= 0.0 { aabb.min.z } else { aabb.max.z },
    )
}

impl BoundingVolume for Frustum {
    fn classify_aabb(&self, aabb: &AABB) -> ContainmentType {
        Frustum::classify_aabb(self, aabb)
    }

    fn intersects_aabb(&self, aabb: &AABB) -> bool {
        Frustum::intersects_aabb(self, aabb)
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
