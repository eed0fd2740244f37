//! Geometry primitives — bounding boxes, frustums and containment tests.
//!
//! These are the volumes the octree partitions space with and is
//! queried against. Bounds of scene objects are computed by the caller.

mod aabb;
mod containment;
mod frustum;

pub use aabb::AABB;
pub use containment::{BoundingVolume, ContainmentType};
pub use frustum::{
    Frustum,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
