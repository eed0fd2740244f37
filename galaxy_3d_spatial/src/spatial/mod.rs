//! Octree spatial index
//!
//! Hierarchical subdivision of a fixed world volume holding static
//! objects keyed by their world bounds. Provides frustum (or any
//! `BoundingVolume`) visibility queries and point-to-leaf lookup.

mod config;
mod octree;
mod octree_key;
mod octree_node;
mod spatial_object;

pub use config::{OctreeConfig, MAX_OCTREE_DEPTH};
pub use octree::{Octree, OctreeStats};
pub use octree_key::OctreeKey;
pub use octree_node::{OctreeNode, OCTANT_COUNT};
pub use spatial_object::{InsertOutcome, OctreeItem, SkipReason, SpatialObject};
