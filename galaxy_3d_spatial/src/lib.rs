/*!
# Galaxy 3D Spatial

Static spatial indexing for the Galaxy 3D engine.

This crate partitions the static geometry of a scene into an octree so that,
each frame, only objects potentially visible to a camera frustum need to be
considered for rendering, and so that a world position can be mapped to a
stable spatial bucket.

## Architecture

- **math**: AABB, Frustum and the 3-way containment classification
- **spatial**: Octree, OctreeNode, OctreeKey and the SpatialObject contract
- **scene**: static scene objects, cullers and locality bucketing built on the octree
- **log**: pluggable logger used by every module

The octree holds no global state. Each instance is built, queried and
dropped independently by its owner.
*/

// Internal modules
mod error;
pub mod log;
pub mod math;
pub mod spatial;
pub mod scene;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, set_min_severity, min_severity,
        };
    }

    // Geometry primitives
    pub mod math {
        pub use crate::math::*;
    }

    // Octree spatial index
    pub mod spatial {
        pub use crate::spatial::*;
    }

    // Scene-side collaborators
    pub mod scene {
        pub use crate::scene::*;
    }
}

// Re-export math library at crate root
pub use glam;
