//! Scene-side collaborators of the octree
//!
//! Static objects and their owning scene, camera cullers consuming
//! octree queries, and locality bucketing built on leaf keys.

mod culler;
mod locality;
mod static_object;
mod static_scene;

pub use culler::{Culler, BruteForceCuller, FrustumCuller};
pub use locality::group_by_locality;
pub use static_object::{SceneObjectFlags, SceneObjectKey, StaticObject};
pub use static_scene::StaticScene;
