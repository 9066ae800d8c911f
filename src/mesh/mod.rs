// mesh/ - Segment geometry
//
// MeshBuilder accumulates quads per material group, build() bakes normals
// and UVs, and MeshCollider is derived from the finished mesh.

mod builder;
mod collider;
mod uv;

pub use builder::{MeshBuilder, SegmentMesh, Submesh};
pub use collider::MeshCollider;
pub use uv::planar_uv;
