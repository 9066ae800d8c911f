// collider.rs - Triangle collider baked from a segment mesh

use glam::Vec3;

use super::builder::SegmentMesh;

#[derive(Debug, Clone, PartialEq)]
pub struct MeshCollider {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
    pub min: Vec3,
    pub max: Vec3,
}

impl MeshCollider {
    pub fn from_mesh(mesh: &SegmentMesh) -> Self {
        let (min, max) = if mesh.positions.is_empty() {
            (Vec3::ZERO, Vec3::ZERO)
        } else {
            mesh.positions.iter().fold(
                (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
                |(mn, mx), &p| (mn.min(p), mx.max(p)),
            )
        };

        Self {
            vertices: mesh.positions.clone(),
            triangles: mesh.triangles.clone(),
            min,
            max,
        }
    }

    pub fn size(&self) -> Vec3 { self.max - self.min }
}
