// builder.rs - Quad accumulator for one segment
//
// Collects positions and triangles, and remembers which material group
// each triangle belongs to. Consumed by build(), never reused.

use glam::{Vec2, Vec3};

use super::uv::planar_uv;
use crate::level::MaterialRef;

/// Faces of one segment sharing a material
#[derive(Debug, Clone, PartialEq)]
pub struct Submesh {
    pub material: MaterialRef,
    pub triangles: Vec<[u32; 3]>,
}

/// Finished mesh: four vertices per quad, shared face normal per quad
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentMesh {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub triangles: Vec<[u32; 3]>,
    pub submeshes: Vec<Submesh>,
}

impl SegmentMesh {
    pub fn quad_count(&self) -> usize { self.positions.len() / 4 }
    pub fn is_empty(&self) -> bool { self.positions.is_empty() }
}

struct MaterialGroup {
    material: MaterialRef,
    triangles: Vec<[u32; 3]>,
}

pub struct MeshBuilder {
    positions: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
    groups: Vec<MaterialGroup>,
}

impl MeshBuilder {
    pub fn new() -> Self {
        Self { positions: Vec::new(), triangles: Vec::new(), groups: Vec::new() }
    }

    /// Returns the new group's index
    pub fn add_material_group(&mut self, material: MaterialRef) -> usize {
        self.groups.push(MaterialGroup { material, triangles: Vec::new() });
        self.groups.len() - 1
    }

    /// Quad v1-v2 / v3-v4 as two triangles: (1, 3, 2) and (3, 4, 2)
    pub fn add_quad(&mut self, v1: Vec3, v2: Vec3, v3: Vec3, v4: Vec3, group: usize) {
        let i = self.positions.len() as u32;
        self.positions.extend_from_slice(&[v1, v2, v3, v4]);

        let tris = [[i, i + 2, i + 1], [i + 2, i + 3, i + 1]];
        self.triangles.extend_from_slice(&tris);
        self.groups[group].triangles.extend_from_slice(&tris);
    }

    pub fn build(self, uv_scale: Vec2) -> SegmentMesh {
        let mut normals = Vec::with_capacity(self.positions.len());
        let mut uvs = Vec::with_capacity(self.positions.len());

        for quad in self.positions.chunks_exact(4) {
            // First triangle (0, 2, 1) decides the face direction
            let normal = (quad[2] - quad[0]).cross(quad[1] - quad[0]).normalize_or_zero();
            for &p in quad {
                normals.push(normal);
                uvs.push(planar_uv(p, normal, uv_scale));
            }
        }

        SegmentMesh {
            positions: self.positions,
            normals,
            uvs,
            triangles: self.triangles,
            submeshes: self
                .groups
                .into_iter()
                .map(|g| Submesh { material: g.material, triangles: g.triangles })
                .collect(),
        }
    }
}

impl Default for MeshBuilder {
    fn default() -> Self { Self::new() }
}
