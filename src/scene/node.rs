// node.rs - Level root and its generated children

use glam::Vec3;

use super::generator::{self, CEILING_GROUP, FLOOR_GROUP, WALL_GROUP};
use crate::error::Result;
use crate::level::{GenerationSettings, TileGrid};
use crate::mesh::{MeshCollider, SegmentMesh};

/// One generated tile, positioned relative to the level root
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentNode {
    /// "x, y" of the source cell
    pub name: String,
    pub tag: Option<String>,
    pub cell: (u32, u32),
    pub local_position: Vec3,
    pub mesh: SegmentMesh,
    pub collider: Option<MeshCollider>,
}

impl SegmentNode {
    /// Vertex positions in level space
    pub fn world_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.mesh.positions.iter().map(move |&p| p + self.local_position)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub segments: usize,
    pub floors: usize,
    pub walls: usize,
    pub ceilings: usize,
}

impl GenerationReport {
    fn from_children(children: &[SegmentNode]) -> Self {
        let quads =
            |node: &SegmentNode, group: usize| node.mesh.submeshes[group].triangles.len() / 2;
        children.iter().fold(Self::default(), |mut r, node| {
            r.segments += 1;
            r.floors += quads(node, FLOOR_GROUP);
            r.walls += quads(node, WALL_GROUP);
            r.ceilings += quads(node, CEILING_GROUP);
            r
        })
    }

    pub fn quads(&self) -> usize { self.floors + self.walls + self.ceilings }
}

/// Owner of the generated segments; every run replaces them wholesale
#[derive(Debug, Default)]
pub struct LevelRoot {
    children: Vec<SegmentNode>,
}

impl LevelRoot {
    pub fn new() -> Self { Self::default() }

    pub fn generate(
        &mut self,
        grid: &TileGrid,
        settings: &GenerationSettings,
    ) -> Result<GenerationReport> {
        settings.validate()?;

        self.destroy_children();
        self.children = generator::create_segments(grid, settings);

        let report = GenerationReport::from_children(&self.children);
        tracing::info!(
            "Level generated successfully: {} segments, {} quads ({}x{} image)",
            report.segments,
            report.quads(),
            grid.width(),
            grid.height()
        );
        Ok(report)
    }

    /// Returns how many children were removed
    pub fn destroy_children(&mut self) -> usize {
        let n = self.children.len();
        self.children.clear();
        if n > 0 {
            tracing::debug!("destroyed {} segments", n);
        }
        n
    }

    pub fn children(&self) -> &[SegmentNode] { &self.children }
    pub fn child_count(&self) -> usize { self.children.len() }

    pub fn child(&self, name: &str) -> Option<&SegmentNode> {
        self.children.iter().find(|c| c.name == name)
    }
}
