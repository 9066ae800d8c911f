// generator.rs - Tile segment generation
//
// One segment per filled cell. Floors and ceilings are always emitted
// (subject to settings); a wall is emitted only on sides whose neighbour
// is out of bounds or empty.

use glam::{Vec2, Vec3};

use super::node::SegmentNode;
use crate::level::{GenerationSettings, TileGrid};
use crate::mesh::{MeshBuilder, MeshCollider, SegmentMesh};

// Material group indices, in creation order
pub const FLOOR_GROUP: usize = 0;
pub const WALL_GROUP: usize = 1;
pub const CEILING_GROUP: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /// Grid offset of the neighbour on this side (north = +y)
    pub fn offset(self) -> (i64, i64) {
        match self {
            Side::North => (0, 1),
            Side::East => (1, 0),
            Side::South => (0, -1),
            Side::West => (-1, 0),
        }
    }

    /// Wall corners in segment space, wound to face into the tile
    fn wall(self, s: f32, h: f32) -> [Vec3; 4] {
        match self {
            Side::North => [
                Vec3::new(s, 0.0, s),
                Vec3::new(s, h, s),
                Vec3::new(-s, 0.0, s),
                Vec3::new(-s, h, s),
            ],
            Side::East => [
                Vec3::new(s, 0.0, -s),
                Vec3::new(s, h, -s),
                Vec3::new(s, 0.0, s),
                Vec3::new(s, h, s),
            ],
            Side::South => [
                Vec3::new(s, h, -s),
                Vec3::new(s, 0.0, -s),
                Vec3::new(-s, h, -s),
                Vec3::new(-s, 0.0, -s),
            ],
            Side::West => [
                Vec3::new(-s, h, -s),
                Vec3::new(-s, 0.0, -s),
                Vec3::new(-s, h, s),
                Vec3::new(-s, 0.0, s),
            ],
        }
    }
}

/// True when a wall is needed between (x, y) and its neighbour on `side`
#[inline]
pub fn needs_wall(grid: &TileGrid, x: u32, y: u32, side: Side) -> bool {
    let (dx, dy) = side.offset();
    let (nx, ny) = (x as i64 + dx, y as i64 + dy);
    !grid.in_bounds(nx, ny) || !grid.is_filled(nx, ny)
}

/// Segment origin relative to the level root
pub fn segment_position(grid: &TileGrid, settings: &GenerationSettings, x: u32, y: u32) -> Vec3 {
    let spacing = settings.tile_size * 2.0;
    let gx = x as i64 - (grid.width() / 2) as i64;
    let gy = y as i64 - (grid.height() / 2) as i64;
    Vec3::new(gx as f32 * spacing, 0.0, gy as f32 * spacing)
}

pub fn create_segments(grid: &TileGrid, settings: &GenerationSettings) -> Vec<SegmentNode> {
    grid.filled_cells()
        .map(|(x, y)| create_segment(grid, settings, x, y))
        .collect()
}

pub fn create_segment(
    grid: &TileGrid,
    settings: &GenerationSettings,
    x: u32,
    y: u32,
) -> SegmentNode {
    let mesh = create_segment_mesh(grid, settings, x, y);
    let collider = settings.add_collider.then(|| MeshCollider::from_mesh(&mesh));

    tracing::debug!("segment {}, {}: {} quads", x, y, mesh.quad_count());

    SegmentNode {
        name: format!("{}, {}", x, y),
        tag: settings.tag().map(str::to_owned),
        cell: (x, y),
        local_position: segment_position(grid, settings, x, y),
        mesh,
        collider,
    }
}

pub fn create_segment_mesh(
    grid: &TileGrid,
    settings: &GenerationSettings,
    x: u32,
    y: u32,
) -> SegmentMesh {
    let mut builder = MeshBuilder::new();
    builder.add_material_group(settings.floor_material.clone());
    builder.add_material_group(settings.wall_material.clone());
    builder.add_material_group(settings.ceiling_material.clone());

    let s = settings.tile_size;
    let h = settings.tile_height;

    if settings.create_floors {
        builder.add_quad(
            Vec3::new(-s, 0.0, -s),
            Vec3::new(s, 0.0, -s),
            Vec3::new(-s, 0.0, s),
            Vec3::new(s, 0.0, s),
            FLOOR_GROUP,
        );
    }

    if settings.create_walls {
        for side in Side::ALL {
            if needs_wall(grid, x, y, side) {
                let [v1, v2, v3, v4] = side.wall(s, h);
                builder.add_quad(v1, v2, v3, v4, WALL_GROUP);
            }
        }
    }

    if settings.create_ceilings {
        builder.add_quad(
            Vec3::new(s, h, -s),
            Vec3::new(-s, h, -s),
            Vec3::new(s, h, s),
            Vec3::new(-s, h, s),
            CEILING_GROUP,
        );
    }

    builder.build(Vec2::from(settings.uv_scale))
}
