// uv.rs - Planar auto-unwrap
//
// Each face is projected onto the plane of its dominant normal axis,
// then scaled:
//   +-Y -> (x, z)   floors and ceilings
//   +-Z -> (x, y)   north/south walls
//   +-X -> (z, y)   east/west walls

use glam::{Vec2, Vec3};

#[inline]
pub fn planar_uv(p: Vec3, normal: Vec3, scale: Vec2) -> Vec2 {
    let n = normal.abs();
    let projected = if n.y >= n.x && n.y >= n.z {
        Vec2::new(p.x, p.z)
    } else if n.z >= n.x {
        Vec2::new(p.x, p.y)
    } else {
        Vec2::new(p.z, p.y)
    };
    projected * scale
}
