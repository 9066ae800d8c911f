// scene/ - Generated level scene graph
//
// LevelRoot owns one SegmentNode per filled image cell:
// - Name from the source cell ("x, y")
// - Optional tag
// - Position on a grid spaced 2 * tile_size apart
// - Mesh with floor/wall/ceiling material groups
// - Optional mesh collider

mod generator;
mod node;

pub use generator::{
    create_segment, create_segment_mesh, create_segments, needs_wall, segment_position, Side,
    CEILING_GROUP, FLOOR_GROUP, WALL_GROUP,
};
pub use node::{GenerationReport, LevelRoot, SegmentNode};
