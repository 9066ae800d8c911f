// level/ - Generation inputs
//
// The occupancy grid read from an image, and the settings that shape
// each generated segment.

mod grid;
mod settings;

pub use grid::TileGrid;
pub use settings::{GenerationSettings, MaterialRef};

#[cfg(test)]
pub(crate) use grid::grid_from_rows;
