// grid.rs - Occupancy grid extracted from a black/white image
//
// Coordinates follow texture space: (0, 0) is the bottom-left pixel and y
// grows upward, so image row 0 (top) becomes grid row height - 1.

use ndarray::Array2;

use crate::error::{LevelError, Result};

/// Filled cells are exact opaque black
const FILLED: [u8; 4] = [0, 0, 0, 255];

#[derive(Debug, Clone, PartialEq)]
pub struct TileGrid {
    // Indexed [[y, x]]
    cells: Array2<bool>,
}

impl TileGrid {
    /// Build from a row-major RGBA8 buffer, first row at the top of the image
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        // Computed in u32 so wasm32 and 64-bit hosts agree on the limit
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(LevelError::ImageTooLarge { width, height })?;
        if rgba.len() != expected {
            return Err(LevelError::PixelBuffer { expected, actual: rgba.len() });
        }

        let (w, h) = (width as usize, height as usize);
        let cells = Array2::from_shape_fn((h, w), |(y, x)| {
            let row = h - 1 - y;
            let i = (row * w + x) * 4;
            rgba[i..i + 4] == FILLED
        });
        Ok(Self { cells })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_image(img: &image::DynamicImage) -> Self {
        let rgba = img.to_rgba8();
        let (w, h) = (rgba.width() as usize, rgba.height() as usize);
        let cells = Array2::from_shape_fn((h, w), |(y, x)| {
            rgba.get_pixel(x as u32, (h - 1 - y) as u32).0 == FILLED
        });
        Self { cells }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open(path: &std::path::Path) -> Result<Self> {
        let img = image::open(path)?;
        Ok(Self::from_image(&img))
    }

    pub fn width(&self) -> u32 { self.cells.ncols() as u32 }
    pub fn height(&self) -> u32 { self.cells.nrows() as u32 }

    #[inline]
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width() as i64 && y < self.height() as i64
    }

    /// Out-of-bounds cells read as unfilled
    #[inline]
    pub fn is_filled(&self, x: i64, y: i64) -> bool {
        self.in_bounds(x, y) && self.cells[[y as usize, x as usize]]
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Filled cells, x outer and y inner
    pub fn filled_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let (w, h) = (self.width(), self.height());
        (0..w)
            .flat_map(move |x| (0..h).map(move |y| (x, y)))
            .filter(|&(x, y)| self.cells[[y as usize, x as usize]])
    }
}

#[cfg(test)]
pub(crate) fn grid_from_rows(rows: &[&str]) -> TileGrid {
    // '#' = filled, anything else = empty; first row is the top of the image
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |r| r.len()) as u32;
    let rgba: Vec<u8> = rows
        .iter()
        .flat_map(|r| r.chars())
        .flat_map(|c| if c == '#' { FILLED } else { [255, 255, 255, 255] })
        .collect();
    TileGrid::from_rgba(width, height, &rgba).expect("well-formed rows")
}
