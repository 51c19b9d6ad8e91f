use crate::error::Error;
use macroquad::prelude::Rect;

/// Horizontal distance between neighboring cells, in pixels.
pub const TILE_STEP_X: i32 = 64;
/// Vertical distance between neighboring rows, in pixels.
pub const TILE_STEP_Y: i32 = 16;
/// Extra X shift applied to odd map rows (staggered brick layout).
pub const ODD_ROW_X_OFFSET: i32 = 32;
/// Vertical lift per entry in a cell's height stack, in pixels.
pub const HEIGHT_TILE_OFFSET: i32 = 32;
/// Width of one sprite in the tile sheet, in pixels.
pub const TILE_WIDTH: i32 = 64;
/// Height of one sprite in the tile sheet, in pixels.
pub const TILE_HEIGHT: i32 = 64;

/// Geometry of the tile sprite sheet: a regular grid of
/// [`TILE_WIDTH`]x[`TILE_HEIGHT`] cells.
///
/// Only the sheet's pixel dimensions live here; the decoded texture itself
/// stays with the host so the core remains usable without a GPU context.
#[derive(Debug, Clone, Copy)]
pub struct TileSheet {
    width: u32,
    height: u32,
}

impl TileSheet {
    /// Describes a sheet of `width`x`height` pixels.
    ///
    /// Both dimensions must be positive multiples of the tile footprint.
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        if width == 0
            || height == 0
            || width % TILE_WIDTH as u32 != 0
            || height % TILE_HEIGHT as u32 != 0
        {
            return Err(Error::InvalidSheetSize { width, height });
        }
        Ok(TileSheet { width, height })
    }

    /// Number of sprite columns in the sheet.
    pub fn columns(&self) -> u32 {
        self.width / TILE_WIDTH as u32
    }

    /// Total number of sprites the sheet holds.
    pub fn tile_count(&self) -> u32 {
        self.columns() * (self.height / TILE_HEIGHT as u32)
    }

    /// Pixel region of the sheet holding the sprite at `index`.
    ///
    /// Indices run row-major across the grid. An index past the end of the
    /// sheet is invalid content data and fails rather than sampling
    /// whatever pixels happen to sit past the sheet.
    pub fn source_rect(&self, index: u32) -> Result<Rect, Error> {
        if index >= self.tile_count() {
            return Err(Error::TileIndexOutOfRange {
                index,
                tile_count: self.tile_count(),
            });
        }
        let col = index % self.columns();
        let row = index / self.columns();
        Ok(Rect::new(
            (col * TILE_WIDTH as u32) as f32,
            (row * TILE_HEIGHT as u32) as f32,
            TILE_WIDTH as f32,
            TILE_HEIGHT as f32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_ragged_sheet() {
        assert!(matches!(
            TileSheet::new(100, 64),
            Err(Error::InvalidSheetSize { .. })
        ));
        assert!(matches!(
            TileSheet::new(0, 64),
            Err(Error::InvalidSheetSize { .. })
        ));
    }

    #[test]
    fn first_rect_sits_at_origin() {
        let sheet = TileSheet::new(640, 640).unwrap();
        assert_eq!(sheet.source_rect(0).unwrap(), Rect::new(0.0, 0.0, 64.0, 64.0));
    }
}
