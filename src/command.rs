use crate::tile::TILE_WIDTH;
use macroquad::prelude::{Color, Rect, Vec2};

/// Which of the engine's textures a command blits from.
///
/// Commands carry slots instead of texture handles so the core stays free of
/// any GPU context; the host binds each slot to a real texture when it
/// presents the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    /// The tile sprite sheet.
    TileSheet,
    /// The main character sprite.
    Character,
    /// The cursor highlight icon.
    Cursor,
}

/// Back-to-front sort key for overlapping sprites.
///
/// An explicit integer key with a total order, replacing the sprite-batch
/// float depth the engine historically used (`0.7 - (x + y*64)/maxdepth`
/// minus a per-level epsilon): the ordering is identical, without the
/// float-precision collapse on large maps or tall stacks. Ascending `Depth`
/// is far-to-near; ties keep submission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Depth {
    /// Ground layer, always behind everything stacked.
    Ground,
    /// Height/topper stack entry of one cell.
    Stacked {
        /// Cell ordering key; grows toward the viewer.
        cell: u32,
        /// Position within the cell's stack, bottom to top.
        level: u32,
    },
    /// Front-most overlay (cursor highlight).
    Overlay,
}

impl Depth {
    /// Key of the stack entry at `level` in cell `(map_x, map_y)`.
    pub fn stacked(map_x: usize, map_y: usize, level: u32) -> Self {
        Depth::Stacked {
            cell: (map_x + map_y * TILE_WIDTH as usize) as u32,
            level,
        }
    }

    /// Key of a free sprite standing on cell `(map_x, map_y)`: above that
    /// cell's whole stack, still behind nearer cells.
    pub fn sprite(map_x: usize, map_y: usize) -> Self {
        Depth::Stacked {
            cell: (map_x + map_y * TILE_WIDTH as usize) as u32,
            level: u32::MAX,
        }
    }
}

/// One sprite blit. `source = None` means the whole texture.
#[derive(Debug, Clone, Copy)]
pub struct DrawCommand {
    /// Texture to sample from.
    pub texture: TextureSlot,
    /// Screen-space top-left of the blit.
    pub position: Vec2,
    /// Region of the texture to sample, or the whole texture.
    pub source: Option<Rect>,
    /// Color modulation.
    pub tint: Color,
    /// Back-to-front ordering key.
    pub depth: Depth,
}

/// Debug overlay text; the host draws it with whatever font it has, on top
/// of everything.
#[derive(Debug, Clone)]
pub struct DebugLabel {
    /// Text to display.
    pub text: String,
    /// Screen-space position.
    pub position: Vec2,
}

/// Everything the engine wants on screen for one frame.
#[derive(Debug, Default)]
pub struct Frame {
    /// Sprite blits, in submission order until sorted.
    pub commands: Vec<DrawCommand>,
    /// Debug overlay labels (empty unless the overlay is toggled on).
    pub labels: Vec<DebugLabel>,
}

impl Frame {
    pub(crate) fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Orders the commands far-to-near. The sort is stable, so commands
    /// with equal depth keep their submission order (base tiles row-major,
    /// stack entries in insertion order).
    pub fn sort_commands(&mut self) {
        self.commands.sort_by_key(|c| c.depth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_orders_ground_stack_overlay() {
        assert!(Depth::Ground < Depth::stacked(0, 0, 0));
        assert!(Depth::stacked(3, 2, 9) < Depth::Overlay);
    }

    #[test]
    fn nearer_cells_sort_in_front() {
        assert!(Depth::stacked(4, 10, 0) < Depth::stacked(5, 10, 0));
        assert!(Depth::stacked(4, 10, 0) < Depth::stacked(4, 11, 0));
        // higher stack levels draw in front at the same cell
        assert!(Depth::stacked(4, 10, 0) < Depth::stacked(4, 10, 1));
        // a sprite stands above its cell's whole stack
        assert!(Depth::stacked(4, 10, 7) < Depth::sprite(4, 10));
    }
}
