#![warn(missing_docs)]

//! Isometric tile map, camera and depth-sorted compositing core.
//!
//! The crate models a staggered isometric world as a grid of cells, each
//! stacking three tile layers (ground, elevation, toppers), and composites
//! the visible window into an ordered list of draw commands every frame.
//! Mouse picking runs the other way: a color-coded hit-test bitmap maps
//! world points back to map cells, diamond edges included.
//!
//! The host owns the game loop, textures and input devices; the core only
//! consumes decoded pixel buffers and per-frame input snapshots, and emits
//! [`Frame`]s for the host to blit (see [`view`] for the macroquad glue).

mod camera;
mod command;
mod engine;
mod error;
mod loader {
    pub mod json_loader;
}
mod map;
mod mouse_map;
mod tile;
/// Macroquad presenter for engine frames.
pub mod view;

pub use camera::Camera;
pub use command::{DebugLabel, Depth, DrawCommand, Frame, TextureSlot};
pub use engine::{CharacterSprite, EdgeToggle, Engine, FanOffset, InputSnapshot};
pub use error::Error;
pub use loader::json_loader::{decode_map_data_file, decode_map_data_str};
pub use map::{CellHit, MapCell, MapCellData, MapRow, MapRowData, TileMap};
pub use mouse_map::MouseMap;
pub use tile::{
    TileSheet, HEIGHT_TILE_OFFSET, ODD_ROW_X_OFFSET, TILE_HEIGHT, TILE_STEP_X, TILE_STEP_Y,
    TILE_WIDTH,
};
