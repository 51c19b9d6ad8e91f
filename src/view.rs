use crate::command::{Frame, TextureSlot};
use macroquad::prelude::{draw_text, draw_texture_ex, DrawTextureParams, Texture2D, WHITE};

/// Textures bound to the engine's [`TextureSlot`]s.
pub struct TextureBundle {
    /// Tile sprite sheet.
    pub tile_sheet: Texture2D,
    /// Main character strip.
    pub character: Texture2D,
    /// Cursor highlight icon.
    pub cursor: Texture2D,
}

impl TextureBundle {
    fn resolve(&self, slot: TextureSlot) -> &Texture2D {
        match slot {
            TextureSlot::TileSheet => &self.tile_sheet,
            TextureSlot::Character => &self.character,
            TextureSlot::Cursor => &self.cursor,
        }
    }
}

/// Blits a frame's commands in their (already sorted) back-to-front order,
/// then draws debug labels on top.
pub fn present(frame: &Frame, textures: &TextureBundle) {
    for command in &frame.commands {
        draw_texture_ex(
            textures.resolve(command.texture),
            command.position.x,
            command.position.y,
            command.tint,
            DrawTextureParams {
                source: command.source,
                ..Default::default()
            },
        );
    }

    for label in &frame.labels {
        draw_text(&label.text, label.position.x, label.position.y, 16.0, WHITE);
    }
}
