use crate::camera::Camera;
use crate::command::{DebugLabel, Depth, DrawCommand, Frame, TextureSlot};
use crate::error::Error;
use crate::map::{MapRowData, TileMap};
use crate::mouse_map::MouseMap;
use crate::tile::{
    TileSheet, HEIGHT_TILE_OFFSET, ODD_ROW_X_OFFSET, TILE_STEP_X, TILE_STEP_Y,
};
use macroquad::prelude::{vec2, Color, Rect, Vec2, WHITE};

// Screen-space anchor compensation for the tile sprites.
const BASE_OFFSET_X: i32 = -32;
const BASE_OFFSET_Y: i32 = -64;

const CAMERA_PAN_SPEED: f32 = 2.0;

const CURSOR_TINT: Color = Color::new(1.0, 1.0, 1.0, 0.3);
const HIGHLIGHT_TINT: Color = Color::new(0.39, 0.58, 0.93, 0.3);

// Compass fan around the pointed-at cell: the origin, three steps out along
// each of the four isometric axes, and the two-step diagonal combinations.
const CURSOR_FAN: [(f32, f32); 16] = [
    (0.0, 0.0),
    (-32.0, 16.0),
    (-64.0, 32.0),
    (-96.0, 48.0),
    (32.0, 16.0),
    (64.0, 32.0),
    (96.0, 48.0),
    (32.0, -16.0),
    (64.0, -32.0),
    (96.0, -48.0),
    (0.0, 32.0),
    (-32.0, 48.0),
    (32.0, 48.0),
    (64.0, 0.0),
    (96.0, -16.0),
    (96.0, 16.0),
];

/// Per-frame input snapshot supplied by the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Pan stick axes, `-1.0..=1.0` per axis; positive Y means stick up.
    pub pan_axis: Vec2,
    /// Current state of the debug-overlay toggle button.
    pub toggle_debug_pressed: bool,
    /// Pointer position in screen space.
    pub pointer: Vec2,
}

/// Edge-triggered toggle: flips only on the Released -> Pressed transition,
/// never while the button is held.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeToggle {
    previous: bool,
    on: bool,
}

impl EdgeToggle {
    /// Feeds the button's current state; returns whether the toggle is on.
    pub fn update(&mut self, pressed: bool) -> bool {
        if pressed && !self.previous {
            self.on = !self.on;
        }
        self.previous = pressed;
        self.on
    }

    /// Current toggle state.
    pub fn is_on(&self) -> bool {
        self.on
    }
}

/// The main character: an animated sprite with a world position.
#[derive(Debug, Clone)]
pub struct CharacterSprite {
    /// World-space position of the sprite's top-left.
    pub position: Vec2,
    frame_width: u32,
    frame_height: u32,
    frame_count: u32,
    frame: u32,
    elapsed: f32,
    frame_duration: f32,
}

impl CharacterSprite {
    /// Sprite animated from a horizontal strip of `frame_count` frames.
    pub fn new(frame_width: u32, frame_height: u32, frame_count: u32) -> Self {
        CharacterSprite {
            position: Vec2::ZERO,
            frame_width,
            frame_height,
            frame_count: frame_count.max(1),
            frame: 0,
            elapsed: 0.0,
            frame_duration: 0.1,
        }
    }

    /// Advances the animation clock.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        while self.elapsed >= self.frame_duration {
            self.elapsed -= self.frame_duration;
            self.frame = (self.frame + 1) % self.frame_count;
        }
    }

    /// Strip region of the current frame.
    pub fn source_rect(&self) -> Rect {
        Rect::new(
            (self.frame * self.frame_width) as f32,
            0.0,
            self.frame_width as f32,
            self.frame_height as f32,
        )
    }
}

/// One cursor-fan slot: a fixed world-space offset from the pointed-at
/// cell plus a highlight flag a caller may set to recolor that slot.
#[derive(Debug, Clone, Copy)]
pub struct FanOffset {
    /// World-space X offset from the fan origin.
    pub x: f32,
    /// World-space Y offset from the fan origin.
    pub y: f32,
    /// Recolors this slot when set.
    pub highlighted: bool,
}

/// Orchestrates the per-frame pipeline: camera pan from input, visible-cell
/// windowing, depth-keyed layer submission, character and cursor draws.
///
/// The engine exclusively owns its [`TileMap`] and [`Camera`]; the host
/// calls [`handle_input`](Engine::handle_input) then
/// [`draw`](Engine::draw) once per frame tick.
#[derive(Debug)]
pub struct Engine {
    map: TileMap,
    camera: Camera,
    sheet: TileSheet,
    character: CharacterSprite,
    cursor_fan: Vec<FanOffset>,
    debug_toggle: EdgeToggle,
    squares_across: usize,
    squares_down: usize,
}

impl Engine {
    /// Engine over a procedurally seeded sample map.
    pub fn new(view_width: i32, view_height: i32, sheet: TileSheet, mouse_map: MouseMap) -> Self {
        let (squares_across, squares_down) = Self::window_size(view_width, view_height);
        let map = TileMap::generate(squares_across + 5, squares_down + 10, mouse_map);
        Self::assemble(view_width, view_height, sheet, map, squares_across, squares_down)
    }

    /// Engine over supplied map data.
    pub fn with_map_data(
        view_width: i32,
        view_height: i32,
        sheet: TileSheet,
        mouse_map: MouseMap,
        data: &[MapRowData],
    ) -> Result<Self, Error> {
        let (squares_across, squares_down) = Self::window_size(view_width, view_height);
        let map = TileMap::with_data(
            squares_across + 5,
            squares_down + 10,
            data,
            mouse_map,
        )?;
        Ok(Self::assemble(
            view_width,
            view_height,
            sheet,
            map,
            squares_across,
            squares_down,
        ))
    }

    // Draw window sized past the viewport so edge tiles never clip early.
    fn window_size(view_width: i32, view_height: i32) -> (usize, usize) {
        (
            (view_width / TILE_STEP_X + 5) as usize,
            (view_height / TILE_STEP_Y + 5) as usize,
        )
    }

    fn assemble(
        view_width: i32,
        view_height: i32,
        sheet: TileSheet,
        map: TileMap,
        squares_across: usize,
        squares_down: usize,
    ) -> Self {
        let camera = Camera::new(
            view_width,
            view_height,
            (map.map_width() as i32 - 2) * TILE_STEP_X,
            (map.map_height() as i32 - 2) * TILE_STEP_Y,
            vec2(BASE_OFFSET_X as f32, BASE_OFFSET_Y as f32),
        );
        let mut character = CharacterSprite::new(64, 64, 4);
        character.position = vec2(100.0, 100.0);
        Engine {
            map,
            camera,
            sheet,
            character,
            cursor_fan: CURSOR_FAN
                .iter()
                .map(|&(x, y)| FanOffset { x, y, highlighted: false })
                .collect(),
            debug_toggle: EdgeToggle::default(),
            squares_across,
            squares_down,
        }
    }

    /// The map this engine draws.
    pub fn map(&self) -> &TileMap {
        &self.map
    }

    /// The engine's camera.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the camera, for hosts that reposition the view
    /// outside of pan input.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// The main character.
    pub fn character(&self) -> &CharacterSprite {
        &self.character
    }

    /// Mutable access to the main character (position, animation).
    pub fn character_mut(&mut self) -> &mut CharacterSprite {
        &mut self.character
    }

    /// The cursor compass fan; callers may set per-slot highlights.
    pub fn cursor_fan_mut(&mut self) -> &mut [FanOffset] {
        &mut self.cursor_fan
    }

    /// Whether the debug overlay is currently on.
    pub fn debug_overlay_on(&self) -> bool {
        self.debug_toggle.is_on()
    }

    /// Applies one frame of input: debug-toggle edge detection, camera pan
    /// and character animation.
    pub fn handle_input(&mut self, input: &InputSnapshot, dt: f32) {
        self.debug_toggle.update(input.toggle_debug_pressed);

        if input.pan_axis.x < 0.0 {
            self.camera.move_by(vec2(-CAMERA_PAN_SPEED, 0.0));
        }
        if input.pan_axis.x > 0.0 {
            self.camera.move_by(vec2(CAMERA_PAN_SPEED, 0.0));
        }
        if input.pan_axis.y > 0.0 {
            self.camera.move_by(vec2(0.0, -CAMERA_PAN_SPEED));
        }
        if input.pan_axis.y < 0.0 {
            self.camera.move_by(vec2(0.0, CAMERA_PAN_SPEED));
        }

        self.character.advance(dt);
    }

    /// Composites one frame: visible cells layer by layer, then the
    /// character, then the cursor fan. The returned frame is already
    /// sorted far-to-near. A tile index outside the sheet aborts the
    /// frame.
    pub fn draw(&self, input: &InputSnapshot) -> Result<Frame, Error> {
        let mut frame = Frame::default();

        let location = self.camera.location();
        let first_x = location.x as i32 / TILE_STEP_X;
        let first_y = location.y as i32 / TILE_STEP_Y;
        // sub-tile remainder, used only to place debug labels
        let offset_x = location.x as i32 % TILE_STEP_X;
        let offset_y = location.y as i32 % TILE_STEP_Y;

        for y in 0..self.squares_down {
            let map_y = first_y + y as i32;
            let row_offset = if map_y % 2 == 1 { ODD_ROW_X_OFFSET } else { 0 };

            for x in 0..self.squares_across {
                let map_x = first_x + x as i32;
                let cell = match self.visible_cell(map_x, map_y) {
                    Some(cell) => cell,
                    None => continue,
                };

                let world = vec2(
                    (map_x * TILE_STEP_X + row_offset) as f32,
                    (map_y * TILE_STEP_Y) as f32,
                );

                for &tile_id in &cell.base_tiles {
                    frame.push(DrawCommand {
                        texture: TextureSlot::TileSheet,
                        position: self.camera.world_to_screen(world),
                        source: Some(self.sheet.source_rect(tile_id)?),
                        tint: WHITE,
                        depth: Depth::Ground,
                    });
                }

                for (level, &tile_id) in cell.height_tiles.iter().enumerate() {
                    let lifted = world - vec2(0.0, (level as i32 * HEIGHT_TILE_OFFSET) as f32);
                    frame.push(DrawCommand {
                        texture: TextureSlot::TileSheet,
                        position: self.camera.world_to_screen(lifted),
                        source: Some(self.sheet.source_rect(tile_id)?),
                        tint: WHITE,
                        depth: Depth::stacked(map_x as usize, map_y as usize, level as u32),
                    });
                }

                // toppers share the level just past the height stack, so
                // they render above it
                let topper_level = cell.height_tiles.len() as u32;
                for &tile_id in &cell.topper_tiles {
                    frame.push(DrawCommand {
                        texture: TextureSlot::TileSheet,
                        position: self.camera.world_to_screen(world),
                        source: Some(self.sheet.source_rect(tile_id)?),
                        tint: WHITE,
                        depth: Depth::stacked(map_x as usize, map_y as usize, topper_level),
                    });
                }

                if self.debug_toggle.is_on() {
                    frame.labels.push(DebugLabel {
                        text: format!("{}, {}", map_x, map_y),
                        position: vec2(
                            (x as i32 * TILE_STEP_X - offset_x
                                + row_offset
                                + BASE_OFFSET_X
                                + 24) as f32,
                            (y as i32 * TILE_STEP_Y - offset_y + BASE_OFFSET_Y + 48) as f32,
                        ),
                    });
                }
            }
        }

        self.draw_character(&mut frame);
        self.draw_cursor_fan(&mut frame, input.pointer);

        frame.sort_commands();
        Ok(frame)
    }

    fn visible_cell(&self, map_x: i32, map_y: i32) -> Option<&crate::map::MapCell> {
        if map_x < 0 || map_y < 0 {
            return None;
        }
        if map_x as usize >= self.map.map_width() || map_y as usize >= self.map.map_height() {
            return None;
        }
        self.map.cell(map_x as usize, map_y as usize)
    }

    fn draw_character(&self, frame: &mut Frame) {
        let position = self.character.position;
        let (cell_x, cell_y) = self
            .map
            .map_cell_at(position.x as i32, position.y as i32);

        // standing off the grid means standing at ground level
        let elevation = if cell_x >= 0 && cell_y >= 0 {
            self.map
                .cell(cell_x as usize, cell_y as usize)
                .map(|c| c.elevation())
                .unwrap_or(0)
        } else {
            0
        };

        frame.push(DrawCommand {
            texture: TextureSlot::Character,
            position: self
                .camera
                .world_to_screen(position - vec2(0.0, elevation as f32)),
            source: Some(self.character.source_rect()),
            tint: WHITE,
            depth: Depth::sprite(cell_x.max(0) as usize, cell_y.max(0) as usize),
        });
    }

    fn draw_cursor_fan(&self, frame: &mut Frame, pointer: Vec2) {
        let world = self.camera.screen_to_world(pointer);
        let (cell_x, cell_y) = self.map.map_cell_at(world.x as i32, world.y as i32);

        let row_offset = if cell_y % 2 == 1 { ODD_ROW_X_OFFSET } else { 0 };
        let origin = vec2(
            (cell_x * TILE_STEP_X + row_offset) as f32,
            ((cell_y + 2) * TILE_STEP_Y) as f32,
        );

        for slot in &self.cursor_fan {
            frame.push(DrawCommand {
                texture: TextureSlot::Cursor,
                position: self
                    .camera
                    .world_to_screen(origin + vec2(slot.x, slot.y)),
                source: Some(Rect::new(0.0, 0.0, 64.0, 32.0)),
                tint: if slot.highlighted { HIGHLIGHT_TINT } else { CURSOR_TINT },
                depth: Depth::Overlay,
            });
        }
    }
}
