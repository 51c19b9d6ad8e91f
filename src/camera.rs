use macroquad::prelude::{vec2, Vec2};

/// Viewport/world transform with clamped scrolling.
///
/// The camera is plain owned state; the engine holds exactly one and nothing
/// else mutates it.
#[derive(Debug, Clone)]
pub struct Camera {
    location: Vec2,
    /// Viewport width in pixels.
    pub view_width: i32,
    /// Viewport height in pixels.
    pub view_height: i32,
    /// World width in pixels.
    pub world_width: i32,
    /// World height in pixels.
    pub world_height: i32,
    /// Constant pixel offset applied to all screen-space output,
    /// compensating for the tile sprite anchor point.
    pub display_offset: Vec2,
}

impl Camera {
    /// Camera at the world origin.
    pub fn new(
        view_width: i32,
        view_height: i32,
        world_width: i32,
        world_height: i32,
        display_offset: Vec2,
    ) -> Self {
        Camera {
            location: Vec2::ZERO,
            view_width,
            view_height,
            world_width,
            world_height,
            display_offset,
        }
    }

    /// World-space top-left of the viewport.
    pub fn location(&self) -> Vec2 {
        self.location
    }

    /// Moves the viewport, clamped to `[0, world - view]` per axis.
    ///
    /// When the world is smaller than the view the scroll range collapses
    /// and the camera pins to the origin.
    pub fn set_location(&mut self, location: Vec2) {
        let max_x = ((self.world_width - self.view_width) as f32).max(0.0);
        let max_y = ((self.world_height - self.view_height) as f32).max(0.0);
        self.location = vec2(
            location.x.clamp(0.0, max_x),
            location.y.clamp(0.0, max_y),
        );
    }

    /// Pans the viewport by `offset`, subject to the same clamping.
    pub fn move_by(&mut self, offset: Vec2) {
        self.set_location(self.location + offset);
    }

    /// `p - location + display_offset`.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.location + self.display_offset
    }

    /// `p + location - display_offset`. Exact inverse of
    /// [`world_to_screen`](Self::world_to_screen) while the location is
    /// unchanged between the two calls.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.location - self.display_offset
    }
}
