use macroquad::prelude::{Color, Image, WHITE};

// Pure marker colors. Macroquad's palette constants (RED, YELLOW, ...) are
// tuned for display and are NOT pure, so they must not be used here.
const UPPER_LEFT: Color = Color::new(1.0, 0.0, 0.0, 1.0); // red
const LOWER_LEFT: Color = Color::new(0.0, 1.0, 0.0, 1.0); // green
const UPPER_RIGHT: Color = Color::new(1.0, 1.0, 0.0, 1.0); // yellow
const LOWER_RIGHT: Color = Color::new(0.0, 0.0, 1.0, 1.0); // blue

/// Correction the hit-test bitmap resolved for a sub-tile point: which
/// diagonal neighbor the point really belongs to, plus how to rebase the
/// local point into that neighbor's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Adjustment {
    pub dx: i32,
    pub dy: i32,
    pub local_dx: i32,
    pub local_dy: i32,
}

/// Hit-test bitmap ("mouse map"): a flat-colored image with the footprint of
/// one isometric diamond. The four corner colors encode which diagonal
/// neighbor a point outside the diamond belongs to; anything else (the
/// diamond interior) means the point stays in its coarse cell.
#[derive(Clone)]
pub struct MouseMap {
    image: Image,
}

impl std::fmt::Debug for MouseMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MouseMap")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl MouseMap {
    /// Wraps a host-supplied decoded bitmap.
    pub fn new(image: Image) -> Self {
        MouseMap { image }
    }

    /// Generates the canonical 64x32 diamond bitmap: white interior,
    /// red/green/yellow/blue corner triangles. Equivalent to the
    /// hand-authored PNG the engine historically shipped, so the crate
    /// works without any asset on disk.
    pub fn standard() -> Self {
        let (w, h) = (64u16, 32u16);
        let mut image = Image::gen_image_color(w, h, WHITE);
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                // pixel-center diamond test, scaled to integers
                let nx = (2 * x + 1 - w as i32).abs();
                let ny = (2 * y + 1 - h as i32).abs();
                if nx * h as i32 + ny * w as i32 <= w as i32 * h as i32 {
                    continue;
                }
                let color = match (x < w as i32 / 2, y < h as i32 / 2) {
                    (true, true) => UPPER_LEFT,
                    (true, false) => LOWER_LEFT,
                    (false, true) => UPPER_RIGHT,
                    (false, false) => LOWER_RIGHT,
                };
                image.set_pixel(x as u32, y as u32, color);
            }
        }
        MouseMap { image }
    }

    /// Bitmap width in pixels.
    pub fn width(&self) -> i32 {
        self.image.width() as i32
    }

    /// Bitmap height in pixels.
    pub fn height(&self) -> i32 {
        self.image.height() as i32
    }

    /// Resolves the neighbor correction for a point local to one bitmap
    /// period. A point outside the bitmap's own bounds yields no
    /// adjustment; that is a deliberate recovery, not an error.
    pub(crate) fn classify(&self, local_x: i32, local_y: i32) -> Adjustment {
        if local_x < 0 || local_y < 0 || local_x >= self.width() || local_y >= self.height() {
            return Adjustment::default();
        }
        let half_w = self.width() / 2;
        let half_h = self.height() / 2;
        let color = self.image.get_pixel(local_x as u32, local_y as u32);

        if color == UPPER_LEFT {
            Adjustment { dx: -1, dy: -1, local_dx: half_w, local_dy: half_h }
        } else if color == LOWER_LEFT {
            Adjustment { dx: -1, dy: 1, local_dx: half_w, local_dy: -half_h }
        } else if color == UPPER_RIGHT {
            Adjustment { dx: 0, dy: -1, local_dx: -half_w, local_dy: half_h }
        } else if color == LOWER_RIGHT {
            Adjustment { dx: 0, dy: 1, local_dx: -half_w, local_dy: -half_h }
        } else {
            Adjustment::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diamond_center_needs_no_adjustment() {
        let map = MouseMap::standard();
        assert_eq!(map.classify(32, 16), Adjustment::default());
    }

    #[test]
    fn corners_map_to_the_four_neighbors() {
        let map = MouseMap::standard();
        assert_eq!(
            map.classify(0, 0),
            Adjustment { dx: -1, dy: -1, local_dx: 32, local_dy: 16 }
        );
        assert_eq!(
            map.classify(0, 31),
            Adjustment { dx: -1, dy: 1, local_dx: 32, local_dy: -16 }
        );
        assert_eq!(
            map.classify(63, 0),
            Adjustment { dx: 0, dy: -1, local_dx: -32, local_dy: 16 }
        );
        assert_eq!(
            map.classify(63, 31),
            Adjustment { dx: 0, dy: 1, local_dx: -32, local_dy: -16 }
        );
    }

    #[test]
    fn out_of_bounds_sample_is_a_no_op() {
        let map = MouseMap::standard();
        assert_eq!(map.classify(-1, 5), Adjustment::default());
        assert_eq!(map.classify(64, 5), Adjustment::default());
    }
}
