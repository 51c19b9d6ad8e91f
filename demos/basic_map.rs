use anyhow::Context;
use iso_tile_engine::{
    view::{present, TextureBundle},
    Engine, InputSnapshot, MouseMap, TileSheet,
};
use macroquad::prelude::*;

fn window_conf() -> Conf {
    Conf {
        window_title: "Isometric Tile Engine".into(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

// Placeholder tile sheet: 130 flat-shaded diamonds so the sample map has
// something to show without assets on disk.
fn build_sheet_image() -> Image {
    let mut image = Image::gen_image_color(640, 832, Color::new(0.0, 0.0, 0.0, 0.0));
    for index in 0u32..130 {
        let origin_x = (index % 10) as i32 * 64;
        let origin_y = (index / 10) as i32 * 64;
        let shade = 0.25 + (index * 37 % 61) as f32 / 100.0;
        let color = Color::new(shade, 0.9 - shade * 0.5, 0.35, 1.0);
        for y in 0..32 {
            for x in 0..64 {
                let nx = (2 * x + 1 - 64i32).abs();
                let ny = (2 * y + 1 - 32i32).abs();
                if nx * 32 + ny * 64 <= 64 * 32 {
                    image.set_pixel(
                        (origin_x + x) as u32,
                        (origin_y + 32 + y) as u32,
                        color,
                    );
                }
            }
        }
    }
    image
}

fn build_cursor_image() -> Image {
    let mut image = Image::gen_image_color(64, 32, Color::new(0.0, 0.0, 0.0, 0.0));
    for y in 0..32i32 {
        for x in 0..64i32 {
            let nx = (2 * x + 1 - 64).abs();
            let ny = (2 * y + 1 - 32).abs();
            if nx * 32 + ny * 64 <= 64 * 32 {
                image.set_pixel(x as u32, y as u32, WHITE);
            }
        }
    }
    image
}

fn setup() -> anyhow::Result<(Engine, TextureBundle)> {
    let sheet_image = build_sheet_image();
    let textures = TextureBundle {
        tile_sheet: Texture2D::from_image(&sheet_image),
        character: Texture2D::from_image(&Image::gen_image_color(256, 64, SKYBLUE)),
        cursor: Texture2D::from_image(&build_cursor_image()),
    };
    textures.tile_sheet.set_filter(FilterMode::Nearest);

    let sheet = TileSheet::new(640, 832).context("describing the tile sheet")?;
    let engine = Engine::new(
        screen_width() as i32,
        screen_height() as i32,
        sheet,
        MouseMap::standard(),
    );
    Ok((engine, textures))
}

#[macroquad::main(window_conf)]
async fn main() {
    let (mut engine, textures) = setup().expect("engine setup");

    loop {
        let pointer = mouse_position();
        let input = InputSnapshot {
            pan_axis: vec2(
                is_key_down(KeyCode::Right) as i32 as f32
                    - is_key_down(KeyCode::Left) as i32 as f32,
                is_key_down(KeyCode::Up) as i32 as f32
                    - is_key_down(KeyCode::Down) as i32 as f32,
            ),
            toggle_debug_pressed: is_key_down(KeyCode::H),
            pointer: vec2(pointer.0, pointer.1),
        };
        engine.handle_input(&input, get_frame_time());

        clear_background(BLACK);
        let frame = engine.draw(&input).expect("frame compositing");
        present(&frame, &textures);

        draw_text(
            &format!("FPS: {}  (arrows pan, H toggles coords)", get_fps()),
            20.0,
            30.0,
            24.0,
            WHITE,
        );

        next_frame().await;
    }
}
