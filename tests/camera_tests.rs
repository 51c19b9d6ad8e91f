// tests/camera_tests.rs

use iso_tile_engine::Camera;
use macroquad::prelude::vec2;

fn camera() -> Camera {
    Camera::new(800, 600, 1600, 1200, vec2(-32.0, -64.0))
}

#[test]
fn screen_world_round_trip() {
    let mut cam = camera();
    cam.set_location(vec2(120.0, 75.0));

    for p in [vec2(0.0, 0.0), vec2(333.0, 12.0), vec2(-40.0, 999.0)] {
        assert_eq!(cam.screen_to_world(cam.world_to_screen(p)), p);
        assert_eq!(cam.world_to_screen(cam.screen_to_world(p)), p);
    }
}

#[test]
fn location_stays_inside_scroll_range() {
    let mut cam = camera();

    cam.move_by(vec2(-500.0, -500.0));
    assert_eq!(cam.location(), vec2(0.0, 0.0));

    for _ in 0..10_000 {
        cam.move_by(vec2(2.0, 2.0));
    }
    assert_eq!(cam.location(), vec2(800.0, 600.0)); // world - view

    cam.move_by(vec2(5.0, -10_000.0));
    assert_eq!(cam.location(), vec2(800.0, 0.0));
}

#[test]
fn world_smaller_than_view_pins_to_origin() {
    let mut cam = Camera::new(800, 600, 400, 300, vec2(0.0, 0.0));
    cam.move_by(vec2(250.0, 250.0));
    assert_eq!(cam.location(), vec2(0.0, 0.0));
}
