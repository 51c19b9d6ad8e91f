// tests/engine_tests.rs

use iso_tile_engine::{
    Depth, Engine, InputSnapshot, MapCellData, MapRowData, MouseMap, TextureSlot, TileSheet,
};
use macroquad::prelude::{vec2, Rect};

const VIEW_W: i32 = 800;
const VIEW_H: i32 = 600;

fn sheet() -> TileSheet {
    // 10x13 grid, enough for the sample content's topper ids
    TileSheet::new(640, 832).unwrap()
}

// Map data with a two-tile height stack and a topper on cell (3, 4).
fn stacked_cell_data() -> Vec<MapRowData> {
    let mut rows = vec![MapRowData::default(); 5];
    let mut columns = vec![MapCellData::default(); 4];
    columns[3] = MapCellData {
        tile_id: 1,
        height_tiles: vec![54, 53],
        topper_tiles: vec![114],
    };
    rows[4].columns = columns;
    rows
}

fn engine_with(data: &[MapRowData]) -> Engine {
    Engine::with_map_data(VIEW_W, VIEW_H, sheet(), MouseMap::standard(), data).unwrap()
}

fn source_rect_of(tile_id: u32) -> Rect {
    sheet().source_rect(tile_id).unwrap()
}

#[test]
fn frame_is_sorted_back_to_front() {
    let engine = Engine::new(VIEW_W, VIEW_H, sheet(), MouseMap::standard());
    let frame = engine.draw(&InputSnapshot::default()).unwrap();

    assert!(!frame.commands.is_empty());
    assert!(frame
        .commands
        .windows(2)
        .all(|w| w[0].depth <= w[1].depth));
}

#[test]
fn height_stack_draws_bottom_up_and_lifts_by_offset() {
    let engine = engine_with(&stacked_cell_data());
    let frame = engine.draw(&InputSnapshot::default()).unwrap();

    let find = |tile_id: u32| {
        let rect = source_rect_of(tile_id);
        frame
            .commands
            .iter()
            .position(|c| c.texture == TextureSlot::TileSheet && c.source == Some(rect))
            .unwrap_or_else(|| panic!("tile {} not drawn", tile_id))
    };

    let first = find(54);
    let second = find(53);
    let topper = find(114);

    // 54 was appended first: drawn first, 53 in front and one step higher
    assert!(first < second);
    assert!(second < topper);
    let lift = frame.commands[first].position.y - frame.commands[second].position.y;
    assert_eq!(lift, 32.0);

    // topper sits at the base position but above the whole stack
    assert_eq!(
        frame.commands[topper].position,
        frame.commands[first].position
    );
    assert_eq!(frame.commands[topper].depth, Depth::stacked(3, 4, 2));
}

#[test]
fn cursor_fan_emits_sixteen_translucent_overlays() {
    let engine = Engine::new(VIEW_W, VIEW_H, sheet(), MouseMap::standard());
    let input = InputSnapshot {
        pointer: vec2(400.0, 300.0),
        ..Default::default()
    };
    let frame = engine.draw(&input).unwrap();

    let overlays: Vec<_> = frame
        .commands
        .iter()
        .filter(|c| c.texture == TextureSlot::Cursor)
        .collect();
    assert_eq!(overlays.len(), 16);
    for cmd in &overlays {
        assert_eq!(cmd.depth, Depth::Overlay);
        assert_eq!(cmd.tint.a, 0.3);
        assert_eq!(cmd.source, Some(Rect::new(0.0, 0.0, 64.0, 32.0)));
    }
    // overlays come last in the sorted frame
    assert_eq!(frame.commands.last().unwrap().depth, Depth::Overlay);
}

#[test]
fn window_past_the_map_edge_is_skipped_quietly() {
    let mut engine = Engine::new(VIEW_W, VIEW_H, sheet(), MouseMap::standard());
    engine.camera_mut().set_location(vec2(1.0e7, 1.0e7));

    let frame = engine.draw(&InputSnapshot::default()).unwrap();
    assert!(!frame.commands.is_empty());
}

#[test]
fn pan_input_moves_the_camera_within_bounds() {
    let mut engine = Engine::new(VIEW_W, VIEW_H, sheet(), MouseMap::standard());

    engine.handle_input(
        &InputSnapshot { pan_axis: vec2(1.0, 0.0), ..Default::default() },
        0.016,
    );
    assert_eq!(engine.camera().location(), vec2(2.0, 0.0));

    // stick up pans the camera up, already clamped at the top edge
    engine.handle_input(
        &InputSnapshot { pan_axis: vec2(0.0, 1.0), ..Default::default() },
        0.016,
    );
    assert_eq!(engine.camera().location(), vec2(2.0, 0.0));
}

#[test]
fn debug_overlay_toggles_on_press_edges_only() {
    let mut engine = Engine::new(VIEW_W, VIEW_H, sheet(), MouseMap::standard());
    let held = InputSnapshot { toggle_debug_pressed: true, ..Default::default() };
    let released = InputSnapshot::default();

    engine.handle_input(&held, 0.016);
    assert!(engine.debug_overlay_on());
    let frame = engine.draw(&held).unwrap();
    assert!(!frame.labels.is_empty());

    // holding the button does not re-toggle
    engine.handle_input(&held, 0.016);
    assert!(engine.debug_overlay_on());

    engine.handle_input(&released, 0.016);
    engine.handle_input(&held, 0.016);
    assert!(!engine.debug_overlay_on());
    let frame = engine.draw(&released).unwrap();
    assert!(frame.labels.is_empty());
}

#[test]
fn character_is_lifted_by_its_standing_cell() {
    let mut engine = engine_with(&stacked_cell_data());
    // center of cell (3, 4), which carries two height tiles
    engine.character_mut().position = vec2(224.0, 112.0);

    let frame = engine.draw(&InputSnapshot::default()).unwrap();
    let cmd = frame
        .commands
        .iter()
        .find(|c| c.texture == TextureSlot::Character)
        .expect("character drawn");

    let expected = engine
        .camera()
        .world_to_screen(vec2(224.0, 112.0 - 64.0));
    assert_eq!(cmd.position, expected);
    // above its own cell's stack, still behind nearer cells
    assert!(Depth::stacked(3, 4, 2) < cmd.depth);
    assert!(cmd.depth < Depth::stacked(3, 5, 0));
}
