//! Integration tests exercising the engine through its public API

use neon_desktop::{DesktopEngine, InputResult, Vec2, WindowRegion, BASE_Z_ORDER};

fn engine() -> DesktopEngine {
    let mut engine = DesktopEngine::new();
    engine.init(0).expect("apps initialize");
    engine
}

#[test]
fn test_focus_sequence_assigns_increasing_z() {
    let mut engine = engine();

    engine.open_window("calculator");
    engine.open_window("tasks");
    engine.open_window("editor");

    assert_eq!(engine.windows.get("calculator").unwrap().z_order, 101);
    assert_eq!(engine.windows.get("tasks").unwrap().z_order, 102);
    assert_eq!(engine.windows.get("editor").unwrap().z_order, 103);

    // Refocusing promotes above everything opened since
    engine.focus_window("calculator");
    assert_eq!(engine.windows.get("calculator").unwrap().z_order, 104);
    assert_eq!(engine.windows.topmost(), Some("calculator"));
}

#[test]
fn test_header_drag_moves_window() {
    let mut engine = engine();
    engine.open_window("calculator");

    // Grab the header 50x30 into the window
    let result = engine.pointer_down(
        "calculator",
        WindowRegion::Header,
        Vec2::new(150.0, 80.0),
        Vec2::new(100.0, 50.0),
    );
    assert_eq!(result, InputResult::Handled);

    engine.pointer_move(Vec2::new(160.0, 90.0));
    engine.pointer_up();

    let window = engine.windows.get("calculator").unwrap();
    let position = window.position.expect("drag sets a position");
    assert!((position.x - 110.0).abs() < 0.001);
    assert!((position.y - 60.0).abs() < 0.001);
}

#[test]
fn test_click_without_move_keeps_default_placement() {
    let mut engine = engine();
    engine.open_window("calculator");

    engine.pointer_down(
        "calculator",
        WindowRegion::Header,
        Vec2::new(150.0, 80.0),
        Vec2::new(100.0, 50.0),
    );
    engine.pointer_up();

    assert!(engine.windows.get("calculator").unwrap().position.is_none());
}

#[test]
fn test_drag_affects_only_grabbed_window() {
    let mut engine = engine();
    engine.open_window("calculator");
    engine.open_window("tasks");

    engine.pointer_down(
        "tasks",
        WindowRegion::Header,
        Vec2::new(300.0, 120.0),
        Vec2::new(250.0, 100.0),
    );
    engine.pointer_move(Vec2::new(400.0, 200.0));
    engine.pointer_up();

    assert!(engine.windows.get("calculator").unwrap().position.is_none());
    let position = engine.windows.get("tasks").unwrap().position.unwrap();
    assert!((position.x - 350.0).abs() < 0.001);
    assert!((position.y - 180.0).abs() < 0.001);
}

#[test]
fn test_close_topmost_leaves_no_topmost() {
    let mut engine = engine();
    engine.open_window("calculator");
    engine.open_window("tasks");

    engine.pointer_down(
        "tasks",
        WindowRegion::CloseButton,
        Vec2::new(760.0, 110.0),
        Vec2::new(250.0, 100.0),
    );

    assert_eq!(engine.windows.topmost(), None);
    // The calculator stays visible at its old z-order
    assert_eq!(engine.windows.get("calculator").unwrap().z_order, 101);
    assert!(engine.windows.get("calculator").unwrap().visible);
}

#[test]
fn test_reopened_window_stacks_above_old_maximum() {
    let mut engine = engine();

    engine.open_window("calculator");
    engine.open_window("tasks");
    engine.close_window("tasks");
    engine.open_window("tasks");

    assert_eq!(engine.windows.get("tasks").unwrap().z_order, 103);
    assert!(engine.windows.max_z() > BASE_Z_ORDER);
}

#[test]
fn test_snapshot_orders_visible_windows_back_to_front() {
    let mut engine = engine();

    engine.open_window("editor");
    engine.open_window("music");
    engine.open_window("clock");
    engine.close_window("music");
    engine.focus_window("editor");

    let snapshot = engine.snapshot();
    let ids: Vec<&str> = snapshot.windows.iter().map(|w| w.id).collect();
    assert_eq!(ids, vec!["clock", "editor"]);
    assert_eq!(snapshot.topmost, Some("editor"));
}

#[test]
fn test_calculator_session_through_engine() {
    let mut engine = engine();
    engine.open_window("calculator");

    for name in ["digit_1", "digit_2", "op_add", "digit_3", "op_equals"] {
        engine.app_button("calculator", name).unwrap();
    }

    let state = engine.app_state_json("calculator").unwrap();
    assert!(state.contains("\"15\""));
}

#[test]
fn test_editor_autosave_survives_engine_restart() {
    let mut engine = engine();
    engine.app_text("editor", "content", "meeting notes").unwrap();

    // Quiet period passes, autosave flushes on tick
    engine.tick(5_000);

    let state = engine.app_state_json("editor").unwrap();
    assert!(state.contains("\"status\":\"saved\""));
}

#[test]
fn test_clock_updates_on_tick() {
    let mut engine = DesktopEngine::new();
    engine.init(9 * 3_600_000 + 41 * 60_000).unwrap();

    assert!(engine.app_state_json("clock").unwrap().contains("09:41"));

    engine.tick(9 * 3_600_000 + 42 * 60_000);
    assert!(engine.app_state_json("clock").unwrap().contains("09:42"));
}

#[test]
fn test_content_click_focuses_without_consuming() {
    let mut engine = engine();
    engine.open_window("calculator");
    engine.open_window("tasks");

    let result = engine.pointer_down(
        "calculator",
        WindowRegion::Content,
        Vec2::new(150.0, 200.0),
        Vec2::new(100.0, 50.0),
    );

    // The shell forwards the event to the app's own controls
    assert_eq!(result, InputResult::Unhandled);
    assert_eq!(engine.windows.topmost(), Some("calculator"));

    engine.app_button("calculator", "digit_7").unwrap();
    assert!(engine.app_state_json("calculator").unwrap().contains("\"7\""));
}
