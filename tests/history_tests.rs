use pxa_canvas::app::config::EngineConfig;
use pxa_canvas::app::state::AppState;
use pxa_canvas::core::store::{CanvasSize, Cell};
use pxa_canvas::tools::ToolType;
use pretty_assertions::assert_eq;

fn setup_app() -> AppState {
    AppState::new(EngineConfig { size: CanvasSize::S16, ..EngineConfig::default() })
}

fn snapshot(app: &AppState) -> Vec<Cell> {
    app.engine.store().cells().to_vec()
}

#[test]
fn test_history_is_capped_at_twenty() {
    let mut app = setup_app();
    let mut states = vec![snapshot(&app)];
    for i in 0..25 {
        app.on_mouse_down(i % 16, i / 16).unwrap();
        app.on_mouse_up().unwrap();
        states.push(snapshot(&app));
    }
    assert_eq!(app.engine.history().len(), 20);

    // The 20 most recent pre-action states come back in reverse order.
    for k in (5..25).rev() {
        app.undo();
        assert_eq!(snapshot(&app), states[k], "after undoing action {}", k);
    }
    assert!(!app.engine.history().can_undo());

    app.undo();
    assert_eq!(snapshot(&app), states[5]);
}

#[test]
fn test_undo_reverts_exactly_one_action_of_each_kind() {
    let mut app = setup_app();
    app.on_mouse_down(3, 3).unwrap();
    app.on_mouse_up().unwrap();

    let steps: [(ToolType, (i32, i32), (i32, i32)); 5] = [
        (ToolType::Pen, (0, 0), (4, 0)),
        (ToolType::Eraser, (3, 3), (3, 3)),
        (ToolType::Line, (0, 15), (15, 0)),
        (ToolType::Rectangle, (8, 8), (12, 14)),
        (ToolType::Circle, (7, 7), (7, 10)),
    ];
    for (tool, start, end) in steps {
        let before = snapshot(&app);
        app.set_tool(tool);
        app.on_mouse_down(start.0, start.1).unwrap();
        app.on_mouse_move(end.0, end.1).unwrap();
        app.on_mouse_up().unwrap();
        assert_ne!(snapshot(&app), before, "{:?} should change the bitmap", tool);

        app.undo();
        assert_eq!(snapshot(&app), before, "{:?}", tool);
    }

    let before = snapshot(&app);
    app.set_tool(ToolType::Fill);
    app.on_mouse_down(0, 0).unwrap();
    app.undo();
    assert_eq!(snapshot(&app), before);
}

#[test]
fn test_undo_on_empty_history_is_silent() {
    let mut app = setup_app();
    app.undo();
    assert!(app.engine.store().is_blank());
    assert_eq!(app.error_message, None);
}

#[test]
fn test_undo_is_ignored_mid_drag() {
    let mut app = setup_app();
    app.on_mouse_down(0, 0).unwrap();
    app.on_mouse_up().unwrap();

    app.on_mouse_down(1, 0).unwrap();
    app.undo();
    app.on_mouse_up().unwrap();

    assert_eq!(app.engine.store().painted_count(), 2);
    assert_eq!(app.engine.history().len(), 2);
}

#[test]
fn test_clear_resets_bitmap_and_history() {
    let mut app = setup_app();
    app.set_tool(ToolType::Fill);
    app.on_mouse_down(0, 0).unwrap();
    assert!(app.engine.history().can_undo());

    app.clear();
    assert!(app.engine.store().is_blank());
    assert!(app.engine.history().is_empty());
}
