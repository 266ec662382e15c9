use super::*;
use crate::core::store::CanvasSize;

#[test]
fn test_every_tool_is_registered() {
    for kind in ToolType::ALL {
        let mut tm = ToolManager::new();
        let mut store = PixelStore::new(CanvasSize::S16);
        tm.set_tool(kind);

        let outcome = tm.handle_pointer_down(17, &mut store).unwrap();
        assert!(!matches!(outcome, PointerDownOutcome::Ignored), "{:?} has no handler", kind);
    }
}

#[test]
fn test_only_shape_tools_preview() {
    for kind in ToolType::ALL {
        let mut tm = ToolManager::new();
        let mut store = PixelStore::new(CanvasSize::S16);
        tm.set_tool(kind);
        tm.handle_pointer_down(17, &mut store).unwrap();

        assert_eq!(tm.preview(&store).is_some(), kind.is_shape(), "{:?}", kind);
        tm.cancel();
        assert!(!tm.is_dragging());
    }
}

#[test]
fn test_picker_switches_back_to_pen() {
    let mut tm = ToolManager::new();
    let mut store = PixelStore::new(CanvasSize::S16);
    tm.set_tool(ToolType::ColorPicker);
    tm.handle_pointer_down(0, &mut store).unwrap();
    assert_eq!(tm.active_type(), ToolType::Pen);
    assert!(!tm.is_dragging());
}
