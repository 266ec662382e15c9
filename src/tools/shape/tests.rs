use super::*;
use crate::core::color::Color;
use crate::core::store::CanvasSize;

fn xy(cells: &BTreeSet<usize>, side: usize) -> Vec<(usize, usize)> {
    cells.iter().map(|i| (i % side, i / side)).collect()
}

#[test]
fn test_line_includes_endpoints() {
    let cells = line_cells(1, 2, 9, 5, 16);
    assert!(cells.contains(&(2 * 16 + 1)));
    assert!(cells.contains(&(5 * 16 + 9)));
}

#[test]
fn test_line_is_direction_independent() {
    for (a, b) in [((0, 0), (2, 1)), ((3, 7), (12, 2)), ((15, 0), (0, 15)), ((4, 4), (4, 11)), ((1, 9), (14, 10))] {
        assert_eq!(line_cells(a.0, a.1, b.0, b.1, 16), line_cells(b.0, b.1, a.0, a.1, 16), "{a:?} <-> {b:?}");
    }
}

#[test]
fn test_line_clips_outside_points() {
    let cells = line_cells(-3, 0, 3, 0, 16);
    assert_eq!(xy(&cells, 16), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_rectangle_is_outline_only() {
    let cells = rectangle_cells(0, 0, 3, 3, 16);
    assert_eq!(cells.len(), 12);
    for interior in [(1, 1), (2, 1), (1, 2), (2, 2)] {
        assert!(!cells.contains(&(interior.1 * 16 + interior.0)));
    }
}

#[test]
fn test_rectangle_degenerate_is_a_line() {
    assert_eq!(rectangle_cells(2, 5, 6, 5, 16).len(), 5);
    assert_eq!(rectangle_cells(7, 7, 7, 7, 16).len(), 1);
}

#[test]
fn test_circle_excludes_center() {
    let cells = circle_cells(5, 5, 8, 5, 16);
    assert!(!cells.contains(&(5 * 16 + 5)));
    assert!(cells.contains(&(5 * 16 + 8)));
    assert!(cells.contains(&(5 * 16 + 2)));
    assert!(cells.contains(&(2 * 16 + 5)));
    assert!(cells.contains(&(8 * 16 + 5)));
}

#[test]
fn test_circle_radius_is_floored() {
    // distance sqrt(8) ~ 2.83 floors to 2
    let cells = circle_cells(8, 8, 10, 10, 16);
    assert!(cells.contains(&(8 * 16 + 10)));
    assert!(!cells.contains(&(8 * 16 + 11)));
}

#[test]
fn test_circle_clipped_at_corner() {
    let cells = circle_cells(0, 0, 3, 0, 16);
    assert!(xy(&cells, 16).iter().all(|&(x, y)| x <= 3 && y <= 3));
    assert!(cells.contains(&3));
}

#[test]
fn test_apply_tool_dispatch() {
    assert_eq!(apply_tool(ToolType::Rectangle, (0, 0), (3, 3), 16).len(), 12);
    assert_eq!(apply_tool(ToolType::Line, (0, 0), (3, 0), 16).len(), 4);
    assert!(apply_tool(ToolType::Pen, (0, 0), (3, 0), 16).is_empty());
    assert!(apply_tool(ToolType::Fill, (0, 0), (3, 0), 16).is_empty());
}

#[test]
fn test_shape_tool_preview_leaves_bitmap_alone() {
    let mut store = PixelStore::new(CanvasSize::S16);
    store.primary_color = Color::new(0, 0, 255);
    let mut tool = ShapeTool::new(ToolType::Line);
    let drag = DragState { tool: ToolType::Line, start: 0, current: 5 };
    assert!(matches!(tool.on_pointer_down(0, &mut store).unwrap(), PointerDownOutcome::Drag));
    let preview = tool.preview(&drag, &store).unwrap();
    assert_eq!(preview.cells.len(), 6);
    assert_eq!(preview.color, Color::new(0, 0, 255));
    assert!(store.is_blank());

    let patch = tool.on_pointer_up(&drag, &mut store).unwrap().unwrap();
    assert_eq!(patch.len(), 6);
    assert!(store.is_blank(), "the patch is applied by history, not by the tool");
}
