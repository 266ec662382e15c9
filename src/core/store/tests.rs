use super::*;

#[test]
fn test_store_starts_blank() {
    let s = PixelStore::new(CanvasSize::S16);
    assert_eq!(s.cells().len(), 256);
    assert!(s.is_blank());
    assert_eq!(s.primary_color, Color::black());
}

#[test]
fn test_store_index_row_major() {
    let s = PixelStore::new(CanvasSize::S16);
    assert_eq!(s.index(2, 3), Some(50));
    assert_eq!(s.index(15, 15), Some(255));
    assert_eq!(s.coords(66), (2, 4));
}

#[test]
fn test_store_index_rejects_outside() {
    let s = PixelStore::new(CanvasSize::S16);
    for (x, y) in [(-1, 0), (0, -1), (16, 0), (0, 16), (i32::MIN, i32::MAX)] {
        assert_eq!(s.index(x, y), None, "({x}, {y}) should be outside");
    }
}

#[test]
fn test_store_index_round_trip() {
    for size in CanvasSize::ALL {
        let s = PixelStore::new(size);
        for i in 0..size.cell_count() {
            let (x, y) = s.coords(i);
            assert_eq!(s.index(x as i32, y as i32), Some(i));
        }
    }
}

#[test]
fn test_store_set_pixel_out_of_bounds_is_error_without_mutation() {
    let mut s = PixelStore::new(CanvasSize::S16);
    let red = Some(Color::new(255, 0, 0));
    assert_eq!(s.set_pixel(16, 2, red), Err(CoreError::OutOfBounds { x: 16, y: 2 }));
    assert_eq!(s.set_cell(256, red), Err(CoreError::IndexOutOfRange(256)));
    assert!(s.is_blank());
}

#[test]
fn test_store_set_returns_previous() {
    let mut s = PixelStore::new(CanvasSize::S16);
    let red = Some(Color::new(255, 0, 0));
    assert_eq!(s.set_pixel(1, 1, red).unwrap(), None);
    assert_eq!(s.set_pixel(1, 1, None).unwrap(), red);
    assert_eq!(s.get_pixel(1, 1), Some(None));
    assert_eq!(s.get_pixel(-1, 1), None);
}

#[test]
fn test_store_reallocate() {
    let mut s = PixelStore::new(CanvasSize::S32);
    s.set_pixel(31, 31, Some(Color::new(1, 2, 3))).unwrap();
    assert_eq!(s.painted_count(), 1);
    s.reallocate(CanvasSize::S16);
    assert_eq!(s.side(), 16);
    assert_eq!(s.cells().len(), 256);
    assert!(s.is_blank());
}

#[test]
fn test_canvas_size_from_side() {
    assert_eq!(CanvasSize::try_from(48).unwrap(), CanvasSize::S48);
    assert_eq!(CanvasSize::try_from(20), Err(CoreError::UnsupportedSize(20)));
}

#[test]
fn test_index_in_matches_store_index() {
    let s = PixelStore::new(CanvasSize::S16);
    for (x, y) in [(0, 0), (15, 0), (3, 7), (15, 15), (-1, 0), (16, 2), (4, -3), (0, 16)] {
        assert_eq!(index_in(16, x, y), s.index(x, y), "({}, {})", x, y);
    }
    assert_eq!(index_in(16, 2, 3), Some(50));
    assert_eq!(index_in(64, 63, 63), Some(4095));
}
