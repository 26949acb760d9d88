//! Render surface tests - bounds-checked cursor addressing.
//!
//! All tests draw into an in-memory writer; no live terminal is touched.

use terminal_snake::term::{Surface, SurfaceError};

fn surface() -> Surface<Vec<u8>> {
    Surface::with_grid(Vec::new(), 20, 10)
}

#[test]
fn test_absolute_positioning_inside_the_grid() {
    let mut s = surface();
    s.move_cursor(0, 0).unwrap();
    s.move_cursor(19, 9).unwrap();
    assert_eq!(s.cursor(), (19, 9));
}

#[test]
fn test_absolute_positioning_rejects_out_of_bounds() {
    let mut s = surface();
    s.move_cursor(5, 5).unwrap();

    for (x, y) in [(20, 0), (0, 10), (20, 10), (u16::MAX, u16::MAX)] {
        let err = s.move_cursor(x, y).unwrap_err();
        assert!(matches!(err, SurfaceError::OutOfBounds { .. }), "({x}, {y})");
        assert_eq!(s.cursor(), (5, 5), "cursor must not move on failure");
    }
}

#[test]
fn test_relative_positioning_composes_with_current_position() {
    let mut s = surface();
    s.move_cursor(10, 5).unwrap();
    s.move_relative(-3, 2).unwrap();
    assert_eq!(s.cursor(), (7, 7));
    s.move_relative(0, -7).unwrap();
    assert_eq!(s.cursor(), (7, 0));
}

#[test]
fn test_relative_positioning_rejects_out_of_bounds_and_keeps_state() {
    let mut s = surface();
    s.move_cursor(1, 1).unwrap();

    let err = s.move_relative(-2, 0).unwrap_err();
    match err {
        SurfaceError::OutOfBounds { x, y, cols, rows } => {
            assert_eq!((x, y), (-1, 1));
            assert_eq!((cols, rows), (20, 10));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(s.cursor(), (1, 1));

    assert!(s.move_relative(100, 0).is_err());
    assert_eq!(s.cursor(), (1, 1));
}

#[test]
fn test_write_advances_the_cursor() {
    let mut s = surface();
    s.move_cursor(2, 3).unwrap();
    s.write_text("four").unwrap();
    assert_eq!(s.cursor(), (6, 3));
}

#[test]
fn test_refresh_flushes_writes_to_the_backing_store() {
    let mut s = Surface::with_grid(std::io::BufWriter::new(Vec::new()), 20, 10);
    s.write_at(0, 0, "queued").unwrap();
    s.refresh().unwrap();
    let bytes = s.into_inner().into_inner().unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("queued"));
}

#[test]
fn test_clear_screen_homes_the_cursor() {
    let mut s = surface();
    s.move_cursor(9, 9).unwrap();
    s.clear_screen().unwrap();
    assert_eq!(s.cursor(), (0, 0));
}

#[test]
fn test_error_message_names_the_grid() {
    let mut s = surface();
    let err = s.move_cursor(99, 0).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("(99, 0)"));
    assert!(text.contains("20x10"));
}
