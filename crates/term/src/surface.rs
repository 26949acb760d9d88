//! Bounds-checked, cursor-addressed render surface.
//!
//! The surface owns the terminal for the duration of a session:
//! [`Surface::initialize`] acquires raw mode and the alternate screen and
//! establishes the character grid; [`Surface::terminate`] restores the
//! terminal and must run on every exit path. All drawing is queued and
//! becomes visible only after [`Surface::refresh`].

use std::io::{self, Stdout, Write};

use crossterm::{cursor, queue, style, terminal};
use thiserror::Error;

/// Errors raised by the render surface.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// A positioning operation targeted a cell outside the grid. The
    /// cursor is left where it was; callers may recover.
    #[error("cursor target ({x}, {y}) is outside the {cols}x{rows} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        cols: u16,
        rows: u16,
    },
    /// Terminal I/O failed. Fatal to the surface.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A fixed-size character grid with a tracked cursor.
///
/// Generic over the output writer so tests can render into memory; the
/// live surface writes to stdout.
pub struct Surface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    cursor: (u16, u16),
    raw_active: bool,
}

impl Surface<Stdout> {
    /// A surface over stdout. The grid is established by
    /// [`Surface::initialize`].
    pub fn stdout() -> Self {
        Self {
            out: io::stdout(),
            cols: 0,
            rows: 0,
            cursor: (0, 0),
            raw_active: false,
        }
    }
}

impl<W: Write> Surface<W> {
    /// A surface over an arbitrary writer with a fixed grid. It does not
    /// touch terminal modes, which makes it suitable for tests.
    pub fn with_grid(out: W, cols: u16, rows: u16) -> Self {
        Self {
            out,
            cols,
            rows,
            cursor: (0, 0),
            raw_active: false,
        }
    }

    /// Acquire terminal control: raw mode, alternate screen, hidden
    /// cursor. Establishes the grid from the current terminal size.
    ///
    /// Must be paired with [`Surface::terminate`] on every exit path.
    pub fn initialize(&mut self) -> Result<(), SurfaceError> {
        terminal::enable_raw_mode()?;
        self.raw_active = true;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;
        self.out.flush()?;

        let (cols, rows) = terminal::size()?;
        self.cols = cols;
        self.rows = rows;
        self.cursor = (0, 0);
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once; only the first
    /// call after [`Surface::initialize`] does anything.
    pub fn terminate(&mut self) -> Result<(), SurfaceError> {
        if !self.raw_active {
            return Ok(());
        }
        queue!(
            self.out,
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen,
        )?;
        self.out.flush()?;
        terminal::disable_raw_mode()?;
        self.raw_active = false;
        Ok(())
    }

    /// Grid dimensions as `(cols, rows)`.
    pub fn grid(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Current cursor position.
    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Move the cursor to an absolute cell. Fails without moving when the
    /// target is outside the grid.
    pub fn move_cursor(&mut self, x: u16, y: u16) -> Result<(), SurfaceError> {
        if x >= self.cols || y >= self.rows {
            return Err(SurfaceError::OutOfBounds {
                x: x as i32,
                y: y as i32,
                cols: self.cols,
                rows: self.rows,
            });
        }
        queue!(self.out, cursor::MoveTo(x, y))?;
        self.cursor = (x, y);
        Ok(())
    }

    /// Move the cursor relative to its current position. The target is
    /// composed first, then bounds-checked exactly like
    /// [`Surface::move_cursor`]; the cursor stays put on failure.
    pub fn move_relative(&mut self, dx: i32, dy: i32) -> Result<(), SurfaceError> {
        let nx = self.cursor.0 as i32 + dx;
        let ny = self.cursor.1 as i32 + dy;
        if nx < 0 || ny < 0 || nx >= self.cols as i32 || ny >= self.rows as i32 {
            return Err(SurfaceError::OutOfBounds {
                x: nx,
                y: ny,
                cols: self.cols,
                rows: self.rows,
            });
        }
        self.move_cursor(nx as u16, ny as u16)
    }

    /// Write text at the cursor. The cursor advances by the number of
    /// characters written, clamped at the right edge of the grid.
    pub fn write_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        queue!(self.out, style::Print(text))?;
        let advanced = self.cursor.0 as usize + text.chars().count();
        self.cursor.0 = advanced.min(self.cols.saturating_sub(1) as usize) as u16;
        Ok(())
    }

    /// Position the cursor and write in one call.
    pub fn write_at(&mut self, x: u16, y: u16, text: &str) -> Result<(), SurfaceError> {
        self.move_cursor(x, y)?;
        self.write_text(text)
    }

    /// Clear the whole grid and home the cursor.
    pub fn clear_screen(&mut self) -> Result<(), SurfaceError> {
        queue!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
        )?;
        self.cursor = (0, 0);
        Ok(())
    }

    /// Flush queued writes to the underlying display. Nothing is
    /// guaranteed visible before this call.
    pub fn refresh(&mut self) -> Result<(), SurfaceError> {
        self.out.flush()?;
        Ok(())
    }

    /// Consume the surface and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> Surface<Vec<u8>> {
        Surface::with_grid(Vec::new(), 10, 5)
    }

    #[test]
    fn test_move_cursor_within_grid() {
        let mut s = surface();
        s.move_cursor(9, 4).unwrap();
        assert_eq!(s.cursor(), (9, 4));
    }

    #[test]
    fn test_move_cursor_out_of_bounds_keeps_cursor() {
        let mut s = surface();
        s.move_cursor(3, 2).unwrap();

        let err = s.move_cursor(10, 0).unwrap_err();
        assert!(matches!(err, SurfaceError::OutOfBounds { x: 10, y: 0, .. }));
        assert_eq!(s.cursor(), (3, 2));

        assert!(s.move_cursor(0, 5).is_err());
        assert_eq!(s.cursor(), (3, 2));
    }

    #[test]
    fn test_move_relative_composes_then_checks() {
        let mut s = surface();
        s.move_cursor(4, 2).unwrap();
        s.move_relative(-1, 2).unwrap();
        assert_eq!(s.cursor(), (3, 4));

        // Negative targets are reported with their composed coordinates.
        let err = s.move_relative(-5, 0).unwrap_err();
        assert!(matches!(err, SurfaceError::OutOfBounds { x: -2, y: 4, .. }));
        assert_eq!(s.cursor(), (3, 4));
    }

    #[test]
    fn test_write_advances_cursor_and_clamps() {
        let mut s = surface();
        s.write_text("abc").unwrap();
        assert_eq!(s.cursor(), (3, 0));

        s.write_text("0123456789").unwrap();
        assert_eq!(s.cursor(), (9, 0), "cursor clamps at the right edge");
    }

    #[test]
    fn test_refresh_flushes_queued_text() {
        let mut s = surface();
        s.write_at(1, 1, "hello").unwrap();
        s.refresh().unwrap();
        let bytes = String::from_utf8_lossy(&s.out).into_owned();
        assert!(bytes.contains("hello"));
    }

    #[test]
    fn test_terminate_without_initialize_is_a_no_op() {
        let mut s = surface();
        s.terminate().unwrap();
        assert!(s.out.is_empty());
    }
}
