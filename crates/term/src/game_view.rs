//! GameView: paints a `core::SnakeGame` onto a [`Surface`].
//!
//! Layout, top to bottom: one status line, then the playfield in a border
//! box. Playfield cell `(x, y)` maps to surface cell `(x + 1, y + 2)`.

use std::io::Write;

use terminal_snake_core::SnakeGame;
use terminal_snake_types::{BoardSize, Direction};

use crate::surface::{Surface, SurfaceError};

const SNAKE_BODY: &str = "█";
const FOOD: &str = "O";

/// Paints one frame of the session.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Grid size needed to show a playfield of `size`: the border box plus
    /// the status line.
    pub fn required_grid(size: BoardSize) -> (u16, u16) {
        (size.width as u16 + 2, size.height as u16 + 3)
    }

    /// Repaint the whole frame and flush it to the display.
    pub fn render<W: Write>(
        &self,
        game: &SnakeGame,
        surface: &mut Surface<W>,
    ) -> Result<(), SurfaceError> {
        surface.clear_screen()?;
        self.draw_status(game, surface)?;
        self.draw_border(game.size(), surface)?;
        self.draw_food(game, surface)?;
        self.draw_snake(game, surface)?;
        if game.state().is_finished() {
            self.draw_game_over(game, surface)?;
        }
        surface.refresh()
    }

    fn draw_status<W: Write>(
        &self,
        game: &SnakeGame,
        surface: &mut Surface<W>,
    ) -> Result<(), SurfaceError> {
        let status = format!(
            "Score: {}   Move interval: {:.2}s   Tab quits",
            game.state().score(),
            game.state().speed_seconds(),
        );
        surface.write_at(0, 0, &status)
    }

    fn draw_border<W: Write>(
        &self,
        size: BoardSize,
        surface: &mut Surface<W>,
    ) -> Result<(), SurfaceError> {
        let width = size.width as u16;
        let height = size.height as u16;

        let horizontal: String = std::iter::once('+')
            .chain(std::iter::repeat('-').take(width as usize))
            .chain(std::iter::once('+'))
            .collect();
        surface.write_at(0, 1, &horizontal)?;
        surface.write_at(0, height + 2, &horizontal)?;

        for y in 0..height {
            surface.write_at(0, y + 2, "|")?;
            surface.write_at(width + 1, y + 2, "|")?;
        }
        Ok(())
    }

    fn draw_food<W: Write>(
        &self,
        game: &SnakeGame,
        surface: &mut Surface<W>,
    ) -> Result<(), SurfaceError> {
        if let Some((x, y)) = game.food() {
            surface.write_at(x + 1, y + 2, FOOD)?;
        }
        Ok(())
    }

    fn draw_snake<W: Write>(
        &self,
        game: &SnakeGame,
        surface: &mut Surface<W>,
    ) -> Result<(), SurfaceError> {
        let body = game.snake().body();
        for (i, &(x, y)) in body.iter().enumerate() {
            let glyph = if i == body.len() - 1 {
                head_glyph(game.snake().direction())
            } else {
                SNAKE_BODY
            };
            surface.write_at(x + 1, y + 2, glyph)?;
        }
        Ok(())
    }

    /// Centered end-of-session lines. A line that does not fit the grid is
    /// skipped; only I/O failures abort the render.
    fn draw_game_over<W: Write>(
        &self,
        game: &SnakeGame,
        surface: &mut Surface<W>,
    ) -> Result<(), SurfaceError> {
        let verdict = if game.won() { "You won!" } else { "Game over!" };
        let score_line = format!("Score: {}", game.state().score());
        let lines = [verdict, &score_line, "Press Tab to exit"];

        let (cols, _) = surface.grid();
        let mid_y = game.size().height as u16 / 2 + 2;
        let start_y = mid_y.saturating_sub(lines.len() as u16 / 2);

        for (i, line) in lines.iter().enumerate() {
            let x = (cols / 2).saturating_sub(line.chars().count() as u16 / 2);
            let y = start_y + i as u16;
            match surface.write_at(x, y, line) {
                Ok(()) | Err(SurfaceError::OutOfBounds { .. }) => {}
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "^",
        Direction::Down => "v",
        Direction::Left => "<",
        Direction::Right => ">",
    }
}
