//! The snake body and its movement rules.

use terminal_snake_types::{BoardSize, Coords, Direction};

/// Result of advancing the snake by one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake moved. `old_tail` is the cell that was vacated, `None`
    /// when a pending growth kept the tail in place.
    Moved {
        new_head: Coords,
        old_tail: Option<Coords>,
    },
    /// The move would have left the playfield or entered the body.
    Collided,
}

/// Snake body stored tail-first; the head is the last segment.
#[derive(Debug, Clone)]
pub struct Snake {
    body: Vec<Coords>,
    direction: Direction,
    grow_pending: bool,
}

impl Snake {
    /// Build a snake whose head sits at `head` and whose body trails
    /// opposite to `direction`. The caller guarantees all segments fit on
    /// the playfield; `len` is clamped to at least one segment.
    pub fn new(head: Coords, len: u16, direction: Direction) -> Self {
        let len = len.max(1) as i32;
        let (dx, dy) = direction.delta();
        let body = (0..len)
            .rev()
            .map(|i| {
                (
                    (head.0 as i32 - dx * i) as u16,
                    (head.1 as i32 - dy * i) as u16,
                )
            })
            .collect();
        Self {
            body,
            direction,
            grow_pending: false,
        }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        *self.body.last().unwrap_or(&(0, 0))
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Change the movement direction. A reversal onto the snake's own neck
    /// is ignored; every other change takes effect on the next advance.
    pub fn set_direction(&mut self, new_direction: Direction) {
        if self.body.len() > 1 && new_direction == self.direction.opposite() {
            return;
        }
        self.direction = new_direction;
    }

    /// Keep the tail in place on the next advance, lengthening the body by
    /// one segment.
    pub fn grow(&mut self) {
        self.grow_pending = true;
    }

    /// Advance one cell in the current direction.
    ///
    /// Collision is checked against the playfield edges and the body. The
    /// tail cell is excluded from the body check when it vacates this step,
    /// since the head may legally move into it.
    pub fn advance(&mut self, size: BoardSize) -> StepOutcome {
        let head = self.head();
        let (dx, dy) = self.direction.delta();
        let nx = head.0 as i32 + dx;
        let ny = head.1 as i32 + dy;

        if nx < 0 || ny < 0 || nx >= size.width as i32 || ny >= size.height as i32 {
            return StepOutcome::Collided;
        }
        let new_head = (nx as u16, ny as u16);

        let body_start = if self.grow_pending { 0 } else { 1 };
        if self.body[body_start..].contains(&new_head) {
            return StepOutcome::Collided;
        }

        self.body.push(new_head);
        if self.grow_pending {
            self.grow_pending = false;
            StepOutcome::Moved {
                new_head,
                old_tail: None,
            }
        } else {
            let old_tail = self.body.remove(0);
            StepOutcome::Moved {
                new_head,
                old_tail: Some(old_tail),
            }
        }
    }

    /// Whether `cell` is occupied by any body segment.
    pub fn occupies(&self, cell: Coords) -> bool {
        self.body.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: BoardSize = BoardSize::new(10, 10);

    fn snake_at_center() -> Snake {
        Snake::new((5, 5), 3, Direction::Right)
    }

    #[test]
    fn test_new_body_trails_head() {
        let snake = snake_at_center();
        assert_eq!(snake.body(), &[(3, 5), (4, 5), (5, 5)]);
        assert_eq!(snake.head(), (5, 5));
    }

    #[test]
    fn test_advance_moves_head_and_tail() {
        let mut snake = snake_at_center();
        let outcome = snake.advance(SIZE);
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                new_head: (6, 5),
                old_tail: Some((3, 5)),
            }
        );
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn test_grow_keeps_tail_once() {
        let mut snake = snake_at_center();
        snake.grow();
        let outcome = snake.advance(SIZE);
        assert_eq!(
            outcome,
            StepOutcome::Moved {
                new_head: (6, 5),
                old_tail: None,
            }
        );
        assert_eq!(snake.len(), 4);

        // Growth applies exactly once.
        match snake.advance(SIZE) {
            StepOutcome::Moved { old_tail, .. } => assert!(old_tail.is_some()),
            StepOutcome::Collided => panic!("unexpected collision"),
        }
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn test_wall_collision() {
        let mut snake = Snake::new((9, 5), 2, Direction::Right);
        assert_eq!(snake.advance(SIZE), StepOutcome::Collided);
        // The body is untouched after a collision.
        assert_eq!(snake.head(), (9, 5));
    }

    #[test]
    fn test_self_collision() {
        // A 5-segment snake folded into a hook: moving up hits the body.
        let mut snake = Snake::new((5, 5), 5, Direction::Right);
        snake.set_direction(Direction::Down);
        snake.advance(SIZE);
        snake.set_direction(Direction::Left);
        snake.advance(SIZE);
        snake.set_direction(Direction::Up);
        assert_eq!(snake.advance(SIZE), StepOutcome::Collided);
    }

    #[test]
    fn test_moving_into_vacating_tail_is_legal() {
        // A 2x2 loop: the head may enter the cell the tail leaves this step.
        let mut snake = Snake::new((5, 5), 4, Direction::Right);
        snake.set_direction(Direction::Down);
        snake.advance(SIZE);
        snake.set_direction(Direction::Left);
        snake.advance(SIZE);
        // Head at (4,6), tail at (4,5) about to vacate.
        snake.set_direction(Direction::Up);
        assert!(matches!(snake.advance(SIZE), StepOutcome::Moved { .. }));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut snake = snake_at_center();
        snake.set_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Right);
        snake.set_direction(Direction::Up);
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn test_single_segment_snake_may_reverse() {
        let mut snake = Snake::new((5, 5), 1, Direction::Right);
        snake.set_direction(Direction::Left);
        assert_eq!(snake.direction(), Direction::Left);
    }
}
