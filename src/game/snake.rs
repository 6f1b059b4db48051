use rand::Rng;
use std::collections::VecDeque;

use super::action::Direction;
use super::board::Position;

/// Shape the snake starts in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Body trails below the head (`y` grows), as if moving up
    Tall,
    /// Body trails behind the head along `x`, as if moving left
    Wide,
}

impl Orientation {
    /// Pick either orientation with equal probability
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            Orientation::Tall
        } else {
            Orientation::Wide
        }
    }

    /// Direction the snake appears to have been travelling in
    pub fn initial_direction(&self) -> Direction {
        match self {
            Orientation::Tall => Direction::Up,
            Orientation::Wide => Direction::Left,
        }
    }
}

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    head: Position,
    /// Segments behind the head, closest first
    body: VecDeque<Position>,
}

impl Snake {
    /// Lay out a snake of `length` cells at `head` in a random orientation.
    ///
    /// Returns the snake and the direction it starts out moving in.
    pub fn initialize<R: Rng>(head: Position, length: usize, rng: &mut R) -> (Self, Direction) {
        let orientation = Orientation::random(rng);
        (
            Self::with_orientation(head, length, orientation),
            orientation.initial_direction(),
        )
    }

    /// Lay out a snake of `length` cells at `head`, body trailing one cell
    /// further out per segment in the direction opposite its initial move.
    pub fn with_orientation(head: Position, length: usize, orientation: Orientation) -> Self {
        let (dx, dy) = orientation.initial_direction().reverse().delta();
        let body = (1..length as i32)
            .map(|i| head.moved_by(dx * i, dy * i))
            .collect();

        Self { head, body }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.head
    }

    /// Body segments excluding the head, closest to the head first
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Head followed by every body segment
    pub fn segments(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    /// Step the head to `pos` dragging the body along.
    ///
    /// Returns the tail cell that was vacated.
    pub fn move_to(&mut self, pos: Position) -> Position {
        let previous = std::mem::replace(&mut self.head, pos);
        self.body.push_front(previous);
        self.body.pop_back().unwrap_or(previous)
    }

    /// Step the head to `pos` keeping the tail where it is.
    ///
    /// Returns the previous head, which is now the first body segment.
    pub fn grow(&mut self, pos: Position) -> Position {
        let previous = std::mem::replace(&mut self.head, pos);
        self.body.push_front(previous);
        previous
    }

    /// Get the length of the snake, head included
    pub fn len(&self) -> usize {
        self.body.len() + 1
    }

    /// A snake always has a head
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_wide_layout() {
        let snake = Snake::with_orientation(Position::new(5, 5), 3, Orientation::Wide);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            vec![Position::new(6, 5), Position::new(7, 5)]
        );
    }

    #[test]
    fn test_tall_layout() {
        let snake = Snake::with_orientation(Position::new(2, 4), 4, Orientation::Tall);
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            vec![Position::new(2, 5), Position::new(2, 6), Position::new(2, 7)]
        );
    }

    #[test]
    fn test_single_cell_snake() {
        let mut snake = Snake::with_orientation(Position::new(1, 1), 1, Orientation::Tall);
        assert_eq!(snake.len(), 1);
        assert!(snake.body().is_empty());

        let vacated = snake.move_to(Position::new(1, 0));
        assert_eq!(vacated, Position::new(1, 1));
        assert_eq!(snake.len(), 1);
        assert!(snake.body().is_empty());
    }

    #[test]
    fn test_initialize_direction_matches_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let (snake, direction) = Snake::initialize(Position::new(5, 5), 3, &mut rng);
            let first = snake.body()[0];
            // The first segment sits where the head would have come from
            let (dx, dy) = direction.reverse().delta();
            assert_eq!(first, snake.head().moved_by(dx, dy));
        }
    }

    #[test]
    fn test_initialize_uses_both_orientations() {
        let mut rng = StdRng::seed_from_u64(1);
        let directions: Vec<Direction> = (0..64)
            .map(|_| Snake::initialize(Position::new(5, 5), 3, &mut rng).1)
            .collect();
        assert!(directions.contains(&Direction::Up));
        assert!(directions.contains(&Direction::Left));
    }

    #[test]
    fn test_move_to() {
        let mut snake = Snake::with_orientation(Position::new(5, 5), 3, Orientation::Wide);

        let vacated = snake.move_to(Position::new(4, 5));
        assert_eq!(vacated, Position::new(7, 5));
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(4, 5));
        assert_eq!(
            snake.body().iter().copied().collect::<Vec<_>>(),
            vec![Position::new(5, 5), Position::new(6, 5)]
        );
    }

    #[test]
    fn test_grow() {
        let mut snake = Snake::with_orientation(Position::new(5, 5), 3, Orientation::Wide);

        let previous = snake.grow(Position::new(4, 5));
        assert_eq!(previous, Position::new(5, 5));
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(4, 5));
        assert_eq!(snake.body().back(), Some(&Position::new(7, 5)));
    }

    #[test]
    fn test_head_never_in_body() {
        let mut snake = Snake::with_orientation(Position::new(5, 5), 3, Orientation::Tall);
        snake.grow(Position::new(5, 4));
        snake.move_to(Position::new(4, 4));
        snake.move_to(Position::new(4, 5));

        assert!(!snake.body().contains(&snake.head()));
        assert_eq!(snake.segments().count(), snake.len());
    }
}
