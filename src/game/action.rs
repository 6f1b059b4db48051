/// Direction the snake can move
///
/// `x` runs along the board's height and `y` along its width, so `Up` and
/// `Down` change `y` while `Left` and `Right` change `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns the direction pointing the opposite way
    pub fn reverse(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.reverse() == other
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Steer in a specific direction
    Move(Direction),
    /// No key this tick: keep going the way we were
    Continue,
}

impl Action {
    /// Resolve the direction to travel given the last accepted move.
    ///
    /// A request to reverse onto the body is ignored.
    pub fn resolve(self, last_move: Direction) -> Direction {
        match self {
            Action::Move(direction) if !direction.is_opposite(last_move) => direction,
            _ => last_move,
        }
    }
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

impl From<Option<Direction>> for Action {
    fn from(direction: Option<Direction>) -> Self {
        direction.map(Action::Move).unwrap_or(Action::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_reverse_is_an_involution() {
        for direction in Direction::ALL {
            assert_eq!(direction.reverse().reverse(), direction);
            assert_ne!(direction.reverse(), direction);
        }
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_resolve_blocks_reversal() {
        assert_eq!(Action::Move(Direction::Down).resolve(Direction::Up), Direction::Up);
        assert_eq!(Action::Move(Direction::Left).resolve(Direction::Up), Direction::Left);
        assert_eq!(Action::Continue.resolve(Direction::Right), Direction::Right);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Action::from(None), Action::Continue);
        assert_eq!(
            Action::from(Some(Direction::Left)),
            Action::Move(Direction::Left)
        );
    }
}
