use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the front end to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if let Some(direction) = Self::direction_for(key.code) {
            return KeyAction::Steer(direction);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Restart,
            _ => KeyAction::None,
        }
    }

    /// Arrow keys and WASD, either case
    fn direction_for(code: KeyCode) -> Option<Direction> {
        let direction = match code {
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'w' => Direction::Up,
                's' => Direction::Down,
                'a' => Direction::Left,
                'd' => Direction::Right,
                _ => return None,
            },
            _ => return None,
        };
        Some(direction)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyAction {
        InputHandler::new().handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(press(KeyCode::Up), KeyAction::Steer(Direction::Up));
        assert_eq!(press(KeyCode::Down), KeyAction::Steer(Direction::Down));
        assert_eq!(press(KeyCode::Left), KeyAction::Steer(Direction::Left));
        assert_eq!(press(KeyCode::Right), KeyAction::Steer(Direction::Right));
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(press(KeyCode::Char('w')), KeyAction::Steer(Direction::Up));
        assert_eq!(press(KeyCode::Char('a')), KeyAction::Steer(Direction::Left));
        assert_eq!(press(KeyCode::Char('s')), KeyAction::Steer(Direction::Down));
        assert_eq!(press(KeyCode::Char('d')), KeyAction::Steer(Direction::Right));
    }

    #[test]
    fn test_wasd_uppercase() {
        let handler = InputHandler::new();

        let w_upper = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key_event(w_upper),
            KeyAction::Steer(Direction::Up)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Char('Q')), KeyAction::Quit);
        assert_eq!(press(KeyCode::Esc), KeyAction::Quit);
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(press(KeyCode::Char('r')), KeyAction::Restart);
        assert_eq!(press(KeyCode::Char('R')), KeyAction::Restart);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(press(KeyCode::Char('x')), KeyAction::None);
        assert_eq!(press(KeyCode::Enter), KeyAction::None);
    }

    #[test]
    fn test_ctrl_c() {
        let handler = InputHandler::new();

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handler.handle_key_event(ctrl_c), KeyAction::Quit);
    }
}
