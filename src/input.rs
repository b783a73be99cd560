//! Key decoding and cursor movement.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use noughts_engine::Position;
use tracing::instrument;

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// A player intent, independent of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Play the square at this index (0-8).
    SelectCell(usize),
    /// Move the cursor.
    MoveCursor(Direction),
    /// Play the square under the cursor.
    SelectCursor,
    /// Clear the board, keep scores.
    ResetRound,
    /// Clear the board and scores.
    ResetAll,
    /// Flip the sound switch.
    ToggleSound,
    /// Flip the music switch.
    ToggleMusic,
    /// Leave the game.
    Quit,
}

/// Decodes a key press. Releases, repeats of non-navigation keys and
/// unbound keys yield `None`.
#[instrument]
pub fn command_for_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Command::SelectCell(digit as usize - 1)),
        KeyCode::Up => Some(Command::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Command::MoveCursor(Direction::Down)),
        KeyCode::Left => Some(Command::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Command::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::SelectCursor),
        KeyCode::Char('r') => Some(Command::ResetRound),
        KeyCode::Char('R') => Some(Command::ResetAll),
        KeyCode::Char('s') => Some(Command::ToggleSound),
        KeyCode::Char('m') => Some(Command::ToggleMusic),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        _ => None,
    }
}

/// Moves the cursor one step, stopping at the board edge.
#[instrument]
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(2), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(2)),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_select_cells() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('1'))),
            Some(Command::SelectCell(0))
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('9'))),
            Some(Command::SelectCell(8))
        );
        assert_eq!(command_for_key(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(
            command_for_key(press(KeyCode::Char('r'))),
            Some(Command::ResetRound)
        );
        assert_eq!(
            command_for_key(press(KeyCode::Char('R'))),
            Some(Command::ResetAll)
        );
        assert_eq!(command_for_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            command_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(command_for_key(press(KeyCode::Tab)), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('5'));
        key.kind = KeyEventKind::Release;
        assert_eq!(command_for_key(key), None);
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(
            move_cursor(Position::MiddleRight, Direction::Down),
            Position::BottomRight
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, Direction::Right),
            Position::BottomRight
        );
    }
}
