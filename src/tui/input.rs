//! Cursor movement for keyboard navigation.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Right => Position::from_row_col(row, col + 1),
        KeyCode::Left => col.checked_sub(1).and_then(|c| Position::from_row_col(row, c)),
        KeyCode::Down => Position::from_row_col(row + 1, col),
        KeyCode::Up => row.checked_sub(1).and_then(|r| Position::from_row_col(r, col)),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Maps digit keys 1-9 to board indices 0-8.
pub fn digit_index(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

/// Keys that end the session, honored even while input is locked.
pub fn is_quit(key: KeyCode) -> bool {
    matches!(key, KeyCode::Char('q') | KeyCode::Esc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Char('x')), Position::Center);
    }

    #[test]
    fn test_digit_index() {
        assert_eq!(digit_index(KeyCode::Char('1')), Some(0));
        assert_eq!(digit_index(KeyCode::Char('9')), Some(8));
        assert_eq!(digit_index(KeyCode::Char('0')), None);
        assert_eq!(digit_index(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(KeyCode::Char('q')));
        assert!(is_quit(KeyCode::Esc));
        assert!(!is_quit(KeyCode::Char('Q')));
        assert!(!is_quit(KeyCode::Char('5')));
        assert!(!is_quit(KeyCode::Enter));
    }
}
