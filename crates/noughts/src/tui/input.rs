//! Key bindings.

use crossterm::event::KeyCode;
use noughts_engine::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(KeyCode),
    /// Place a mark under the cursor.
    PlaceAtCursor,
    /// Place a mark on a numbered cell.
    Place(Position),
    /// Start over with the same settings.
    Restart,
    /// Leave, possibly after confirmation.
    Quit,
    /// Answer yes to a prompt.
    Yes,
    /// Answer no to a prompt.
    No,
    /// Unbound key.
    Ignore,
}

/// Maps a key to an action.
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Action::Cursor(key),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Position::from_key(c).map_or(Action::Ignore, Action::Place)
        }
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('y') => Action::Yes,
        KeyCode::Char('n') => Action::No,
        _ => Action::Ignore,
    }
}

/// Moves the cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let index = cursor.to_index();
    let (row, col) = (index / 3, index % 3);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
