//! Commands accepted by the game.

use crate::cursor::Direction;
use crate::keys::KeyBindings;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// A single user intent, already decoded from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum Command {
    /// Move the cursor one row up.
    #[strum(to_string = "move up")]
    MoveUp,
    /// Move the cursor one row down.
    #[strum(to_string = "move down")]
    MoveDown,
    /// Move the cursor one column left.
    #[strum(to_string = "move left")]
    MoveLeft,
    /// Move the cursor one column right.
    #[strum(to_string = "move right")]
    MoveRight,
    /// Place the current player's marker under the cursor.
    #[strum(to_string = "place marker")]
    PlaceMarker,
    /// Discard the board and start over.
    #[strum(to_string = "new game")]
    NewGame,
    /// Leave the game.
    #[strum(to_string = "quit")]
    Quit,
}

impl Command {
    /// Cursor direction for movement commands.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Command::MoveUp => Some(Direction::Up),
            Command::MoveDown => Some(Direction::Down),
            Command::MoveLeft => Some(Direction::Left),
            Command::MoveRight => Some(Direction::Right),
            Command::PlaceMarker | Command::NewGame | Command::Quit => None,
        }
    }

    /// Decodes a raw terminal byte sequence.
    ///
    /// Recognises the ANSI arrow sequences `ESC [ A..D`, carriage return or
    /// newline to place, `0x03` (Ctrl-C in raw mode) and the single-byte
    /// quit and new-game keys from `keys`. Anything else is unrecognised
    /// input and yields `None`.
    pub fn from_sequence(bytes: &[u8], keys: &KeyBindings) -> Option<Self> {
        match bytes {
            b"\x1b[A" => Some(Command::MoveUp),
            b"\x1b[B" => Some(Command::MoveDown),
            b"\x1b[C" => Some(Command::MoveRight),
            b"\x1b[D" => Some(Command::MoveLeft),
            b"\r" | b"\n" => Some(Command::PlaceMarker),
            [0x03] => Some(Command::Quit),
            &[byte] if keys.is_quit(char::from(byte)) => Some(Command::Quit),
            &[byte] if keys.is_new_game(char::from(byte)) => Some(Command::NewGame),
            _ => None,
        }
    }

    /// Decodes a whole byte stream, dropping unrecognised sequences.
    pub fn decode_all<'a>(
        bytes: &'a [u8],
        keys: &'a KeyBindings,
    ) -> impl Iterator<Item = Command> + 'a {
        split_sequences(bytes).filter_map(move |sequence| Command::from_sequence(sequence, keys))
    }
}

/// Splits raw input into key sequences.
///
/// `ESC [ x` is kept together as one three-byte sequence; every other
/// byte stands alone.
pub fn split_sequences(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut rest = bytes;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let len = if rest.len() >= 3 && rest.starts_with(b"\x1b[") { 3 } else { 1 };
        let (head, tail) = rest.split_at(len);
        rest = tail;
        Some(head)
    })
}
