//! Single-character key bindings.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Key bindings for the non-arrow commands.
///
/// Defaults are `c` to quit and `n` for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    /// Ends the session.
    quit: char,
    /// Clears the board for a new game.
    new_game: char,
}

impl KeyBindings {
    /// Creates bindings for the given keys.
    pub fn new(quit: char, new_game: char) -> Self {
        Self { quit, new_game }
    }

    /// Checks whether `key` is the quit key, ignoring ASCII case.
    pub fn is_quit(&self, key: char) -> bool {
        key.eq_ignore_ascii_case(&self.quit)
    }

    /// Checks whether `key` is the new-game key, ignoring ASCII case.
    pub fn is_new_game(&self, key: char) -> bool {
        key.eq_ignore_ascii_case(&self.new_game)
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new('c', 'n')
    }
}
