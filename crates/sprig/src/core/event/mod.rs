/// Keyboard input.
pub mod key;

use key::{Key, KeyCode};

/// An input event delivered to a component's handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A keystroke.
    Key(Key),
    /// Start (`true`) or end (`false`) of a bracketed paste. The pasted text
    /// arrives as key events in between.
    PasteSetting(bool),
    /// The terminal was resized.
    Resize {
        /// New height in rows.
        rows: u16,
        /// New width in columns.
        cols: u16,
    },
}

impl Event {
    /// The keystroke, if this is a key event.
    pub fn key(&self) -> Option<&Key> {
        match self {
            Self::Key(k) => Some(k),
            _ => None,
        }
    }
}

impl From<Key> for Event {
    fn from(k: Key) -> Self {
        Self::Key(k)
    }
}

impl From<KeyCode> for Event {
    fn from(k: KeyCode) -> Self {
        Self::Key(k.into())
    }
}

impl From<char> for Event {
    fn from(c: char) -> Self {
        Self::Key(c.into())
    }
}
