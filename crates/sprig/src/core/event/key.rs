//! This module contains the core primitives to represent keyboard input.
use std::{fmt, ops::Add, str::FromStr};

use crate::error::{Error, Result};

/// Modifier key state.
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Mods {
    /// Shift is active.
    pub shift: bool,
    /// Control is active.
    pub ctrl: bool,
    /// Alt is active.
    pub alt: bool,
}

impl Mods {
    /// Are no modifiers active?
    pub fn is_empty(&self) -> bool {
        !(self.shift || self.ctrl || self.alt)
    }
}

impl Add<KeyCode> for Mods {
    type Output = Key;

    fn add(self, key: KeyCode) -> Self::Output {
        Key { mods: self, key }
    }
}

impl Add<char> for Mods {
    type Output = Key;

    fn add(self, other: char) -> Self::Output {
        Key {
            mods: self,
            key: other.into(),
        }
    }
}

impl Add<Self> for Mods {
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Self {
            shift: self.shift || other.shift,
            ctrl: self.ctrl || other.ctrl,
            alt: self.alt || other.alt,
        }
    }
}

/// No modifiers pressed.
#[allow(non_upper_case_globals)]
pub const Empty: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: false,
};

/// Shift-only modifier state.
#[allow(non_upper_case_globals)]
pub const Shift: Mods = Mods {
    shift: true,
    ctrl: false,
    alt: false,
};

/// Control-only modifier state.
#[allow(non_upper_case_globals)]
pub const Ctrl: Mods = Mods {
    shift: false,
    ctrl: true,
    alt: false,
};

/// Alt-only modifier state.
#[allow(non_upper_case_globals)]
pub const Alt: Mods = Mods {
    shift: false,
    ctrl: false,
    alt: true,
};

/// Logical key codes.
#[derive(Debug, PartialOrd, PartialEq, Hash, Eq, Clone, Copy)]
pub enum KeyCode {
    /// Backspace key.
    Backspace,
    /// Enter/return key.
    Enter,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key.
    Home,
    /// End key.
    End,
    /// Page up key.
    PageUp,
    /// Page down key.
    PageDown,
    /// Tab key.
    Tab,
    /// Shift + Tab key.
    BackTab,
    /// Delete key.
    Delete,
    /// Insert key.
    Insert,
    /// Escape key.
    Esc,
    /// F key.
    ///
    /// `KeyCode::F(1)` represents F1 key, etc.
    F(u8),
    /// A character.
    ///
    /// `KeyCode::Char('c')` represents `c` character, etc.
    Char(char),
}

impl From<char> for KeyCode {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

/// Names of the non-character key codes, as accepted by [`Key::from_str`].
const NAMED: &[(&str, KeyCode)] = &[
    ("Backspace", KeyCode::Backspace),
    ("Enter", KeyCode::Enter),
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
    ("Tab", KeyCode::Tab),
    ("BackTab", KeyCode::BackTab),
    ("Delete", KeyCode::Delete),
    ("Insert", KeyCode::Insert),
    ("Esc", KeyCode::Esc),
    ("Space", KeyCode::Char(' ')),
];

/// Keys that should be preserved verbatim in text input.
const LEAVE_INTACT: &[KeyCode] = &[KeyCode::Enter, KeyCode::Char(' ')];

/// A keystroke along with modifiers.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Key {
    /// Modifier state.
    pub mods: Mods,
    /// Key code.
    pub key: KeyCode,
}

impl Key {
    /// Normalize shift for matching: shift plus a lowercase ASCII letter
    /// becomes the uppercase letter, shift is kept on keys without a shifted
    /// form (space, enter), and dropped everywhere else.
    ///
    /// | input             | normalization    |
    /// |-------------------|------------------|
    /// | shift + A         | A                |
    /// | shift + a         | A                |
    /// | shift + )         | )                |
    /// | shift + enter     | shift + enter    |
    /// | shift + ctrl + A  | ctrl + A         |
    ///
    /// `normalize` must be called explicitly when needed - comparisons are
    /// literal.
    pub fn normalize(&self) -> Self {
        if !self.mods.shift || LEAVE_INTACT.contains(&self.key) {
            return *self;
        }
        let KeyCode::Char(c) = self.key else {
            return *self;
        };
        Self {
            mods: Mods {
                shift: false,
                ..self.mods
            },
            key: KeyCode::Char(c.to_ascii_uppercase()),
        }
    }

    /// The character this key would insert as literal text, if any. Keys with
    /// ctrl or alt held are function keys, and so is everything that is not a
    /// character, except Enter and Tab.
    pub fn literal(&self) -> Option<char> {
        let k = self.normalize();
        if !k.mods.is_empty() {
            return None;
        }
        match k.key {
            KeyCode::Char(c) => Some(c),
            KeyCode::Enter => Some('\n'),
            KeyCode::Tab => Some('\t'),
            _ => None,
        }
    }

    /// Is this a function key, i.e. not literal text?
    pub fn is_function(&self) -> bool {
        self.literal().is_none()
    }

    /// The key that types a character in a paste replay.
    pub fn typed(c: char) -> Self {
        match c {
            '\n' | '\r' => KeyCode::Enter.into(),
            '\t' => KeyCode::Tab.into(),
            c => c.into(),
        }
    }
}

impl PartialEq<KeyCode> for Key {
    fn eq(&self, c: &KeyCode) -> bool {
        // If there are modifiers, we never match.
        if self.mods != Empty {
            return false;
        }
        *c == self.key
    }
}

impl PartialEq<char> for Key {
    fn eq(&self, c: &char) -> bool {
        *self == KeyCode::Char(*c)
    }
}

impl PartialEq<Key> for char {
    fn eq(&self, k: &Key) -> bool {
        *k == KeyCode::Char(*self)
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Self {
            mods: Empty,
            key: KeyCode::Char(c),
        }
    }
}

impl From<KeyCode> for Key {
    fn from(c: KeyCode) -> Self {
        Self {
            mods: Empty,
            key: c,
        }
    }
}

impl FromStr for Key {
    type Err = Error;

    /// Parse a key specification such as `a`, `Enter`, `F5`, `Ctrl-[` or
    /// `Alt-Shift-Tab`. A trailing `-` is the minus key itself.
    fn from_str(s: &str) -> Result<Self> {
        let mut mods = Empty;
        let mut rest = s;
        loop {
            let Some((prefix, tail)) = rest.split_once('-') else {
                break;
            };
            if tail.is_empty() {
                break;
            }
            match prefix {
                "Ctrl" | "C" => mods.ctrl = true,
                "Alt" | "A" | "M" => mods.alt = true,
                "Shift" | "S" => mods.shift = true,
                _ => return Err(Error::ParseKey(format!("bad modifier {prefix:?} in {s:?}"))),
            }
            rest = tail;
        }
        let mut chars = rest.chars();
        let key = match (chars.next(), chars.next()) {
            (None, _) => return Err(Error::ParseKey("empty key".into())),
            (Some(c), None) => KeyCode::Char(c),
            _ => match NAMED.iter().find(|(name, _)| *name == rest) {
                Some((_, code)) => *code,
                None => match rest.strip_prefix('F').and_then(|n| n.parse::<u8>().ok()) {
                    Some(n) if (1..=12).contains(&n) => KeyCode::F(n),
                    _ => return Err(Error::ParseKey(format!("unknown key {rest:?}"))),
                },
            },
        };
        Ok(mods + key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.ctrl {
            f.write_str("Ctrl-")?;
        }
        if self.mods.alt {
            f.write_str("Alt-")?;
        }
        if self.mods.shift {
            f.write_str("Shift-")?;
        }
        match self.key {
            KeyCode::F(n) => write!(f, "F{n}"),
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            code => match NAMED.iter().find(|(_, c)| *c == code) {
                Some((name, _)) => f.write_str(name),
                None => write!(f, "{code:?}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Result, event::key::*};

    #[test]
    fn normalize() -> Result<()> {
        assert_eq!((Shift + 'A').normalize(), 'A',);
        assert_eq!((Shift + 'a').normalize(), 'A',);
        assert_eq!((Shift + ')').normalize(), ')',);
        assert_eq!((Shift + ' ').normalize(), Shift + ' ');
        assert_eq!((Shift + KeyCode::Enter).normalize(), Shift + KeyCode::Enter);
        assert_eq!((Shift + Alt + 'A').normalize(), Alt + 'A',);
        Ok(())
    }

    #[test]
    fn literal() {
        assert_eq!(Key::from('x').literal(), Some('x'));
        assert_eq!((Shift + 'x').literal(), Some('X'));
        assert_eq!(Key::from(KeyCode::Enter).literal(), Some('\n'));
        assert_eq!((Ctrl + 'x').literal(), None);
        assert!(Key::from(KeyCode::Up).is_function());
        assert!(Key::from(KeyCode::Backspace).is_function());
        assert_eq!(Key::typed('\n'), KeyCode::Enter);
    }

    #[test]
    fn parse() -> Result<()> {
        assert_eq!("a".parse::<Key>()?, 'a');
        assert_eq!("-".parse::<Key>()?, '-');
        assert_eq!("Ctrl-[".parse::<Key>()?, Ctrl + '[');
        assert_eq!("Ctrl--".parse::<Key>()?, Ctrl + '-');
        assert_eq!("Alt-Shift-Tab".parse::<Key>()?, Alt + Shift + KeyCode::Tab);
        assert_eq!("F5".parse::<Key>()?, KeyCode::F(5));
        assert_eq!("Up".parse::<Key>()?, KeyCode::Up);
        assert!("Hyper-x".parse::<Key>().is_err());
        assert!("F13".parse::<Key>().is_err());
        assert!("".parse::<Key>().is_err());
        Ok(())
    }

    #[test]
    fn display_round_trips() -> Result<()> {
        for spec in ["a", "Ctrl-[", "Alt-x", "Shift-Tab", "F12", "Enter", "Space"] {
            assert_eq!(spec.parse::<Key>()?.to_string(), spec);
        }
        Ok(())
    }
}
