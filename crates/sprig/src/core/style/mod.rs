/// Color helpers.
mod color;
/// Styled text.
mod styled;

use std::str::FromStr;

pub use color::Color;
pub use styled::{Segment, StyledText};

use crate::error::{Error, Result};

/// A text attribute.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Attr {
    /// Bold text.
    Bold,
    /// Dim text.
    Dim,
    /// Italic text.
    Italic,
    /// Underlined text.
    Underline,
    /// Blinking text.
    Blink,
    /// Foreground and background swapped.
    Inverse,
}

/// A set of active text attributes.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct AttrSet {
    /// Bold flag.
    pub bold: bool,
    /// Dim flag.
    pub dim: bool,
    /// Italic flag.
    pub italic: bool,
    /// Underline flag.
    pub underline: bool,
    /// Blink flag.
    pub blink: bool,
    /// Inverse flag.
    pub inverse: bool,
}

impl AttrSet {
    /// Construct a set of text attributes with a single attribute turned on.
    pub fn new(attr: Attr) -> Self {
        Self::default().with(attr)
    }

    /// Is this attribute set empty?
    pub fn is_empty(&self) -> bool {
        !(self.bold || self.dim || self.italic || self.underline || self.blink || self.inverse)
    }

    /// Return a copy with an attribute turned on.
    pub fn with(mut self, attr: Attr) -> Self {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::Dim => self.dim = true,
            Attr::Italic => self.italic = true,
            Attr::Underline => self.underline = true,
            Attr::Blink => self.blink = true,
            Attr::Inverse => self.inverse = true,
        }
        self
    }
}

/// Colors and attributes for a run of text. `None` colors leave the terminal
/// default in place.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Text attributes.
    pub attrs: AttrSet,
}

impl Style {
    /// The default style.
    pub fn plain() -> Self {
        Self::default()
    }

    /// Return a copy with the foreground color set.
    pub fn fg(mut self, c: Color) -> Self {
        self.fg = Some(c);
        self
    }

    /// Return a copy with the background color set.
    pub fn bg(mut self, c: Color) -> Self {
        self.bg = Some(c);
        self
    }

    /// Return a copy with an attribute turned on.
    pub fn attr(mut self, attr: Attr) -> Self {
        self.attrs = self.attrs.with(attr);
        self
    }

    /// Layer `other` on top of this style: colors in `other` win, attributes
    /// accumulate.
    pub fn merge(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: AttrSet {
                bold: self.attrs.bold || other.attrs.bold,
                dim: self.attrs.dim || other.attrs.dim,
                italic: self.attrs.italic || other.attrs.italic,
                underline: self.attrs.underline || other.attrs.underline,
                blink: self.attrs.blink || other.attrs.blink,
                inverse: self.attrs.inverse || other.attrs.inverse,
            },
        }
    }
}

impl FromStr for Style {
    type Err = Error;

    /// Parse a space-separated styling string such as `bold fg-red bg-blue`.
    /// A bare color name sets the foreground.
    fn from_str(s: &str) -> Result<Self> {
        s.split_whitespace().try_fold(Self::default(), |style, word| {
            let attr = match word {
                "bold" => Some(Attr::Bold),
                "dim" => Some(Attr::Dim),
                "italic" => Some(Attr::Italic),
                "underlined" | "underline" => Some(Attr::Underline),
                "blink" => Some(Attr::Blink),
                "inverse" => Some(Attr::Inverse),
                _ => None,
            };
            if let Some(attr) = attr {
                return Ok(style.attr(attr));
            }
            let (bg, name) = match word.strip_prefix("bg-") {
                Some(name) => (true, name),
                None => (false, word.strip_prefix("fg-").unwrap_or(word)),
            };
            match (Color::parse(name), bg) {
                (Some(c), true) => Ok(style.bg(c)),
                (Some(c), false) => Ok(style.fg(c)),
                (None, _) => Err(Error::ParseStyle(format!("unknown styling {word:?}"))),
            }
        })
    }
}
