use std::fmt;

use super::{Attr, Color, Style};
use crate::text::display_width;

/// A run of text in a single style.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    /// The style of the run.
    pub style: Style,
    /// The text of the run.
    pub text: String,
}

/// Text made of styled segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    /// Segments in order. Empty segments are never stored.
    segments: Vec<Segment>,
}

impl StyledText {
    /// Text in a single style.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        let mut t = Self::default();
        t.push(text, style);
        t
    }

    /// Text in the default style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::default())
    }

    /// The segments of this text.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Append a run of text. Adjacent runs in the same style are merged.
    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.segments.push(Segment { style, text }),
        }
    }

    /// Append another styled text.
    pub fn append(&mut self, other: &Self) {
        for seg in &other.segments {
            self.push(seg.text.clone(), seg.style);
        }
    }

    /// Concatenate a sequence of styled texts.
    pub fn concat<'a>(parts: impl IntoIterator<Item = &'a Self>) -> Self {
        let mut t = Self::default();
        for p in parts {
            t.append(p);
        }
        t
    }

    /// Split at the given byte offsets into the plain text. Returns one more
    /// part than there are offsets. Offsets must be ascending and on character
    /// boundaries; out-of-range offsets are clamped to the end.
    pub fn partition(&self, offsets: &[usize]) -> Vec<Self> {
        let mut parts = vec![Self::default()];
        let mut pending = offsets.iter().copied().peekable();
        let mut pos = 0;
        for seg in &self.segments {
            let mut text = seg.text.as_str();
            while let Some(&cut) = pending.peek() {
                if cut > pos + text.len() {
                    break;
                }
                let (head, tail) = text.split_at(cut.saturating_sub(pos));
                if let Some(last) = parts.last_mut() {
                    last.push(head, seg.style);
                }
                parts.push(Self::default());
                pos += head.len();
                text = tail;
                pending.next();
            }
            if let Some(last) = parts.last_mut() {
                last.push(text, seg.style);
            }
            pos += text.len();
        }
        for _ in pending {
            parts.push(Self::default());
        }
        parts
    }

    /// Apply a styling transform to every segment.
    pub fn restyle(mut self, f: impl Fn(Style) -> Style) -> Self {
        for seg in &mut self.segments {
            seg.style = f(seg.style);
        }
        self
    }

    /// Turn an attribute on for every segment.
    pub fn with_attr(self, attr: Attr) -> Self {
        self.restyle(|s| s.attr(attr))
    }

    /// Set the foreground color of every segment.
    pub fn with_fg(self, c: Color) -> Self {
        self.restyle(|s| s.fg(c))
    }

    /// The plain text, without styles.
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Length of the plain text in bytes.
    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.text.len()).sum()
    }

    /// Is there no text at all?
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Width of the text in terminal cells.
    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| display_width(&s.text)).sum()
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seg in &self.segments {
            f.write_str(&seg.text)?;
        }
        Ok(())
    }
}

impl From<&str> for StyledText {
    fn from(s: &str) -> Self {
        Self::plain(s)
    }
}

impl From<String> for StyledText {
    fn from(s: String) -> Self {
        Self::plain(s)
    }
}
