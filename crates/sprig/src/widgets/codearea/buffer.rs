//! The edited text and pending overlays.

use crate::text::floor_char_boundary;

/// Text being edited, with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodeBuffer {
    /// The text.
    pub content: String,
    /// Cursor position as a byte offset on a character boundary.
    pub dot: usize,
}

impl CodeBuffer {
    /// Construct a buffer. The dot is clamped to the content.
    pub fn new(content: impl Into<String>, dot: usize) -> Self {
        let content = content.into();
        let dot = floor_char_boundary(&content, dot);
        Self { content, dot }
    }

    /// A buffer with the dot at the end of the content.
    pub fn at_end(content: impl Into<String>) -> Self {
        let content = content.into();
        let dot = content.len();
        Self { content, dot }
    }

    /// Insert text at the dot, moving the dot past it.
    pub fn insert_at_dot(&self, text: &str) -> Self {
        let mut content = String::with_capacity(self.content.len() + text.len());
        content.push_str(&self.content[..self.dot]);
        content.push_str(text);
        content.push_str(&self.content[self.dot..]);
        Self {
            content,
            dot: self.dot + text.len(),
        }
    }

    /// Delete the character before the dot. A no-op at the start.
    pub fn backspace(&self) -> Self {
        let Some(c) = self.content[..self.dot].chars().next_back() else {
            return self.clone();
        };
        let start = self.dot - c.len_utf8();
        let mut content = self.content.clone();
        content.replace_range(start..self.dot, "");
        Self {
            content,
            dot: start,
        }
    }

    /// The text before the dot.
    pub fn before_dot(&self) -> &str {
        &self.content[..self.dot]
    }

    /// The text after the dot.
    pub fn after_dot(&self) -> &str {
        &self.content[self.dot..]
    }
}

/// A display-only substitution over part of a buffer, such as a completion
/// preview.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PendingCode {
    /// Start of the replaced range.
    pub from: usize,
    /// End of the replaced range.
    pub to: usize,
    /// Text shown in place of the range.
    pub content: String,
}

impl PendingCode {
    /// Construct a pending overlay.
    pub fn new(from: usize, to: usize, content: impl Into<String>) -> Self {
        Self {
            from,
            to,
            content: content.into(),
        }
    }

    /// Is this overlay applicable to `text`? Empty overlays and overlays with
    /// bad offsets are not.
    fn applies_to(&self, text: &str) -> bool {
        let empty = self.from == self.to && self.content.is_empty();
        !empty
            && self.from <= self.to
            && self.to <= text.len()
            && text.is_char_boundary(self.from)
            && text.is_char_boundary(self.to)
    }
}

/// Apply a pending overlay to a buffer's content. Returns the patched text and
/// the byte range the overlay occupies in it, or `None` when the overlay does
/// not apply. The buffer's dot is untouched: the cursor stays with the real
/// buffer while the overlay is on display.
pub fn patch_pending(buf: &CodeBuffer, pending: &PendingCode) -> (String, Option<(usize, usize)>) {
    if !pending.applies_to(&buf.content) {
        return (buf.content.clone(), None);
    }
    let PendingCode { from, to, .. } = *pending;
    let inserted = &pending.content;
    let content = format!(
        "{}{}{}",
        &buf.content[..from],
        inserted,
        &buf.content[to..]
    );
    (content, Some((from, from + inserted.len())))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn insert_and_backspace() {
        let b = CodeBuffer::new("ad", 1).insert_at_dot("bc");
        assert_eq!(b, CodeBuffer::new("abcd", 3));
        assert_eq!(b.backspace(), CodeBuffer::new("abd", 2));
        assert_eq!(CodeBuffer::new("ab", 0).backspace(), CodeBuffer::new("ab", 0));
        assert_eq!(CodeBuffer::at_end("x界").backspace(), CodeBuffer::at_end("x"));
        assert_eq!(CodeBuffer::new("界", 2).dot, 0);
    }

    #[test]
    fn patch() {
        let buf = CodeBuffer::new("echo foo", 8);
        let (p, range) = patch_pending(&buf, &PendingCode::new(5, 8, "foobar"));
        assert_eq!(p, "echo foobar");
        assert_eq!(range, Some((5, 11)));

        let (p, range) = patch_pending(&CodeBuffer::new("ab cd", 5), &PendingCode::new(0, 2, "x"));
        assert_eq!(p, "x cd");
        assert_eq!(range, Some((0, 1)));

        let buf = CodeBuffer::new("ab", 1);
        for bad in [
            PendingCode::new(2, 1, "x"),
            PendingCode::new(0, 9, "x"),
            PendingCode::new(1, 1, ""),
        ] {
            assert_eq!(patch_pending(&buf, &bad), ("ab".to_string(), None));
        }
        let buf = CodeBuffer::at_end("界");
        assert_eq!(patch_pending(&buf, &PendingCode::new(1, 3, "x")).1, None);
    }

    proptest! {
        #[test]
        fn insert_then_backspace_round_trips(
            content in "[a-z界é😀 ]{0,8}",
            at in 0usize..40,
            text in "[a-zA-Z0-9界é😀 ]{0,8}",
        ) {
            let buf = CodeBuffer::new(content, at);
            let mut b = buf.insert_at_dot(&text);
            for _ in text.chars() {
                b = b.backspace();
            }
            prop_assert_eq!(b, buf);
        }

        #[test]
        fn backspace_removes_one_char(prefix in "\\PC{0,6}", c in any::<char>()) {
            let buf = CodeBuffer::at_end(format!("{prefix}{c}"));
            let b = buf.backspace();
            prop_assert_eq!(b.content, prefix);
            prop_assert_eq!(b.dot, buf.dot - c.len_utf8());
        }
    }
}
