//! Grapheme and cell width helpers.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Return the display width of a grapheme, clamped to 1..=2. The empty string
/// has width 0.
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.is_empty() {
        return 0;
    }
    UnicodeWidthStr::width(grapheme).clamp(1, 2)
}

/// Return the display width of a string, summing grapheme widths.
pub fn display_width(s: &str) -> usize {
    s.graphemes(true).map(grapheme_width).sum()
}

/// Is this grapheme a line break?
pub fn is_newline(grapheme: &str) -> bool {
    matches!(grapheme, "\n" | "\r\n")
}

/// The caret notation for a control grapheme, such as `^A` for `\x01` and
/// `^?` for DEL. Returns `None` for anything that is not a single control
/// character.
pub fn caret_notation(grapheme: &str) -> Option<String> {
    let mut chars = grapheme.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    match c {
        '\x00'..='\x1f' | '\x7f' => Some(format!("^{}", char::from(c as u8 ^ 0x40))),
        _ => None,
    }
}

/// Clamp a byte offset down to the nearest character boundary of `s`.
pub fn floor_char_boundary(s: &str, mut idx: usize) -> usize {
    if idx >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths() {
        assert_eq!(display_width("a界b"), 4);
        assert_eq!(display_width("A👩‍💻B"), 4);
        assert_eq!(grapheme_width(""), 0);
        assert_eq!(grapheme_width("\u{301}"), 1);
    }

    #[test]
    fn carets() {
        assert_eq!(caret_notation("\x01").as_deref(), Some("^A"));
        assert_eq!(caret_notation("\x1b").as_deref(), Some("^["));
        assert_eq!(caret_notation("\x7f").as_deref(), Some("^?"));
        assert_eq!(caret_notation("a"), None);
        assert_eq!(caret_notation("\r\n"), None);
    }

    #[test]
    fn char_boundary() {
        let s = "a界";
        assert_eq!(floor_char_boundary(s, 2), 1);
        assert_eq!(floor_char_boundary(s, 4), 4);
        assert_eq!(floor_char_boundary(s, 10), 4);
    }
}
