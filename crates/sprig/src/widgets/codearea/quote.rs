//! Shell quoting for pasted text.

/// Can `c` appear in an unquoted word?
fn bareword_char(c: char) -> bool {
    c.is_alphanumeric() || "-_:%+,./@!~".contains(c)
}

/// Is `c` printable? Spaces other than U+0020 are not.
fn printable(c: char) -> bool {
    c == ' ' || !(c.is_control() || c.is_whitespace())
}

/// Quote text so that the shell reads it back as a single word.
///
/// Empty text becomes `''`. Text made only of bareword characters, and not
/// starting with `~`, is returned as is. Printable text is single-quoted with
/// embedded quotes doubled. Anything else is double-quoted with backslash
/// escapes.
pub fn quote(s: &str) -> String {
    if s.is_empty() {
        return "''".into();
    }
    if !s.chars().all(printable) {
        return double_quote(s);
    }
    if !s.starts_with('~') && s.chars().all(bareword_char) {
        return s.into();
    }
    format!("'{}'", s.replace('\'', "''"))
}

/// Double-quote text, escaping everything that is not printable.
fn double_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        let escape = match c {
            '"' => Some('"'),
            '\\' => Some('\\'),
            '\n' => Some('n'),
            '\t' => Some('t'),
            '\r' => Some('r'),
            '\x07' => Some('a'),
            '\x08' => Some('b'),
            '\x0b' => Some('v'),
            '\x0c' => Some('f'),
            '\x1b' => Some('e'),
            _ => None,
        };
        if let Some(e) = escape {
            out.push('\\');
            out.push(e);
        } else if printable(c) {
            out.push(c);
        } else {
            let escaped = match u32::from(c) {
                n @ 0..=0x7f => format!("\\x{n:02x}"),
                n @ 0x80..=0xffff => format!("\\u{n:04x}"),
                n => format!("\\U{n:08x}"),
            };
            out.push_str(&escaped);
        }
    }
    out.push('"');
    out
}
