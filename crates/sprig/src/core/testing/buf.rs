//! Utilities for inspecting rendered buffers in tests.
use crate::{style::Style, termbuf::TermBuf};

/// The style marker used in dumps for a cell style.
///
/// `#` inverse, `*` bold, `_` underline, `R` red, `G` green, space for the
/// default style and `?` for anything else. The first that applies wins.
pub fn style_marker(style: &Style) -> char {
    if *style == Style::default() {
        ' '
    } else if style.attrs.inverse {
        '#'
    } else if style.attrs.bold {
        '*'
    } else if style.attrs.underline {
        '_'
    } else if style.fg.is_some_and(|c| c.is_red()) {
        'R'
    } else if style.fg.is_some_and(|c| c.is_green()) {
        'G'
    } else {
        '?'
    }
}

/// A view of a buffer with assertion helpers.
pub struct BufTest<'a> {
    /// Reference to the buffer under test.
    buf: &'a TermBuf,
}

impl<'a> BufTest<'a> {
    /// Wrap a buffer.
    pub fn new(buf: &'a TermBuf) -> Self {
        Self { buf }
    }

    /// The text of every line.
    pub fn lines(&self) -> Vec<String> {
        (0..self.buf.height()).map(|i| self.buf.line_text(i)).collect()
    }

    /// The style markers of line `i`, one per column.
    pub fn style_line(&self, i: usize) -> String {
        let mut out = String::new();
        for cell in self.buf.lines.get(i).into_iter().flatten() {
            let m = style_marker(&cell.style);
            for _ in 0..cell.width().max(1) {
                out.push(m);
            }
        }
        out
    }

    /// Does any line contain `txt`?
    pub fn contains_text(&self, txt: &str) -> bool {
        self.lines().iter().any(|l| l.contains(txt))
    }

    /// Render the buffer as a bordered dump. Each line is followed by its
    /// style markers, and the dot is marked with `^` on the style row of its
    /// line.
    ///
    /// ```text
    /// Width = 10, Dot = (0, 2)
    /// ┌──────────┐
    /// │> ls      │
    /// │  ^       │
    /// └──────────┘
    /// ```
    ///
    /// The dot marker replaces the style marker under it.
    pub fn dump(&self) -> String {
        let width = self
            .buf
            .width
            .max(self.buf.content_width())
            .max(self.buf.dot.col + 1);
        let mut out = format!(
            "Width = {}, Dot = ({}, {})\n",
            self.buf.width, self.buf.dot.line, self.buf.dot.col
        );
        out.push_str(&format!("┌{}┐\n", "─".repeat(width)));
        for i in 0..self.buf.height() {
            let text = self.buf.line_text(i);
            let mut styles: Vec<char> = self.style_line(i).chars().collect();
            if i == self.buf.dot.line {
                if styles.len() <= self.buf.dot.col {
                    styles.resize(self.buf.dot.col + 1, ' ');
                }
                styles[self.buf.dot.col] = '^';
            }
            let styles: String = styles.into_iter().collect();
            let pad = width.saturating_sub(TermBuf::cells_width(&self.buf.lines[i]));
            out.push_str(&format!("│{text}{}│\n", " ".repeat(pad)));
            out.push_str(&format!("│{styles:width$}│\n"));
        }
        out.push_str(&format!("└{}┘\n", "─".repeat(width)));
        out
    }

    /// Assert that the buffer's lines match `expected`, ignoring trailing
    /// whitespace. Prints both on failure.
    pub fn assert_matches(&self, expected: &[&str]) {
        let actual = self.lines();
        let same = actual.len() == expected.len()
            && actual
                .iter()
                .zip(expected)
                .all(|(a, e)| a.trim_end() == e.trim_end());
        if !same {
            println!("\nExpected:");
            for line in expected {
                println!("│{line}│");
            }
            println!("\nActual:\n{}", self.dump());
            panic!("Buffer contents did not match expected pattern");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        style::{Attr, Color},
        termbuf::BufferBuilder,
    };

    #[test]
    fn dump_marks_styles_and_dot() {
        let mut bb = BufferBuilder::new(6);
        bb.write_str("> ", Style::default())
            .write_str("ls", Style::default().attr(Attr::Bold))
            .set_dot_here()
            .newline()
            .write_str("x", Style::default().fg(Color::DarkRed))
            .write_str("y", Style::default().fg(Color::Blue));
        let buf = bb.finish();
        let t = BufTest::new(&buf);
        assert_eq!(t.style_line(0), "  **");
        assert_eq!(
            t.dump(),
            "Width = 6, Dot = (0, 4)\n\
             ┌──────┐\n\
             │> ls  │\n\
             │  **^ │\n\
             │xy    │\n\
             │R?    │\n\
             └──────┘\n"
        );
        t.assert_matches(&["> ls", "xy  "]);
        assert!(t.contains_text("ls"));
    }

    #[test]
    #[should_panic(expected = "did not match")]
    fn mismatch_panics() {
        let buf = TermBuf::new(4);
        BufTest::new(&buf).assert_matches(&["x"]);
    }
}
