use unicode_segmentation::UnicodeSegmentation;

use crate::{
    style::{Attr, Style, StyledText},
    text::{caret_notation, display_width, grapheme_width, is_newline},
};

/// A terminal cell: one grapheme and its style. Control characters are stored
/// in caret notation, so a cell may span two columns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Text of the cell.
    pub text: String,
    /// Style applied to the cell.
    pub style: Style,
}

impl Cell {
    /// Construct a cell.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Width of the cell in columns.
    pub fn width(&self) -> usize {
        display_width(&self.text)
    }
}

/// A position in a buffer, counted in lines and columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    /// Line index.
    pub line: usize,
    /// Column index.
    pub col: usize,
}

impl Pos {
    /// Construct a position.
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// A rendered grid of styled cells with a cursor position, the "dot".
///
/// Lines are ragged: each holds only the cells that were written. A fresh
/// buffer has a single empty line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TermBuf {
    /// Width the buffer was rendered for.
    pub width: usize,
    /// Lines of cells.
    pub lines: Vec<Vec<Cell>>,
    /// Cursor position.
    pub dot: Pos,
}

impl TermBuf {
    /// A buffer with one empty line and the dot at the origin.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            lines: vec![vec![]],
            dot: Pos::default(),
        }
    }

    /// Total width in columns of a line of cells.
    pub fn cells_width(line: &[Cell]) -> usize {
        line.iter().map(Cell::width).sum()
    }

    /// Number of lines.
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Width of the widest line.
    pub fn content_width(&self) -> usize {
        self.lines
            .iter()
            .map(|l| Self::cells_width(l))
            .max()
            .unwrap_or(0)
    }

    /// Plain text of one line.
    pub fn line_text(&self, i: usize) -> String {
        self.lines
            .get(i)
            .map(|l| l.iter().map(|c| c.text.as_str()).collect())
            .unwrap_or_default()
    }

    /// Append another buffer below this one. With `move_dot`, the dot moves to
    /// the other buffer's dot, translated into this buffer.
    pub fn extend(&mut self, other: Self, move_dot: bool) {
        if move_dot {
            self.dot = Pos::new(other.dot.line + self.lines.len(), other.dot.col);
        }
        self.lines.extend(other.lines);
    }

    /// Append another buffer to the right. Every line of this buffer is padded
    /// to the current width first; lines the other buffer has beyond this
    /// buffer's height are preceded by a full width of spaces. The width grows
    /// by the other buffer's width. The dot is unchanged.
    pub fn extend_right(&mut self, other: Self) {
        let width = self.width;
        for (i, line) in other.lines.into_iter().enumerate() {
            if i < self.lines.len() {
                let current = &mut self.lines[i];
                let pad = width.saturating_sub(Self::cells_width(current));
                current.extend(spacing(pad));
                current.extend(line);
            } else {
                let mut row = spacing(width);
                row.extend(line);
                self.lines.push(row);
            }
        }
        self.width += other.width;
    }

    /// Keep only lines `[low, high)`. Bounds are clamped to the buffer; the
    /// dot line is shifted and clamped into the remaining range.
    pub fn trim_to_lines(&mut self, low: usize, high: usize) {
        let high = high.min(self.lines.len());
        let low = low.min(high);
        self.lines.truncate(high);
        self.lines.drain(..low);
        let last = self.lines.len().saturating_sub(1);
        self.dot.line = self.dot.line.saturating_sub(low).min(last);
    }
}

/// A run of plain spaces.
fn spacing(n: usize) -> Vec<Cell> {
    vec![Cell::new(" ", Style::default()); n]
}

/// Builds a [`TermBuf`] by writing styled text cell by cell.
#[derive(Debug)]
pub struct BufferBuilder {
    /// Buffer under construction.
    buf: TermBuf,
    /// Current column on the last line.
    col: usize,
}

impl BufferBuilder {
    /// Start building a buffer of the given width.
    pub fn new(width: usize) -> Self {
        Self {
            buf: TermBuf::new(width),
            col: 0,
        }
    }

    /// Current column on the last line.
    pub fn col(&self) -> usize {
        self.col
    }

    /// Current position of the write head.
    pub fn cursor(&self) -> Pos {
        Pos::new(self.buf.lines.len() - 1, self.col)
    }

    /// Record the dot at the write head.
    pub fn set_dot_here(&mut self) -> &mut Self {
        self.buf.dot = self.cursor();
        self
    }

    /// Start a new line.
    pub fn newline(&mut self) -> &mut Self {
        self.buf.lines.push(vec![]);
        self.col = 0;
        self
    }

    /// Write a single grapheme. A newline grapheme starts a new line, control
    /// characters are shown in caret notation in inverse video, and a cell
    /// that does not fit on the current line wraps to the next one.
    pub fn write_grapheme(&mut self, g: &str, style: Style) -> &mut Self {
        if is_newline(g) {
            return self.newline();
        }
        let cell = match caret_notation(g) {
            Some(caret) => Cell::new(caret, style.attr(Attr::Inverse)),
            None => Cell::new(g, style),
        };
        let w = if cell.text == g {
            grapheme_width(g)
        } else {
            cell.width()
        };
        if self.col > 0 && self.col + w > self.buf.width {
            self.newline();
        }
        if let Some(line) = self.buf.lines.last_mut() {
            line.push(cell);
        }
        self.col += w;
        self
    }

    /// Write a string in one style.
    pub fn write_str(&mut self, s: &str, style: Style) -> &mut Self {
        for g in s.graphemes(true) {
            self.write_grapheme(g, style);
        }
        self
    }

    /// Write styled text.
    pub fn write_styled(&mut self, t: &StyledText) -> &mut Self {
        for seg in t.segments() {
            self.write_str(&seg.text, seg.style);
        }
        self
    }

    /// Write `n` spaces in one style.
    pub fn write_spaces(&mut self, n: usize, style: Style) -> &mut Self {
        for _ in 0..n {
            self.write_grapheme(" ", style);
        }
        self
    }

    /// Finish building.
    pub fn finish(self) -> TermBuf {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(buf: &TermBuf) -> Vec<String> {
        (0..buf.height()).map(|i| buf.line_text(i)).collect()
    }

    #[test]
    fn builder_wraps() {
        let mut bb = BufferBuilder::new(4);
        bb.write_str("abcdef", Style::default());
        assert_eq!(text(&bb.finish()), vec!["abcd", "ef"]);

        let mut bb = BufferBuilder::new(3);
        bb.write_str("ab界", Style::default());
        let buf = bb.finish();
        assert_eq!(text(&buf), vec!["ab", "界"]);
    }

    #[test]
    fn builder_newlines_and_controls() {
        let mut bb = BufferBuilder::new(10);
        bb.write_str("a\nb\x01", Style::default());
        let buf = bb.finish();
        assert_eq!(text(&buf), vec!["a", "b^A"]);
        assert!(buf.lines[1][1].style.attrs.inverse);
        assert_eq!(TermBuf::cells_width(&buf.lines[1]), 3);
    }

    #[test]
    fn dot() {
        let mut bb = BufferBuilder::new(10);
        bb.write_str("ab", Style::default()).set_dot_here().newline();
        bb.write_str("c", Style::default());
        assert_eq!(bb.finish().dot, Pos::new(0, 2));
    }

    #[test]
    fn extend() {
        let mut a = BufferBuilder::new(5);
        a.write_str("a", Style::default());
        let mut a = a.finish();
        let mut b = BufferBuilder::new(5);
        b.write_str("b\nbb", Style::default()).set_dot_here();
        a.extend(b.finish(), true);
        assert_eq!(text(&a), vec!["a", "b", "bb"]);
        assert_eq!(a.dot, Pos::new(2, 2));
    }

    #[test]
    fn extend_right() {
        let mut a = BufferBuilder::new(3);
        a.write_str("a", Style::default());
        let mut a = a.finish();
        let mut b = BufferBuilder::new(2);
        b.write_str("b\nc", Style::default());
        a.extend_right(b.finish());
        assert_eq!(text(&a), vec!["a  b", "   c"]);
        assert_eq!(a.width, 5);
    }

    #[test]
    fn trim() {
        let mut bb = BufferBuilder::new(3);
        bb.write_str("a\nb\nc\nd", Style::default()).set_dot_here();
        let mut buf = bb.finish();
        buf.trim_to_lines(1, 3);
        assert_eq!(text(&buf), vec!["b", "c"]);
        assert_eq!(buf.dot.line, 1);
        buf.trim_to_lines(5, 9);
        assert_eq!(buf.height(), 0);
        assert_eq!(buf.dot.line, 0);
    }
}
