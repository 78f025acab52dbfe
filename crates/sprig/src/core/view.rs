//! Views and layout combinators.
//!
//! A view is a pure function from a size to a [`TermBuf`]. Views are cheap,
//! immutable values: components build a fresh view tree on every frame.

use crate::{
    style::{Color, StyledText},
    termbuf::{BufferBuilder, TermBuf},
};

/// Something that can be rendered to a buffer.
pub trait View {
    /// Render to a buffer of the given width, using at most `height` lines.
    fn render(&self, width: usize, height: usize) -> TermBuf;
}

impl<T: View + ?Sized> View for Box<T> {
    fn render(&self, width: usize, height: usize) -> TermBuf {
        (**self).render(width, height)
    }
}

/// A view with no content.
#[derive(Debug, Clone, Copy, Default)]
pub struct Empty;

impl View for Empty {
    fn render(&self, width: usize, _height: usize) -> TermBuf {
        TermBuf::new(width)
    }
}

/// Styled text spans with an optional cursor position.
#[derive(Debug, Clone, Default)]
pub struct TextView {
    /// Spans, written left to right.
    spans: Vec<StyledText>,
    /// The dot is placed after this many spans.
    dot_before: usize,
}

impl TextView {
    /// A text view over the given spans, with the dot at the origin.
    pub fn new(spans: Vec<StyledText>) -> Self {
        Self {
            spans,
            dot_before: 0,
        }
    }

    /// Place the dot right after span `n - 1`. Zero leaves it at the origin.
    pub fn with_dot_before(mut self, n: usize) -> Self {
        self.dot_before = n;
        self
    }
}

impl View for TextView {
    fn render(&self, width: usize, height: usize) -> TermBuf {
        let mut bb = BufferBuilder::new(width);
        for (i, span) in self.spans.iter().enumerate() {
            bb.write_styled(span);
            if i + 1 == self.dot_before {
                bb.set_dot_here();
            }
        }
        let mut buf = bb.finish();
        buf.trim_to_lines(0, height);
        buf
    }
}

/// A single-span text view.
pub fn text(t: impl Into<StyledText>) -> TextView {
    TextView::new(vec![t.into()])
}

/// An inline error message in red.
pub fn error_view(message: &str) -> TextView {
    text(StyledText::plain(message).with_fg(Color::Red))
}

/// Children stacked vertically.
pub struct VBox {
    /// Rows, top to bottom.
    rows: Vec<Box<dyn View>>,
    /// The row whose dot surfaces.
    focus: usize,
}

impl VBox {
    /// Stack the given rows, focused on the first.
    pub fn new(rows: Vec<Box<dyn View>>) -> Self {
        Self { rows, focus: 0 }
    }

    /// Set the focused row.
    pub fn with_focus(mut self, focus: usize) -> Self {
        self.focus = focus;
        self
    }
}

impl View for VBox {
    /// Row heights follow a fixed budget: the first row gets
    /// `height - rows - 1` lines, row `i` gets
    /// `height - rendered - rows - i - 1`, and rendering stops at the first
    /// row whose budget is not positive.
    fn render(&self, width: usize, height: usize) -> TermBuf {
        let Some(first) = self.rows.first() else {
            return TermBuf::new(width);
        };
        let n = self.rows.len() as isize;
        let height = height as isize;
        let mut buf = first.render(width, (height - n - 1).max(0) as usize);
        for (i, row) in self.rows.iter().enumerate().skip(1) {
            let budget = height - buf.lines.len() as isize - n - i as isize - 1;
            if budget <= 0 {
                break;
            }
            buf.extend(row.render(width, budget as usize), i == self.focus);
        }
        buf
    }
}

/// Children side by side in equal-width columns.
pub struct HBox {
    /// Columns, left to right.
    cols: Vec<Box<dyn View>>,
    /// The focused column. Stored, but the dot is not taken from it.
    focus: usize,
}

impl HBox {
    /// Place the given columns side by side.
    pub fn new(cols: Vec<Box<dyn View>>) -> Self {
        Self { cols, focus: 0 }
    }

    /// Set the focused column.
    pub fn with_focus(mut self, focus: usize) -> Self {
        self.focus = focus;
        self
    }

    /// The focused column.
    pub fn focus(&self) -> usize {
        self.focus
    }
}

impl View for HBox {
    fn render(&self, width: usize, height: usize) -> TermBuf {
        let Some(first) = self.cols.first() else {
            return TermBuf::new(width);
        };
        let col_width = width / self.cols.len();
        let mut buf = first.render(col_width, height);
        for col in &self.cols[1..] {
            buf.extend_right(col.render(col_width, height));
        }
        buf
    }
}

/// Children side by side, each as wide as its content, separated by a gap.
pub struct HBoxFlex {
    /// Columns, left to right.
    cols: Vec<Box<dyn View>>,
    /// The focused column. Stored, but the dot is not taken from it.
    focus: usize,
    /// Blank columns between children.
    gap: usize,
}

impl HBoxFlex {
    /// Place the given columns side by side with no gap.
    pub fn new(cols: Vec<Box<dyn View>>) -> Self {
        Self {
            cols,
            focus: 0,
            gap: 0,
        }
    }

    /// Set the focused column.
    pub fn with_focus(mut self, focus: usize) -> Self {
        self.focus = focus;
        self
    }

    /// Set the gap between columns.
    pub fn with_gap(mut self, gap: usize) -> Self {
        self.gap = gap;
        self
    }

    /// The focused column.
    pub fn focus(&self) -> usize {
        self.focus
    }
}

impl View for HBoxFlex {
    fn render(&self, width: usize, height: usize) -> TermBuf {
        let n = self.cols.len();
        let mut buf = TermBuf::new(0);
        for (i, col) in self.cols.iter().enumerate() {
            let reserved = (self.gap + 1) * (n - i - 1);
            let mut b = col.render(width.saturating_sub(reserved), height);
            b.width = b.content_width();
            if i > 0 {
                buf.width += self.gap;
            }
            buf.extend_right(b);
        }
        buf
    }
}
