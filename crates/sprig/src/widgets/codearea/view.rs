//! Rendering of the code area.

use unicode_segmentation::UnicodeSegmentation;

use crate::{
    style::{Style, StyledText},
    termbuf::{BufferBuilder, TermBuf},
    view::View,
};

/// The rendered form of a code area: prompt, code with the cursor, an optional
/// right prompt, and tips below.
#[derive(Debug, Clone)]
pub(super) struct CodeAreaView {
    /// Left prompt.
    pub(super) prompt: StyledText,
    /// Right prompt, shown only if it fits on the last code line.
    pub(super) rprompt: StyledText,
    /// Highlighted code, with the pending overlay applied.
    pub(super) code: StyledText,
    /// Cursor position as a byte offset into the code.
    pub(super) dot: usize,
    /// Lines shown after the code.
    pub(super) tips: Vec<StyledText>,
}

impl View for CodeAreaView {
    fn render(&self, width: usize, height: usize) -> TermBuf {
        let mut bb = BufferBuilder::new(width);
        bb.write_styled(&self.prompt);
        let mut offset = 0;
        let mut dot_set = false;
        for seg in self.code.segments() {
            for (i, g) in seg.text.grapheme_indices(true) {
                if !dot_set && offset + i >= self.dot {
                    bb.set_dot_here();
                    dot_set = true;
                }
                bb.write_grapheme(g, seg.style);
            }
            offset += seg.text.len();
        }
        if !dot_set {
            bb.set_dot_here();
        }

        if !self.rprompt.is_empty() {
            let padding = width as isize - bb.col() as isize - self.rprompt.width() as isize;
            if padding >= 1 {
                bb.write_spaces(padding as usize, Style::default());
                bb.write_styled(&self.rprompt);
            }
        }

        for tip in &self.tips {
            bb.newline();
            bb.write_styled(tip);
        }

        let mut buf = bb.finish();
        truncate_to_height(&mut buf, height);
        buf
    }
}

/// Trim a buffer to `max_height` lines, keeping the dot line visible.
fn truncate_to_height(buf: &mut TermBuf, max_height: usize) {
    let dot_line = buf.dot.line;
    if buf.lines.len() <= max_height {
        return;
    }
    if dot_line < max_height {
        buf.trim_to_lines(0, max_height);
    } else {
        buf.trim_to_lines(dot_line + 1 - max_height, dot_line + 1);
    }
}
