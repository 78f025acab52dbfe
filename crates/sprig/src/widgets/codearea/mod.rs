//! A code editor component.
//!
//! The code area is built in three layers, outermost first:
//!
//! - The paste layer collects bracketed pastes and inserts them in one go.
//! - The abbreviation layer tracks the streak of typed characters and expands
//!   abbreviations that it ends with.
//! - The core keeps the buffer, handles insertion and deletion, and renders
//!   the prompt, the code, the right prompt and tips.
//!
//! All of the code area's state lives at the level of the context it runs in,
//! under the keys defined in this module. Seed them with
//! [`with_states`](crate::with_states) to configure the component.

mod abbr;
mod buffer;
mod quote;
mod view;

use std::{fmt, sync::Arc};

pub use abbr::{Abbreviations, WordClass};
pub use buffer::{CodeBuffer, PendingCode, patch_pending};
pub use quote::quote;
use view::CodeAreaView;

use crate::{
    Action, Context, Scene,
    event::{
        Event,
        key::{Ctrl, KeyCode},
    },
    style::{Attr, StyledText},
    text::floor_char_boundary,
};

/// Left prompt, a [`StyledText`].
pub const PROMPT: &str = "prompt";
/// Right prompt, a [`StyledText`].
pub const RPROMPT: &str = "rprompt";
/// The buffer being edited, a [`CodeBuffer`].
pub const BUFFER: &str = "buffer";
/// Pending overlay, a [`PendingCode`].
pub const PENDING: &str = "pending";
/// Code highlighter, a [`Highlighter`].
pub const HIGHLIGHTER: &str = "highlighter";
/// Simple abbreviations, an [`Abbreviations`] table.
pub const ABBR: &str = "abbr";
/// Command abbreviations, an [`Abbreviations`] table.
pub const CMD_ABBR: &str = "cmd-abbr";
/// Small-word abbreviations, an [`Abbreviations`] table.
pub const SMALL_WORD_ABBR: &str = "small-word-abbr";
/// Characters typed in a row, a `String`.
pub const STREAK: &str = "streak";
/// Whether a paste is in progress, a `bool`.
pub const PASTING: &str = "pasting";
/// Text collected during a paste, a `String`.
pub const PASTE_BUFFER: &str = "paste-buffer";
/// Whether pasted text is shell-quoted, a `bool`.
pub const QUOTE_PASTE: &str = "quote-paste";

/// The binding point of the code area.
pub const BINDING: &str = "codearea";

/// Turns code into styled text plus tips shown below it.
///
/// The styled text must have the same plain text as the input.
#[derive(Clone)]
pub struct Highlighter(Arc<dyn Fn(&str) -> (StyledText, Vec<StyledText>) + Send + Sync>);

impl Highlighter {
    /// Wrap a highlighting function.
    pub fn new(f: impl Fn(&str) -> (StyledText, Vec<StyledText>) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A highlighter that leaves code unstyled and has no tips.
    pub fn plain() -> Self {
        Self::new(|code| (StyledText::plain(code), vec![]))
    }

    /// Highlight `code`.
    pub fn highlight(&self, code: &str) -> (StyledText, Vec<StyledText>) {
        (self.0)(code)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::plain()
    }
}

impl fmt::Debug for Highlighter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<highlighter>")
    }
}

/// The code area component.
///
/// A paste start switches into paste mode. Keys pressed while pasting are
/// collected instead of being forwarded, and the paste end inserts the
/// collected text at the dot, shell-quoted if [`QUOTE_PASTE`] is set.
pub fn code_area(c: &Context) -> Scene {
    let (view, inner) = code_area_with_abbr(c);
    let pasting = c.state(PASTING, false);
    let paste_buffer = c.state(PASTE_BUFFER, String::new());
    let quote_paste = c.state(QUOTE_PASTE, false);
    let buffer = c.bind_state::<CodeBuffer>(&[BUFFER]);

    let react = c.with_binding(BINDING, move |ev| match ev {
        Event::PasteSetting(true) => {
            pasting.set(true);
            paste_buffer.set(String::new());
            Action::Consumed
        }
        Event::PasteSetting(false) => {
            let mut text = paste_buffer.get();
            if quote_paste.get() {
                text = quote(&text);
            }
            buffer.swap(|b| b.insert_at_dot(&text));
            pasting.set(false);
            paste_buffer.set(String::new());
            Action::Consumed
        }
        Event::Key(key) if pasting.get() => {
            match key.literal() {
                Some(ch) => paste_buffer.swap(|mut s| {
                    s.push(ch);
                    s
                }),
                None => tracing::debug!(key = %key, "dropping function key during paste"),
            }
            Action::Consumed
        }
        _ => inner(ev),
    });
    (view, react)
}

/// The abbreviation layer over the core.
fn code_area_with_abbr(c: &Context) -> Scene {
    let (view, inner) = code_area_core(c);
    let abbr = c.state(ABBR, Abbreviations::new());
    let cmd_abbr = c.state(CMD_ABBR, Abbreviations::new());
    let small_word_abbr = c.state(SMALL_WORD_ABBR, Abbreviations::new());
    let streak = c.state(STREAK, String::new());
    let buffer = c.bind_state::<CodeBuffer>(&[BUFFER]);

    let react = Box::new(move |ev: &Event| {
        let Event::Key(key) = ev else {
            return inner(ev);
        };
        let before = buffer.get();
        let action = inner(ev);
        let inserted = match key.literal() {
            Some(ch) if action == Action::Consumed => {
                let mut s = [0; 4];
                let expected = before.insert_at_dot(ch.encode_utf8(&mut s));
                (buffer.get() == expected).then_some((ch, expected))
            }
            _ => None,
        };
        let Some((ch, after)) = inserted else {
            streak.set(String::new());
            return action;
        };

        let mut typed = streak.get();
        if !before.before_dot().ends_with(typed.as_str()) {
            typed.clear();
        }
        typed.push(ch);
        let expanded = abbr
            .get()
            .expand_simple(&after, &typed)
            .or_else(|| cmd_abbr.get().expand_command(&after, &typed, ch))
            .or_else(|| small_word_abbr.get().expand_small_word(&after, &typed, ch));
        match expanded {
            Some(b) => {
                buffer.set(b);
                streak.set(String::new());
            }
            None => streak.set(typed),
        }
        Action::Consumed
    });
    (view, react)
}

/// Can `ch` be inserted into the buffer as typed? Only graphic characters
/// and the space are; Enter and Tab stay free for bindings.
fn insertable(ch: char) -> bool {
    ch == ' ' || !(ch.is_control() || ch.is_whitespace())
}

/// The core: buffer, prompts, pending overlay and highlighting.
fn code_area_core(c: &Context) -> Scene {
    let prompt = c.state(PROMPT, StyledText::default());
    let rprompt = c.state(RPROMPT, StyledText::default());
    let buffer = c.state(BUFFER, CodeBuffer::default());
    let pending = c.state(PENDING, PendingCode::default());
    let highlighter = c.state(HIGHLIGHTER, Highlighter::default());

    let buf = buffer.get();
    let (patched, range) = patch_pending(&buf, &pending.get());
    let (mut code, tips) = highlighter.get().highlight(&patched);
    if let Some((from, to)) = range {
        let parts = code.partition(&[from, to]);
        code = StyledText::default();
        for (i, part) in parts.into_iter().enumerate() {
            let part = if i == 1 {
                part.with_attr(Attr::Underline)
            } else {
                part
            };
            code.append(&part);
        }
    }
    let view = CodeAreaView {
        prompt: prompt.get(),
        rprompt: rprompt.get(),
        code,
        dot: floor_char_boundary(&patched, buf.dot),
        tips,
    };

    let react = Box::new(move |ev: &Event| {
        let Some(key) = ev.key() else {
            return Action::Unused;
        };
        if *key == KeyCode::Backspace || *key == Ctrl + 'h' || *key == Ctrl + 'H' {
            buffer.swap(|b| b.backspace());
            return Action::Consumed;
        }
        match key.literal() {
            Some(ch) if insertable(ch) => {
                let mut s = [0; 4];
                buffer.swap(|b| b.insert_at_dot(ch.encode_utf8(&mut s)));
                Action::Consumed
            }
            _ => Action::Unused,
        }
    });
    (Box::new(view), react)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        Store, Value,
        style::{Color, Style},
        termbuf::{Pos, TermBuf},
        with_states,
    };

    fn ctx() -> Context {
        Context::new(Store::new(), None)
    }

    /// Dispatch each event to a freshly invoked code area.
    fn send(c: &Context, events: impl IntoIterator<Item = Event>) -> Vec<Action> {
        events
            .into_iter()
            .map(|ev| {
                let (_, react) = code_area(c);
                react(&ev)
            })
            .collect()
    }

    fn typed(s: &str) -> Vec<Event> {
        s.chars().map(Event::from).collect()
    }

    fn buffer(c: &Context) -> CodeBuffer {
        c.bind_state::<CodeBuffer>(&[BUFFER]).get()
    }

    fn render(c: &Context, width: usize, height: usize) -> TermBuf {
        let (view, _) = code_area(c);
        view.render(width, height)
    }

    #[test]
    fn typing_and_deleting() {
        let c = ctx();
        assert_eq!(send(&c, typed("ab")), vec![Action::Consumed; 2]);
        assert_eq!(buffer(&c), CodeBuffer::new("ab", 2));

        send(&c, [Event::from(KeyCode::Backspace)]);
        assert_eq!(buffer(&c), CodeBuffer::new("a", 1));
        send(&c, [Event::from(Ctrl + 'h')]);
        assert_eq!(buffer(&c), CodeBuffer::default());

        let actions = send(&c, [Event::from(KeyCode::Enter), Event::from(KeyCode::Tab)]);
        assert_eq!(actions, vec![Action::Unused; 2]);
        assert_eq!(buffer(&c), CodeBuffer::default());
    }

    #[test]
    fn unhandled_keys() {
        let c = ctx();
        let actions = send(
            &c,
            [
                Event::from(KeyCode::Up),
                Event::from(Ctrl + 'a'),
                Event::Resize { rows: 1, cols: 1 },
            ],
        );
        assert_eq!(actions, vec![Action::Unused; 3]);
        assert_eq!(buffer(&c), CodeBuffer::default());
    }

    #[test]
    fn paste_is_collected_and_quoted() {
        let c = ctx();
        c.state(QUOTE_PASTE, true);
        send(&c, typed("echo "));
        let mut events = vec![Event::PasteSetting(true)];
        events.extend(typed("a b"));
        events.push(Event::from(KeyCode::Up));
        events.push(Event::PasteSetting(false));
        let actions = send(&c, events);
        assert!(actions.iter().all(|a| *a == Action::Consumed));
        assert_eq!(buffer(&c), CodeBuffer::at_end("echo 'a b'"));
        assert!(!c.bind_state::<bool>(&[PASTING]).get());
        assert_eq!(c.bind_state::<String>(&[PASTE_BUFFER]).get(), "");
    }

    #[test]
    fn paste_without_quoting_keeps_newlines() {
        let c = ctx();
        let mut events = vec![Event::PasteSetting(true)];
        events.extend(typed("x"));
        events.push(Event::from(KeyCode::Enter));
        events.extend(typed("y"));
        events.push(Event::PasteSetting(false));
        send(&c, events);
        assert_eq!(buffer(&c), CodeBuffer::at_end("x\ny"));
        // The whole paste is one insertion, so nothing was abbreviated.
        assert_eq!(c.bind_state::<String>(&[STREAK]).get(), "");
    }

    #[test]
    fn simple_abbreviation() {
        let c = ctx();
        c.state(ABBR, Abbreviations::new().with("ll", "ls -l"));
        send(&c, typed("x ll"));
        assert_eq!(buffer(&c), CodeBuffer::at_end("x ls -l"));
        assert_eq!(c.bind_state::<String>(&[STREAK]).get(), "");
    }

    #[test]
    fn command_and_small_word_abbreviations() {
        let c = ctx();
        c.state(CMD_ABBR, Abbreviations::new().with("gs", "git status"));
        c.state(SMALL_WORD_ABBR, Abbreviations::new().with("fn", "function"));
        send(&c, typed("gs "));
        assert_eq!(buffer(&c), CodeBuffer::at_end("git status "));
        send(&c, typed("fn("));
        assert_eq!(buffer(&c), CodeBuffer::at_end("git status function("));
    }

    #[test]
    fn streak_tracks_typing() {
        let c = ctx();
        c.state(ABBR, Abbreviations::new().with("ll", "ls -l"));
        let streak = c.bind_state::<String>(&[STREAK]);

        send(&c, typed("l"));
        assert_eq!(streak.get(), "l");
        send(&c, [Event::from(KeyCode::Backspace)]);
        assert_eq!(streak.get(), "");
        send(&c, typed("l"));
        assert_eq!(streak.get(), "l");
        send(&c, [Event::from(KeyCode::Up)]);
        assert_eq!(streak.get(), "");
        assert_eq!(buffer(&c), CodeBuffer::at_end("l"));

        // Moving the dot behind the code area's back restarts the streak.
        c.bind_state::<CodeBuffer>(&[BUFFER]).set(CodeBuffer::new("l", 0));
        streak.set("l".into());
        send(&c, typed("l"));
        assert_eq!(buffer(&c), CodeBuffer::new("ll", 1));
        assert_eq!(streak.get(), "l");
    }

    #[test]
    fn renders_prompt_highlight_and_pending() {
        let comp = with_states(
            code_area,
            [
                (PROMPT, Value::new(StyledText::plain("> "))),
                (BUFFER, Value::new(CodeBuffer::at_end("ab"))),
                (PENDING, Value::new(PendingCode::new(2, 2, "cd"))),
                (
                    HIGHLIGHTER,
                    Value::new(Highlighter::new(|code| {
                        (
                            StyledText::plain(code).with_fg(Color::Red),
                            vec![StyledText::plain("tip")],
                        )
                    })),
                ),
            ],
        );
        let c = ctx();
        comp.call(&c);
        let buf = render(&c, 20, 5);
        assert_eq!(buf.line_text(0), "> abcd");
        assert_eq!(buf.line_text(1), "tip");
        assert_eq!(buf.dot, Pos::new(0, 4));

        let red = Style::default().fg(Color::Red);
        let cells = &buf.lines[0];
        assert_eq!(cells[0].style, Style::default());
        assert_eq!(cells[2].style, red);
        assert_eq!(cells[4].style, red.attr(Attr::Underline));
        assert_eq!(cells[5].style, red.attr(Attr::Underline));
    }

    #[test]
    fn cursor_follows_the_buffer_under_pending() {
        let comp = with_states(
            code_area,
            [
                (BUFFER, Value::new(CodeBuffer::at_end("ab cd"))),
                (PENDING, Value::new(PendingCode::new(0, 2, "xyz"))),
            ],
        );
        let c = ctx();
        comp.call(&c);
        let buf = render(&c, 20, 5);
        assert_eq!(buf.line_text(0), "xyz cd");
        assert_eq!(buf.dot, Pos::new(0, 5));

        c.bind_state::<CodeBuffer>(&[BUFFER]).set(CodeBuffer::new("ab cd", 1));
        let buf = render(&c, 20, 5);
        assert_eq!(buf.line_text(0), "xyz cd");
        assert_eq!(buf.dot, Pos::new(0, 1));
    }
}
