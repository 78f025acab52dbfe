use std::{
    collections::VecDeque,
    io::{self, Stderr, Write},
    panic,
    rc::Rc,
};

use color_backtrace::{BacktracePrinter, default_output_stream};
use crossterm::{
    self, ExecutableCommand, QueueableCommand, cursor as ccursor, event as cevent, style, terminal,
};
use scopeguard::guard;

use super::Terminal;
use crate::{
    Binding, Comp, Tree,
    error::Result,
    event::{
        Event,
        key::{self, Key},
    },
    runloop::{RunOptions, run_with_options},
    style::{Color, Style},
    termbuf::TermBuf,
};

/// Translate a sprig color into a crossterm color.
fn translate_color(c: Color) -> style::Color {
    match c {
        Color::Black => style::Color::Black,
        Color::DarkGrey => style::Color::DarkGrey,
        Color::Red => style::Color::Red,
        Color::DarkRed => style::Color::DarkRed,
        Color::Green => style::Color::Green,
        Color::DarkGreen => style::Color::DarkGreen,
        Color::Yellow => style::Color::Yellow,
        Color::DarkYellow => style::Color::DarkYellow,
        Color::Blue => style::Color::Blue,
        Color::DarkBlue => style::Color::DarkBlue,
        Color::Magenta => style::Color::Magenta,
        Color::DarkMagenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::Cyan,
        Color::DarkCyan => style::Color::DarkCyan,
        Color::White => style::Color::White,
        Color::Grey => style::Color::Grey,
        Color::Rgb { r, g, b } => style::Color::Rgb { r, g, b },
        Color::AnsiValue(a) => style::Color::AnsiValue(a),
    }
}

/// Translate crossterm key modifiers into sprig modifiers.
fn translate_key_modifiers(mods: cevent::KeyModifiers) -> key::Mods {
    key::Mods {
        shift: mods.contains(cevent::KeyModifiers::SHIFT),
        ctrl: mods.contains(cevent::KeyModifiers::CONTROL),
        alt: mods.contains(cevent::KeyModifiers::ALT),
    }
}

/// Translate a crossterm key event. Keys sprig has no code for are dropped.
fn translate_key(k: cevent::KeyEvent) -> Option<Key> {
    let code = match k.code {
        cevent::KeyCode::Backspace => key::KeyCode::Backspace,
        cevent::KeyCode::Enter => key::KeyCode::Enter,
        cevent::KeyCode::Left => key::KeyCode::Left,
        cevent::KeyCode::Right => key::KeyCode::Right,
        cevent::KeyCode::Up => key::KeyCode::Up,
        cevent::KeyCode::Down => key::KeyCode::Down,
        cevent::KeyCode::Home => key::KeyCode::Home,
        cevent::KeyCode::End => key::KeyCode::End,
        cevent::KeyCode::PageUp => key::KeyCode::PageUp,
        cevent::KeyCode::PageDown => key::KeyCode::PageDown,
        cevent::KeyCode::Tab => key::KeyCode::Tab,
        cevent::KeyCode::BackTab => key::KeyCode::BackTab,
        cevent::KeyCode::Delete => key::KeyCode::Delete,
        cevent::KeyCode::Insert => key::KeyCode::Insert,
        cevent::KeyCode::F(x) => key::KeyCode::F(x),
        cevent::KeyCode::Char(c) => key::KeyCode::Char(c),
        cevent::KeyCode::Esc => key::KeyCode::Esc,
        _ => return None,
    };
    Some(Key {
        mods: translate_key_modifiers(k.modifiers),
        key: code,
    })
}

/// Translate a crossterm event into zero or more sprig events. A bracketed
/// paste is replayed as a paste start, one key per character, and a paste
/// end.
fn translate_event(e: cevent::Event) -> Vec<Event> {
    match e {
        cevent::Event::Key(k) if k.kind != cevent::KeyEventKind::Release => {
            translate_key(k).map(Event::Key).into_iter().collect()
        }
        cevent::Event::Paste(s) => {
            let s = s.replace("\r\n", "\n");
            let mut events = Vec::with_capacity(s.len() + 2);
            events.push(Event::PasteSetting(true));
            events.extend(s.chars().map(|c| Event::Key(Key::typed(c))));
            events.push(Event::PasteSetting(false));
            events
        }
        cevent::Event::Resize(cols, rows) => vec![Event::Resize { rows, cols }],
        _ => vec![],
    }
}

/// A terminal driven through crossterm, drawing inline on stderr below the
/// cursor.
#[derive(Debug)]
pub struct CrosstermTerminal {
    /// Stderr handle used for output.
    fp: Stderr,
    /// Translated events not yet delivered.
    pending: VecDeque<Event>,
    /// Line of the last drawn frame the cursor was left on.
    cursor_line: usize,
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self {
            fp: io::stderr(),
            pending: VecDeque::new(),
            cursor_line: 0,
        }
    }
}

impl CrosstermTerminal {
    /// Construct a terminal on stderr.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a style to subsequent output.
    fn apply_style(&mut self, s: &Style) -> io::Result<()> {
        // Reset clears colors too, so it has to come first.
        self.fp
            .queue(style::SetAttribute(style::Attribute::Reset))?;
        self.fp.queue(style::SetForegroundColor(
            s.fg.map_or(style::Color::Reset, translate_color),
        ))?;
        self.fp.queue(style::SetBackgroundColor(
            s.bg.map_or(style::Color::Reset, translate_color),
        ))?;
        let attrs = [
            (s.attrs.bold, style::Attribute::Bold),
            (s.attrs.dim, style::Attribute::Dim),
            (s.attrs.italic, style::Attribute::Italic),
            (s.attrs.underline, style::Attribute::Underlined),
            (s.attrs.blink, style::Attribute::SlowBlink),
            (s.attrs.inverse, style::Attribute::Reverse),
        ];
        for (on, attr) in attrs {
            if on {
                self.fp.queue(style::SetAttribute(attr))?;
            }
        }
        Ok(())
    }

    /// Redraw the frame in place of the previous one.
    fn draw(&mut self, buf: &TermBuf) -> io::Result<()> {
        self.fp.queue(ccursor::Hide)?;
        if self.cursor_line > 0 {
            self.fp.queue(ccursor::MoveUp(clamp_u16(self.cursor_line)))?;
        }
        self.fp.queue(ccursor::MoveToColumn(0))?;
        self.fp
            .queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;

        let mut current = None;
        for (i, line) in buf.lines.iter().enumerate() {
            if i > 0 {
                self.fp.queue(style::Print("\r\n"))?;
            }
            for cell in line {
                if current != Some(cell.style) {
                    self.apply_style(&cell.style)?;
                    current = Some(cell.style);
                }
                self.fp.queue(style::Print(&cell.text))?;
            }
        }
        self.fp
            .queue(style::SetAttribute(style::Attribute::Reset))?;

        let last = buf.lines.len().saturating_sub(1);
        let dot_line = buf.dot.line.min(last);
        if last > dot_line {
            self.fp.queue(ccursor::MoveUp(clamp_u16(last - dot_line)))?;
        }
        self.fp.queue(ccursor::MoveToColumn(clamp_u16(buf.dot.col)))?;
        self.fp.queue(ccursor::Show)?;
        self.fp.flush()?;
        self.cursor_line = dot_line;
        Ok(())
    }
}

/// Saturating conversion for cursor movements.
fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl Terminal for CrosstermTerminal {
    fn setup(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.fp.execute(cevent::EnableBracketedPaste)?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.fp.execute(cevent::DisableBracketedPaste)?;
        self.fp.execute(ccursor::Show)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn update_buffer(&mut self, prev: Option<&TermBuf>, buf: &TermBuf, full: bool) -> Result<()> {
        if !full && prev == Some(buf) {
            return Ok(());
        }
        self.draw(buf)?;
        Ok(())
    }

    fn read_event(&mut self) -> Result<Event> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Ok(event);
            }
            let raw = cevent::read()?;
            self.pending.extend(translate_event(raw));
        }
    }
}

/// Run a component on the real terminal.
pub fn runloop(comp: impl Into<Comp>, binding: Option<Rc<dyn Binding>>) -> Result<Tree> {
    runloop_with_options(comp, binding, RunOptions::default())
}

/// Run a component on the real terminal with custom options. Returns the final
/// state tree.
pub fn runloop_with_options(
    comp: impl Into<Comp>,
    binding: Option<Rc<dyn Binding>>,
    options: RunOptions,
) -> Result<Tree> {
    let _panic_hook = if options.install_panic_hook {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(|pi| {
            let mut stderr = io::stderr();
            #[allow(unused_must_use)]
            {
                crossterm::execute!(stderr, cevent::DisableBracketedPaste, ccursor::Show);
                terminal::disable_raw_mode();
                BacktracePrinter::new().print_panic_info(pi, &mut default_output_stream());
            }
        }));
        Some(guard(previous, |hook| {
            panic::set_hook(hook);
        }))
    } else {
        None
    };

    let mut term = CrosstermTerminal::new();
    run_with_options(&mut term, comp, binding, options)
}
