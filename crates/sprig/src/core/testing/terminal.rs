use std::collections::VecDeque;

use crate::{
    backend::Terminal,
    error::{Error, Result},
    event::Event,
    termbuf::TermBuf,
};

/// A terminal that replays a fixed list of events and records every frame.
/// Reading past the end of the script is an error.
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    /// Events still to be delivered.
    events: VecDeque<Event>,
    /// Reported size as `(rows, cols)`.
    size: (u16, u16),
    /// Every frame drawn, with its full-redraw flag.
    pub frames: Vec<(TermBuf, bool)>,
    /// Number of setup calls.
    pub setups: usize,
    /// Number of restore calls.
    pub restores: usize,
}

impl ScriptedTerminal {
    /// A terminal of `rows` by `cols` that delivers `events` in order.
    pub fn new(rows: u16, cols: u16, events: impl IntoIterator<Item = Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
            size: (rows, cols),
            ..Self::default()
        }
    }

    /// Change the reported size, as a resize would.
    pub fn set_size(&mut self, rows: u16, cols: u16) {
        self.size = (rows, cols);
    }

    /// The last frame drawn.
    pub fn last_frame(&self) -> Option<&TermBuf> {
        self.frames.last().map(|(buf, _)| buf)
    }
}

impl Terminal for ScriptedTerminal {
    fn setup(&mut self) -> Result<()> {
        self.setups += 1;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        self.restores += 1;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(self.size)
    }

    fn update_buffer(&mut self, _prev: Option<&TermBuf>, buf: &TermBuf, full: bool) -> Result<()> {
        self.frames.push((buf.clone(), full));
        Ok(())
    }

    fn read_event(&mut self) -> Result<Event> {
        let event = self
            .events
            .pop_front()
            .ok_or_else(|| Error::Terminal("event script exhausted".into()))?;
        if let Event::Resize { rows, cols } = event {
            self.set_size(rows, cols);
        }
        Ok(event)
    }
}
