/// Crossterm terminal driver.
pub mod crossterm;

use crate::{error::Result, event::Event, termbuf::TermBuf};

/// A terminal that the run loop draws on and reads events from.
///
/// Implementations own all byte-level concerns. The run loop only sees
/// rendered buffers going out and decoded events coming in.
pub trait Terminal {
    /// Prepare the terminal for interactive use.
    fn setup(&mut self) -> Result<()>;

    /// Undo [`Terminal::setup`]. Called on every exit path of the run loop.
    fn restore(&mut self) -> Result<()>;

    /// The terminal size as `(rows, cols)`.
    fn size(&self) -> Result<(u16, u16)>;

    /// Draw `buf`, replacing the previously drawn `prev`. With `full` set the
    /// terminal contents are assumed to be stale and everything is redrawn.
    fn update_buffer(&mut self, prev: Option<&TermBuf>, buf: &TermBuf, full: bool) -> Result<()>;

    /// Block until the next event.
    fn read_event(&mut self) -> Result<Event>;
}
