use std::rc::Rc;

use scopeguard::guard;

use crate::{
    Action, Binding, Comp, Context, Store, Tree,
    backend::Terminal,
    context::invoke,
    error::Result,
    event::{Event, key::Ctrl},
    termbuf::TermBuf,
};

/// Options for configuring the run loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Install a panic hook that restores the terminal before printing a
    /// backtrace. Honored by the crossterm driver, which owns the terminal.
    pub install_panic_hook: bool,
    /// Treat Ctrl-C as an unconditional exit, before the component sees it.
    pub ctrl_c_exits: bool,
}

/// Run a component until its handler reports [`Action::Exit`], and return the
/// final state tree.
pub fn run<T: Terminal>(
    terminal: &mut T,
    comp: impl Into<Comp>,
    binding: Option<Rc<dyn Binding>>,
) -> Result<Tree> {
    run_with_options(terminal, comp, binding, RunOptions::default())
}

/// Run a component with custom options.
///
/// The terminal is set up first and restored on every way out of the loop,
/// including errors and panics. Each iteration invokes the component against
/// the current tree, draws its view at the terminal's size, reads one event
/// and dispatches it. On exit the drawn area is cleared.
pub fn run_with_options<T: Terminal>(
    terminal: &mut T,
    comp: impl Into<Comp>,
    binding: Option<Rc<dyn Binding>>,
    options: RunOptions,
) -> Result<Tree> {
    let comp = comp.into();
    terminal.setup()?;
    let mut term = guard(terminal, |t| {
        if let Err(e) = t.restore() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    });

    let store = Store::new();
    let ctx = Context::new(store.clone(), binding);
    let mut prev: Option<TermBuf> = None;
    let mut full = true;
    loop {
        let (view, react) = invoke(&comp, &ctx);
        let (rows, cols) = term.size()?;
        let buf = view.render(cols.into(), rows.into());
        term.update_buffer(prev.as_ref(), &buf, full)?;
        prev = Some(buf);

        let event = term.read_event()?;
        full = matches!(event, Event::Resize { .. });
        let action = if options.ctrl_c_exits && event == Event::Key(Ctrl + 'c') {
            Action::Exit
        } else {
            react(&event)
        };
        tracing::debug!(?event, ?action, "dispatched");
        if action == Action::Exit {
            term.update_buffer(prev.as_ref(), &TermBuf::new(cols.into()), false)?;
            return Ok(store.snapshot());
        }
    }
}
