use std::rc::Rc;

use sprig::{
    Action, Binding, Context,
    backend::Terminal,
    error::{Error, Result},
    event::{
        Event,
        key::{Ctrl, KeyCode},
    },
    runloop::run,
    style::StyledText,
    widgets::codearea::{self, CodeBuffer},
};

use crate::{bindings, field::styled_field};

/// Enter and Esc (Ctrl-[) submit, except inside a bracketed paste;
/// everything else gets the default bindings.
pub fn editor_binding(
    event: &Event,
    ctx: &Context,
    tag: &str,
    inner: &dyn Fn(&Event) -> Action,
) -> Result<Action> {
    let submit = event
        .key()
        .is_some_and(|k| *k == KeyCode::Enter || *k == KeyCode::Esc || *k == Ctrl + '[');
    let pasting = || {
        ctx.bind_state::<bool>(&[codearea::PASTING])
            .try_get()
            .unwrap_or_default()
    };
    if submit && tag == codearea::BINDING && !pasting() {
        return Ok(Action::Exit);
    }
    bindings::binding(event, ctx, tag, inner)
}

/// Read one line of code on `terminal`.
pub fn read_code<T: Terminal>(terminal: &mut T, prompt: StyledText) -> Result<String> {
    let binding: Rc<dyn Binding> = Rc::new(editor_binding);
    let tree = run(terminal, styled_field(prompt), Some(binding))?;
    let buffer = tree
        .get(codearea::BUFFER)
        .and_then(|v| v.downcast::<CodeBuffer>())
        .ok_or_else(|| Error::StateMissing {
            path: codearea::BUFFER.into(),
        })?;
    Ok(buffer.content)
}
