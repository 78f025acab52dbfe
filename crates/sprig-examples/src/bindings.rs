use sprig::{
    Action, Context,
    error::Result,
    event::{Event, key::KeyCode},
    widgets::codearea::{self, CodeBuffer},
};

/// The default binding hook. Code areas get Left, Right, Home and End for the
/// keys they leave unused; every other handler runs untouched.
pub fn binding(
    event: &Event,
    ctx: &Context,
    tag: &str,
    inner: &dyn Fn(&Event) -> Action,
) -> Result<Action> {
    let action = inner(event);
    if tag != codearea::BINDING || action != Action::Unused {
        return Ok(action);
    }
    let Some(key) = event.key() else {
        return Ok(action);
    };
    let movement: fn(&str, usize) -> usize = match key {
        k if *k == KeyCode::Left => dot_left,
        k if *k == KeyCode::Right => dot_right,
        k if *k == KeyCode::Home => dot_line_start,
        k if *k == KeyCode::End => dot_line_end,
        _ => return Ok(Action::Unused),
    };
    let buffer = ctx.bind_state::<CodeBuffer>(&[codearea::BUFFER]);
    let buf = buffer.try_get()?;
    let dot = movement(&buf.content, buf.dot);
    buffer.set(CodeBuffer { dot, ..buf });
    Ok(Action::Consumed)
}

/// One character back.
fn dot_left(content: &str, dot: usize) -> usize {
    content[..dot]
        .chars()
        .next_back()
        .map_or(dot, |c| dot - c.len_utf8())
}

/// One character forward.
fn dot_right(content: &str, dot: usize) -> usize {
    content[dot..]
        .chars()
        .next()
        .map_or(dot, |c| dot + c.len_utf8())
}

/// Start of the dot's line.
fn dot_line_start(content: &str, dot: usize) -> usize {
    content[..dot].rfind('\n').map_or(0, |i| i + 1)
}

/// End of the dot's line.
fn dot_line_end(content: &str, dot: usize) -> usize {
    content[dot..].find('\n').map_or(content.len(), |i| dot + i)
}
