use sprig::{
    Action, Comp, Context, React, Scene, Tree, Value,
    context::COMP_KEY,
    event::{
        Event,
        key::{Ctrl, KeyCode},
    },
    view::{Empty, VBox, text},
    with_states,
};

/// Name of the wrapped subcomponent.
pub const INNER: &str = "inner";

/// Placeholder for an unset inner component.
fn nop(_: &Context) -> Scene {
    (Box::new(Empty), Box::new(|_: &Event| Action::Unused))
}

/// The inner component's state, one entry per line, without the stored
/// component itself.
fn describe(tree: &Tree) -> String {
    let mut lines = vec![];
    for (key, value) in tree.iter().filter(|(k, _)| *k != COMP_KEY) {
        match value.as_map() {
            Some(sub) => {
                lines.push(format!("{key}:"));
                lines.extend(describe(sub).lines().map(|l| format!("  {l}")));
            }
            None => lines.push(format!("{key} = {value:?}")),
        }
    }
    lines.join("\n")
}

/// Show the inner component with its state tree below it. Esc (Ctrl-[) exits
/// when the inner component does not use it.
pub fn wrapper(c: &Context) -> Scene {
    let (inner_view, inner_react) = c.subcomp(INNER, nop);
    let state = c.bind_state::<Tree>(&[INNER]).try_get().unwrap_or_default();
    let view = VBox::new(vec![inner_view, Box::new(text(describe(&state)))]).with_focus(0);
    let react: React = Box::new(move |ev: &Event| {
        let action = inner_react(ev);
        let exit = ev
            .key()
            .is_some_and(|k| *k == KeyCode::Esc || *k == Ctrl + '[');
        if action == Action::Unused && exit {
            return Action::Exit;
        }
        action
    });
    (Box::new(view), react)
}

/// Wrap `inner` for display.
pub fn wrap(inner: impl Into<Comp>) -> Comp {
    let key = format!("{INNER}/{COMP_KEY}");
    with_states(wrapper, [(key.as_str(), Value::new(inner.into()))])
}
