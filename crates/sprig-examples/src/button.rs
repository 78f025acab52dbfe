use std::{fmt, sync::Arc};

use sprig::{
    Action, Context, Scene, Store,
    event::key::KeyCode,
    style::{Attr, StyledText},
    view::text,
};

/// The button label, a `String`.
pub const LABEL: &str = "label";
/// What pressing the button does, an [`OnPress`].
pub const ON_PRESS: &str = "on-press";

/// A press callback. It receives the store so it can write state anywhere in
/// the tree.
#[derive(Clone)]
pub struct OnPress(Arc<dyn Fn(&Store) -> Action + Send + Sync>);

impl OnPress {
    /// Wrap a callback.
    pub fn new(f: impl Fn(&Store) -> Action + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Run the callback.
    pub fn press(&self, store: &Store) -> Action {
        (self.0)(store)
    }
}

impl Default for OnPress {
    fn default() -> Self {
        Self::new(|_| Action::Unused)
    }
}

impl fmt::Debug for OnPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<on-press>")
    }
}

/// A labelled button, pressed with Space or Enter.
pub fn button(c: &Context) -> Scene {
    let label = c.state(LABEL, String::from("button"));
    let on_press = c.state(ON_PRESS, OnPress::default());
    let view = text(StyledText::plain(format!("[ {} ]", label.get())).with_attr(Attr::Inverse));
    let store = c.store().clone();
    let react = c.with_binding("button", move |ev| match ev.key() {
        Some(k) if *k == ' ' || *k == KeyCode::Enter => on_press.get().press(&store),
        _ => Action::Unused,
    });
    (Box::new(view), react)
}
