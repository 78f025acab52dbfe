use std::{fmt, sync::Arc};

use crate::{
    Action, Context, Scene,
    event::key::KeyCode,
    style::{Attr, StyledText},
    view::TextView,
};

/// The items shown, an [`ItemsState`].
pub const ITEMS: &str = "items";
/// Index of the selected item, a `usize`.
pub const SELECTED: &str = "selected";
/// Callback for bindings that act on the selection, a [`Submit`].
pub const SUBMIT: &str = "submit";

/// The binding point of the list box.
pub const BINDING: &str = "listbox";

/// A source of list items.
pub trait Items: fmt::Debug + Send + Sync {
    /// Number of items.
    fn len(&self) -> usize;

    /// Render item `i`.
    fn show(&self, i: usize) -> StyledText;

    /// Are there no items?
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The state value holding a list box's items. `None` shows nothing.
pub type ItemsState = Option<Arc<dyn Items>>;

/// Wrap items for storage in the state tree.
pub fn items(items: impl Items + 'static) -> ItemsState {
    Some(Arc::new(items))
}

/// Items that are plain strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringItems(pub Vec<String>);

impl Items for StringItems {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn show(&self, i: usize) -> StyledText {
        self.0.get(i).map(StyledText::plain).unwrap_or_default()
    }
}

impl<S: Into<String>> FromIterator<S> for StringItems {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// A callback receiving the items and the selected index. The list box never
/// calls it; bindings do.
#[derive(Clone)]
pub struct Submit(Arc<dyn Fn(&ItemsState, usize) + Send + Sync>);

impl Submit {
    /// Wrap a callback.
    pub fn new(f: impl Fn(&ItemsState, usize) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the callback.
    pub fn call(&self, items: &ItemsState, selected: usize) {
        (self.0)(items, selected);
    }
}

impl Default for Submit {
    fn default() -> Self {
        Self::new(|_, _| {})
    }
}

impl fmt::Debug for Submit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<submit>")
    }
}

/// Clamp `selected` into `[0, len - 1]`. Zero for an empty list.
fn clamp(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}

/// A list of items with one selected. Up and Down move the selection within
/// the list.
pub fn list_box(c: &Context) -> Scene {
    let items = c.state(ITEMS, ItemsState::None);
    let selected = c.state(SELECTED, 0usize);
    c.state(SUBMIT, Submit::default());

    let mut spans = vec![];
    let mut dot_before = 0;
    if let Some(list) = items.get() {
        let sel = clamp(selected.get(), list.len());
        for i in 0..list.len() {
            if i > 0 {
                spans.push(StyledText::plain("\n"));
            }
            if i == sel {
                dot_before = spans.len();
                spans.push(list.show(i).with_attr(Attr::Inverse));
            } else {
                spans.push(list.show(i));
            }
        }
    }
    let view = TextView::new(spans).with_dot_before(dot_before);

    let react = c.with_binding(BINDING, move |ev| {
        let Some(key) = ev.key() else {
            return Action::Unused;
        };
        let len = items.get().map_or(0, |l| l.len());
        let sel = clamp(selected.get(), len);
        if *key == KeyCode::Up && sel > 0 {
            selected.set(sel - 1);
            Action::Consumed
        } else if *key == KeyCode::Down && sel + 1 < len {
            selected.set(sel + 1);
            Action::Consumed
        } else {
            Action::Unused
        }
    });
    (Box::new(view), react)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    use super::*;
    use crate::{Store, event::Event, termbuf::Pos};

    fn ctx(names: &[&str], selected: usize) -> Context {
        let c = Context::new(Store::new(), None);
        c.state(ITEMS, items(names.iter().copied().collect::<StringItems>()));
        c.state(SELECTED, selected);
        c
    }

    fn press(c: &Context, code: KeyCode) -> Action {
        let (_, react) = list_box(c);
        react(&Event::from(code))
    }

    #[test]
    fn render_marks_selection() {
        let c = ctx(&["one", "two", "three"], 1);
        let (view, _) = list_box(&c);
        let buf = view.render(10, 5);
        assert_eq!(buf.line_text(1), "two");
        assert_eq!(buf.dot, Pos::new(1, 0));
        assert!(buf.lines[1][0].style.attrs.inverse);
        assert!(!buf.lines[0][0].style.attrs.inverse);
    }

    #[test]
    fn render_clamps_selection() {
        let c = ctx(&["one", "two"], 7);
        let (view, _) = list_box(&c);
        let buf = view.render(10, 5);
        assert_eq!(buf.dot, Pos::new(1, 0));
        assert!(buf.lines[1][0].style.attrs.inverse);
    }

    #[test]
    fn empty_and_missing_items() {
        let c = Context::new(Store::new(), None);
        let (view, _) = list_box(&c);
        assert_eq!(view.render(10, 5).line_text(0), "");
        assert_eq!(press(&c, KeyCode::Down), Action::Unused);
        assert_eq!(press(&c, KeyCode::Up), Action::Unused);
    }

    #[test]
    fn down_stops_at_the_end() {
        let c = ctx(&["a", "b", "c"], 0);
        assert_eq!(press(&c, KeyCode::Down), Action::Consumed);
        assert_eq!(press(&c, KeyCode::Down), Action::Consumed);
        assert_eq!(press(&c, KeyCode::Down), Action::Unused);
        assert_eq!(c.bind_state::<usize>(&[SELECTED]).get(), 2);
        assert_eq!(press(&c, KeyCode::Left), Action::Unused);
    }

    proptest! {
        #[test]
        fn selection_stays_in_range(
            len in 1usize..6,
            start in 0usize..6,
            moves in prop::collection::vec(any::<bool>(), 0..20),
        ) {
            let names: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let c = Context::new(Store::new(), None);
            c.state(ITEMS, items(StringItems(names)));
            c.state(SELECTED, start.min(len - 1));
            let selected = c.bind_state::<usize>(&[SELECTED]);
            for down in moves {
                let before = selected.get();
                let (code, edge) = if down {
                    (KeyCode::Down, before == len - 1)
                } else {
                    (KeyCode::Up, before == 0)
                };
                let action = press(&c, code);
                prop_assert_eq!(action == Action::Unused, edge);
                prop_assert!(selected.get() < len);
            }
        }
    }
}
