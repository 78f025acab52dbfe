use std::{fmt, sync::Arc};

use super::{
    codearea::{self, CodeBuffer, code_area},
    listbox::{self, ItemsState, list_box},
};
use crate::{Action, Context, Scene, view::VBox};

/// Generator of the list from the filter text, a [`GenList`].
pub const GEN_LIST: &str = "gen-list";
/// The filter text the list was last generated from, a `String`.
pub const LAST_FILTER: &str = "-last-filter-content";
/// Name of the filter subcomponent.
pub const FILTER: &str = "filter";
/// Name of the list subcomponent.
pub const LIST: &str = "list";

/// The binding point of the combo box.
pub const BINDING: &str = "combobox";

/// Produces the items and the selected index for a filter text.
#[derive(Clone)]
pub struct GenList(Arc<dyn Fn(&str) -> (ItemsState, usize) + Send + Sync>);

impl GenList {
    /// Wrap a generator.
    pub fn new(f: impl Fn(&str) -> (ItemsState, usize) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Generate the list for `filter`.
    pub fn generate(&self, filter: &str) -> (ItemsState, usize) {
        (self.0)(filter)
    }
}

impl Default for GenList {
    fn default() -> Self {
        Self::new(|_| (None, 0))
    }
}

impl fmt::Debug for GenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<gen-list>")
    }
}

/// A code area filtering a list box.
///
/// Events go to the filter first. Whatever the filter does not use goes to
/// the list. When the filter text changes the list is regenerated through
/// [`GEN_LIST`]. The list is also generated on first use.
pub fn combo_box(c: &Context) -> Scene {
    let gen_list = c.state(GEN_LIST, GenList::default());
    let filter_buffer = c.bind_state::<CodeBuffer>(&[FILTER, codearea::BUFFER]);
    let list_items = c.bind_state::<ItemsState>(&[LIST, listbox::ITEMS]);
    let list_selected = c.bind_state::<usize>(&[LIST, listbox::SELECTED]);
    let last_filter = c.bind_state::<String>(&[LAST_FILTER]);

    let regenerate = {
        let last_filter = last_filter.clone();
        move |content: String| {
            let (items, selected) = gen_list.get().generate(&content);
            list_items.set(items);
            list_selected.set(selected);
            last_filter.set(content);
        }
    };
    if last_filter.get_value().is_none() {
        let content = filter_buffer.try_get().map(|b| b.content).unwrap_or_default();
        regenerate(content);
    }

    let (filter_view, filter_react) = c.subcomp(FILTER, code_area);
    let (list_view, list_react) = c.subcomp(LIST, list_box);
    let view = VBox::new(vec![filter_view, list_view]).with_focus(0);

    let react = c.with_binding(BINDING, move |ev| {
        let action = filter_react(ev);
        if action == Action::Unused {
            return list_react(ev);
        }
        let content = filter_buffer.get().content;
        if content != last_filter.get() {
            regenerate(content);
        }
        action
    });
    (Box::new(view), react)
}
