use sprig::{
    Action, Context, React, Scene,
    event::{Event, key::KeyCode},
    style::StyledText,
    view::VBox,
    widgets::{
        codearea::{self, CodeBuffer},
        list_box,
        listbox::{self, Items, ItemsState, items},
    },
};

use crate::field::field;

/// One entry on the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    /// What to do.
    pub text: String,
    /// Is it done?
    pub done: bool,
}

/// The entries as list box items.
#[derive(Debug, Clone, Default)]
struct TodoItems(Vec<TodoItem>);

impl Items for TodoItems {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn show(&self, i: usize) -> StyledText {
        self.0.get(i).map_or_else(StyledText::default, |item| {
            let mark = if item.done { 'X' } else { ' ' };
            StyledText::plain(format!("[{mark}] {}", item.text))
        })
    }
}

/// A todo list. New entries are typed below the list and added with Enter.
/// Tab or Up and Down move between the list and the entry field; Space
/// toggles the selected entry.
pub fn todo(c: &Context) -> Scene {
    let todos = c.state("todos", Vec::<TodoItem>::new());
    let (list_view, list_react) = c.subcomp("list", list_box);
    let list_items = c.bind_state::<ItemsState>(&["list", listbox::ITEMS]);
    let selected = c.bind_state::<usize>(&["list", listbox::SELECTED]);
    let (entry_view, entry_react) = c.subcomp("new-item", field("new item: "));
    let buffer = c.bind_state::<CodeBuffer>(&["new-item", codearea::BUFFER]);
    let focus = c.state("focus", 1usize);
    let current = focus.get();

    let update = move |f: &dyn Fn(&mut Vec<TodoItem>)| {
        let mut all = todos.get();
        f(&mut all);
        list_items.set(items(TodoItems(all.clone())));
        todos.set(all);
    };

    let view = VBox::new(vec![list_view, entry_view]).with_focus(current);
    let react: React = Box::new(move |ev: &Event| {
        let Some(key) = ev.key().copied() else {
            return Action::Unused;
        };
        if key == KeyCode::Tab {
            focus.set(1 - current);
            return Action::Consumed;
        }
        if current == 0 {
            let action = list_react(ev);
            if action != Action::Unused {
                return action;
            }
            if key == KeyCode::Down {
                focus.set(1);
            } else if key == ' ' {
                let sel = selected.get();
                update(&|all| {
                    if let Some(item) = all.get_mut(sel) {
                        item.done = !item.done;
                    }
                });
            } else {
                return Action::Unused;
            }
            return Action::Consumed;
        }
        if key == KeyCode::Enter {
            let text = buffer.get().content;
            update(&|all| {
                all.push(TodoItem {
                    text: text.clone(),
                    done: false,
                });
            });
            buffer.set(CodeBuffer::default());
            return Action::Consumed;
        }
        let action = entry_react(ev);
        if action == Action::Unused && key == KeyCode::Up {
            focus.set(0);
            return Action::Consumed;
        }
        action
    });
    (Box::new(view), react)
}
