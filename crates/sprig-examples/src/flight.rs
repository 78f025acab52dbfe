use sprig::{
    Action, Context, React, Scene, StatePath, StateVar, Store, Value,
    event::{
        Event,
        key::{KeyCode, Shift},
    },
    view::{VBox, text},
    widgets::{
        codearea::{self, CodeBuffer},
        list_box,
        listbox::{self, StringItems, items},
    },
    with_states,
};

use crate::{
    button::{self, OnPress, button},
    field::field,
};

/// Subcomponents in focus order.
const FIELDS: [&str; 4] = ["type", "outbound", "inbound", "book"];

/// Describe the booking held under `root`.
fn booking(store: &Store, root: &StatePath) -> String {
    let buffer = |name: &str| {
        StateVar::<CodeBuffer>::new(store.clone(), root.join([name, codearea::BUFFER]))
            .try_get()
            .map(|b| b.content)
            .unwrap_or_default()
    };
    let selected = StateVar::<usize>::new(store.clone(), root.join(["type", listbox::SELECTED]))
        .try_get()
        .unwrap_or_default();
    match selected {
        0 => format!("booked one-way on {}", buffer("outbound")),
        _ => format!(
            "booked {} returning {}",
            buffer("outbound"),
            buffer("inbound")
        ),
    }
}

/// A flight booker: a trip type, two dates and a Book button. Down and Tab
/// move to the next field, Up and Shift-Tab to the previous one.
pub fn flight(c: &Context) -> Scene {
    let root = c.path().clone();
    let status = c.state("status", String::new());
    let status_path = status.path().clone();
    let on_book = OnPress::new(move |store| {
        StateVar::<String>::new(store.clone(), status_path.clone()).set(booking(store, &root));
        Action::Consumed
    });

    let (type_view, type_react) = c.subcomp(
        "type",
        with_states(
            list_box,
            [(
                listbox::ITEMS,
                Value::new(items(StringItems::from_iter(["one-way", "return"]))),
            )],
        ),
    );
    let (outbound_view, outbound_react) = c.subcomp("outbound", field("outbound: "));
    let (inbound_view, inbound_react) = c.subcomp("inbound", field("inbound:  "));
    let (book_view, book_react) = c.subcomp(
        "book",
        with_states(
            button,
            [
                (button::LABEL, Value::new(String::from("Book"))),
                (button::ON_PRESS, Value::new(on_book)),
            ],
        ),
    );

    let focus = c.state("focus", 0usize);
    let current = focus.get();
    let view = VBox::new(vec![
        type_view,
        outbound_view,
        inbound_view,
        book_view,
        Box::new(text(status.get())),
    ])
    .with_focus(current);

    let reacts = [type_react, outbound_react, inbound_react, book_react];
    let react: React = Box::new(move |ev: &Event| {
        let action = reacts[current](ev);
        if action != Action::Unused {
            return action;
        }
        let Some(key) = ev.key() else {
            return action;
        };
        if (*key == KeyCode::Down || *key == KeyCode::Tab) && current + 1 < FIELDS.len() {
            focus.set(current + 1);
        } else if (*key == KeyCode::Up || *key == KeyCode::BackTab || *key == Shift + KeyCode::Tab)
            && current > 0
        {
            focus.set(current - 1);
        } else {
            return action;
        }
        Action::Consumed
    });
    (Box::new(view), react)
}
