use sprig::{
    Action, Comp, Context, Scene, StateVar, Value,
    view::{HBoxFlex, text},
    with_states,
};

use crate::button::{self, OnPress, button};

/// Counts presses of a button.
pub fn counter(c: &Context) -> Scene {
    let value = c.state("value", 0i64);
    let target = value.path().clone();
    let on_press = OnPress::new(move |store| {
        StateVar::<i64>::new(store.clone(), target.clone()).swap(|v| v + 1);
        Action::Consumed
    });
    let count_button: Comp = with_states(
        button,
        [
            (button::LABEL, Value::new(String::from("Count"))),
            (button::ON_PRESS, Value::new(on_press)),
        ],
    );
    let (button_view, button_react) = c.subcomp("button", count_button);

    let view = HBoxFlex::new(vec![Box::new(text(value.get().to_string())), button_view])
        .with_focus(1)
        .with_gap(1);
    (Box::new(view), button_react)
}
