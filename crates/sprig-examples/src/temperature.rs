use sprig::{
    Action, Context, React, Scene, StateVar,
    event::{Event, key::KeyCode},
    view::VBox,
    widgets::codearea::{self, CodeBuffer},
};

use crate::field::field;

/// Degrees Celsius to Fahrenheit.
fn to_fahrenheit(c: f64) -> f64 {
    c * 9.0 / 5.0 + 32.0
}

/// Degrees Fahrenheit to Celsius.
fn to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Parse `input` as a number and convert it, formatted to two places.
fn convert(input: &str, f: fn(f64) -> f64) -> Option<String> {
    input.trim().parse::<f64>().ok().map(|v| format!("{:.2}", f(v)))
}

/// Rewrite `to` from the contents of `from`, if those are a number.
fn sync(from: &StateVar<CodeBuffer>, to: &StateVar<CodeBuffer>, f: fn(f64) -> f64) {
    if let Some(converted) = convert(&from.get().content, f) {
        to.set(CodeBuffer::at_end(converted));
    }
}

/// A two-way Celsius and Fahrenheit converter. Tab switches fields; editing
/// one field rewrites the other whenever the edited text is a number.
pub fn temperature(c: &Context) -> Scene {
    let (celsius_view, celsius_react) = c.subcomp("celsius", field("Celsius: "));
    let (fahrenheit_view, fahrenheit_react) = c.subcomp("fahrenheit", field("Fahrenheit: "));
    let celsius = c.bind_state::<CodeBuffer>(&["celsius", codearea::BUFFER]);
    let fahrenheit = c.bind_state::<CodeBuffer>(&["fahrenheit", codearea::BUFFER]);
    let focus = c.state("focus", 0usize);

    let view = VBox::new(vec![celsius_view, fahrenheit_view]).with_focus(focus.get());
    let react: React = Box::new(move |ev: &Event| {
        let current = focus.get();
        if ev.key().is_some_and(|k| *k == KeyCode::Tab) {
            focus.set(1 - current);
            return Action::Consumed;
        }
        let (action, from, to, formula) = if current == 0 {
            let formula: fn(f64) -> f64 = to_fahrenheit;
            (celsius_react(ev), &celsius, &fahrenheit, formula)
        } else {
            let formula: fn(f64) -> f64 = to_celsius;
            (fahrenheit_react(ev), &fahrenheit, &celsius, formula)
        };
        if action == Action::Consumed {
            sync(from, to, formula);
        }
        action
    });
    (Box::new(view), react)
}
