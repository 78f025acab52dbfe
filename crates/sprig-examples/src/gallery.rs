use sprig::{
    Comp,
    widgets::codearea::{self, Abbreviations},
};

use crate::{
    combo::combo, counter::counter, field::field, flight::flight, hiernav, temperature::temperature,
    todo::todo, wizard::wizard, wrapper::wrap,
};

/// Names of the available demos, in display order.
pub const NAMES: &[&str] = &[
    "counter",
    "temperature",
    "flight",
    "codearea",
    "combobox",
    "wizard",
    "todo",
    "hiernav",
];

/// The demo called `name`, unwrapped.
pub fn demo(name: &str) -> Option<Comp> {
    let comp = match name {
        "counter" => Comp::from(counter),
        "temperature" => Comp::from(temperature),
        "flight" => Comp::from(flight),
        "codearea" => field("~> ").with_state(
            codearea::ABBR,
            Abbreviations::new().with("foo", "lorem"),
        ),
        "combobox" => combo(),
        "wizard" => Comp::from(wizard),
        "todo" => Comp::from(todo),
        "hiernav" => Comp::from(hiernav::hiernav).with_state("data", hiernav::sample_data()),
        _ => return None,
    };
    Some(comp)
}

/// The demo called `name`, wrapped to show its state.
pub fn lookup(name: &str) -> Option<Comp> {
    demo(name).map(wrap)
}
