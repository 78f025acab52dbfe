use sprig::{
    Action, Context, React, Scene, Value,
    event::{Event, key::KeyCode},
    style::StyledText,
    view::{HBox, VBox, text},
    widgets::{
        list_box,
        listbox::{self, Items, items},
    },
    with_states,
};

/// A setup step.
#[derive(Debug, Clone, Copy)]
struct Task {
    /// Short name, shown in the list.
    name: &'static str,
    /// What the step does.
    description: &'static str,
    /// The code that performs it.
    code: &'static str,
}

/// The steps on offer.
const TASKS: &[Task] = &[
    Task {
        name: "Set up carapace",
        description: "Carapace provides a lot of completions.",
        code: "sudo brew install carapace",
    },
    Task {
        name: "Use readline binding",
        description: "Keybindings like:\nCtrl-N to next line\nCtrl-P to previous line\nCtrl-F to next character\nCtrl-B to previous character",
        code: "use readline-binding",
    },
];

/// The steps as list box items.
#[derive(Debug)]
struct Tasks;

impl Items for Tasks {
    fn len(&self) -> usize {
        TASKS.len()
    }

    fn show(&self, i: usize) -> StyledText {
        TASKS
            .get(i)
            .map(|t| StyledText::plain(t.name))
            .unwrap_or_default()
    }
}

/// A list of setup steps, with the selected step's description beside it and
/// its code below.
pub fn wizard(c: &Context) -> Scene {
    let (list_view, list_react) = c.subcomp(
        "list",
        with_states(list_box, [(listbox::ITEMS, Value::new(items(Tasks)))]),
    );
    let selected = c.bind_state::<usize>(&["list", listbox::SELECTED]).get();
    let task = TASKS[selected.min(TASKS.len() - 1)];

    let view = VBox::new(vec![
        Box::new(HBox::new(vec![list_view, Box::new(text(task.description))])),
        Box::new(text(format!("\n{}", task.code))),
    ])
    .with_focus(0);
    let react: React = Box::new(move |ev: &Event| {
        if ev.key().is_some_and(|k| *k == KeyCode::Enter) {
            return Action::Consumed;
        }
        list_react(ev)
    });
    (Box::new(view), react)
}
