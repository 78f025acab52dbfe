use std::collections::BTreeMap;

use sprig::{
    Action, Context, React, Scene, Value,
    event::{Event, key::KeyCode},
    style::{Attr, Color, StyledText},
    view::{Empty, HBox, VBox, View, text},
    widgets::{
        list_box,
        listbox::{self, Items, items},
    },
    with_states,
};

/// A node in the navigated hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A leaf with its text.
    Leaf(String),
    /// A directory of named children.
    Dir(BTreeMap<String, Node>),
}

impl Node {
    /// A directory from `(name, node)` pairs.
    pub fn dir<'a>(children: impl IntoIterator<Item = (&'a str, Self)>) -> Self {
        Self::Dir(
            children
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    /// A leaf.
    pub fn leaf(text: &str) -> Self {
        Self::Leaf(text.to_string())
    }

    /// The node at `path`, if there is one.
    pub fn access(&self, path: &[String]) -> Option<&Self> {
        path.iter().try_fold(self, |node, name| match node {
            Self::Dir(children) => children.get(name),
            Self::Leaf(_) => None,
        })
    }
}

/// A small file-system-like sample hierarchy.
pub fn sample_data() -> Node {
    Node::dir([
        (
            "bin",
            Node::dir([
                ("cat", Node::leaf("Concatenate files")),
                ("elvish", Node::leaf("Elvish shell")),
                ("zsh", Node::leaf("The Z shell")),
            ]),
        ),
        (
            "home",
            Node::dir([
                (
                    "elf",
                    Node::dir([
                        (
                            "bin",
                            Node::dir([
                                ("elvish", Node::leaf("Local Elvish build")),
                                ("foo", Node::leaf("bar")),
                            ]),
                        ),
                        ("README", Node::leaf("this is the elf user's home directory.")),
                    ]),
                ),
                (
                    "root",
                    Node::dir([("README", Node::leaf("this is the root user's home directory."))]),
                ),
            ]),
        ),
        ("README", Node::leaf("this is the root.")),
    ])
}

/// A directory's entries, sorted by name. Subdirectories show in bold green.
#[derive(Debug)]
struct Entries(Vec<(String, bool)>);

impl Entries {
    /// The entries of a directory.
    fn of(children: &BTreeMap<String, Node>) -> Self {
        Self(
            children
                .iter()
                .map(|(k, v)| (k.clone(), matches!(v, Node::Dir(_))))
                .collect(),
        )
    }
}

impl Items for Entries {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn show(&self, i: usize) -> StyledText {
        match self.0.get(i) {
            Some((name, true)) => StyledText::plain(name)
                .with_fg(Color::DarkGreen)
                .with_attr(Attr::Bold),
            Some((name, false)) => StyledText::plain(name),
            None => StyledText::default(),
        }
    }
}

/// The state key of the list showing the directory at `path`.
fn panel_name(path: &[String]) -> String {
    format!("{path:?}")
}

/// The panel for the node at `path`: a list for directories, text for leaves.
/// Returns the view, the list handler for directories, and the name of the
/// selected entry.
fn panel(
    c: &Context,
    data: &Node,
    path: &[String],
) -> (Box<dyn View>, Option<React>, Option<String>) {
    match data.access(path) {
        Some(Node::Dir(children)) => {
            let name = panel_name(path);
            let list = with_states(
                list_box,
                [(listbox::ITEMS, Value::new(items(Entries::of(children))))],
            );
            let (view, react) = c.subcomp(&name, list);
            let selected = c.bind_state::<usize>(&[name.as_str(), listbox::SELECTED]).get();
            let key = children.keys().nth(selected).cloned();
            (view, Some(react), key)
        }
        Some(Node::Leaf(s)) => (Box::new(text(s.as_str())), None, None),
        None => (Box::new(text("not found")), None, None),
    }
}

/// Miller-column navigation over a [`Node`] hierarchy stored in `data`. The
/// parent, current and preview panels sit side by side. Left goes up a level
/// and Right descends into the selected entry.
pub fn hiernav(c: &Context) -> Scene {
    let data = c.state("data", Node::Dir(BTreeMap::new())).get();
    let path_var = c.state("path", Vec::<String>::new());
    let path = path_var.get();

    let parent: Box<dyn View> = match path.split_last() {
        Some((_, up)) => panel(c, &data, up).0,
        None => Box::new(Empty),
    };
    let (current, current_react, selected) = panel(c, &data, &path);
    let preview: Box<dyn View> = match &selected {
        Some(name) => {
            let mut down = path.clone();
            down.push(name.clone());
            panel(c, &data, &down).0
        }
        None => Box::new(Empty),
    };

    let view = VBox::new(vec![
        Box::new(text(format!("path = {path:?}"))),
        Box::new(HBox::new(vec![parent, current, preview]).with_focus(1)),
    ]);
    let react: React = Box::new(move |ev: &Event| {
        let key = ev.key();
        if key.is_some_and(|k| *k == KeyCode::Left) {
            let Some((_, up)) = path.split_last() else {
                return Action::Unused;
            };
            path_var.set(up.to_vec());
            return Action::Consumed;
        }
        if key.is_some_and(|k| *k == KeyCode::Right)
            && let Some(name) = &selected
        {
            let mut down = path.clone();
            down.push(name.clone());
            path_var.set(down);
            return Action::Consumed;
        }
        current_react.as_ref().map_or(Action::Unused, |r| r(ev))
    });
    (Box::new(view), react)
}
