use std::rc::Rc;

use super::buf::BufTest;
use crate::{
    Action, Binding, Comp, StateValue, Tree, Value,
    adapt::{Adapted, Widget},
    context::with_states,
    error::Result,
    event::{Event, key::Key},
    path::StatePath,
    termbuf::TermBuf,
};

/// A harness that drives a component through the widget adapter. Tests send
/// events, then inspect the state tree and the rendered buffer.
#[derive(Debug)]
pub struct Harness {
    /// The adapted component.
    pub widget: Adapted,
    /// Render width.
    pub width: usize,
    /// Render height.
    pub height: usize,
}

/// Builder for creating a test harness with a fluent API.
pub struct HarnessBuilder {
    /// Component under test.
    comp: Comp,
    /// States seeded before the first invocation.
    states: Vec<(String, Value)>,
    /// Binding hook, if any.
    binding: Option<Rc<dyn Binding>>,
    /// Render size.
    size: (usize, usize),
}

impl HarnessBuilder {
    /// Seed `key` with `value`. Keys may be `/`-separated paths.
    pub fn state<T: StateValue>(mut self, key: &str, value: T) -> Self {
        self.states.push((key.to_string(), Value::new(value)));
        self
    }

    /// Install a binding hook.
    pub fn binding(mut self, binding: impl Binding + 'static) -> Self {
        self.binding = Some(Rc::new(binding));
        self
    }

    /// Set the render size.
    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.size = (width, height);
        self
    }

    /// Build the harness.
    pub fn build(self) -> Harness {
        let comp = with_states(
            self.comp,
            self.states.iter().map(|(k, v)| (k.as_str(), v.clone())),
        );
        Harness {
            widget: Adapted::new(comp, self.binding),
            width: self.size.0,
            height: self.size.1,
        }
    }
}

impl Harness {
    /// Create a harness builder for a component.
    pub fn builder(comp: impl Into<Comp>) -> HarnessBuilder {
        HarnessBuilder {
            comp: comp.into(),
            states: vec![],
            binding: None,
            size: (40, 10),
        }
    }

    /// A harness with no seeded state and no binding hook.
    pub fn new(comp: impl Into<Comp>) -> Self {
        Self::builder(comp).build()
    }

    /// Dispatch one event.
    pub fn send(&mut self, event: impl Into<Event>) -> Action {
        self.widget.dispatch(&event.into())
    }

    /// Dispatch a sequence of keys, returning each outcome.
    pub fn send_keys<I, K>(&mut self, keys: I) -> Vec<Action>
    where
        I: IntoIterator<Item = K>,
        K: Into<Key>,
    {
        keys.into_iter()
            .map(|k| self.send(Event::Key(k.into())))
            .collect()
    }

    /// Type a string, one key per character.
    pub fn type_text(&mut self, text: &str) -> Vec<Action> {
        self.send_keys(text.chars().map(Key::typed))
    }

    /// Press keys given by name, separated by spaces, e.g. `"Ctrl-a Up Enter"`.
    pub fn press(&mut self, names: &str) -> Result<Vec<Action>> {
        let keys = names
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Key>>>()?;
        Ok(self.send_keys(keys))
    }

    /// Read a state value at a `/`-separated path. Panics if it is absent or
    /// of the wrong type.
    pub fn state<T: StateValue>(&self, path: &str) -> T {
        let path = StatePath::from(path);
        let segments: Vec<&str> = path.segments().iter().map(String::as_str).collect();
        self.widget.context().bind_state::<T>(&segments).get()
    }

    /// Write a state value at a `/`-separated path and refresh the component.
    pub fn set_state<T: StateValue>(&mut self, path: &str, value: T) {
        let path = StatePath::from(path);
        let segments: Vec<&str> = path.segments().iter().map(String::as_str).collect();
        self.widget.context().bind_state::<T>(&segments).set(value);
        self.widget.refresh();
    }

    /// A snapshot of the state tree.
    pub fn tree(&self) -> Tree {
        self.widget.state()
    }

    /// Render at the harness size.
    pub fn render(&self) -> TermBuf {
        self.widget.render(self.width, self.height)
    }

    /// Render and return a bordered dump.
    pub fn dump(&self) -> String {
        BufTest::new(&self.render()).dump()
    }

    /// Render and assert the lines match `expected`.
    pub fn assert_lines(&self, expected: &[&str]) {
        BufTest::new(&self.render()).assert_matches(expected);
    }
}
