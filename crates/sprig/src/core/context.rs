use std::{fmt, rc::Rc, sync::Arc};

use crate::{
    error::Result,
    event::Event,
    path::StatePath,
    state::{StateValue, StateVar, Store},
    tree::{Tree, Value},
    view::{View, error_view},
};

/// Entry holding the component stored by [`Context::subcomp`].
pub const COMP_KEY: &str = "-comp";
/// Entry holding the last binding error at a component's level.
pub const ERROR_KEY: &str = "-error";

/// The outcome of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// The event was not handled.
    Unused,
    /// The event was handled.
    Consumed,
    /// A binding failed while handling the event.
    Errored,
    /// The application should exit.
    Exit,
}

/// An event handler.
pub type React = Box<dyn Fn(&Event) -> Action>;

/// The output of a component: what to show and how to handle the next event.
pub type Scene = (Box<dyn View>, React);

/// A component: a function from a context to a scene.
///
/// Components are stored in the state tree, so they are reference counted and
/// thread-safe, and print as a placeholder.
#[derive(Clone)]
pub struct Comp(Arc<dyn Fn(&Context) -> Scene + Send + Sync>);

impl Comp {
    /// Wrap a component function.
    pub fn new(f: impl Fn(&Context) -> Scene + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Invoke the component directly, without the error overlay.
    pub fn call(&self, ctx: &Context) -> Scene {
        (self.0)(ctx)
    }

    /// Wrap this component so that `key` is seeded with `value` before it
    /// runs, unless something is stored there already. `key` may be a
    /// `/`-separated path into subcomponent state.
    pub fn with_state<T: StateValue>(self, key: &str, value: T) -> Self {
        with_states(self, [(key, Value::new(value))])
    }
}

impl<F> From<F> for Comp
where
    F: Fn(&Context) -> Scene + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<comp>")
    }
}

/// A binding hook: intercepts events delivered to tagged handlers.
///
/// The hook receives the event, the context of the component that owns the
/// handler, the handler's tag, and the handler itself. It may run its own
/// logic, call the handler, or both.
pub trait Binding {
    /// Handle an event on behalf of the handler tagged `tag`.
    fn handle(
        &self,
        event: &Event,
        ctx: &Context,
        tag: &str,
        inner: &dyn Fn(&Event) -> Action,
    ) -> Result<Action>;
}

impl<F> Binding for F
where
    F: Fn(&Event, &Context, &str, &dyn Fn(&Event) -> Action) -> Result<Action>,
{
    fn handle(
        &self,
        event: &Event,
        ctx: &Context,
        tag: &str,
        inner: &dyn Fn(&Event) -> Action,
    ) -> Result<Action> {
        self(event, ctx, tag, inner)
    }
}

/// A handle on one level of the state tree.
///
/// A context names a path in a [`Store`] and carries the application's binding
/// hook. It never owns state; two contexts with the same path observe the same
/// subtree.
#[derive(Clone)]
pub struct Context {
    /// The store holding the tree.
    store: Store,
    /// The binding hook, if any.
    binding: Option<Rc<dyn Binding>>,
    /// This context's level.
    path: StatePath,
}

impl Context {
    /// A context at the root of `store`.
    pub fn new(store: Store, binding: Option<Rc<dyn Binding>>) -> Self {
        Self {
            store,
            binding,
            path: StatePath::empty(),
        }
    }

    /// This context's level.
    pub fn path(&self) -> &StatePath {
        &self.path
    }

    /// The store this context reads.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// A context one level down.
    pub fn child(&self, name: &str) -> Self {
        Self {
            store: self.store.clone(),
            binding: self.binding.clone(),
            path: self.path.child(name),
        }
    }

    /// A state variable named `name` at this level, initialized to `initial`
    /// if nothing is stored there.
    pub fn state<T: StateValue>(&self, name: &str, initial: T) -> StateVar<T> {
        let var = StateVar::new(self.store.clone(), self.path.child(name));
        if var.get_value().is_none() {
            var.set(initial);
        }
        var
    }

    /// A state variable at a path below this level. Nothing is written.
    pub fn bind_state<T: StateValue>(&self, path: &[&str]) -> StateVar<T> {
        StateVar::new(self.store.clone(), self.path.join(path.iter().copied()))
    }

    /// Run a subcomponent in its own child map `name`. The component is stored
    /// in the tree on first use and that stored copy is used from then on.
    pub fn subcomp(&self, name: &str, comp: impl Into<Comp>) -> Scene {
        self.state(name, Tree::new());
        let child = self.child(name);
        let comp = child.state(COMP_KEY, comp.into()).get();
        invoke(&comp, &child)
    }

    /// Tag a handler as a binding point. With a binding hook present, events
    /// go through the hook, which receives the original handler.
    ///
    /// Hook failures are logged and recorded in this level's error entry, and
    /// the event reports [`Action::Errored`]. The next successful dispatch
    /// clears the entry.
    pub fn with_binding(&self, tag: &str, f: impl Fn(&Event) -> Action + 'static) -> React {
        let Some(binding) = self.binding.clone() else {
            return Box::new(f);
        };
        let ctx = self.clone();
        let tag = tag.to_string();
        let error = self.bind_state::<String>(&[ERROR_KEY]);
        Box::new(move |event| match binding.handle(event, &ctx, &tag, &f) {
            Ok(action) => {
                if error.get_value().is_some() {
                    error.clear();
                }
                action
            }
            Err(e) => {
                tracing::warn!(tag = %tag, path = %ctx.path, error = %e, "binding failed");
                error.set(e.to_string());
                Action::Errored
            }
        })
    }
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("path", &self.path)
            .field("binding", &self.binding.is_some())
            .finish()
    }
}

/// Invoke a component. If its level holds a binding error, the view is
/// replaced with the error message; the handler is kept.
pub fn invoke(comp: &Comp, ctx: &Context) -> Scene {
    let (view, react) = comp.call(ctx);
    match ctx.bind_state::<String>(&[ERROR_KEY]).try_get() {
        Ok(message) => (Box::new(error_view(&message)), react),
        Err(_) => (view, react),
    }
}

/// Wrap a component so that each key is seeded with its value before the
/// component runs, unless something is stored there already. Keys may be
/// `/`-separated paths reaching into subcomponent state.
pub fn with_states<'a>(
    comp: impl Into<Comp>,
    states: impl IntoIterator<Item = (&'a str, Value)>,
) -> Comp {
    let comp = comp.into();
    let states: Vec<(StatePath, Value)> = states
        .into_iter()
        .map(|(k, v)| (StatePath::from(k), v))
        .collect();
    Comp::new(move |ctx| {
        for (key, value) in &states {
            let path = ctx.path().join(key.segments());
            if ctx.store().resolve(&path).is_none()
                && let Err(e) = ctx.store().update(&path, value.clone())
            {
                tracing::error!(path = %path, error = %e, "state seeding failed");
                panic!("{e}");
            }
        }
        comp.call(ctx)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::{
        error::Error,
        event::key::KeyCode,
        view::{Empty, text},
    };

    fn counter(ctx: &Context) -> Scene {
        let n = ctx.state("n", 0u32);
        let view = text(n.get().to_string());
        let react = ctx.with_binding("counter", move |_| {
            n.swap(|v| v + 1);
            Action::Consumed
        });
        (Box::new(view), react)
    }

    fn root(store: &Store) -> Context {
        Context::new(store.clone(), None)
    }

    #[test]
    fn idempotent_seeding() {
        let store = Store::new();
        let ctx = root(&store);
        assert_eq!(ctx.state("x", 1u32).get(), 1);
        assert_eq!(ctx.state("x", 2u32).get(), 1);
        ctx.bind_state::<u32>(&["x"]).set(5);
        assert_eq!(ctx.state("x", 1u32).get(), 5);
    }

    #[test]
    fn subcomp_scopes_and_freezes() {
        let store = Store::new();
        let ctx = root(&store);
        let (_, react) = ctx.subcomp("c", counter);
        assert_eq!(react(&Event::from('x')), Action::Consumed);
        assert_eq!(ctx.bind_state::<u32>(&["c", "n"]).get(), 1);
        assert!(ctx.bind_state::<Comp>(&["c", COMP_KEY]).try_get().is_ok());

        // A different component under the same name is ignored.
        let (_, react) = ctx.subcomp("c", |_: &Context| -> Scene {
            (Box::new(Empty), Box::new(|_| Action::Unused))
        });
        assert_eq!(react(&Event::from('x')), Action::Consumed);
        assert_eq!(ctx.bind_state::<u32>(&["c", "n"]).get(), 2);
    }

    #[test]
    fn with_states_seeds_only_absent() {
        let store = Store::new();
        let ctx = root(&store);
        let comp = Comp::new(counter).with_state("n", 10u32);
        comp.call(&ctx);
        assert_eq!(ctx.bind_state::<u32>(&["n"]).get(), 10);
        ctx.bind_state::<u32>(&["n"]).set(3);
        comp.call(&ctx);
        assert_eq!(ctx.bind_state::<u32>(&["n"]).get(), 3);

        let nested = with_states(counter, [("sub/deep", Value::new(true))]);
        nested.call(&ctx);
        assert!(ctx.bind_state::<bool>(&["sub", "deep"]).get());
        assert!(matches!(
            store.resolve(&StatePath::from("sub")),
            Some(Value::Map(t)) if t.len() == 1
        ));
    }

    #[test]
    fn binding_hook_intercepts() {
        let store = Store::new();
        let seen = Rc::new(Cell::new(0));
        let hook_seen = seen.clone();
        let hook = move |ev: &Event,
                         _: &Context,
                         tag: &str,
                         inner: &dyn Fn(&Event) -> Action|
              -> Result<Action> {
            assert_eq!(tag, "counter");
            hook_seen.set(hook_seen.get() + 1);
            if *ev == Event::from(KeyCode::Up) {
                return Ok(Action::Exit);
            }
            Ok(inner(ev))
        };
        let ctx = Context::new(store, Some(Rc::new(hook)));
        let (_, react) = counter(&ctx);
        assert_eq!(react(&Event::from(KeyCode::Up)), Action::Exit);
        assert_eq!(react(&Event::from('a')), Action::Consumed);
        assert_eq!(seen.get(), 2);
        assert_eq!(ctx.bind_state::<u32>(&["n"]).get(), 1);
    }

    #[test]
    fn binding_errors_are_shown_and_cleared() {
        let store = Store::new();
        let hook = |ev: &Event,
                    _: &Context,
                    _: &str,
                    inner: &dyn Fn(&Event) -> Action|
         -> Result<Action> {
            if *ev == Event::from('!') {
                return Err(Error::Binding("no such command".into()));
            }
            Ok(inner(ev))
        };
        let ctx = Context::new(store.clone(), Some(Rc::new(hook)));
        let (_, react) = ctx.subcomp("c", counter);
        assert_eq!(react(&Event::from('!')), Action::Errored);
        assert_eq!(
            ctx.bind_state::<String>(&["c", ERROR_KEY]).get(),
            "binding: no such command"
        );

        let (view, react) = ctx.subcomp("c", counter);
        let buf = view.render(40, 1);
        assert_eq!(buf.line_text(0), "binding: no such command");

        assert_eq!(react(&Event::from('a')), Action::Consumed);
        assert!(ctx.bind_state::<String>(&["c", ERROR_KEY]).get_value().is_none());
        let (view, _) = ctx.subcomp("c", counter);
        assert_eq!(view.render(40, 1).line_text(0), "1");
        assert!(store.snapshot().get("c").is_some_and(|v| v.as_map().is_some()));
    }
}
