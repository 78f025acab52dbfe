use std::{fmt, rc::Rc};

use crate::{
    Action, Binding, Comp, Context, React, Store, Tree,
    context::invoke,
    event::Event,
    termbuf::TermBuf,
    view::View,
};

/// A retained-mode widget, for embedding components in hosts that keep their
/// widgets around between frames.
pub trait Widget {
    /// Render at the given size.
    fn render(&self, width: usize, height: usize) -> TermBuf;

    /// The number of lines the widget wants at the given size.
    fn max_height(&self, width: usize, height: usize) -> usize;

    /// Handle an event. Returns false if the event was not used.
    fn handle(&mut self, event: &Event) -> bool;
}

/// A component adapted to the [`Widget`] interface. The adapter owns its
/// state tree and refreshes the view and handler after every event.
pub struct Adapted {
    /// Holder of the private state tree.
    store: Store,
    /// Root context over the store.
    ctx: Context,
    /// The adapted component.
    comp: Comp,
    /// The current view.
    view: Box<dyn View>,
    /// The current handler.
    react: React,
}

impl Adapted {
    /// Adapt a component, starting from an empty tree.
    pub fn new(comp: impl Into<Comp>, binding: Option<Rc<dyn Binding>>) -> Self {
        Self::with_tree(Tree::new(), comp, binding)
    }

    /// Adapt a component, starting from the given tree.
    pub fn with_tree(tree: Tree, comp: impl Into<Comp>, binding: Option<Rc<dyn Binding>>) -> Self {
        let comp = comp.into();
        let store = Store::with_tree(tree);
        let ctx = Context::new(store.clone(), binding);
        let (view, react) = invoke(&comp, &ctx);
        Self {
            store,
            ctx,
            comp,
            view,
            react,
        }
    }

    /// A snapshot of the current state tree.
    #[cfg(any(test, feature = "testing"))]
    pub fn state(&self) -> Tree {
        self.store.snapshot()
    }

    /// The root context. Writes through it show up on the next event or
    /// [`Adapted::refresh`].
    #[cfg(any(test, feature = "testing"))]
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Dispatch an event and return the handler's outcome.
    pub fn dispatch(&mut self, event: &Event) -> Action {
        let action = (self.react)(event);
        self.refresh();
        action
    }

    /// Invoke the component again against the current tree.
    pub fn refresh(&mut self) {
        let (view, react) = invoke(&self.comp, &self.ctx);
        self.view = view;
        self.react = react;
    }
}

impl Widget for Adapted {
    fn render(&self, width: usize, height: usize) -> TermBuf {
        self.view.render(width, height)
    }

    fn max_height(&self, width: usize, height: usize) -> usize {
        self.view.render(width, height).height()
    }

    fn handle(&mut self, event: &Event) -> bool {
        self.dispatch(event) != Action::Unused
    }
}

impl fmt::Debug for Adapted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Adapted")
            .field("state", &self.store)
            .finish_non_exhaustive()
    }
}

/// Adapt a component to the [`Widget`] interface.
pub fn adapt_to_widget(comp: impl Into<Comp>, binding: Option<Rc<dyn Binding>>) -> Adapted {
    Adapted::new(comp, binding)
}
