//! Core types and traits for the sprig terminal UI library.

// Core modules - public
/// Retained-mode widget adapter.
pub mod adapt;
/// Terminal backends.
pub mod backend;
/// Core error types.
pub mod error;
/// Input event types.
pub mod event;
/// State tree paths.
pub mod path;
/// The component run loop.
pub mod runloop;
/// Styling and color helpers.
pub mod style;
/// Testing utilities.
#[cfg(any(test, feature = "testing"))]
pub mod testing;
/// Grapheme and cell width helpers.
pub mod text;
/// Views and layout combinators.
pub mod view;

// Core modules - exported mainly through the items below
/// Components, contexts and binding dispatch.
pub mod context;
/// The state holder and typed state variables.
pub mod state;
/// Terminal buffer types.
pub mod termbuf;
/// The persistent state tree.
pub mod tree;

// Public exports from internal modules
pub use context::{Action, Binding, Comp, Context, React, Scene, with_states};
pub use path::StatePath;
pub use state::{StateValue, StateVar, Store};
pub use tree::{Tree, Value};
