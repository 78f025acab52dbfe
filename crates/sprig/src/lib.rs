//! Sprig: an immediate-mode terminal UI library.
//!
//! A sprig application is a tree of components. A component is a plain
//! function from a [`Context`] to a view and an event handler. All UI state
//! lives in a single persistent [`Tree`]; components read it through typed
//! [`StateVar`]s, and handlers replace entries in it. After every event the
//! root component is invoked again against the updated tree.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`runloop::run`] - Drive a component against any [`backend::Terminal`]
//! - [`backend::crossterm::runloop`] - Drive a component on the real terminal
//! - [`adapt::adapt_to_widget`] - Wrap a component as a retained-mode widget
//!
//! # Module Organization
//!
//! - [`view`] - Views and layout combinators
//! - [`widgets`] - Built-in components: code area, list box and combo box

#![warn(missing_docs)]

// Internal core module - re-export specific items below
mod core;

// Public modules
pub mod widgets;

pub use core::termbuf::{BufferBuilder, Cell, Pos, TermBuf};
#[cfg(any(test, feature = "testing"))]
pub use core::testing;
pub use core::{
    Action, Binding, Comp, Context, React, Scene, StatePath, StateValue, StateVar, Store, Tree,
    Value, with_states,
};
pub use core::{
    adapt, backend, context, error, event, path, runloop, state, style, termbuf, text, tree, view,
};
