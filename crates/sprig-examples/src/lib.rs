//! Demonstration components built on sprig.

/// The default binding hook used by the demos.
pub mod bindings;
/// A push button component.
pub mod button;
/// Combo box demo.
pub mod combo;
/// Counter demo.
pub mod counter;
/// Prompted text fields.
pub mod field;
/// Flight booker demo.
pub mod flight;
/// The registry of runnable demos.
pub mod gallery;
/// Hierarchical navigator demo.
pub mod hiernav;
/// A single-shot line editor.
pub mod lineedit;
/// Temperature converter demo.
pub mod temperature;
/// Todo list demo.
pub mod todo;
/// Setup wizard demo.
pub mod wizard;
/// A wrapper that shows a component's state below it.
pub mod wrapper;

#[cfg(test)]
mod tests;
