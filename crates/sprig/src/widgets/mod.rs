//! Built-in components for sprig applications.

/// Code editor component.
pub mod codearea;
/// Filterable list component.
pub mod combobox;
/// Selectable list component.
pub mod listbox;

pub use codearea::code_area;
pub use combobox::combo_box;
pub use listbox::{Items, StringItems, list_box};
