use sprig::{
    Comp,
    style::StyledText,
    widgets::{
        codearea, combo_box,
        combobox::{self, GenList},
        listbox::{self, StringItems, items},
    },
};

/// Words offered for filtering.
const WORDS: &[&str] = &[
    "apple", "apricot", "banana", "blackberry", "cherry", "grape", "lemon", "lime", "mango",
    "orange", "peach", "pear", "plum",
];

/// The words containing `filter`, with the first selected.
fn matching(filter: &str) -> (listbox::ItemsState, usize) {
    let found: StringItems = WORDS
        .iter()
        .filter(|w| w.contains(filter))
        .copied()
        .collect();
    (items(found), 0)
}

/// A combo box filtering a fixed list of words.
pub fn combo() -> Comp {
    let filter_prompt = format!("{}/{}", combobox::FILTER, codearea::PROMPT);
    Comp::from(combo_box)
        .with_state(combobox::GEN_LIST, GenList::new(matching))
        .with_state(&filter_prompt, StyledText::plain("filter: "))
}
