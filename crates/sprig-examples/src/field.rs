use sprig::{
    Comp,
    style::StyledText,
    widgets::{code_area, codearea},
};

/// A code area with a plain prompt.
pub fn field(prompt: &str) -> Comp {
    styled_field(StyledText::plain(prompt))
}

/// A code area with a styled prompt.
pub fn styled_field(prompt: StyledText) -> Comp {
    Comp::from(code_area).with_state(codearea::PROMPT, prompt)
}
