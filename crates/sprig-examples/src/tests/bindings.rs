use sprig::{
    Action,
    error::Result,
    testing::Harness,
    widgets::codearea::{self, CodeBuffer},
};

use crate::{bindings::binding, field::field};

#[test]
fn test_code_area_cursor_keys() -> Result<()> {
    let mut h = Harness::builder(field("> ")).binding(binding).build();
    h.type_text("abc");
    h.press("Left Left")?;
    h.type_text("x");
    assert_eq!(h.state::<CodeBuffer>(codearea::BUFFER), CodeBuffer::new("axbc", 2));

    h.press("Home")?;
    assert_eq!(h.state::<CodeBuffer>(codearea::BUFFER).dot, 0);
    h.press("End")?;
    assert_eq!(h.state::<CodeBuffer>(codearea::BUFFER).dot, 4);
    h.press("Right")?;
    assert_eq!(h.state::<CodeBuffer>(codearea::BUFFER).dot, 4);
    Ok(())
}

#[test]
fn test_other_keys_stay_unused() -> Result<()> {
    let mut h = Harness::builder(field("> ")).binding(binding).build();
    let actions = h.press("Up F5")?;
    assert!(actions.iter().all(|a| *a == Action::Unused));
    Ok(())
}
