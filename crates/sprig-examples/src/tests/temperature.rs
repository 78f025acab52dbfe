use sprig::{
    error::Result,
    testing::Harness,
    widgets::codearea::{self, CodeBuffer},
};

use crate::temperature::temperature;

fn content(h: &Harness, field: &str) -> String {
    h.state::<CodeBuffer>(&format!("{field}/{}", codearea::BUFFER))
        .content
}

#[test]
fn test_celsius_updates_fahrenheit() -> Result<()> {
    let mut h = Harness::new(temperature);
    h.type_text("100");
    assert_eq!(content(&h, "fahrenheit"), "212.00");
    h.assert_lines(&["Celsius: 100", "Fahrenheit: 212.00"]);

    h.press("Tab Backspace Backspace Backspace")?;
    assert_eq!(content(&h, "fahrenheit"), "212");
    assert_eq!(content(&h, "celsius"), "100.00");
    Ok(())
}

#[test]
fn test_non_numbers_leave_the_other_field() {
    let mut h = Harness::new(temperature);
    h.type_text("-40");
    assert_eq!(content(&h, "fahrenheit"), "-40.00");
    h.type_text("x");
    assert_eq!(content(&h, "celsius"), "-40x");
    assert_eq!(content(&h, "fahrenheit"), "-40.00");
}
