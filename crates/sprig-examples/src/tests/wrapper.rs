use sprig::{
    Action,
    error::Result,
    testing::{BufTest, Harness},
};

use crate::{counter::counter, wrapper::wrap};

#[test]
fn test_shows_inner_state() -> Result<()> {
    let mut h = Harness::builder(wrap(counter)).size(40, 20).build();
    let buf = h.render();
    let t = BufTest::new(&buf);
    assert_eq!(t.lines()[0].trim_end(), "0 [ Count ]");
    assert!(t.contains_text("value = 0"));
    assert!(t.contains_text("button:"));
    assert!(t.contains_text("  label = \"Count\""));
    assert!(!t.contains_text("-comp"));

    h.press("Space")?;
    assert_eq!(h.state::<i64>("inner/value"), 1);
    assert!(BufTest::new(&h.render()).contains_text("value = 1"));
    Ok(())
}

#[test]
fn test_escape_exits() -> Result<()> {
    let mut h = Harness::new(wrap(counter));
    assert_eq!(h.press("Esc")?, vec![Action::Exit]);
    assert_eq!(h.press("Ctrl-[")?, vec![Action::Exit]);
    assert_eq!(h.press("q")?, vec![Action::Unused]);
    Ok(())
}
