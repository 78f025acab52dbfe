use sprig::{
    Action,
    error::Result,
    testing::{BufTest, Harness},
};

use crate::wizard::wizard;

#[test]
fn test_selection_shows_task() -> Result<()> {
    let mut h = Harness::builder(wizard).size(60, 20).build();
    let buf = h.render();
    let t = BufTest::new(&buf);
    assert!(t.contains_text("Set up carapace"));
    assert!(t.contains_text("sudo brew install carapace"));
    assert_eq!(t.style_line(0).chars().next(), Some('#'));

    assert_eq!(h.press("Down")?, vec![Action::Consumed]);
    let buf = h.render();
    let t = BufTest::new(&buf);
    assert!(t.contains_text("use readline-binding"));
    assert!(t.contains_text("Ctrl-N to next line"));

    assert_eq!(h.press("Enter Down")?, vec![Action::Consumed, Action::Unused]);
    assert_eq!(h.state::<usize>("list/selected"), 1);
    Ok(())
}
