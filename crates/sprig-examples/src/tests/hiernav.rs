use sprig::{
    Action,
    error::Result,
    testing::{BufTest, Harness},
};

use crate::hiernav::{Node, hiernav, sample_data};

fn path(h: &Harness) -> Vec<String> {
    h.state::<Vec<String>>("path")
}

#[test]
fn test_access() {
    let data = sample_data();
    let at = |p: &[&str]| data.access(&p.iter().map(|s| s.to_string()).collect::<Vec<_>>()).cloned();
    assert_eq!(at(&["bin", "zsh"]), Some(Node::leaf("The Z shell")));
    assert_eq!(at(&["bin", "nope"]), None);
    assert_eq!(at(&["README", "x"]), None);
    assert!(matches!(at(&[]), Some(Node::Dir(_))));
}

#[test]
fn test_navigate_down_and_up() -> Result<()> {
    let mut h = Harness::builder(hiernav)
        .state("data", sample_data())
        .size(60, 10)
        .build();
    let buf = h.render();
    assert!(BufTest::new(&buf).contains_text("this is the root."));

    h.press("Down Right")?;
    assert_eq!(path(&h), vec!["bin"]);
    assert!(BufTest::new(&h.render()).contains_text("path = [\"bin\"]"));

    h.press("Down Right")?;
    assert_eq!(path(&h), vec!["bin", "elvish"]);
    assert_eq!(h.press("Right Down")?, vec![Action::Unused; 2]);

    h.press("Left Left")?;
    assert!(path(&h).is_empty());
    assert_eq!(h.press("Left")?, vec![Action::Unused]);
    assert_eq!(h.state::<usize>("[]/selected"), 1);
    Ok(())
}
