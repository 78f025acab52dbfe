use pretty_assertions::assert_eq;
use sprig::{
    error::{Error, Result},
    event::{
        Event,
        key::{Key, KeyCode},
    },
    style::{Attr, Color, Style, StyledText},
    testing::ScriptedTerminal,
};

use crate::lineedit::read_code;

fn keys(s: &str) -> impl Iterator<Item = Event> + '_ {
    s.chars().map(|c| Event::Key(Key::typed(c)))
}

#[test]
fn test_reads_a_line() -> Result<()> {
    let events = keys("ls")
        .chain([Event::from(KeyCode::Left)])
        .chain(keys("x"))
        .chain([Event::from(KeyCode::Enter)]);
    let mut term = ScriptedTerminal::new(5, 30, events);
    assert_eq!(read_code(&mut term, StyledText::plain("edit> "))?, "lxs");
    assert_eq!(term.frames[0].0.line_text(0).trim_end(), "edit>");
    assert_eq!(term.restores, 1);
    Ok(())
}

#[test]
fn test_pasted_newlines_do_not_submit() -> Result<()> {
    let events = [Event::PasteSetting(true)]
        .into_iter()
        .chain(keys("a\nb"))
        .chain([Event::PasteSetting(false), Event::from(KeyCode::Esc)]);
    let mut term = ScriptedTerminal::new(5, 30, events);
    assert_eq!(read_code(&mut term, StyledText::plain("> "))?, "a\nb");
    Ok(())
}

#[test]
fn test_unfinished_input_is_an_error() {
    let mut term = ScriptedTerminal::new(5, 30, keys("ls"));
    assert!(matches!(read_code(&mut term, StyledText::plain("> ")), Err(Error::Terminal(_))));
}

#[test]
fn test_prompt_style_from_a_string() -> Result<()> {
    let style: Style = "bold fg-green".parse()?;
    assert_eq!(style, Style::plain().fg(Color::DarkGreen).attr(Attr::Bold));

    let events = keys("ok").chain([Event::from(KeyCode::Enter)]);
    let mut term = ScriptedTerminal::new(5, 30, events);
    assert_eq!(read_code(&mut term, StyledText::new("$ ", style))?, "ok");
    let first = &term.frames[0].0.lines[0][0];
    assert_eq!((first.text.as_str(), first.style), ("$", style));

    assert!(matches!("bold mauve".parse::<Style>(), Err(Error::ParseStyle(_))));
    Ok(())
}
