/// Buffer testing utilities.
pub mod buf;
/// Harness for component testing.
pub mod harness;
/// Scripted terminal for run loop tests.
pub mod terminal;

pub use buf::BufTest;
pub use harness::{Harness, HarnessBuilder};
pub use terminal::ScriptedTerminal;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        Action, Context, Scene,
        error::Error,
        event::{
            Event,
            key::{Ctrl, KeyCode},
        },
        runloop::{RunOptions, run, run_with_options},
        view::text,
    };

    fn echo(c: &Context) -> Scene {
        let last = c.state("last", String::new());
        let view = text(format!("last: {}", last.get()));
        let react = c.with_binding("echo", move |ev| match ev.key() {
            Some(k) if *k == KeyCode::Esc => Action::Exit,
            Some(k) => {
                last.set(k.to_string());
                Action::Consumed
            }
            None => Action::Unused,
        });
        (Box::new(view), react)
    }

    #[test]
    fn runs_until_exit() {
        let mut term = ScriptedTerminal::new(
            5,
            20,
            [
                Event::from('a'),
                Event::Resize { rows: 5, cols: 30 },
                Event::from(KeyCode::Esc),
            ],
        );
        let tree = run(&mut term, echo, None).unwrap_or_else(|e| panic!("{e}"));
        assert!(matches!(tree.get("last"), Some(v) if v.downcast::<String>().as_deref() == Some("a")));
        assert_eq!((term.setups, term.restores), (1, 1));

        let texts: Vec<String> = term.frames.iter().map(|(b, _)| b.line_text(0)).collect();
        assert_eq!(texts, vec!["last: ", "last: a", "last: a", ""]);
        let full: Vec<bool> = term.frames.iter().map(|(_, f)| *f).collect();
        assert_eq!(full, vec![true, false, true, false]);
        assert_eq!(term.last_frame().map(|b| b.width), Some(30));
    }

    #[test]
    fn read_errors_restore_the_terminal() {
        let mut term = ScriptedTerminal::new(5, 20, [Event::from('a')]);
        let err = run(&mut term, echo, None).err();
        assert!(matches!(err, Some(Error::Terminal(_))));
        assert_eq!(term.restores, 1);
    }

    #[test]
    fn ctrl_c_exit_is_opt_in() {
        let events = [Event::from(Ctrl + 'c'), Event::from(KeyCode::Esc)];
        let mut term = ScriptedTerminal::new(5, 20, events);
        let tree = run(&mut term, echo, None).unwrap_or_else(|e| panic!("{e}"));
        assert!(tree.get("last").is_some_and(|v| v.downcast::<String>().as_deref() == Some("Ctrl-c")));

        let mut term = ScriptedTerminal::new(5, 20, events);
        let options = RunOptions {
            ctrl_c_exits: true,
            ..RunOptions::default()
        };
        let tree = run_with_options(&mut term, echo, None, options).unwrap_or_else(|e| panic!("{e}"));
        assert!(tree.get("last").is_some_and(|v| v.downcast::<String>().as_deref() == Some("")));
    }
}
