//! Abbreviation tables and expansion.
//!
//! Expansion is driven by the "streak": the characters typed one after another
//! at a moving cursor, with nothing else happening in between. The streak
//! always equals the text immediately before the dot.

use std::sync::LazyLock;

use regex::Regex;

use super::buffer::CodeBuffer;

/// A word in command position, followed by one whitespace character at the
/// end of the text.
static COMMAND_WORD: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"(?:^|[|;({\n])[ \t]*([^\s|;(){}]+)\s$")
        .inspect_err(|e| tracing::error!(error = %e, "bad command word pattern"))
        .ok()
});

/// An ordered table of abbreviations and their expansions. Earlier entries win
/// ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Abbreviations {
    /// `(abbreviation, expansion)` pairs.
    entries: Vec<(String, String)>,
}

impl Abbreviations {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with an entry appended.
    pub fn with(mut self, abbr: impl Into<String>, full: impl Into<String>) -> Self {
        self.entries.push((abbr.into(), full.into()));
        self
    }

    /// Iterate over the entries in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(a, f)| (a.as_str(), f.as_str()))
    }

    /// Is the table empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The longest non-empty abbreviation accepted by `accept`. Ties go to the
    /// earliest entry.
    fn longest(&self, accept: impl Fn(&str) -> bool) -> Option<(&str, &str)> {
        self.iter()
            .filter(|(a, _)| !a.is_empty() && accept(*a))
            .fold(None, |best: Option<(&str, &str)>, (a, f)| match best {
                Some((b, _)) if b.len() >= a.len() => best,
                _ => Some((a, f)),
            })
    }

    /// Expand an abbreviation that the streak ends with. The abbreviation just
    /// before the dot is replaced.
    pub fn expand_simple(&self, buf: &CodeBuffer, streak: &str) -> Option<CodeBuffer> {
        let (a, f) = self.longest(|a| streak.ends_with(a))?;
        let before = buf.before_dot().strip_suffix(a)?;
        Some(CodeBuffer {
            content: format!("{before}{f}{}", buf.after_dot()),
            dot: before.len() + f.len(),
        })
    }

    /// Expand a command abbreviation. Applies only with the dot at the end of
    /// the text and a whitespace trigger, when the word before the trigger is
    /// in command position and was typed as part of the streak.
    pub fn expand_command(&self, buf: &CodeBuffer, streak: &str, trigger: char) -> Option<CodeBuffer> {
        if buf.dot != buf.content.len() || !trigger.is_whitespace() {
            return None;
        }
        let caps = COMMAND_WORD.as_ref()?.captures(&buf.content)?;
        let word = caps.get(1)?;
        if !streak.ends_with(&format!("{}{trigger}", word.as_str())) {
            return None;
        }
        let (_, f) = self.iter().find(|(a, _)| *a == word.as_str())?;
        let content = format!(
            "{}{f}{}",
            &buf.content[..word.start()],
            &buf.content[word.end()..]
        );
        Some(CodeBuffer::at_end(content))
    }

    /// Expand a small-word abbreviation once the character after it ends the
    /// word. The trigger stays in place after the expansion.
    pub fn expand_small_word(&self, buf: &CodeBuffer, streak: &str, trigger: char) -> Option<CodeBuffer> {
        let typed = streak.strip_suffix(trigger)?;
        let before_trigger = buf.before_dot().strip_suffix(trigger)?;
        let (a, f) = self.longest(|a| {
            if !typed.ends_with(a) {
                return false;
            }
            let (Some(first), Some(last)) = (a.chars().next(), a.chars().next_back()) else {
                return false;
            };
            if WordClass::of(trigger) == WordClass::of(last) {
                return false;
            }
            // The streak can be out of step with the buffer.
            let Some(rest) = before_trigger.strip_suffix(a) else {
                return false;
            };
            rest.chars()
                .next_back()
                .is_none_or(|p| WordClass::of(p) != WordClass::of(first))
        })?;
        let start = before_trigger.len() - a.len();
        Some(CodeBuffer {
            content: format!("{}{f}{}", &buf.content[..start], &buf.content[start + a.len()..]),
            dot: buf.dot - a.len() + f.len(),
        })
    }
}

impl<A: Into<String>, F: Into<String>> FromIterator<(A, F)> for Abbreviations {
    fn from_iter<I: IntoIterator<Item = (A, F)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(a, f)| (a.into(), f.into())).collect(),
        }
    }
}

/// Character classes for small-word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordClass {
    /// Whitespace.
    Space,
    /// Alphanumerics and `_`.
    Word,
    /// Everything else.
    Punct,
}

impl WordClass {
    /// The class of a character.
    pub fn of(c: char) -> Self {
        if c.is_whitespace() {
            Self::Space
        } else if c.is_alphanumeric() || c == '_' {
            Self::Word
        } else {
            Self::Punct
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at_end(s: &str) -> CodeBuffer {
        CodeBuffer::at_end(s)
    }

    #[test]
    fn simple_longest_wins() {
        let t: Abbreviations = [("l", "less"), ("ll", "ls -l"), ("kl", "kill")].into_iter().collect();
        assert_eq!(t.expand_simple(&at_end("x ll"), "ll"), Some(at_end("x ls -l")));
        assert_eq!(t.expand_simple(&at_end("l"), "l"), Some(at_end("less")));
        assert_eq!(t.expand_simple(&at_end("q"), "q"), None);

        let t = Abbreviations::new().with("ab", "first").with("ab", "second");
        assert_eq!(t.expand_simple(&at_end("ab"), "ab"), Some(at_end("first")));
    }

    #[test]
    fn simple_mid_buffer() {
        let t = Abbreviations::new().with("xx", "YY");
        let buf = CodeBuffer::new("axx-tail", 3);
        assert_eq!(t.expand_simple(&buf, "xx"), Some(CodeBuffer::new("aYY-tail", 3)));
    }

    #[test]
    fn command_position() {
        let t = Abbreviations::new().with("gs", "git status");
        assert_eq!(
            t.expand_command(&at_end("gs "), "gs ", ' '),
            Some(at_end("git status "))
        );
        assert_eq!(
            t.expand_command(&at_end("ls | gs "), "gs ", ' '),
            Some(at_end("ls | git status "))
        );
        // Argument position.
        assert_eq!(t.expand_command(&at_end("echo gs "), "gs ", ' '), None);
        // Not typed in this streak.
        assert_eq!(t.expand_command(&at_end("gs "), " ", ' '), None);
        // Not at the end.
        assert_eq!(t.expand_command(&CodeBuffer::new("gs x", 3), "gs ", ' '), None);
        assert_eq!(t.expand_command(&at_end("gs;"), "gs;", ';'), None);
    }

    #[test]
    fn small_word() {
        let t = Abbreviations::new().with("fn", "function");
        assert_eq!(
            t.expand_small_word(&at_end("x fn "), "fn ", ' '),
            Some(at_end("x function "))
        );
        assert_eq!(
            t.expand_small_word(&at_end("fn("), "fn(", '('),
            Some(at_end("function("))
        );
        // Same class as the trigger.
        assert_eq!(t.expand_small_word(&at_end("fna"), "fna", 'a'), None);
        // Preceded by a word character.
        assert_eq!(t.expand_small_word(&at_end("xfn "), "xfn ", ' '), None);
        // Streak out of step with the buffer.
        assert_eq!(t.expand_small_word(&at_end(" "), "fn ", ' '), None);
        assert_eq!(t.expand_small_word(&at_end("gn "), "fn ", ' '), None);

        let t = Abbreviations::new().with("->", "→");
        assert_eq!(
            t.expand_small_word(&at_end("a->b"), "->b", 'b'),
            Some(at_end("a→b"))
        );
    }

    #[test]
    fn classes() {
        assert_eq!(WordClass::of(' '), WordClass::Space);
        assert_eq!(WordClass::of('_'), WordClass::Word);
        assert_eq!(WordClass::of('é'), WordClass::Word);
        assert_eq!(WordClass::of('('), WordClass::Punct);
    }
}
