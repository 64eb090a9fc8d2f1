//! Interactive prompts on stdin (mockable in tests).

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Asks the user questions.
pub(crate) trait Prompter {
    /// Asks a yes/no question. Anything but `y`/`yes` is a no.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Asks for a line of text, showing `current` as the existing value.
    ///
    /// Returns `None` when the user enters nothing.
    fn input(&mut self, question: &str, current: &str) -> Result<Option<String>>;
}

/// Prompter that writes to stderr and reads lines from stdin.
pub(crate) struct StdinPrompter;

impl StdinPrompter {
    fn read_line(&self) -> Result<String> {
        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Prompter for StdinPrompter {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        eprint!("{} [y/N] ", question);
        io::stderr().flush().ok();
        Ok(is_yes(&self.read_line()?))
    }

    fn input(&mut self, question: &str, current: &str) -> Result<Option<String>> {
        eprintln!("Current: {}", current);
        eprint!("{} ", question);
        io::stderr().flush().ok();
        let line = self.read_line()?;
        Ok(if line.trim().is_empty() { None } else { Some(line) })
    }
}

pub(crate) fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_yes_accepts_y_and_yes() {
        for answer in ["y", "Y", "yes", " YES ", "Yes\n"] {
            assert!(is_yes(answer), "{:?} should be yes", answer);
        }
    }

    #[test]
    fn is_yes_rejects_everything_else() {
        for answer in ["", "n", "no", "yep", "ok"] {
            assert!(!is_yes(answer), "{:?} should be no", answer);
        }
    }
}
