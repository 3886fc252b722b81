//! Dialog seam for action input.
//!
//! The card never talks to a concrete dialog implementation: actions ask an
//! abstract [`Dialogs`] capability for free-text input or a confirmation,
//! and a cancelled dialog simply yields nothing. The terminal
//! implementation here blocks on stdin, which suspends only the current
//! interaction.

use std::io::{self, Write};

// ANSI color codes
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const CYAN: &str = "\x1b[36m";
pub const RED: &str = "\x1b[31m";
pub const GRAY: &str = "\x1b[90m";

/// Host-provided input capability. `prompt` returns `None` on cancel,
/// `confirm` returns `false` on decline.
pub trait Dialogs {
    fn prompt(&mut self, message: &str) -> Option<String>;
    fn confirm(&mut self, message: &str) -> bool;
}

/// Stdin-backed dialogs for the terminal front-end.
///
/// An empty line counts as cancelling the prompt; confirmation defaults to
/// "no" so that a bare Enter never ends a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalDialogs;

impl Dialogs for TerminalDialogs {
    fn prompt(&mut self, message: &str) -> Option<String> {
        print!("{CYAN}?{RESET} {message} ");
        if io::stdout().flush().is_err() {
            return None;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return None;
        }

        let trimmed = input.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn confirm(&mut self, message: &str) -> bool {
        print!("{CYAN}?{RESET} {message} {GRAY}[y/N]{RESET} ");
        if io::stdout().flush().is_err() {
            return false;
        }

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            return false;
        }

        matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

/// Scripted dialogs for tests and demos: answers are served in order.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialogs {
    prompts: Vec<Option<String>>,
    confirms: Vec<bool>,
}

impl ScriptedDialogs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt(mut self, answer: Option<&str>) -> Self {
        self.prompts.push(answer.map(String::from));
        self
    }

    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirms.push(answer);
        self
    }
}

impl Dialogs for ScriptedDialogs {
    fn prompt(&mut self, _message: &str) -> Option<String> {
        if self.prompts.is_empty() {
            None
        } else {
            self.prompts.remove(0)
        }
    }

    fn confirm(&mut self, _message: &str) -> bool {
        if self.confirms.is_empty() {
            false
        } else {
            self.confirms.remove(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_dialogs_serve_in_order() {
        let mut dialogs = ScriptedDialogs::new()
            .with_prompt(Some("first"))
            .with_prompt(None)
            .with_confirm(true);

        assert_eq!(dialogs.prompt("p"), Some("first".to_string()));
        assert_eq!(dialogs.prompt("p"), None);
        assert!(dialogs.confirm("c"));
        // Exhausted scripts fall back to cancel/decline.
        assert_eq!(dialogs.prompt("p"), None);
        assert!(!dialogs.confirm("c"));
    }
}
