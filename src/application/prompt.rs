//! Blocking confirm/alert dialogs.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};

pub trait Prompt {
    /// Ask a yes/no question; `false` aborts the pending action.
    fn confirm(&self, message: &str) -> bool;

    /// Show a message the user has to acknowledge.
    fn alert(&self, message: &str);
}

/// Asks on stderr and reads the answer from stdin.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalPrompt {
    assume_yes: bool,
}

impl TerminalPrompt {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        let mut stderr = io::stderr().lock();
        if write!(stderr, "{message} [y/N] ").and_then(|()| stderr.flush()).is_err() {
            return false;
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }

    fn alert(&self, message: &str) {
        eprintln!("{message}");
    }
}

/// Test double: answers every confirmation with a fixed reply and records
/// what was asked.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    reply: bool,
    confirmations: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
}

impl ScriptedPrompt {
    pub fn accepting() -> Self {
        Self {
            reply: true,
            ..Self::default()
        }
    }

    pub fn declining() -> Self {
        Self::default()
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.reply
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}
