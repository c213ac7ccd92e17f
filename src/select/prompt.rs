//! Line-oriented interactive surface used by the selectors.

use std::io::{BufRead, Write};

use crate::error::Result;

/// Source of user input for interactive menus.
pub trait Prompt {
    /// Write menu text to the interactive surface.
    fn show(&mut self, text: &str);

    /// Read one line of input with the trailing newline removed.
    ///
    /// Returns `None` when input is exhausted.
    fn read_line(&mut self) -> Result<Option<String>>;
}

/// Prompt backed by stdin, rendering to stderr so stdout stays free for
/// the tag document.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn show(&mut self, text: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(text.as_bytes());
        let _ = stderr.flush();
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
pub(crate) use scripted::ScriptedPrompt;
