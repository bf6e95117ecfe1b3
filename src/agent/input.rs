//! Operator input sources
//!
//! The session reads the operator's next request through the
//! `OperatorInput` trait. The interactive implementation wraps rustyline;
//! tests script their input instead.

use crate::error::Result;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Source of operator turns
///
/// `read_line` returns `Ok(None)` when the input stream is exhausted
/// (Ctrl-C, Ctrl-D, or a scripted source running out), which the session
/// treats as a request to stop.
pub trait OperatorInput {
    /// Reads one line of operator input, prompting with `prompt`
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive line editor input
pub struct RustylineInput {
    editor: DefaultEditor,
}

impl RustylineInput {
    /// Creates a new interactive input source
    ///
    /// # Errors
    ///
    /// Returns error if the line editor cannot be initialized
    pub fn new() -> Result<Self> {
        let editor = DefaultEditor::new()?;
        Ok(Self { editor })
    }
}

impl OperatorInput for RustylineInput {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let _ = self.editor.add_history_entry(&line);
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Scripted input for tests
///
/// Serves a fixed list of lines in order, then reports exhaustion.
///
/// # Examples
///
/// ```
/// use drafter::agent::{OperatorInput, ScriptedInput};
///
/// let mut input = ScriptedInput::new(vec!["write about cats".to_string()]);
/// assert_eq!(input.read_line("> ").unwrap(), Some("write about cats".to_string()));
/// assert_eq!(input.read_line("> ").unwrap(), None);
/// ```
pub struct ScriptedInput {
    lines: std::vec::IntoIter<String>,
}

impl ScriptedInput {
    /// Creates a scripted source serving the given lines in order
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines: lines.into_iter(),
        }
    }
}

impl OperatorInput for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        Ok(self.lines.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_serves_in_order() {
        let mut input = ScriptedInput::new(vec!["first".to_string(), "second".to_string()]);

        assert_eq!(input.read_line("> ").unwrap(), Some("first".to_string()));
        assert_eq!(input.read_line("> ").unwrap(), Some("second".to_string()));
        assert_eq!(input.read_line("> ").unwrap(), None);
    }

    #[test]
    fn test_scripted_input_empty_is_exhausted() {
        let mut input = ScriptedInput::new(vec![]);
        assert_eq!(input.read_line("> ").unwrap(), None);
    }
}
