//! Append-only conversation transcript
//!
//! The transcript is the session's message history in arrival order. The
//! system prompt is not part of it; the session injects a freshly built
//! system message at the head of every provider call instead.

use crate::providers::Message;

/// What the conversation loop should do after a tools step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// Hand the turn back to the model
    Continue,
    /// A successful save was detected; the session is over
    End,
}

/// Append-only record of the conversation
///
/// # Examples
///
/// ```
/// use drafter::agent::Transcript;
///
/// let mut transcript = Transcript::new();
/// transcript.add_user("Write a note about cats");
/// assert_eq!(transcript.messages().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Creates an empty transcript
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user message
    pub fn add_user(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    /// Appends an assistant message as returned by the provider
    pub fn add_assistant(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Appends a tool result tied to the assistant call that requested it
    pub fn add_tool_result(&mut self, tool_call_id: impl Into<String>, content: impl Into<String>) {
        self.messages.push(Message::tool_result(tool_call_id, content));
    }

    /// Returns the messages in arrival order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the most recent assistant message, if any
    pub fn last_assistant(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == "assistant")
    }

    /// Returns true if the transcript holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Decides whether the conversation is over
    ///
    /// Scans the transcript from newest to oldest for a tool result whose
    /// content contains "saved" (case-insensitive). The save tool's failure
    /// text avoids that word, so the loop keeps going after a save that did
    /// not land.
    ///
    /// # Examples
    ///
    /// ```
    /// use drafter::agent::{Continuation, Transcript};
    ///
    /// let mut transcript = Transcript::new();
    /// transcript.add_tool_result("call_1", "Document saved to notes.txt");
    /// assert_eq!(transcript.continuation(), Continuation::End);
    /// ```
    pub fn continuation(&self) -> Continuation {
        for message in self.messages.iter().rev() {
            if message.role != "tool" {
                continue;
            }
            if let Some(content) = &message.content {
                if content.to_lowercase().contains("saved") {
                    return Continuation::End;
                }
            }
        }
        Continuation::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{FunctionCall, ToolCall};

    #[test]
    fn test_empty_transcript_continues() {
        let transcript = Transcript::new();
        assert_eq!(transcript.continuation(), Continuation::Continue);
    }

    #[test]
    fn test_successful_save_ends_conversation() {
        let mut transcript = Transcript::new();
        transcript.add_user("save it");
        transcript.add_tool_result("call_1", "Document saved to notes.txt");

        assert_eq!(transcript.continuation(), Continuation::End);
    }

    #[test]
    fn test_save_detection_is_case_insensitive() {
        let mut transcript = Transcript::new();
        transcript.add_tool_result("call_1", "DOCUMENT SAVED TO NOTES.TXT");

        assert_eq!(transcript.continuation(), Continuation::End);
    }

    #[test]
    fn test_failed_save_continues() {
        let mut transcript = Transcript::new();
        transcript.add_tool_result("call_1", "Error: could not write report.txt: permission denied");

        assert_eq!(transcript.continuation(), Continuation::Continue);
    }

    #[test]
    fn test_update_result_continues() {
        let mut transcript = Transcript::new();
        transcript.add_tool_result("call_1", "Document updated:\nCats are great.");

        assert_eq!(transcript.continuation(), Continuation::Continue);
    }

    #[test]
    fn test_saved_in_user_message_does_not_end() {
        // Only tool results count for termination
        let mut transcript = Transcript::new();
        transcript.add_user("I already saved it myself");
        transcript.add_assistant(Message::assistant("It is saved, apparently"));

        assert_eq!(transcript.continuation(), Continuation::Continue);
    }

    #[test]
    fn test_save_anywhere_in_history_ends() {
        // The scan covers the whole transcript, not only the last message
        let mut transcript = Transcript::new();
        transcript.add_tool_result("call_1", "Document saved to notes.txt");
        transcript.add_user("actually, one more change");
        transcript.add_tool_result("call_2", "Document updated:\nmore text");

        assert_eq!(transcript.continuation(), Continuation::End);
    }

    #[test]
    fn test_last_assistant() {
        let mut transcript = Transcript::new();
        assert!(transcript.last_assistant().is_none());

        transcript.add_user("hello");
        transcript.add_assistant(Message::assistant("first"));
        transcript.add_tool_result("call_1", "Document updated:\nx");
        transcript.add_assistant(Message::assistant_with_tools(
            Some("second".to_string()),
            vec![ToolCall {
                id: "call_2".to_string(),
                function: FunctionCall {
                    name: "save".to_string(),
                    arguments: "{}".to_string(),
                },
            }],
        ));

        let last = transcript.last_assistant().unwrap();
        assert_eq!(last.content.as_deref(), Some("second"));
    }

    #[test]
    fn test_messages_preserve_order() {
        let mut transcript = Transcript::new();
        transcript.add_user("one");
        transcript.add_assistant(Message::assistant("two"));
        transcript.add_tool_result("call_1", "three");

        let roles: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.role.as_str())
            .collect();
        assert_eq!(roles, vec!["user", "assistant", "tool"]);
    }
}
