//! System prompt for the drafting agent
//!
//! The prompt is rebuilt on every model call so it always embeds the
//! document's current content. It is injected at the head of the outgoing
//! message list and never stored in the transcript.

/// Builds the Drafter system prompt
///
/// The prompt instructs the model to respond with exactly one tool call
/// per turn. This is a policy enforced by prompting only; the conversation
/// loop tolerates plain-text responses without crashing.
///
/// # Arguments
///
/// * `document` - The document's current content (may be empty)
///
/// # Examples
///
/// ```
/// use drafter::prompts::build_system_prompt;
///
/// let prompt = build_system_prompt("Cats are great.");
/// assert!(prompt.contains("Drafter"));
/// assert!(prompt.contains("Cats are great."));
/// ```
pub fn build_system_prompt(document: &str) -> String {
    format!(
        "You are Drafter, a helpful writing assistant.\n\
         You MUST respond by calling exactly one of the available tools: 'update' or 'save'.\n\
         - 'update' replaces the entire document with new content.\n\
         - 'save' writes the document to a .txt file.\n\
         After an 'update' call, always show the full updated document.\n\
         After a successful 'save' call, say goodbye.\n\
         Never answer with plain text that is not wrapped in a tool call.\n\n\
         Current document content (may be empty):\n{}",
        document
    )
}
