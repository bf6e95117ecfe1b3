//! Drafting session state machine
//!
//! One session is a four-phase cycle: the model speaks (`Agent`), the
//! operator speaks (`UserInput`), requested tools run (`Tools`), and a
//! decision over the transcript either hands the turn back to the model or
//! ends the session (`Terminal`). Operator input is collected between the
//! model's response and its tool execution; the operator sees what the
//! model intends before the tools run.
//!
//! The loop carries no turn limit. It ends on a detected successful save
//! or when the input stream closes.

use crate::agent::input::OperatorInput;
use crate::agent::transcript::{Continuation, Transcript};
use crate::document::DocumentStore;
use crate::error::Result;
use crate::prompts::build_system_prompt;
use crate::providers::{Message, Provider, ToolCall};
use crate::tools::{ToolRegistry, ToolResult};
use colored::Colorize;

/// Control-flow position of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// The model produces the next assistant message
    Agent,
    /// The operator provides one line of input
    UserInput,
    /// The most recent assistant message's tool calls execute
    Tools,
    /// The session is over
    Terminal,
}

/// A single drafting session
///
/// Owns the provider, the tool registry, the shared document store, and
/// the transcript. Created with the operator's opening request already in
/// the transcript; driven to `Terminal` by [`DraftSession::run`].
pub struct DraftSession {
    provider: Box<dyn Provider>,
    registry: ToolRegistry,
    store: DocumentStore,
    transcript: Transcript,
    phase: Phase,
}

impl DraftSession {
    /// Creates a session seeded with the operator's opening request
    pub fn new(
        provider: Box<dyn Provider>,
        registry: ToolRegistry,
        store: DocumentStore,
        opening_request: impl Into<String>,
    ) -> Self {
        let mut transcript = Transcript::new();
        transcript.add_user(opening_request);
        Self {
            provider,
            registry,
            store,
            transcript,
            phase: Phase::Agent,
        }
    }

    /// Returns the session's current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the session's transcript
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Runs the session to completion
    ///
    /// # Errors
    ///
    /// Returns error if a provider call fails; inference failures are
    /// fatal to the run.
    pub async fn run(&mut self, input: &mut dyn OperatorInput) -> Result<()> {
        loop {
            match self.phase {
                Phase::Agent => self.step_agent().await?,
                Phase::UserInput => self.step_user_input(input)?,
                Phase::Tools => self.step_tools().await?,
                Phase::Terminal => return Ok(()),
            }
        }
    }

    /// Invokes the provider and appends its response
    ///
    /// The system prompt is rebuilt here on every call so it embeds the
    /// document's content as of this moment; it is never stored in the
    /// transcript.
    async fn step_agent(&mut self) -> Result<()> {
        let mut messages = Vec::with_capacity(self.transcript.messages().len() + 1);
        messages.push(Message::system(build_system_prompt(&self.store.content())));
        messages.extend_from_slice(self.transcript.messages());

        let response = self
            .provider
            .complete(&messages, &self.registry.all_definitions())
            .await?;

        if let Some(usage) = &response.usage {
            tracing::debug!(
                "Model turn used {} tokens ({} prompt, {} completion)",
                usage.total_tokens,
                usage.prompt_tokens,
                usage.completion_tokens
            );
        }

        if let Some(content) = &response.message.content {
            if !content.is_empty() {
                println!("\n{} {}", "Drafter:".cyan().bold(), content);
            }
        }
        if let Some(tool_calls) = &response.message.tool_calls {
            let names: Vec<&str> = tool_calls
                .iter()
                .map(|call| call.function.name.as_str())
                .collect();
            println!("{} {}", "Using tools:".yellow(), names.join(", "));
        }

        self.transcript.add_assistant(response.message);
        self.phase = Phase::UserInput;
        Ok(())
    }

    /// Collects one line of operator input
    ///
    /// A closed input stream (Ctrl-C, Ctrl-D, or a scripted source
    /// running dry) ends the session without a save.
    fn step_user_input(&mut self, input: &mut dyn OperatorInput) -> Result<()> {
        let prompt = format!("{} ", "What would you like to do with the document?".green());
        match input.read_line(&prompt)? {
            Some(line) => {
                self.transcript.add_user(line);
                self.phase = Phase::Tools;
            }
            None => {
                tracing::info!("Input stream closed; ending session");
                self.phase = Phase::Terminal;
            }
        }
        Ok(())
    }

    /// Executes the most recent assistant message's tool calls in order
    ///
    /// An assistant message without tool calls makes this step a no-op
    /// and the turn goes straight back to the model.
    async fn step_tools(&mut self) -> Result<()> {
        let tool_calls: Vec<ToolCall> = self
            .transcript
            .last_assistant()
            .and_then(|message| message.tool_calls.clone())
            .unwrap_or_default();

        if tool_calls.is_empty() {
            tracing::debug!("Assistant turn carried no tool calls");
        }

        for call in tool_calls {
            let result = self.dispatch(&call).await?;
            let text = result.to_message();
            println!("{} {}", "Tool result:".magenta(), text);
            self.transcript.add_tool_result(call.id, text);
        }

        self.phase = match self.transcript.continuation() {
            Continuation::End => {
                tracing::info!("Save detected; session complete");
                Phase::Terminal
            }
            Continuation::Continue => Phase::Agent,
        };
        Ok(())
    }

    /// Resolves and executes one tool call
    ///
    /// An unknown tool name or unparseable argument payload comes back as
    /// a `ToolResult` error the model can read, never as `Err`.
    async fn dispatch(&self, call: &ToolCall) -> Result<ToolResult> {
        let name = &call.function.name;
        let executor = match self.registry.get(name) {
            Some(executor) => executor,
            None => {
                tracing::warn!("Model requested unknown tool: {}", name);
                return Ok(ToolResult::error(format!("Unknown tool: {}", name)));
            }
        };

        let args: serde_json::Value = match serde_json::from_str(&call.function.arguments) {
            Ok(args) => args,
            Err(e) => {
                return Ok(ToolResult::error(format!(
                    "Malformed arguments for '{}': {}",
                    name, e
                )))
            }
        };

        tracing::debug!("Executing tool '{}'", name);
        executor.execute(args).await
    }
}
