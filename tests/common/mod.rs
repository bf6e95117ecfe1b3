use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use drafter::error::Result;
use drafter::providers::{CompletionResponse, FunctionCall, Message, Provider, ToolCall};

/// Provider that replays a fixed script of assistant messages
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<Message>>,
}

#[allow(dead_code)]
impl ScriptedProvider {
    pub fn new(responses: Vec<Message>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
        }
    }
}

#[async_trait]
impl Provider for ScriptedProvider {
    async fn complete(
        &self,
        _messages: &[Message],
        _tools: &[serde_json::Value],
    ) -> Result<CompletionResponse> {
        let message = self
            .responses
            .lock()
            .expect("scripted provider lock poisoned")
            .pop_front()
            .unwrap_or_else(|| Message::assistant("out of script"));
        Ok(CompletionResponse::new(message))
    }
}

#[allow(dead_code)]
pub fn tool_call(id: &str, name: &str, arguments: serde_json::Value) -> ToolCall {
    ToolCall {
        id: id.to_string(),
        function: FunctionCall {
            name: name.to_string(),
            arguments: arguments.to_string(),
        },
    }
}
