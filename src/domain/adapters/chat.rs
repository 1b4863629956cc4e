use crate::domain::models::{ChatMessage, CompletionRequest};

/// Conversation the agent is currently having, plus the model behind it.
pub trait Chat {
    /// Most recent message of the conversation, `None` before anything was said.
    fn current_message(&self) -> Option<ChatMessage>;

    /// Build a request carrying the conversation history followed by `input`.
    fn create_request(&self, input: ChatMessage) -> anyhow::Result<CompletionRequest>;

    /// Text completion for the request, `None` when the model produced nothing.
    fn complete(&self, request: CompletionRequest) -> anyhow::Result<Option<String>>;
}
