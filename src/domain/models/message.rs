use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user<S: Into<String>>(content: S) -> Self {
        ChatMessage {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A chat completion request as built by the hosting conversation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionRequest {
    pub messages: Vec<ChatMessage>,
    /// Names of the tools offered to the model.
    pub tools: Vec<String>,
}

impl CompletionRequest {
    /// Drop everything except the last `count` messages.
    pub fn retain_last(&mut self, count: usize) {
        let len = self.messages.len();
        if len > count {
            self.messages.drain(..len - count);
        }
    }
}
