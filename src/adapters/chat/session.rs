use std::path::Path;

use crate::{
    domain::{
        adapters::Chat,
        models::{ChatMessage, CompletionRequest},
    },
    utils::get_file_contents,
};

use super::Endpoint;

/// Chat backed by a saved transcript and, optionally, a completion endpoint.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    tools: Vec<String>,
    endpoint: Option<Endpoint>,
}

impl ChatSession {
    pub fn new(
        transcript: Vec<ChatMessage>,
        tools: Vec<String>,
        endpoint: Option<Endpoint>,
    ) -> Self {
        ChatSession {
            transcript,
            tools,
            endpoint,
        }
    }

    /// Load a yaml list of `{ role, content }` messages.
    pub fn load_transcript(path: &Path) -> anyhow::Result<Vec<ChatMessage>> {
        let contents = get_file_contents(path)?;
        let transcript = serde_yaml::from_str::<Vec<ChatMessage>>(&contents)?;

        log::info!(
            "loaded {} transcript messages from '{}'",
            transcript.len(),
            path.display()
        );

        Ok(transcript)
    }
}

impl Chat for ChatSession {
    fn current_message(&self) -> Option<ChatMessage> {
        self.transcript.last().cloned()
    }

    fn create_request(&self, input: ChatMessage) -> anyhow::Result<CompletionRequest> {
        let mut messages = self.transcript.clone();
        messages.push(input);

        Ok(CompletionRequest {
            messages,
            tools: self.tools.clone(),
        })
    }

    fn complete(&self, request: CompletionRequest) -> anyhow::Result<Option<String>> {
        match &self.endpoint {
            Some(endpoint) => endpoint.complete(&request.messages),
            None => {
                log::warn!("no completion endpoint configured");
                Ok(None)
            }
        }
    }
}
