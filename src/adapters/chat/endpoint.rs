use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};

use crate::domain::models::ChatMessage;

/// OpenAI compatible chat completion endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Endpoint {
    /// Base url, `/chat/completions` is appended.
    pub url: String,
    pub model: String,
    /// Environment variable holding the bearer token, if the endpoint needs one.
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default = "Endpoint::default_max_tokens")]
    pub max_tokens: usize,
    #[serde(default = "Endpoint::default_temperature")]
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

impl Endpoint {
    fn default_max_tokens() -> usize {
        200
    }

    fn default_temperature() -> f32 {
        0.2
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.url.trim_end_matches('/'))
    }

    pub fn complete(&self, messages: &[ChatMessage]) -> anyhow::Result<Option<String>> {
        let request = ChatRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        log::debug!("sending completion request: {:?}", request);

        let mut builder = reqwest::blocking::Client::new()
            .post(self.completions_url())
            .json(&request);

        if let Some(key_env) = &self.api_key_env {
            let key = std::env::var(key_env)
                .with_context(|| format!("Expected api key in '{}'", key_env))?;
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .context("Failed to send completion request")?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(anyhow!("Completion api error: {} - {}", status, text));
        }

        let response: ChatResponse = response
            .json()
            .context("Failed to parse completion response")?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completions_url_ignores_trailing_slash() {
        let endpoint: Endpoint =
            serde_yaml::from_str("url: http://localhost:11434/v1/\nmodel: llama3").unwrap();

        assert_eq!(
            endpoint.completions_url(),
            "http://localhost:11434/v1/chat/completions"
        );
        assert_eq!(endpoint.max_tokens, 200);
        assert_eq!(endpoint.api_key_env, None);
    }

    #[test]
    fn request_serializes_messages_with_lowercase_roles() {
        let messages = [ChatMessage::user("hello")];
        let request = ChatRequest {
            model: "llama3",
            messages: &messages,
            temperature: 0.5,
            max_tokens: 10,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hello");
    }
}
