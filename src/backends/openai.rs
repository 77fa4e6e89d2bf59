// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Chat completion client for OpenAI-compatible endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ModelSettings;
use crate::errors::ModelError;
use crate::observability::messages::backend::{ModelRequestRejected, ModelRequestSent};
use crate::observability::messages::StructuredLog;
use crate::traits::LanguageModel;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

/// Language model backed by `POST {base_url}/chat/completions`.
///
/// The node prompt is sent as the system message and the working value as
/// the user message. Without an API key every call returns its input.
pub struct OpenAiModel {
    client: reqwest::Client,
    settings: ModelSettings,
}

impl OpenAiModel {
    pub fn new(settings: ModelSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.settings.base_url)
    }
}

#[async_trait]
impl LanguageModel for OpenAiModel {
    async fn process(&self, prompt: &str, input: &str) -> Result<String, ModelError> {
        let Some(api_key) = self.settings.api_key.as_deref() else {
            tracing::debug!(model = %self.settings.model, "No API key set, passing input through");
            return Ok(input.to_string());
        };

        let url = self.completions_url();
        let body = ChatRequest {
            model: &self.settings.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: prompt,
                },
                ChatMessage {
                    role: "user",
                    content: input,
                },
            ],
        };

        ModelRequestSent {
            url: &url,
            model: &self.settings.model,
            prompt_len: prompt.len(),
            input_len: input.len(),
        }
        .log();

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            ModelRequestRejected {
                model: &self.settings.model,
                status: status.as_u16(),
                body: &text,
            }
            .log();
            return Err(ModelError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&text)?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(ModelError::EmptyResponse)
    }

    fn name(&self) -> &str {
        &self.settings.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn settings(base_url: String, api_key: Option<&str>) -> ModelSettings {
        ModelSettings {
            api_key: api_key.map(String::from),
            base_url,
            model: "bitnet".to_string(),
        }
    }

    #[tokio::test]
    async fn test_passthrough_without_api_key() {
        let model = OpenAiModel::new(settings("http://127.0.0.1:1".to_string(), None));

        let output = model.process("Summarize", "unchanged input").await.unwrap();
        assert_eq!(output, "unchanged input");
        assert_eq!(model.name(), "bitnet");
    }

    #[tokio::test]
    async fn test_sends_prompt_and_input() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::Json(serde_json::json!({
                "model": "bitnet",
                "messages": [
                    {"role": "system", "content": "Translate to French"},
                    {"role": "user", "content": "hello"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"bonjour"}}]}"#)
            .create_async()
            .await;

        let model = OpenAiModel::new(settings(server.url(), Some("sk-test")));
        let output = model.process("Translate to French", "hello").await.unwrap();

        assert_eq!(output, "bonjour");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_body("bad key")
            .create_async()
            .await;

        let model = OpenAiModel::new(settings(server.url(), Some("sk-wrong")));
        let err = model.process("p", "i").await.unwrap_err();

        match err {
            ModelError::Status { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "bad key");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let model = OpenAiModel::new(settings(server.url(), Some("sk-test")));
        let err = model.process("p", "i").await.unwrap_err();

        assert!(matches!(err, ModelError::EmptyResponse));
        assert_eq!(err.to_string(), "no response from model API");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let model = OpenAiModel::new(settings(server.url(), Some("sk-test")));
        let err = model.process("p", "i").await.unwrap_err();
        assert!(matches!(err, ModelError::Decode(_)));
    }
}
