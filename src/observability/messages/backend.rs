// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for tool and model backends.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A tool was added to the tool registry.
pub struct ToolRegistered<'a> {
    pub name: &'a str,
}

impl Display for ToolRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Registered tool '{}'", self.name)
    }
}

impl StructuredLog for ToolRegistered<'_> {
    fn log(&self) {
        tracing::debug!(tool = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("tool_registered", span_name = name, tool = self.name)
    }
}

/// A model client was added to the model registry.
///
/// ```
/// use gendo::observability::messages::backend::ModelRegistered;
///
/// let msg = ModelRegistered {
///     key: "openai",
///     model: "bitnet",
///     base_url: "http://localhost:9100/v1",
///     authenticated: false,
/// };
/// assert_eq!(
///     msg.to_string(),
///     "Registered model 'openai' (bitnet at http://localhost:9100/v1, no API key: passthrough)"
/// );
/// ```
pub struct ModelRegistered<'a> {
    pub key: &'a str,
    pub model: &'a str,
    pub base_url: &'a str,
    pub authenticated: bool,
}

impl Display for ModelRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered model '{}' ({} at {}",
            self.key, self.model, self.base_url
        )?;
        if !self.authenticated {
            write!(f, ", no API key: passthrough")?;
        }
        write!(f, ")")
    }
}

impl StructuredLog for ModelRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            key = self.key,
            model = self.model,
            base_url = self.base_url,
            authenticated = self.authenticated,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("model_registered", span_name = name, key = self.key)
    }
}

/// A chat completion request is about to be sent.
pub struct ModelRequestSent<'a> {
    pub url: &'a str,
    pub model: &'a str,
    pub prompt_len: usize,
    pub input_len: usize,
}

impl Display for ModelRequestSent<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Sending chat completion request to {} (model {})", self.url, self.model)
    }
}

impl StructuredLog for ModelRequestSent<'_> {
    fn log(&self) {
        tracing::debug!(
            url = self.url,
            model = self.model,
            prompt_len = self.prompt_len,
            input_len = self.input_len,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "model_request",
            span_name = name,
            url = self.url,
            model = self.model,
        )
    }
}

/// The model API answered with a non-success status.
///
/// # Log Level
/// `warn!`
pub struct ModelRequestRejected<'a> {
    pub model: &'a str,
    pub status: u16,
    pub body: &'a str,
}

impl Display for ModelRequestRejected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Model API returned status {} for model {}",
            self.status, self.model
        )
    }
}

impl StructuredLog for ModelRequestRejected<'_> {
    fn log(&self) {
        tracing::warn!(
            model = self.model,
            status = self.status,
            body = self.body,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("model_rejected", span_name = name, status = self.status)
    }
}
