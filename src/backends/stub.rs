// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Mutex;

use crate::errors::{ModelError, ToolError};
use crate::traits::{LanguageModel, Tool};

/// A tool that echoes its input and records every call
pub struct CountingTool {
    calls: Mutex<Vec<String>>,
}

impl CountingTool {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Inputs seen so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Tool for CountingTool {
    async fn process(&self, input: &str) -> Result<String, ToolError> {
        self.calls.lock().unwrap().push(input.to_string());
        Ok(input.to_string())
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

/// A tool that always fails for testing failure scenarios
pub struct FailingTool {
    message: String,
}

impl FailingTool {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl Tool for FailingTool {
    async fn process(&self, _input: &str) -> Result<String, ToolError> {
        Err(ToolError::invalid_input(self.message.clone()))
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// A model that records `(prompt, input)` pairs and answers with a fixed prefix
pub struct RecordingModel {
    prefix: String,
    calls: Mutex<Vec<(String, String)>>,
}

impl RecordingModel {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LanguageModel for RecordingModel {
    async fn process(&self, prompt: &str, input: &str) -> Result<String, ModelError> {
        self.calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), input.to_string()));
        Ok(format!("{}{}", self.prefix, input))
    }

    fn name(&self) -> &str {
        "recording"
    }
}

/// A model that always fails
pub struct FailingModel;

#[async_trait::async_trait]
impl LanguageModel for FailingModel {
    async fn process(&self, _prompt: &str, _input: &str) -> Result<String, ModelError> {
        Err(ModelError::Status {
            status: 503,
            body: "model unavailable".to_string(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// A tool that appends a fixed suffix to its input
pub struct SuffixTool {
    suffix: &'static str,
}

impl SuffixTool {
    pub fn new(suffix: &'static str) -> Self {
        Self { suffix }
    }
}

#[async_trait::async_trait]
impl Tool for SuffixTool {
    async fn process(&self, input: &str) -> Result<String, ToolError> {
        Ok(format!("{}{}", input, self.suffix))
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}
