// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::time::Instant;
use tracing::Instrument;

use crate::config::consts::DEFAULT_MODEL_KEY;
use crate::config::{ModelRegistry, ToolRegistry};
use crate::errors::DispatchError;
use crate::node::{Node, NodeKind};
use crate::observability::messages::dispatch::*;
use crate::observability::messages::StructuredLog;

/// Runs a value through a single node.
///
/// Tool nodes resolve their tool by name, prompt nodes ask the model
/// registered under [`DEFAULT_MODEL_KEY`], and every other node returns its
/// input unchanged.
#[derive(Debug, Clone, Default)]
pub struct NodeDispatcher {
    tools: ToolRegistry,
    models: ModelRegistry,
}

impl NodeDispatcher {
    pub fn new(tools: ToolRegistry, models: ModelRegistry) -> Self {
        Self { tools, models }
    }

    pub async fn dispatch(&self, node: &Node, input: &str) -> Result<String, DispatchError> {
        let started = NodeDispatchStarted {
            node_id: node.id,
            kind: node.kind.tag(),
            input,
        };
        let span = started.span("node_dispatch");
        started.log();

        let start_time = Instant::now();
        let result = self.invoke(node, input).instrument(span).await;

        match &result {
            Ok(output) => NodeDispatchCompleted {
                node_id: node.id,
                output,
                duration: start_time.elapsed(),
            }
            .log(),
            Err(error) => NodeDispatchFailed {
                node_id: node.id,
                error,
            }
            .log(),
        }

        result
    }

    async fn invoke(&self, node: &Node, input: &str) -> Result<String, DispatchError> {
        match &node.kind {
            NodeKind::Tool(name) => {
                let tool = self
                    .tools
                    .get(name)
                    .ok_or_else(|| DispatchError::UnknownTool { name: name.clone() })?;
                tool.process(input)
                    .await
                    .map_err(|source| DispatchError::ToolFailed {
                        name: name.clone(),
                        source,
                    })
            }
            NodeKind::In | NodeKind::Out | NodeKind::Err => Ok(input.to_string()),
            NodeKind::Default {
                prompt: Some(prompt),
            } if !prompt.is_empty() => {
                let model = self
                    .models
                    .get(DEFAULT_MODEL_KEY)
                    .ok_or(DispatchError::NoModelAvailable)?;
                model
                    .process(prompt, input)
                    .await
                    .map_err(|source| DispatchError::ModelFailed {
                        model: DEFAULT_MODEL_KEY.to_string(),
                        source,
                    })
            }
            NodeKind::Default { .. } => Ok(input.to_string()),
        }
    }
}
