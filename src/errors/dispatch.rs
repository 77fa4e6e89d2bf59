// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while dispatching a value through a node.
//!
//! Every variant names the tool or model involved, so the message that reaches
//! an error node or the error stream is self-describing.

use super::{ModelError, ToolError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("unknown tool: {name}")]
    UnknownTool { name: String },

    #[error("tool \"{name}\" failed: {source}")]
    ToolFailed {
        name: String,
        #[source]
        source: ToolError,
    },

    #[error("no model available")]
    NoModelAvailable,

    #[error("model \"{model}\" failed: {source}")]
    ModelFailed {
        model: String,
        #[source]
        source: ModelError,
    },
}
