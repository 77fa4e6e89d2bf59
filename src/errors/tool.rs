// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Failures reported by tool implementations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    /// The input does not fit what the tool expects.
    #[error("{0}")]
    InvalidInput(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("failed to read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write file: {0}")]
    Write(#[source] std::io::Error),
}

impl ToolError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ToolError::InvalidInput(message.into())
    }
}
