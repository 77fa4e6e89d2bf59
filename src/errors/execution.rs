// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::DispatchError;
use serde::Deserialize;
use thiserror::Error;

/// Failure of a single input line.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A node dispatch failed in the ingress, egress or chain stage.
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Writing to the output or error stream failed.
    #[error("failed to write pipeline output: {0}")]
    Io(#[from] std::io::Error),

    /// Reading the next input line failed.
    #[error("failed to read input: {0}")]
    Input(#[source] std::io::Error),
}

/// How the driving loop reacts when an input line fails.
#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailureStrategy {
    /// Stop at the first failing line and return its error.
    #[default]
    FailFast,
    /// Log the failure and move on to the next line.
    ContinueOnError,
}
