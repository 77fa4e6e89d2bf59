// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Failures reported by language model backends.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to call model API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("model API returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("failed to decode model response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no response from model API")]
    EmptyResponse,
}
