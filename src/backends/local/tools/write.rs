// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::path::PathBuf;

use super::rooted;
use crate::errors::ToolError;
use crate::traits::Tool;

/// Write tool - input is `<path> <content>`, split on the first space.
pub struct WriteTool {
    base_path: Option<PathBuf>,
}

impl WriteTool {
    pub fn new(base_path: Option<PathBuf>) -> Self {
        Self { base_path }
    }
}

#[async_trait]
impl Tool for WriteTool {
    async fn process(&self, input: &str) -> Result<String, ToolError> {
        let (path, content) = input.split_once(' ').ok_or_else(|| {
            ToolError::invalid_input("invalid input format: expected 'path content'")
        })?;

        let path = rooted(self.base_path.as_deref(), path);
        tokio::fs::write(&path, content)
            .await
            .map_err(ToolError::Write)?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote file");
        Ok(format!("Successfully wrote to {}", path.display()))
    }

    fn name(&self) -> &'static str {
        "write"
    }
}
