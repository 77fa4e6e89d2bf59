// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::path::PathBuf;

use super::rooted;
use crate::errors::ToolError;
use crate::traits::Tool;

/// Read tool - returns the contents of the file named by the input.
pub struct ReadTool {
    base_path: Option<PathBuf>,
}

impl ReadTool {
    pub fn new(base_path: Option<PathBuf>) -> Self {
        Self { base_path }
    }
}

#[async_trait]
impl Tool for ReadTool {
    async fn process(&self, input: &str) -> Result<String, ToolError> {
        if input.is_empty() {
            return Err(ToolError::invalid_input("no file path provided"));
        }

        let path = rooted(self.base_path.as_deref(), input);
        let content = tokio::fs::read(&path).await.map_err(ToolError::Read)?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Read file");
        Ok(String::from_utf8_lossy(&content).into_owned())
    }

    fn name(&self) -> &'static str {
        "read"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[tokio::test]
    async fn test_reads_file_under_base_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("test.txt"), "test content").unwrap();

        let tool = ReadTool::new(Some(dir.path().to_path_buf()));
        assert_eq!(tool.process("test.txt").await.unwrap(), "test content");
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let tool = ReadTool::new(Some(dir.path().to_path_buf()));

        let err = tool.process("nonexistent.txt").await.unwrap_err();
        assert!(matches!(err, ToolError::Read(_)));
        assert!(err.to_string().starts_with("failed to read file: "));

        assert!(tool.process("file1.txt file2.txt").await.is_err());
    }

    #[tokio::test]
    async fn test_empty_path() {
        let tool = ReadTool::new(None);
        let err = tool.process("").await.unwrap_err();
        assert_eq!(err.to_string(), "no file path provided");
    }

    #[test]
    fn test_rooted_paths() {
        assert_eq!(rooted(None, "a/b.txt"), PathBuf::from("a/b.txt"));
        assert_eq!(rooted(Some(Path::new("")), "a.txt"), PathBuf::from("a.txt"));
        assert_eq!(rooted(Some(Path::new("/srv")), "a.txt"), PathBuf::from("/srv/a.txt"));
    }
}
