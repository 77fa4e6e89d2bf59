// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::sync::Arc;

use super::tools::*;
use crate::traits::Tool;

/// Factory for creating local (in-process) tool instances
pub struct LocalToolFactory {
    base_path: Option<PathBuf>,
}

impl LocalToolFactory {
    /// `base_path` roots the `read` and `write` tools; `None` leaves paths as given.
    pub fn new(base_path: Option<PathBuf>) -> Self {
        Self { base_path }
    }

    /// Create a tool instance by its registry name
    ///
    /// - "math" -> MathTool
    /// - "rand" -> RandTool (seeded from the OS)
    /// - "read" -> ReadTool
    /// - "write" -> WriteTool
    pub fn create_tool(&self, name: &str) -> Result<Arc<dyn Tool>, String> {
        match name {
            "math" => Ok(Arc::new(MathTool::new())),
            "rand" => Ok(Arc::new(RandTool::new())),
            "read" => Ok(Arc::new(ReadTool::new(self.base_path.clone()))),
            "write" => Ok(Arc::new(WriteTool::new(self.base_path.clone()))),
            _ => Err(format!("Unknown local tool implementation: '{}'", name)),
        }
    }

    /// List all available local tool implementations
    pub fn list_available_implementations() -> Vec<&'static str> {
        vec!["math", "rand", "read", "write"]
    }

    /// Check if an implementation is available
    pub fn is_implementation_available(name: &str) -> bool {
        Self::list_available_implementations().contains(&name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_math_tool() {
        let factory = LocalToolFactory::new(None);
        let tool = factory.create_tool("math").unwrap();

        assert_eq!(tool.name(), "math");
        assert_eq!(tool.process("2 * 21").await.unwrap(), "42");
    }

    #[tokio::test]
    async fn test_file_tools_share_base_path() {
        let dir = tempfile::tempdir().unwrap();
        let factory = LocalToolFactory::new(Some(dir.path().to_path_buf()));

        let write = factory.create_tool("write").unwrap();
        write.process("note.txt hello there").await.unwrap();

        let read = factory.create_tool("read").unwrap();
        assert_eq!(read.process("note.txt").await.unwrap(), "hello there");
    }

    #[test]
    fn test_create_tool_unknown_impl() {
        let factory = LocalToolFactory::new(None);

        let result = factory.create_tool("abacus");
        assert!(result.is_err());
        let error_msg = result.err().unwrap();
        assert!(error_msg.contains("Unknown local tool implementation"));
    }

    #[test]
    fn test_every_listed_implementation_is_creatable() {
        let factory = LocalToolFactory::new(None);
        for name in LocalToolFactory::list_available_implementations() {
            let tool = factory.create_tool(name).unwrap();
            assert_eq!(tool.name(), name);
        }
    }

    #[test]
    fn test_is_implementation_available() {
        assert!(LocalToolFactory::is_implementation_available("math"));
        assert!(LocalToolFactory::is_implementation_available("write"));
        assert!(!LocalToolFactory::is_implementation_available("Math"));
    }
}
