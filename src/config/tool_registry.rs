// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::observability::messages::backend::ToolRegistered;
use crate::observability::messages::StructuredLog;
use crate::traits::Tool;
use std::collections::HashMap;
use std::sync::Arc;

/// A registry mapping tool names to their implementations.
///
/// Names are case-sensitive and unique; registering a name twice replaces the
/// earlier tool. Tools are held as `Arc<dyn Tool>` so the registry can be
/// cloned cheaply and shared with the executor.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use gendo::config::ToolRegistry;
/// use gendo::backends::local::MathTool;
///
/// let mut tools = ToolRegistry::new();
/// tools.insert("math".to_string(), Arc::new(MathTool::new()));
///
/// assert!(tools.contains_key("math"));
/// assert!(tools.get("Math").is_none());
/// ```
#[derive(Clone, Default)]
pub struct ToolRegistry(pub HashMap<String, Arc<dyn Tool>>);

impl ToolRegistry {
    /// Create a new empty tool registry
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Register a tool under `name`
    pub fn insert(&mut self, name: String, tool: Arc<dyn Tool>) {
        ToolRegistered { name: &name }.log();
        self.0.insert(name, tool);
    }

    /// Look up a tool by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Tool>> {
        self.0.get(name)
    }

    /// Check if a tool is registered
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Get all registered tool names
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for ToolRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolRegistry")
            .field("tool_count", &self.0.len())
            .field("tool_names", &self.0.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl From<HashMap<String, Arc<dyn Tool>>> for ToolRegistry {
    fn from(map: HashMap<String, Arc<dyn Tool>>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::stub::{CountingTool, FailingTool};

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut tools = ToolRegistry::new();
        tools.insert("math".to_string(), Arc::new(CountingTool::new()));

        assert!(tools.get("math").is_some());
        assert!(tools.get("Math").is_none());
        assert!(tools.get("unknown").is_none());
        assert_eq!(tools.len(), 1);
    }

    #[test]
    fn test_insert_replaces_same_name() {
        let mut tools = ToolRegistry::new();
        tools.insert("math".to_string(), Arc::new(CountingTool::new()));
        tools.insert("math".to_string(), Arc::new(FailingTool::new("broken")));

        assert_eq!(tools.len(), 1);
        assert_eq!(tools.get("math").map(|t| t.name()), Some("failing"));
    }

    #[test]
    fn test_debug_lists_names_only() {
        let mut tools = ToolRegistry::new();
        tools.insert("rand".to_string(), Arc::new(CountingTool::new()));

        let rendered = format!("{:?}", tools);
        assert!(rendered.contains("tool_count: 1"));
        assert!(rendered.contains("\"rand\""));
    }
}
