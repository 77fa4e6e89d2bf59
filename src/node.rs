// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Node data model shared by the parser, the script loader and the executor.

use std::fmt;

/// Identifier of a node within a script.
pub type NodeId = i64;

/// What a node does when the executor dispatches a value through it.
///
/// A node is tool-typed exactly when it names a tool, so the tool name lives
/// inside the variant. `Default` nodes call the language model when they carry
/// a prompt and pass their input through otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Tool(String),
    In,
    Out,
    Err,
    Default { prompt: Option<String> },
}

impl NodeKind {
    /// The type tag without its payload, for logging.
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Tool(_) => "tool",
            NodeKind::In => "in",
            NodeKind::Out => "out",
            NodeKind::Err => "err",
            NodeKind::Default { .. } => "default",
        }
    }
}

/// A node definition as declared by a `<id> : <body>` script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    /// Declared callees. Descriptive only; the executor never follows them.
    pub refs: Vec<NodeId>,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: NodeId, kind: NodeKind) -> Self {
        Self {
            id,
            refs: Vec::new(),
            kind,
        }
    }

    /// A node with neither prompt nor tool: returns its input unchanged.
    pub fn passthrough(id: NodeId) -> Self {
        Self::new(id, NodeKind::Default { prompt: None })
    }

    pub fn tool(id: NodeId, name: impl Into<String>) -> Self {
        Self::new(id, NodeKind::Tool(name.into()))
    }

    pub fn prompt(id: NodeId, prompt: impl Into<String>) -> Self {
        Self::new(
            id,
            NodeKind::Default {
                prompt: Some(prompt.into()),
            },
        )
    }

    pub fn prompt_text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Default { prompt } => prompt.as_deref(),
            _ => None,
        }
    }

    pub fn tool_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Tool(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node {} ({})", self.id, self.kind.tag())
    }
}
