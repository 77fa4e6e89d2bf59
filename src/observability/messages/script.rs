// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for script loading.
//!
//! Everything here except [`ScriptLoaded`] is `debug!`: parse rejects are
//! silent by contract and only show up with verbose logging.

use crate::node::NodeId;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A line was blank, a comment, or failed to parse.
pub struct LineSkipped {
    pub line_number: usize,
}

impl Display for LineSkipped {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Line {} skipped: not a directive", self.line_number)
    }
}

impl StructuredLog for LineSkipped {
    fn log(&self) {
        tracing::debug!(line_number = self.line_number, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("line_skipped", span_name = name, line_number = self.line_number)
    }
}

/// A node definition was added to the node map.
pub struct NodeDefined {
    pub line_number: usize,
    pub node_id: NodeId,
    pub kind: &'static str,
    /// An earlier definition with the same ID was overwritten.
    pub replaced: bool,
}

impl Display for NodeDefined {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Line {}: defined node {} ({})",
            self.line_number, self.node_id, self.kind
        )?;
        if self.replaced {
            write!(f, ", replacing earlier definition")?;
        }
        Ok(())
    }
}

impl StructuredLog for NodeDefined {
    fn log(&self) {
        tracing::debug!(
            line_number = self.line_number,
            node_id = self.node_id,
            kind = self.kind,
            replaced = self.replaced,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "node_defined",
            span_name = name,
            node_id = self.node_id,
            kind = self.kind,
        )
    }
}

/// A literal input line was queued.
pub struct InputQueued {
    pub line_number: usize,
    pub input_len: usize,
}

impl Display for InputQueued {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Line {}: queued literal input ({} bytes)",
            self.line_number, self.input_len
        )
    }
}

impl StructuredLog for InputQueued {
    fn log(&self) {
        tracing::debug!(
            line_number = self.line_number,
            input_len = self.input_len,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("input_queued", span_name = name, line_number = self.line_number)
    }
}

/// A run-wide default destination was declared.
///
/// ```
/// use gendo::observability::messages::script::DefaultRouteSet;
///
/// let msg = DefaultRouteSet { route: "error", node_id: 2 };
/// assert_eq!(msg.to_string(), "Default error node set to 2");
/// ```
pub struct DefaultRouteSet {
    pub route: &'static str,
    pub node_id: NodeId,
}

impl Display for DefaultRouteSet {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Default {} node set to {}", self.route, self.node_id)
    }
}

impl StructuredLog for DefaultRouteSet {
    fn log(&self) {
        tracing::debug!(route = self.route, node_id = self.node_id, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "default_route_set",
            span_name = name,
            route = self.route,
            node_id = self.node_id,
        )
    }
}

/// A route naming a source node was found in the script body.
pub struct RouteIgnored {
    pub line_number: usize,
    pub source: NodeId,
}

impl Display for RouteIgnored {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Line {}: route from node {} is not executed at load time",
            self.line_number, self.source
        )
    }
}

impl StructuredLog for RouteIgnored {
    fn log(&self) {
        tracing::debug!(
            line_number = self.line_number,
            source = self.source,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("route_ignored", span_name = name, source = self.source)
    }
}

/// Script loading finished.
pub struct ScriptLoaded {
    pub node_count: usize,
    pub input_count: usize,
    pub default_error: Option<NodeId>,
}

impl Display for ScriptLoaded {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Script loaded: {} nodes, {} queued inputs",
            self.node_count, self.input_count
        )?;
        if let Some(node_id) = self.default_error {
            write!(f, ", default error node {}", node_id)?;
        }
        Ok(())
    }
}

impl StructuredLog for ScriptLoaded {
    fn log(&self) {
        tracing::info!(
            node_count = self.node_count,
            input_count = self.input_count,
            default_error = ?self.default_error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "script_loaded",
            span_name = name,
            node_count = self.node_count,
            input_count = self.input_count,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_defined_mentions_replacement() {
        let msg = NodeDefined {
            line_number: 4,
            node_id: 3,
            kind: "tool",
            replaced: true,
        };
        assert_eq!(
            msg.to_string(),
            "Line 4: defined node 3 (tool), replacing earlier definition"
        );
    }

    #[test]
    fn test_script_loaded_summary() {
        let msg = ScriptLoaded {
            node_count: 3,
            input_count: 1,
            default_error: Some(2),
        };
        assert_eq!(
            msg.to_string(),
            "Script loaded: 3 nodes, 1 queued inputs, default error node 2"
        );
    }
}
