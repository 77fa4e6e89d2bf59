// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for node dispatch.

use crate::node::NodeId;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A value is being dispatched through a node.
///
/// # Log Level
/// `debug!`
pub struct NodeDispatchStarted<'a> {
    pub node_id: NodeId,
    pub kind: &'static str,
    pub input: &'a str,
}

impl Display for NodeDispatchStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processing node {} ({}) with input: {:?}",
            self.node_id, self.kind, self.input
        )
    }
}

impl StructuredLog for NodeDispatchStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            node_id = self.node_id,
            kind = self.kind,
            input_len = self.input.len(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "node_dispatch",
            span_name = name,
            node_id = self.node_id,
            kind = self.kind,
        )
    }
}

/// A node returned its output.
///
/// # Log Level
/// `debug!`
pub struct NodeDispatchCompleted<'a> {
    pub node_id: NodeId,
    pub output: &'a str,
    pub duration: std::time::Duration,
}

impl Display for NodeDispatchCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Node {} returned {:?} in {:?}",
            self.node_id, self.output, self.duration
        )
    }
}

impl StructuredLog for NodeDispatchCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            node_id = self.node_id,
            output_len = self.output.len(),
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("node_dispatch_completed", span_name = name, node_id = self.node_id)
    }
}

/// A node dispatch failed. The executor decides how loudly to report it, so
/// this stays at `debug!`.
pub struct NodeDispatchFailed<'a> {
    pub node_id: NodeId,
    pub error: &'a dyn std::error::Error,
}

impl Display for NodeDispatchFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Node {} failed: {}", self.node_id, self.error)
    }
}

impl StructuredLog for NodeDispatchFailed<'_> {
    fn log(&self) {
        tracing::debug!(node_id = self.node_id, error = %self.error, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("node_dispatch_failed", span_name = name, node_id = self.node_id)
    }
}
