// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for pipeline execution events.
//!
//! This module contains message types for logging events related to:
//! * The start and end of one input line's run
//! * Failures in the ingress, egress and chain stages
//! * Routing of a chain failure to an error node
//! * The summary of a whole run

use crate::node::NodeId;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Processing of one input line started.
///
/// # Log Level
/// `debug!` - Per-line detail
///
/// # Example
/// ```
/// use gendo::observability::messages::engine::LineStarted;
/// use gendo::observability::messages::StructuredLog;
///
/// let msg = LineStarted {
///     input: "What is 2 + 2?",
///     default_output: 1,
///     default_error: Some(2),
/// };
///
/// let span = msg.span("run_line");
/// let _guard = span.enter();
/// msg.log();
/// ```
pub struct LineStarted<'a> {
    pub input: &'a str,
    pub default_output: NodeId,
    pub default_error: Option<NodeId>,
}

impl Display for LineStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Processing input line: {:?}", self.input)
    }
}

impl StructuredLog for LineStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            input_len = self.input.len(),
            default_output = self.default_output,
            default_error = ?self.default_error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "line",
            span_name = name,
            input_len = self.input.len(),
        )
    }
}

/// Processing of one input line completed and its output was emitted.
///
/// # Log Level
/// `debug!` - Per-line detail
pub struct LineCompleted<'a> {
    pub output: &'a str,
    pub duration: std::time::Duration,
}

impl Display for LineCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Final output: {:?} (in {:?})",
            self.output, self.duration
        )
    }
}

impl StructuredLog for LineCompleted<'_> {
    fn log(&self) {
        tracing::debug!(
            output_len = self.output.len(),
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "line_completed",
            span_name = name,
            output_len = self.output.len(),
        )
    }
}

/// A pipeline stage failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use gendo::observability::messages::engine::StageFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "unknown tool: abacus");
/// let msg = StageFailed {
///     stage: "chain",
///     node_id: 3,
///     error: &error,
/// };
///
/// assert_eq!(msg.to_string(), "chain stage failed at node 3: unknown tool: abacus");
/// ```
pub struct StageFailed<'a> {
    pub stage: &'a str,
    pub node_id: NodeId,
    pub error: &'a dyn std::error::Error,
}

impl Display for StageFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} stage failed at node {}: {}",
            self.stage, self.node_id, self.error
        )
    }
}

impl StructuredLog for StageFailed<'_> {
    fn log(&self) {
        tracing::error!(
            stage = self.stage,
            node_id = self.node_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "stage_failed",
            span_name = name,
            stage = self.stage,
            node_id = self.node_id,
        )
    }
}

/// A chain failure is being rendered through an error node.
///
/// # Log Level
/// `debug!` - Routing detail
pub struct ErrorRouted<'a> {
    /// `"err node"` or `"default error node"`.
    pub via: &'a str,
    pub error_node: NodeId,
}

impl Display for ErrorRouted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Processing error through {} {}",
            self.via, self.error_node
        )
    }
}

impl StructuredLog for ErrorRouted<'_> {
    fn log(&self) {
        tracing::debug!(via = self.via, error_node = self.error_node, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "error_routed",
            span_name = name,
            error_node = self.error_node,
        )
    }
}

/// The error node itself failed; the raw message is written instead.
///
/// # Log Level
/// `warn!` - Degraded behavior
pub struct ErrorRoutingFailed<'a> {
    pub error_node: NodeId,
    pub error: &'a dyn std::error::Error,
}

impl Display for ErrorRoutingFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Error node {} failed while rendering an error: {}",
            self.error_node, self.error
        )
    }
}

impl StructuredLog for ErrorRoutingFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            error_node = self.error_node,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "error_routing_failed",
            span_name = name,
            error_node = self.error_node,
        )
    }
}

/// The error stream rejected the report of a failed line.
///
/// # Log Level
/// `warn!` - Degraded behavior
pub struct ErrorReportFailed<'a> {
    pub node_id: NodeId,
    pub error: &'a std::io::Error,
}

impl Display for ErrorReportFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Could not report the failure of node {}: {}",
            self.node_id, self.error
        )
    }
}

impl StructuredLog for ErrorReportFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            node_id = self.node_id,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "error_report_failed",
            span_name = name,
            node_id = self.node_id,
        )
    }
}

/// An input line failed and the run continues with the next one.
///
/// # Log Level
/// `warn!` - Degraded behavior
pub struct LineFailed<'a> {
    pub line_number: usize,
    pub error: &'a dyn std::error::Error,
}

impl Display for LineFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Input line {} failed, continuing: {}",
            self.line_number, self.error
        )
    }
}

impl StructuredLog for LineFailed<'_> {
    fn log(&self) {
        tracing::warn!(
            line_number = self.line_number,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("line_failed", span_name = name, line_number = self.line_number)
    }
}

/// All input lines of a run have been processed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct RunCompleted<'a> {
    /// `"stdin"` or `"script"`.
    pub source: &'a str,
    pub processed: usize,
    pub failed: usize,
    pub duration: std::time::Duration,
}

impl Display for RunCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Run over {} input completed: {} lines processed, {} failed in {:?}",
            self.source, self.processed, self.failed, self.duration
        )
    }
}

impl StructuredLog for RunCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            source = self.source,
            processed = self.processed,
            failed = self.failed,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "run_completed",
            span_name = name,
            source = self.source,
            processed = self.processed,
        )
    }
}
