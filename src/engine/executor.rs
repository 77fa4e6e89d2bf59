// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Per-line pipeline execution.
//!
//! Every input line walks the same stages, in order:
//!
//! 1. **Ingress**: the first `in` node, if any.
//! 2. **Egress**: the first `out` node, if any.
//! 3. **Chain**: nodes 3, 2 and 1, each only if defined.
//! 4. **Emit**: the final value and a newline go to the output stream.
//!
//! An ingress or egress failure writes `Error: <message>` to the error
//! stream and ends the line. A chain failure is rendered through the `err`
//! node, or else the default error node, and also ends the line; with neither
//! defined nothing is written.
//!
//! Lines run one at a time. The node map and routing defaults are fixed once
//! the executor is built.

use std::io::Write;
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::Instrument;

use crate::config::consts::REFERENCE_PIPELINE_ORDER;
use crate::errors::{DispatchError, FailureStrategy, PipelineError};
use crate::observability::messages::engine::*;
use crate::observability::messages::StructuredLog;
use crate::script::{NodeMap, RoutingDefaults};

use super::NodeDispatcher;

/// Counts of a finished run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
}

impl RunSummary {
    fn record(
        &mut self,
        result: Result<(), PipelineError>,
        strategy: FailureStrategy,
    ) -> Result<(), PipelineError> {
        self.processed += 1;
        let Err(error) = result else {
            return Ok(());
        };

        self.failed += 1;
        match strategy {
            FailureStrategy::FailFast => Err(error),
            FailureStrategy::ContinueOnError => {
                LineFailed {
                    line_number: self.processed,
                    error: &error,
                }
                .log();
                Ok(())
            }
        }
    }
}

pub struct PipelineExecutor {
    nodes: NodeMap,
    defaults: RoutingDefaults,
    dispatcher: NodeDispatcher,
}

impl PipelineExecutor {
    pub fn new(nodes: NodeMap, defaults: RoutingDefaults, dispatcher: NodeDispatcher) -> Self {
        Self {
            nodes,
            defaults,
            dispatcher,
        }
    }

    /// Run one input line through the pipeline.
    ///
    /// Returns the failure that ended the line, after it has been reported.
    pub async fn run_line<O, E>(
        &self,
        input: &str,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<(), PipelineError>
    where
        O: Write,
        E: Write,
    {
        let started = LineStarted {
            input,
            default_output: self.defaults.output,
            default_error: self.defaults.error,
        };
        let span = started.span("run_line");
        started.log();

        self.walk(input, stdout, stderr).instrument(span).await
    }

    async fn walk<O, E>(
        &self,
        input: &str,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<(), PipelineError>
    where
        O: Write,
        E: Write,
    {
        let start_time = Instant::now();
        let mut value = input.to_string();

        let edges = [
            ("ingress", self.nodes.input_node()),
            ("egress", self.nodes.output_node()),
        ];
        for (stage, node) in edges {
            let Some(node) = node else { continue };
            match self.dispatcher.dispatch(node, &value).await {
                Ok(output) => value = output,
                Err(error) => {
                    StageFailed {
                        stage,
                        node_id: node.id,
                        error: &error,
                    }
                    .log();
                    if let Err(io_error) = writeln!(stderr, "Error: {}", error) {
                        ErrorReportFailed {
                            node_id: node.id,
                            error: &io_error,
                        }
                        .log();
                    }
                    return Err(error.into());
                }
            }
        }

        for id in REFERENCE_PIPELINE_ORDER {
            let Some(node) = self.nodes.get(id) else { continue };
            match self.dispatcher.dispatch(node, &value).await {
                Ok(output) => value = output,
                Err(error) => {
                    StageFailed {
                        stage: "chain",
                        node_id: node.id,
                        error: &error,
                    }
                    .log();
                    if let Err(io_error) = self.route_error(&error, stderr).await {
                        ErrorReportFailed {
                            node_id: node.id,
                            error: &io_error,
                        }
                        .log();
                    }
                    return Err(error.into());
                }
            }
        }

        writeln!(stdout, "{}", value)?;
        LineCompleted {
            output: &value,
            duration: start_time.elapsed(),
        }
        .log();
        Ok(())
    }

    /// Render a chain failure through the `err` node, else the default error node.
    async fn route_error<E: Write>(
        &self,
        error: &DispatchError,
        stderr: &mut E,
    ) -> std::io::Result<()> {
        let target = match self.nodes.error_node() {
            Some(node) => Some((node, "err node")),
            None => self
                .defaults
                .error
                .and_then(|id| self.nodes.get(id))
                .map(|node| (node, "default error node")),
        };
        let Some((node, via)) = target else {
            return Ok(());
        };

        ErrorRouted {
            via,
            error_node: node.id,
        }
        .log();

        let message = error.to_string();
        match self.dispatcher.dispatch(node, &message).await {
            Ok(rendered) => writeln!(stderr, "{}", rendered),
            Err(secondary) => {
                ErrorRoutingFailed {
                    error_node: node.id,
                    error: &secondary,
                }
                .log();
                writeln!(stderr, "Error: {}", message)
            }
        }
    }

    /// Run a list of input lines, such as the ones queued by a script.
    pub async fn run_inputs<S, O, E>(
        &self,
        inputs: &[S],
        strategy: FailureStrategy,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<RunSummary, PipelineError>
    where
        S: AsRef<str>,
        O: Write,
        E: Write,
    {
        let start_time = Instant::now();
        let mut summary = RunSummary::default();

        for input in inputs {
            let result = self.run_line(input.as_ref(), stdout, stderr).await;
            summary.record(result, strategy)?;
        }

        Self::completed("script", summary, start_time);
        Ok(summary)
    }

    /// Run every line read from `reader` until end of input.
    pub async fn run_reader<R, O, E>(
        &self,
        reader: R,
        strategy: FailureStrategy,
        stdout: &mut O,
        stderr: &mut E,
    ) -> Result<RunSummary, PipelineError>
    where
        R: AsyncBufRead + Unpin,
        O: Write,
        E: Write,
    {
        let start_time = Instant::now();
        let mut summary = RunSummary::default();
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await.map_err(PipelineError::Input)? {
            let result = self.run_line(&line, stdout, stderr).await;
            summary.record(result, strategy)?;
        }

        Self::completed("stdin", summary, start_time);
        Ok(summary)
    }

    fn completed(source: &str, summary: RunSummary, start_time: Instant) {
        RunCompleted {
            source,
            processed: summary.processed,
            failed: summary.failed,
            duration: start_time.elapsed(),
        }
        .log();
    }
}
