// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Script loading: turns the ordered lines of a script into the node map, the
//! queue of literal inputs and the run-wide routing defaults.
//!
//! Only three directive shapes change load-time state:
//!
//! * a node definition is inserted into the [`NodeMap`]
//! * a route that names no node (`0 some input`) queues its input text
//! * a route with source `0` that names an error or output destination
//!   (`2 !`, `3 <`) updates the [`RoutingDefaults`]
//!
//! Routes that name a real source node are accepted by the parser but do not
//! affect loading.

mod node_map;

pub use node_map::NodeMap;

use crate::config::consts::DEFAULT_OUTPUT_NODE;
use crate::errors::ScriptError;
use crate::node::NodeId;
use crate::observability::messages::script::*;
use crate::observability::messages::StructuredLog;
use crate::parser::{parse_line, Directive, RouteDirective};
use std::path::Path;

/// Default destinations declared by bare routing lines.
///
/// Written only while a script loads and read-only afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutingDefaults {
    pub output: NodeId,
    pub error: Option<NodeId>,
}

impl Default for RoutingDefaults {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT_NODE,
            error: None,
        }
    }
}

/// A loaded script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub nodes: NodeMap,
    pub inputs: Vec<String>,
    pub defaults: RoutingDefaults,
}

impl Script {
    /// Load a script from its lines, in file order.
    pub fn load<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut script = Script::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;
            match parse_line(line.as_ref()) {
                Directive::Skip => LineSkipped { line_number }.log(),
                Directive::NodeDefinition(node) => {
                    let node_id = node.id;
                    let kind = node.kind.tag();
                    let replaced = script.nodes.insert(node).is_some();
                    NodeDefined {
                        line_number,
                        node_id,
                        kind,
                        replaced,
                    }
                    .log();
                }
                Directive::Route(route) => script.apply_route(line_number, route),
            }
        }

        ScriptLoaded {
            node_count: script.nodes.len(),
            input_count: script.inputs.len(),
            default_error: script.defaults.error,
        }
        .log();

        script
    }

    /// Load a script from a string holding the whole file.
    pub fn parse(text: &str) -> Self {
        Self::load(text.lines())
    }

    /// Read and load a script file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    fn apply_route(&mut self, line_number: usize, route: RouteDirective) {
        let source = route.source.unwrap_or(0);
        let output = route.output_dest.unwrap_or(0);
        let error = route.error_dest.unwrap_or(0);

        if source != 0 {
            RouteIgnored {
                line_number,
                source,
            }
            .log();
            return;
        }

        if output == 0 && error == 0 {
            InputQueued {
                line_number,
                input_len: route.input.len(),
            }
            .log();
            self.inputs.push(route.input);
            return;
        }

        if error > 0 {
            self.defaults.error = Some(error);
            DefaultRouteSet {
                route: "error",
                node_id: error,
            }
            .log();
        }
        if output > 0 {
            self.defaults.output = output;
            DefaultRouteSet {
                route: "output",
                node_id: output,
            }
            .log();
        }
    }
}
