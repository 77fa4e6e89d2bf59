// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Line classifier for the script language.
//!
//! Every raw line, whether it comes from a script file or from piped stdin, is
//! classified into exactly one [`Directive`]:
//!
//! * `NodeDefinition` - the line contains `:` and no `<`
//! * `Route` - any other line that survives routing-marker parsing
//! * `Skip` - blank lines, `#` comments and every line that fails to parse
//!
//! The `:`/`<` test is a syntactic heuristic, not a grammar. A prompt that
//! contains `<` is classified as a route and will most likely be dropped.
//!
//! Parsing never returns an error. A malformed integer where one is required
//! drops the whole line, which lets scripts carry free-form annotations.
//!
//! ```
//! use gendo::parser::{parse_line, Directive};
//!
//! match parse_line("3 : tool math") {
//!     Directive::NodeDefinition(node) => assert_eq!(node.tool_name(), Some("math")),
//!     other => panic!("unexpected {:?}", other),
//! }
//! assert_eq!(parse_line("# comment"), Directive::Skip);
//! ```

mod node_definition;
mod route;

use crate::node::{Node, NodeId};

pub use node_definition::parse_node_definition;
pub use route::parse_route;

pub const COMMENT_MARKER: char = '#';
pub const DEFINITION_MARKER: char = ':';
pub const ERROR_MARKER: char = '!';
pub const OUTPUT_MARKER: char = '<';
pub const TOOL_PREFIX: &str = "tool";

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    NodeDefinition(Node),
    Route(RouteDirective),
    Skip,
}

/// A routing instruction: `[err !] [out <] [source input...]`.
///
/// `source == None` marks a default-setting directive, one made only of
/// routing tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteDirective {
    pub error_dest: Option<NodeId>,
    pub output_dest: Option<NodeId>,
    pub source: Option<NodeId>,
    /// Literal input text after the source ID, inner whitespace preserved.
    pub input: String,
}

impl RouteDirective {
    pub fn is_default_setting(&self) -> bool {
        self.source.is_none()
    }
}

/// Classify a single raw line.
pub fn parse_line(raw: &str) -> Directive {
    let line = raw.trim();
    if line.is_empty() || line.starts_with(COMMENT_MARKER) {
        return Directive::Skip;
    }

    let parsed = if line.contains(DEFINITION_MARKER) && !line.contains(OUTPUT_MARKER) {
        parse_node_definition(line).map(Directive::NodeDefinition)
    } else {
        parse_route(line).map(Directive::Route)
    };

    parsed.unwrap_or(Directive::Skip)
}
