// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{DEFINITION_MARKER, TOOL_PREFIX};
use crate::node::{Node, NodeId, NodeKind};

/// Parse a `<id> : <body>` line. Returns `None` when the ID is not an integer.
///
/// The body is classified in priority order:
/// 1. exactly `in`, `out` or `err`
/// 2. `tool` followed by whitespace, the tool name being the rest of the body
/// 3. a whitespace separated list of integer references
/// 4. anything else is a prompt, taken as the whole body
///
/// When a non-integer token follows some integers the references read so far
/// are kept and the whole body still becomes the prompt.
pub fn parse_node_definition(line: &str) -> Option<Node> {
    let (id, body) = line.split_once(DEFINITION_MARKER)?;
    let id = id.trim().parse::<NodeId>().ok()?;
    let body = body.trim();

    match body {
        "in" => return Some(Node::new(id, NodeKind::In)),
        "out" => return Some(Node::new(id, NodeKind::Out)),
        "err" => return Some(Node::new(id, NodeKind::Err)),
        _ => {}
    }

    if let Some(name) = body
        .strip_prefix(TOOL_PREFIX)
        .filter(|rest| rest.starts_with(char::is_whitespace))
    {
        return Some(Node::tool(id, name.trim()));
    }

    let mut refs = Vec::new();
    for token in body.split_whitespace() {
        match token.parse::<NodeId>() {
            Ok(reference) => refs.push(reference),
            Err(_) => {
                return Some(Node {
                    id,
                    refs,
                    kind: NodeKind::Default {
                        prompt: Some(body.to_string()),
                    },
                });
            }
        }
    }

    Some(Node {
        id,
        refs,
        kind: NodeKind::Default { prompt: None },
    })
}
