// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use super::{RouteDirective, ERROR_MARKER, OUTPUT_MARKER};
use crate::node::NodeId;

/// Parse a routing line: `[err !] [out <] [source input...]`.
///
/// Marker prefixes that are not integers are ignored but still consumed. A
/// line with nothing left after the markers is a default-setting directive.
/// Otherwise the first token must be the integer source ID, or the line is
/// rejected.
pub fn parse_route(line: &str) -> Option<RouteDirective> {
    let mut route = RouteDirective::default();
    let mut rest = line.trim();

    if let Some((dest, tail)) = rest.split_once(ERROR_MARKER) {
        route.error_dest = dest.trim().parse::<NodeId>().ok();
        rest = tail.trim();
    }

    if let Some((dest, tail)) = rest.split_once(OUTPUT_MARKER) {
        route.output_dest = dest.trim().parse::<NodeId>().ok();
        rest = tail.trim();
    }

    if rest.is_empty() {
        return Some(route);
    }

    let (source, input) = match rest.split_once(char::is_whitespace) {
        Some((source, input)) => (source, input.trim_start()),
        None => (rest, ""),
    };

    route.source = Some(source.parse::<NodeId>().ok()?);
    route.input = input.to_string();
    Some(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(
        error_dest: Option<NodeId>,
        output_dest: Option<NodeId>,
        source: Option<NodeId>,
        input: &str,
    ) -> RouteDirective {
        RouteDirective {
            error_dest,
            output_dest,
            source,
            input: input.to_string(),
        }
    }

    #[test]
    fn test_route_shapes() {
        let cases = vec![
            ("3 < 0", route(None, Some(3), Some(0), "")),
            (
                "2 ! 3 < 0 calculate 1 + 1",
                route(Some(2), Some(3), Some(0), "calculate 1 + 1"),
            ),
            ("2 !", route(Some(2), None, None, "")),
            ("3 <", route(None, Some(3), None, "")),
            ("2 ! 3 <", route(Some(2), Some(3), None, "")),
            ("0 What is 1 + 1?", route(None, None, Some(0), "What is 1 + 1?")),
            ("5", route(None, None, Some(5), "")),
        ];

        for (line, expected) in cases {
            assert_eq!(parse_route(line), Some(expected), "line {:?}", line);
        }
    }

    #[test]
    fn test_input_keeps_inner_whitespace() {
        let parsed = parse_route("0   spaced    out  text").unwrap();
        assert_eq!(parsed.source, Some(0));
        assert_eq!(parsed.input, "spaced    out  text");

        let parsed = parse_route("0\tTabbed\tinput").unwrap();
        assert_eq!(parsed.input, "Tabbed\tinput");
    }

    #[test]
    fn test_non_integer_marker_prefix_is_ignored() {
        let parsed = parse_route("x ! 0 hello").unwrap();
        assert_eq!(parsed.error_dest, None);
        assert_eq!(parsed.source, Some(0));
        assert_eq!(parsed.input, "hello");
    }

    #[test]
    fn test_non_integer_source_rejects_line() {
        assert_eq!(parse_route("hello world"), None);
        assert_eq!(parse_route("2 ! 3 < zero input"), None);
    }

    #[test]
    fn test_bare_markers_carry_no_ids() {
        assert_eq!(parse_route("!"), Some(RouteDirective::default()));
        assert_eq!(parse_route("<"), Some(RouteDirective::default()));
    }
}
