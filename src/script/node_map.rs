// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::node::{Node, NodeId, NodeKind};
use std::collections::BTreeMap;

/// All nodes declared by a script, keyed by ID.
///
/// Later definitions replace earlier ones with the same ID. Keys are ordered so
/// that lookups by type (`in`, `out`, `err`) resolve to the lowest matching ID
/// instead of depending on hash order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMap(pub BTreeMap<NodeId, Node>);

impl NodeMap {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a node, returning the definition it replaced.
    pub fn insert(&mut self, node: Node) -> Option<Node> {
        self.0.insert(node.id, node)
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.0.get(&id)
    }

    pub fn contains_key(&self, id: NodeId) -> bool {
        self.0.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `in` node, if the script declares one.
    pub fn input_node(&self) -> Option<&Node> {
        self.first_of(&NodeKind::In)
    }

    /// The `out` node, if the script declares one.
    pub fn output_node(&self) -> Option<&Node> {
        self.first_of(&NodeKind::Out)
    }

    /// The `err` node, if the script declares one.
    pub fn error_node(&self) -> Option<&Node> {
        self.first_of(&NodeKind::Err)
    }

    fn first_of(&self, kind: &NodeKind) -> Option<&Node> {
        self.0.values().find(|node| &node.kind == kind)
    }
}

impl From<Vec<Node>> for NodeMap {
    fn from(nodes: Vec<Node>) -> Self {
        let mut map = Self::new();
        for node in nodes {
            map.insert(node);
        }
        map
    }
}
