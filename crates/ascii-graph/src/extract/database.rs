//! Graph database implementation
//!
//! Stores the adjacency mapping built by [`super::GraphParser`]: each source
//! node maps to the list of neighbors its outgoing edges reach.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::trace;

use crate::core::{Angle, Database, Neighbor, Node, Result};

/// Adjacency mapping from a node to its outgoing neighbors
pub type Adjacency = BTreeMap<Node, Vec<Neighbor>>;

/// A directed edge between two located words
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub angle: Angle,
}

impl Edge {
    pub fn new(from: Node, to: Node, angle: Angle) -> Self {
        Self { from, to, angle }
    }
}

/// One node and its neighbor list, in a serializable shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyEntry<'a> {
    pub node: &'a Node,
    pub neighbors: &'a [Neighbor],
}

/// Graph database
///
/// Only nodes with outgoing edges are keys of the adjacency mapping; nodes
/// that are only ever reached (the head of `a->b`) appear in [`Self::nodes`]
/// but not in [`Self::adjacency`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GraphDatabase {
    nodes: BTreeSet<Node>,
    adjacency: Adjacency,
}

impl GraphDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// The adjacency mapping
    pub fn adjacency(&self) -> &Adjacency {
        &self.adjacency
    }

    /// Consume the database, keeping only the adjacency mapping
    pub fn into_adjacency(self) -> Adjacency {
        self.adjacency
    }

    /// Outgoing neighbors of `node`, empty if it has none
    pub fn neighbors(&self, node: &Node) -> &[Neighbor] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether an edge runs from `from` to `to`, at any angle
    pub fn has_edge(&self, from: &Node, to: &Node) -> bool {
        self.neighbors(from).iter().any(|neighbor| neighbor.is(to))
    }

    /// Nodes whose label is exactly `text`
    pub fn find<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.nodes.iter().filter(move |node| node.text == text)
    }

    /// Every directed edge as `(source, neighbor)`
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Neighbor)> {
        self.adjacency
            .iter()
            .flat_map(|(node, neighbors)| neighbors.iter().map(move |neighbor| (node, neighbor)))
    }

    /// Serializable view of the adjacency mapping, in node order
    pub fn entries(&self) -> Vec<AdjacencyEntry<'_>> {
        self.adjacency
            .iter()
            .map(|(node, neighbors)| AdjacencyEntry {
                node,
                neighbors: neighbors.as_slice(),
            })
            .collect()
    }
}

impl Database for GraphDatabase {
    type Node = Node;
    type Edge = Edge;

    fn add_node(&mut self, node: Node) -> Result<()> {
        self.nodes.insert(node);
        Ok(())
    }

    fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let neighbor = Neighbor::new(&edge.to, edge.angle);
        let neighbors = self.adjacency.entry(edge.from.clone()).or_default();
        if neighbors.contains(&neighbor) {
            trace!(from = %edge.from, to = %neighbor, "Skipped duplicate edge");
        } else {
            neighbors.push(neighbor);
        }

        self.nodes.insert(edge.from);
        self.nodes.insert(edge.to);
        Ok(())
    }

    fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.adjacency.clear();
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}
