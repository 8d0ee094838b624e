//! ascii-graph - Extract graphs from ASCII-art diagrams
//!
//! Words on the page become nodes, line-drawing characters between them
//! become edges, and arrowheads decide which way an edge points.
//!
//! # Quick Start
//!
//! ```rust
//! use ascii_graph::{graph, Node};
//!
//! let adjacency = graph("a->b").unwrap();
//! let neighbors = &adjacency[&Node::new(0, 0, "a")];
//! assert_eq!(neighbors[0].text, "b");
//! assert_eq!(neighbors[0].angle.degrees(), 90);
//! ```
//!
//! # Advanced Usage
//!
//! ```rust
//! use ascii_graph::prelude::*;
//!
//! let input = r"
//! [origin/main]---feature
//!       |
//!      tip";
//!
//! let parser = GraphParser::new();
//! let mut database = GraphDatabase::new();
//! parser.parse(input, &mut database).unwrap();
//!
//! assert_eq!(database.node_count(), 3);
//! let main = database.find("[origin/main]").next().unwrap().clone();
//! assert_eq!(database.neighbors(&main).len(), 2);
//! ```
//!
//! # Diagram Syntax
//!
//! - Connectors: `-` `|` `/` `\`, with arrowheads `>` `<` `^` `v`
//! - Labels: any run of other non-space characters, or `[...]` which may
//!   itself contain connector characters
//! - A line that ends on blank space is an error

pub mod core;
pub mod extract;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crate::core::*;
pub use crate::extract::{Adjacency, GraphDatabase, GraphParser, WordMap};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Angle, Database, Endpoint, GraphError, Grid, Neighbor, Node, Parser, Position,
    };
    pub use crate::extract::{Adjacency, Edge, EdgeCandidate, GraphDatabase, GraphParser, WordMap};
}

/// Extract the adjacency mapping from an ASCII-art diagram
///
/// Keys are the nodes with at least one outgoing edge; each maps to its
/// neighbors and the compass angle towards them.
///
/// # Example
/// ```rust
/// use ascii_graph::{graph, Node};
///
/// let adjacency = graph("a-b").unwrap();
/// assert_eq!(adjacency.len(), 2);
/// assert_eq!(adjacency[&Node::new(0, 2, "b")][0].angle.degrees(), 270);
/// ```
pub fn graph(input: &str) -> Result<Adjacency> {
    parse(input).map(GraphDatabase::into_adjacency)
}

/// Extract a diagram into a [`GraphDatabase`] for further queries
///
/// # Example
/// ```rust
/// use ascii_graph::{parse, Database};
///
/// let db = parse("a-b-c").unwrap();
/// assert_eq!(db.node_count(), 3);
/// assert_eq!(db.edge_count(), 4);
/// ```
pub fn parse(input: &str) -> Result<GraphDatabase> {
    let parser = GraphParser::new();
    let mut database = GraphDatabase::new();
    parser.parse(input, &mut database)?;
    Ok(database)
}

/// Locate the node labels of a diagram without resolving any lines
pub fn words(input: &str) -> Result<WordMap> {
    extract::locate_words(input)
}
