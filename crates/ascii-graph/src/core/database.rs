//! Core database trait for extracted graph data
//!
//! This trait defines the interface for storing the nodes and directed edges
//! an extraction pass produces.

use super::Result;

/// Core trait for graph databases
///
/// A parser fills a database one node and one edge at a time; the database
/// owns deduplication so the parser can emit freely.
pub trait Database: Send + Sync {
    /// The node data type for this database
    type Node: Clone + Send + Sync;

    /// The edge data type for this database
    type Edge: Clone + Send + Sync;

    /// Add a node to the database
    fn add_node(&mut self, node: Self::Node) -> Result<()>;

    /// Add a directed edge to the database
    fn add_edge(&mut self, edge: Self::Edge) -> Result<()>;

    /// Iterate over all nodes
    fn nodes(&self) -> impl Iterator<Item = &Self::Node>;

    /// Clear all data from the database
    fn clear(&mut self);

    /// Get the number of nodes
    fn node_count(&self) -> usize;

    /// Get the number of directed edges
    fn edge_count(&self) -> usize;
}
