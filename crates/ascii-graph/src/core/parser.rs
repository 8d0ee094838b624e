//! Core parser trait for diagram text
//!
//! This trait defines the interface for turning diagram text into
//! structured data stored in a database.

use super::{Database, Result};

/// Core trait for diagram parsers
///
/// # Example
/// ```
/// use ascii_graph::core::{Database, Parser};
/// use ascii_graph::extract::{GraphDatabase, GraphParser};
///
/// let parser = GraphParser::new();
/// let mut db = GraphDatabase::new();
/// parser.parse("a-b", &mut db).unwrap();
/// assert_eq!(db.node_count(), 2);
/// ```
pub trait Parser<D: Database>: Send + Sync {
    /// Parse diagram text into the provided database
    fn parse(&self, input: &str, database: &mut D) -> Result<()>;

    /// Get the name of this parser
    fn name(&self) -> &'static str;

    /// Get the version of this parser
    fn version(&self) -> &'static str;

    /// Check if the input contains anything this parser would extract
    fn can_parse(&self, input: &str) -> bool;
}
