//! Graph assembler
//!
//! Drives the word locator and connector resolver over a whole diagram and
//! records every resulting directed edge in a [`GraphDatabase`].

use std::collections::HashSet;

use tracing::{debug, info, span, trace, Level};

use super::connector::{Connector, EdgeCandidate, Resolver};
use super::database::{Edge, GraphDatabase};
use super::words::{locate_words, mask_brackets, WordMap};
use crate::core::{Angle, Database, Grid, GraphError, Node, Parser, Position, Result};

/// Extracts a graph from ASCII-art text
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphParser;

impl GraphParser {
    pub fn new() -> Self {
        Self
    }

    /// Resolve every line in the diagram once
    ///
    /// Bracket tokens are masked out before scanning so connector-like
    /// characters inside them are never taken for lines; the walk itself runs
    /// over the original grid. Candidates are returned in the scan order of
    /// their first cell.
    pub fn edge_candidates(&self, input: &str) -> Result<Vec<EdgeCandidate>> {
        let grid = Grid::new(input);
        let masked = Grid::new(&mask_brackets(input)?);

        let mut resolver = Resolver::new(&grid);
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        let mut root_count = 0usize;

        for (position, c) in masked.cells() {
            if !Connector::from_char(c).is_some_and(Connector::is_scan_root) {
                continue;
            }
            root_count += 1;

            let candidate = resolver.resolve(position)?;
            if seen.insert(candidate) {
                trace!(
                    start = %candidate.start.position,
                    end = %candidate.end.position,
                    "Resolved connector"
                );
                candidates.push(candidate);
            }
        }

        debug!(
            root_count,
            candidate_count = candidates.len(),
            "Resolved connector cells"
        );
        Ok(candidates)
    }
}

/// Word owning `position`, or a dangling-connector error
fn word_at(words: &WordMap, position: Position) -> Result<&Node> {
    words
        .get(position)
        .ok_or_else(|| GraphError::dangling_connector(position))
}

impl Parser<GraphDatabase> for GraphParser {
    fn parse(&self, input: &str, database: &mut GraphDatabase) -> Result<()> {
        let parse_span = span!(Level::INFO, "parse_ascii_graph", input_len = input.len());
        let _enter = parse_span.enter();

        let words = locate_words(input)?;
        let candidates = self.edge_candidates(input)?;

        // Every edge is checked before any is recorded, so a failed parse
        // leaves the database untouched
        let mut edges = Vec::new();
        for candidate in &candidates {
            for (from, to) in candidate.directions() {
                let source = word_at(&words, from)?;
                let target = word_at(&words, to)?;
                let angle = Angle::between(from, to).ok_or_else(|| {
                    GraphError::parse_error(
                        "connector starts and ends on the same cell",
                        from.row,
                        from.column,
                    )
                })?;
                edges.push(Edge::new(source.clone(), target.clone(), angle));
            }
        }

        for edge in edges {
            trace!(from = %edge.from, to = %edge.to, angle = %edge.angle, "Adding edge");
            database.add_edge(edge)?;
        }

        info!(
            node_count = database.node_count(),
            edge_count = database.edge_count(),
            "Graph extraction completed"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "ascii-graph"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn can_parse(&self, input: &str) -> bool {
        let Ok(masked) = mask_brackets(input) else {
            return false;
        };
        masked
            .chars()
            .filter_map(Connector::from_char)
            .any(Connector::is_scan_root)
    }
}
