//! Connector resolver
//!
//! A connector cell is resolved by walking the line it belongs to in both
//! directions until each walk steps onto a cell that is not a connector.
//! Every cell of one straight or diagonal run therefore resolves to the same
//! pair of endpoints.

use std::collections::HashMap;
use std::fmt;

use crate::core::{Endpoint, Grid, GraphError, Position, Result};

/// A line-drawing character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connector {
    /// `-`
    Horizontal,
    /// `>`
    ArrowRight,
    /// `<`
    ArrowLeft,
    /// `/`
    Rising,
    /// `\`
    Falling,
    /// `|`
    Vertical,
    /// `^`
    ArrowUp,
    /// `v`
    ArrowDown,
}

/// Which end of a connector to walk towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Left, or up for vertical connectors, or down-left for `/`
    Start,
    /// Right, or down for vertical connectors, or up-right for `/`
    End,
}

impl Connector {
    /// Every connector character
    pub const CHARS: [char; 8] = ['-', '>', '<', '/', '\\', '|', '^', 'v'];

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '-' => Some(Connector::Horizontal),
            '>' => Some(Connector::ArrowRight),
            '<' => Some(Connector::ArrowLeft),
            '/' => Some(Connector::Rising),
            '\\' => Some(Connector::Falling),
            '|' => Some(Connector::Vertical),
            '^' => Some(Connector::ArrowUp),
            'v' => Some(Connector::ArrowDown),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Connector::Horizontal => '-',
            Connector::ArrowRight => '>',
            Connector::ArrowLeft => '<',
            Connector::Rising => '/',
            Connector::Falling => '\\',
            Connector::Vertical => '|',
            Connector::ArrowUp => '^',
            Connector::ArrowDown => 'v',
        }
    }

    /// Whether this character is an arrowhead
    pub fn is_arrowhead(self) -> bool {
        matches!(
            self,
            Connector::ArrowRight | Connector::ArrowLeft | Connector::ArrowUp | Connector::ArrowDown
        )
    }

    /// Whether the graph scan starts a resolution from this character.
    /// Arrowheads are only ever reached by following a line.
    pub fn is_scan_root(self) -> bool {
        !self.is_arrowhead()
    }

    /// Offset to the neighbor on `side` and whether that end is a head
    pub fn step(self, side: Side) -> ((isize, isize), bool) {
        match (self, side) {
            (Connector::Horizontal, Side::Start) => ((0, -1), false),
            (Connector::Horizontal, Side::End) => ((0, 1), false),
            (Connector::ArrowRight, Side::Start) => ((0, -1), false),
            (Connector::ArrowRight, Side::End) => ((0, 1), true),
            (Connector::ArrowLeft, Side::Start) => ((0, -1), true),
            (Connector::ArrowLeft, Side::End) => ((0, 1), false),
            (Connector::Rising, Side::Start) => ((1, -1), false),
            (Connector::Rising, Side::End) => ((-1, 1), false),
            (Connector::Falling, Side::Start) => ((-1, -1), false),
            (Connector::Falling, Side::End) => ((1, 1), false),
            (Connector::Vertical, Side::Start) => ((-1, 0), false),
            (Connector::Vertical, Side::End) => ((1, 0), false),
            (Connector::ArrowUp, Side::Start) => ((-1, 0), true),
            (Connector::ArrowUp, Side::End) => ((1, 0), false),
            (Connector::ArrowDown, Side::Start) => ((-1, 0), false),
            (Connector::ArrowDown, Side::End) => ((1, 0), true),
        }
    }
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// The two endpoints a connector cell resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeCandidate {
    pub start: Endpoint,
    pub end: Endpoint,
}

impl EdgeCandidate {
    pub fn new(start: Endpoint, end: Endpoint) -> Self {
        Self { start, end }
    }

    /// True when exactly one end carries an arrowhead
    pub fn is_directed(&self) -> bool {
        self.start.arrowhead != self.end.arrowhead
    }

    /// The `(from, to)` directions this segment contributes to the graph
    ///
    /// A single head points the edge at that end. No heads, or heads on both
    /// ends, contribute both directions.
    pub fn directions(&self) -> impl Iterator<Item = (Position, Position)> {
        let forward = (self.start.position, self.end.position);
        let backward = (self.end.position, self.start.position);
        let (emit_forward, emit_backward) = match (self.start.arrowhead, self.end.arrowhead) {
            (false, true) => (true, false),
            (true, false) => (false, true),
            _ => (true, true),
        };

        [
            emit_forward.then_some(forward),
            emit_backward.then_some(backward),
        ]
        .into_iter()
        .flatten()
    }
}

/// Resolves connector cells of one grid, remembering every walked cell
///
/// The endpoint reached from a cell on a given side depends only on that
/// cell and side, so each cell of a run is walked at most once per side and
/// scanning a whole diagram stays linear in its size.
#[derive(Debug)]
pub struct Resolver<'g> {
    grid: &'g Grid,
    endpoints: HashMap<(Position, Side), Endpoint>,
}

impl<'g> Resolver<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self {
            grid,
            endpoints: HashMap::new(),
        }
    }

    /// Resolve the connector at `position` to the endpoints of its line
    pub fn resolve(&mut self, position: Position) -> Result<EdgeCandidate> {
        let found = self.grid.char_at(position);
        let connector = found
            .and_then(Connector::from_char)
            .ok_or_else(|| GraphError::unexpected_character(found, position))?;

        Ok(EdgeCandidate::new(
            self.follow(position, connector, Side::Start),
            self.follow(position, connector, Side::End),
        ))
    }

    /// Walk from the connector at `position` towards `side` until leaving the line
    fn follow(&mut self, mut position: Position, mut connector: Connector, side: Side) -> Endpoint {
        let mut path = Vec::new();
        let endpoint = loop {
            if let Some(&known) = self.endpoints.get(&(position, side)) {
                break known;
            }
            path.push(position);

            let (offset, arrowhead) = connector.step(side);
            let next = position.offset(offset);
            match self.grid.char_at(next).and_then(Connector::from_char) {
                Some(next_connector) => {
                    position = next;
                    connector = next_connector;
                }
                None => break Endpoint::new(next, arrowhead),
            }
        };

        for walked in path {
            self.endpoints.insert((walked, side), endpoint);
        }
        endpoint
    }
}

/// Resolve a single connector cell
///
/// Fails when the cell is outside the grid or does not hold a connector.
///
/// ```
/// use ascii_graph::core::{Endpoint, Grid, Position};
/// use ascii_graph::extract::resolve;
///
/// let grid = Grid::new("a-->b");
/// let candidate = resolve(&grid, Position::new(0, 1)).unwrap();
/// assert_eq!(candidate.start, Endpoint::new(Position::new(0, 0), false));
/// assert_eq!(candidate.end, Endpoint::new(Position::new(0, 4), true));
/// ```
pub fn resolve(grid: &Grid, position: Position) -> Result<EdgeCandidate> {
    Resolver::new(grid).resolve(position)
}
