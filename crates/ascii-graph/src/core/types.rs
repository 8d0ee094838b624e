//! Core type definitions for graph extraction
//!
//! This module contains the value types that flow through the pipeline:
//! grid positions, resolved connector endpoints, node identities, neighbor
//! entries and compass angles.

use serde::Serialize;
use std::fmt;

/// A cell address on the character grid
///
/// Rows and columns are signed so that offsets past the top or left edge of
/// the grid can be represented; such positions simply hold no character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Position {
    pub row: isize,
    pub column: isize,
}

impl Position {
    pub fn new(row: isize, column: isize) -> Self {
        Self { row, column }
    }

    /// Position shifted by a `(row, column)` delta
    pub fn offset(self, (d_row, d_column): (isize, isize)) -> Self {
        Self::new(self.row + d_row, self.column + d_column)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self::new(row as isize, column as isize)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.column)
    }
}

/// One terminating end of a connector chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Endpoint {
    /// First non-connector cell reached
    pub position: Position,
    /// Whether the connector character touching that cell is an arrowhead
    pub arrowhead: bool,
}

impl Endpoint {
    pub fn new(position: Position, arrowhead: bool) -> Self {
        Self {
            position,
            arrowhead,
        }
    }
}

/// A labeled node, identified by its anchor cell and text
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Node {
    pub row: usize,
    pub column: usize,
    pub text: String,
}

impl Node {
    pub fn new(row: usize, column: usize, text: impl Into<String>) -> Self {
        Self {
            row,
            column,
            text: text.into(),
        }
    }

    /// Anchor cell of the node
    pub fn anchor(&self) -> Position {
        Position::from((self.row, self.column))
    }

    /// Number of grid cells the label covers
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{} {:?}", self.row, self.column, self.text)
    }
}

/// Entry in a node's adjacency list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Neighbor {
    pub row: usize,
    pub column: usize,
    pub text: String,
    pub angle: Angle,
}

impl Neighbor {
    pub fn new(node: &Node, angle: Angle) -> Self {
        Self {
            row: node.row,
            column: node.column,
            text: node.text.clone(),
            angle,
        }
    }

    /// The neighbor's node identity, without the angle
    pub fn node(&self) -> Node {
        Node::new(self.row, self.column, self.text.clone())
    }

    /// Whether this entry points at `node`
    pub fn is(&self, node: &Node) -> bool {
        self.row == node.row && self.column == node.column && self.text == node.text
    }
}

impl fmt::Display for Neighbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{} {:?} @{}",
            self.row, self.column, self.text, self.angle
        )
    }
}

/// Compass bucket describing where one cell lies relative to another
///
/// Zero degrees points up the page (decreasing row) and angles grow
/// clockwise. Only the sign of each delta matters, so a shallow diagonal
/// lands in the same bucket as a perfect one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Angle {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Angle {
    /// All buckets in clockwise order starting at North
    pub const ALL: [Angle; 8] = [
        Angle::North,
        Angle::NorthEast,
        Angle::East,
        Angle::SouthEast,
        Angle::South,
        Angle::SouthWest,
        Angle::West,
        Angle::NorthWest,
    ];

    /// Bucket for the direction from `from` to `to`
    ///
    /// Returns `None` when both positions are the same cell.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        use std::cmp::Ordering::*;

        let angle = match (to.row.cmp(&from.row), to.column.cmp(&from.column)) {
            (Greater, Greater) => Angle::SouthEast,
            (Greater, Equal) => Angle::South,
            (Greater, Less) => Angle::SouthWest,
            (Equal, Greater) => Angle::East,
            (Equal, Less) => Angle::West,
            (Less, Greater) => Angle::NorthEast,
            (Less, Equal) => Angle::North,
            (Less, Less) => Angle::NorthWest,
            (Equal, Equal) => return None,
        };
        Some(angle)
    }

    /// Angle in degrees, one of 0, 45, ..., 315
    pub fn degrees(self) -> u16 {
        match self {
            Angle::North => 0,
            Angle::NorthEast => 45,
            Angle::East => 90,
            Angle::SouthEast => 135,
            Angle::South => 180,
            Angle::SouthWest => 225,
            Angle::West => 270,
            Angle::NorthWest => 315,
        }
    }

    /// Bucket for a degree value, if it is a multiple of 45 below 360
    pub fn from_degrees(degrees: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|angle| angle.degrees() == degrees)
    }

    /// The bucket pointing the other way: `(degrees + 180) mod 360`
    pub fn opposite(self) -> Self {
        match self {
            Angle::North => Angle::South,
            Angle::NorthEast => Angle::SouthWest,
            Angle::East => Angle::West,
            Angle::SouthEast => Angle::NorthWest,
            Angle::South => Angle::North,
            Angle::SouthWest => Angle::NorthEast,
            Angle::West => Angle::East,
            Angle::NorthWest => Angle::SouthEast,
        }
    }
}

impl From<Angle> for u16 {
    fn from(angle: Angle) -> Self {
        angle.degrees()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl Serialize for Angle {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u16(self.degrees())
    }
}
