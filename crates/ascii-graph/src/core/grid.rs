//! Read-only character grid over a block of text
//!
//! Lookups outside the text return `None` instead of failing, which lets the
//! connector resolver probe neighbors freely at the edges of a diagram.

use super::Position;

/// Text viewed as rows of characters addressed by `(row, column)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Split `text` into rows on `\n`
    pub fn new(text: &str) -> Self {
        let rows = text.split('\n').map(|line| line.chars().collect()).collect();
        Self { rows }
    }

    /// Character at `position`, or `None` outside the text
    pub fn char_at(&self, position: Position) -> Option<char> {
        let row = usize::try_from(position.row).ok()?;
        let column = usize::try_from(position.column).ok()?;
        self.rows.get(row)?.get(column).copied()
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, chars)| {
            chars
                .iter()
                .enumerate()
                .map(move |(column, &c)| (Position::from((row, column)), c))
        })
    }
}
