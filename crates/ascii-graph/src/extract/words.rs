//! Word locator
//!
//! Finds every node label on the grid and records which label owns each
//! cell. Labels are either bracket tokens such as `[origin/foo]`, which may
//! contain connector characters, or maximal runs of ordinary characters.
//!
//! Bracket tokens are found first and blanked out of the line, so nothing
//! inside a bracket is ever scanned again as an ordinary word or a connector.

use std::collections::HashMap;

use chumsky::prelude::*;
use tracing::{debug, trace};

use super::connector::Connector;
use crate::core::{GraphError, Node, Position, Result};

/// Piece of a line produced by the lexers; pieces cover the line exactly
#[derive(Debug, Clone, PartialEq)]
enum Piece<'src> {
    Token(&'src str),
    Gap(char),
}

impl Piece<'_> {
    fn width(&self) -> usize {
        match self {
            Piece::Token(text) => text.chars().count(),
            Piece::Gap(_) => 1,
        }
    }
}

/// Characters that end an ordinary word
pub fn is_word_separator(c: char) -> bool {
    Connector::from_char(c).is_some() || c.is_whitespace() || c == '+'
}

/// Shortest `[...]` spans; any other character is a gap
fn bracket_lexer<'src>() -> impl Parser<'src, &'src str, Vec<Piece<'src>>> + Clone {
    let bracket = just('[')
        .then(none_of(']').repeated())
        .then(just(']'))
        .to_slice()
        .map(Piece::Token);

    bracket.or(any().map(Piece::Gap)).repeated().collect()
}

/// Maximal runs of non-separator characters; separators are gaps
fn word_lexer<'src>() -> impl Parser<'src, &'src str, Vec<Piece<'src>>> + Clone {
    let word = any()
        .filter(|c: &char| !is_word_separator(*c))
        .repeated()
        .at_least(1)
        .to_slice()
        .map(Piece::Token);

    word.or(any().map(Piece::Gap)).repeated().collect()
}

/// Run a lexer over one line and pair each token with its starting column
fn lex_line<'src, P>(lexer: &P, line: &'src str, row: usize) -> Result<Vec<(usize, Piece<'src>)>>
where
    P: Parser<'src, &'src str, Vec<Piece<'src>>>,
{
    let pieces = lexer.parse(line).into_result().map_err(|errors| {
        GraphError::parse_error(
            format!("failed to tokenize line: {:?}", errors),
            row as isize,
            0,
        )
    })?;

    let mut column = 0;
    Ok(pieces
        .into_iter()
        .map(|piece| {
            let start = column;
            column += piece.width();
            (start, piece)
        })
        .collect())
}

/// A line split into its bracket tokens and the line with those tokens blanked
#[derive(Debug, Clone, PartialEq)]
struct MaskedLine<'src> {
    brackets: Vec<(usize, &'src str)>,
    masked: String,
}

fn mask_line(line: &str, row: usize) -> Result<MaskedLine<'_>> {
    let mut brackets = Vec::new();
    let mut masked = String::with_capacity(line.len());

    for (column, piece) in lex_line(&bracket_lexer(), line, row)? {
        match piece {
            Piece::Token(text) => {
                masked.extend(std::iter::repeat(' ').take(text.chars().count()));
                brackets.push((column, text));
            }
            Piece::Gap(c) => masked.push(c),
        }
    }

    Ok(MaskedLine { brackets, masked })
}

fn mask_lines(text: &str) -> Result<Vec<MaskedLine<'_>>> {
    text.split('\n')
        .enumerate()
        .map(|(row, line)| mask_line(line, row))
        .collect()
}

/// Replace every bracket token with spaces of the same width
///
/// Columns are preserved, so positions in the masked text address the same
/// cells as in the original.
///
/// ```
/// use ascii_graph::extract::mask_brackets;
///
/// let masked = mask_brackets("a-[x/y]").unwrap();
/// assert_eq!(masked, "a-     ");
/// ```
pub fn mask_brackets(text: &str) -> Result<String> {
    let lines = mask_lines(text)?;
    Ok(lines
        .into_iter()
        .map(|line| line.masked)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Mapping from grid cells to the word that covers them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordMap {
    words: Vec<Node>,
    cells: HashMap<Position, usize>,
}

impl WordMap {
    fn insert(&mut self, word: Node) {
        let index = self.words.len();
        let anchor = word.anchor();
        for offset in 0..word.width() {
            self.cells.insert(anchor.offset((0, offset as isize)), index);
        }
        trace!(word = %word, "Located word");
        self.words.push(word);
    }

    /// The word covering `position`, if any
    pub fn get(&self, position: Position) -> Option<&Node> {
        self.cells.get(&position).map(|&index| &self.words[index])
    }

    /// All words, bracket tokens first, each group in reading order
    pub fn words(&self) -> &[Node] {
        &self.words
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of grid cells covered by words
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// Locate every word in `text`
///
/// ```
/// use ascii_graph::core::{Node, Position};
/// use ascii_graph::extract::locate_words;
///
/// let words = locate_words("ab-[c/d]").unwrap();
/// assert_eq!(words.get(Position::new(0, 1)), Some(&Node::new(0, 0, "ab")));
/// assert_eq!(words.get(Position::new(0, 5)), Some(&Node::new(0, 3, "[c/d]")));
/// assert_eq!(words.get(Position::new(0, 2)), None);
/// ```
pub fn locate_words(text: &str) -> Result<WordMap> {
    let lines = mask_lines(text)?;
    let mut map = WordMap::default();

    for (row, line) in lines.iter().enumerate() {
        for &(column, bracket) in &line.brackets {
            map.insert(Node::new(row, column, bracket));
        }
    }
    let bracket_count = map.len();

    let lexer = word_lexer();
    for (row, line) in lines.iter().enumerate() {
        for (column, piece) in lex_line(&lexer, &line.masked, row)? {
            if let Piece::Token(word) = piece {
                map.insert(Node::new(row, column, word));
            }
        }
    }

    debug!(
        bracket_count,
        word_count = map.len() - bracket_count,
        cell_count = map.cell_count(),
        "Located words"
    );
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAGRAM: &str = r"
    a-b---eee
       \   \
     x  c<--[d12]
     |  ^
     v  |
     x oh
      \|
       o
       |
       b";

    fn p(row: isize, column: isize) -> Position {
        Position::new(row, column)
    }

    #[test]
    fn test_locate_all_words() {
        let words = locate_words(DIAGRAM).unwrap();

        let expected = [
            ((1, 4), (1, 4, "a")),
            ((1, 6), (1, 6, "b")),
            ((1, 10), (1, 10, "eee")),
            ((1, 11), (1, 10, "eee")),
            ((1, 12), (1, 10, "eee")),
            ((3, 5), (3, 5, "x")),
            ((3, 8), (3, 8, "c")),
            ((3, 12), (3, 12, "[d12]")),
            ((3, 13), (3, 12, "[d12]")),
            ((3, 14), (3, 12, "[d12]")),
            ((3, 15), (3, 12, "[d12]")),
            ((3, 16), (3, 12, "[d12]")),
            ((6, 5), (6, 5, "x")),
            ((6, 7), (6, 7, "oh")),
            ((6, 8), (6, 7, "oh")),
            ((8, 7), (8, 7, "o")),
            ((10, 7), (10, 7, "b")),
        ];

        assert_eq!(words.cell_count(), expected.len());
        for ((row, column), (anchor_row, anchor_column, text)) in expected {
            assert_eq!(
                words.get(p(row, column)),
                Some(&Node::new(anchor_row, anchor_column, text)),
                "cell {},{}",
                row,
                column
            );
        }
    }

    #[test]
    fn test_bracket_tokens_come_first() {
        let words = locate_words("x-[y]\n[z]").unwrap();
        let texts: Vec<_> = words.words().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["[y]", "[z]", "x"]);
    }

    #[test]
    fn test_bracket_keeps_connectors_inside() {
        let words = locate_words("[origin/foo]---[moo]").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(
            words.get(p(0, 7)),
            Some(&Node::new(0, 0, "[origin/foo]"))
        );
        assert_eq!(words.get(p(0, 12)), None);
        assert_eq!(words.get(p(0, 15)), Some(&Node::new(0, 15, "[moo]")));
    }

    #[test]
    fn test_bracket_contents_not_rematched() {
        // "foo" appears inside the bracket and as a word of its own
        let words = locate_words("[origin/foo]-foo").unwrap();
        assert_eq!(words.get(p(0, 9)), Some(&Node::new(0, 0, "[origin/foo]")));
        assert_eq!(words.get(p(0, 13)), Some(&Node::new(0, 13, "foo")));
    }

    #[test]
    fn test_bracket_shortest_match() {
        let words = locate_words("[a]-[b]").unwrap();
        assert_eq!(words.get(p(0, 0)), Some(&Node::new(0, 0, "[a]")));
        assert_eq!(words.get(p(0, 4)), Some(&Node::new(0, 4, "[b]")));
    }

    #[test]
    fn test_bracket_inside_word() {
        let words = locate_words("ab[c]d").unwrap();
        assert_eq!(words.get(p(0, 0)), Some(&Node::new(0, 0, "ab")));
        assert_eq!(words.get(p(0, 3)), Some(&Node::new(0, 2, "[c]")));
        assert_eq!(words.get(p(0, 5)), Some(&Node::new(0, 5, "d")));
    }

    #[test]
    fn test_unclosed_bracket_is_ordinary() {
        let words = locate_words("[ab-c").unwrap();
        assert_eq!(words.get(p(0, 1)), Some(&Node::new(0, 0, "[ab")));
        assert_eq!(words.get(p(0, 4)), Some(&Node::new(0, 4, "c")));
    }

    #[test]
    fn test_bracket_does_not_span_lines() {
        let words = locate_words("[a\nb]").unwrap();
        assert_eq!(words.get(p(0, 0)), Some(&Node::new(0, 0, "[a")));
        assert_eq!(words.get(p(1, 0)), Some(&Node::new(1, 0, "b]")));
    }

    #[test]
    fn test_letter_v_splits_words() {
        // 'v' is a downward arrowhead, never part of an ordinary word
        let words = locate_words("river").unwrap();
        let texts: Vec<_> = words.words().iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["ri", "er"]);
    }

    #[test]
    fn test_plus_splits_words() {
        let words = locate_words("a+b").unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.get(p(0, 1)), None);
    }

    #[test]
    fn test_repeated_words_each_matched() {
        let words = locate_words("x-x\nx").unwrap();
        assert_eq!(
            words.words(),
            &[Node::new(0, 0, "x"), Node::new(0, 2, "x"), Node::new(1, 0, "x")]
        );
    }

    #[test]
    fn test_multibyte_columns() {
        let words = locate_words("é-ü").unwrap();
        assert_eq!(words.get(p(0, 2)), Some(&Node::new(0, 2, "ü")));
    }

    #[test]
    fn test_empty_text() {
        let words = locate_words("").unwrap();
        assert!(words.is_empty());
        assert_eq!(words.cell_count(), 0);
    }

    #[test]
    fn test_mask_brackets() {
        assert_eq!(mask_brackets("a-[b]\n[c/d]|").unwrap(), "a-   \n     |");
        assert_eq!(mask_brackets("no brackets").unwrap(), "no brackets");
    }
}
