//! Text-to-graph extraction pipeline
//!
//! Turns an ASCII-art diagram into an adjacency mapping:
//!
//! ```text
//!   a->b          (0,0,"a") -> [(0,3,"b",90)]
//! ```
//!
//! - [`words`] locates node labels on the grid
//! - [`connector`] follows line-drawing characters to their ends
//! - [`parser`] assembles resolved lines into directed edges
//! - [`database`] stores the resulting adjacency mapping

pub mod connector;
pub mod database;
pub mod parser;
pub mod words;

pub use connector::{resolve, Connector, EdgeCandidate, Resolver, Side};
pub use database::{Adjacency, AdjacencyEntry, Edge, GraphDatabase};
pub use parser::GraphParser;
pub use words::{is_word_separator, locate_words, mask_brackets, WordMap};
