//! Core abstractions for graph extraction
//!
//! This module holds the value types, the character grid, the error type and
//! the traits that the extraction pipeline in [`crate::extract`] implements.

mod database;
mod error;
mod grid;
pub mod logging;
mod parser;
mod types;

pub use database::*;
pub use error::*;
pub use grid::*;
pub use logging::*;
pub use parser::*;
pub use types::*;
