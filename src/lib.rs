//! Converter from JFLAP's XML export format to formal-language definitions.
//!
//! Supported automaton types:
//!
//! - [x] finite automata
//! - [x] pushdown automata
//! - [x] Turing machines
//!
//! The converter parses a JFLAP file into a [`JflapDocument`], builds the
//! matching [`Automaton`] model from it, and renders the model's formal
//! tuple definition followed by its transition rules, one statement per
//! line.

#![forbid(unsafe_code)]

mod builder;
mod cli;
mod model;
mod parser;
mod print_def;

use std::path::Path;

pub use builder::ModelBuilder;
pub use cli::Cli;
pub use model::{Automaton, ConversionError, FiniteAutomaton, PushdownAutomaton, TuringMachine};
pub use parser::{Field, JflapDocument, ParserError, RawState, RawTransition};
pub use print_def::write_definition;

/// Parses the JFLAP file at `path` and builds the corresponding automaton
/// model.
///
/// Fails if the file cannot be read, if its XML structure is malformed, or
/// if the described automaton cannot be converted.
pub fn load(path: &Path) -> anyhow::Result<Automaton> {
    let document = JflapDocument::parse(path)?;
    let automaton = ModelBuilder::build(&document)?;
    Ok(automaton)
}
