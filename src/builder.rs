use crate::model::{Automaton, ConversionError};
use crate::parser::JflapDocument;
use log::{info, trace};

/// Builds an automaton model from a parsed JFLAP document.
#[derive(Debug)]
pub struct ModelBuilder;

impl ModelBuilder {
    /// Dispatches on the document's type declaration, then folds all states
    /// followed by all transitions into the matching variant.
    ///
    /// States are loaded first because transitions reference them by
    /// identifier, so the registry must be complete before any transition
    /// is recorded.
    pub fn build(document: &JflapDocument) -> Result<Automaton, ConversionError> {
        info!(target: "builder", "building `{}` automaton model", document.automaton_type);
        let mut automaton = Automaton::new(&document.automaton_type)?;
        for state in &document.states {
            trace!(target: "builder", "state '{}' ('{}')", state.id, state.name);
            automaton.record_state(state);
        }
        for transition in &document.transitions {
            automaton.record_transition(transition)?;
        }
        Ok(automaton)
    }
}
