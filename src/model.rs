//! Automaton models and their formal-notation rendering.
//!
//! One variant per automaton kind of the JFLAP format, behind the
//! [`Automaton`] tagged union. All variants share the same bookkeeping
//! ([`AutomatonBase`]): the state registry, the initial/final markers, the
//! alphabet sets and the rendered transition rules. The variants differ
//! only in which transition elements they consume and how a rule is
//! rendered.

mod finite;
mod pushdown;
mod turing;

pub use finite::FiniteAutomaton;
pub use pushdown::PushdownAutomaton;
pub use turing::TuringMachine;

use crate::parser::vocabulary::{TYPE_FA, TYPE_PDA, TYPE_TURING};
use crate::parser::{Field, RawState, RawTransition};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use thiserror::Error;

/// Transition function symbol.
pub const DELTA: &str = "\u{03b4}";
/// Input alphabet symbol.
pub const SIGMA: &str = "\u{03a3}";
/// Stack/tape alphabet symbol.
pub const GAMMA: &str = "\u{0393}";
/// Sentinel for "no symbol consumed" in finite and pushdown automata.
pub const EPSILON: &str = "\u{03b5}";
/// Sentinel for an empty tape cell in Turing machines.
pub const BLANK: &str = "\u{25a1}";

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("unsupported automaton type `{0}`")]
    UnsupportedAutomaton(String),
    #[error("transition references unknown state id `{0}`")]
    UnknownState(String),
    #[error("transition is missing its `{0}` element")]
    MissingField(&'static str),
}

/// Resolves an optional transition element to its text content.
///
/// An empty element is substituted with the given sentinel; a missing
/// element is an error.
fn resolve<'a>(
    field: &'a Field,
    name: &'static str,
    sentinel: &'a str,
) -> Result<&'a str, ConversionError> {
    match field {
        Field::Absent => Err(ConversionError::MissingField(name)),
        Field::Empty => Ok(sentinel),
        Field::Text(text) => Ok(text.as_str()),
    }
}

/// State, alphabet and transition bookkeeping shared by all automaton
/// variants.
///
/// Populated once by the builder, read-only during rendering.
#[derive(Debug, Default)]
pub(crate) struct AutomatonBase {
    /// JFLAP state id to state name.
    states: HashMap<String, String>,
    /// Name of the state marked initial, or empty if none is.
    initial: String,
    finals: BTreeSet<String>,
    alphabet: BTreeSet<String>,
    /// Rendered transition rules, grouped by source state name so that
    /// output order is independent of declaration order.
    rules: BTreeMap<String, Vec<String>>,
}

impl AutomatonBase {
    fn record_state(&mut self, state: &RawState) {
        self.states.insert(state.id.clone(), state.name.clone());
        if state.initial {
            self.initial = state.name.clone();
        }
        if state.r#final {
            self.finals.insert(state.name.clone());
        }
    }

    /// Looks a transition endpoint up in the state registry.
    fn state_name(&self, field: &Field, name: &'static str) -> Result<&str, ConversionError> {
        match field {
            Field::Absent => Err(ConversionError::MissingField(name)),
            Field::Empty => Err(ConversionError::UnknownState(String::new())),
            Field::Text(id) => self
                .states
                .get(id)
                .map(String::as_str)
                .ok_or_else(|| ConversionError::UnknownState(id.clone())),
        }
    }

    /// Adds a genuinely supplied symbol to the alphabet; sentinels never
    /// enter through here.
    fn add_symbol(&mut self, symbol: Option<&str>) {
        if let Some(symbol) = symbol {
            self.alphabet.insert(symbol.to_string());
        }
    }

    fn push_rule(&mut self, from: String, rule: String) {
        self.rules.entry(from).or_default().push(rule);
    }

    fn initial(&self) -> &str {
        &self.initial
    }

    fn alphabet(&self) -> &BTreeSet<String> {
        &self.alphabet
    }

    fn states_set(&self, label: &str) -> String {
        let names: BTreeSet<&str> = self.states.values().map(String::as_str).collect();
        format_set(label, names)
    }

    fn alphabet_set(&self, label: &str, alphabet: &BTreeSet<String>) -> String {
        format_set(label, alphabet.iter().map(String::as_str))
    }

    fn final_states_set(&self, label: &str) -> String {
        format_set(label, self.finals.iter().map(String::as_str))
    }

    /// All rendered rules, sorted by source state, declaration order within
    /// a state.
    fn rules(&self) -> Vec<String> {
        self.rules.values().flatten().cloned().collect()
    }
}

/// Renders `<label> = {a, b, c}` with comma-space separated members.
fn format_set<'a, I>(label: &str, members: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    format!(
        "{label} = {{{}}}",
        members.into_iter().collect::<Vec<_>>().join(", ")
    )
}

/// An automaton model built from a JFLAP document.
#[derive(Debug)]
pub enum Automaton {
    Finite(FiniteAutomaton),
    Pushdown(PushdownAutomaton),
    Turing(TuringMachine),
}

impl Automaton {
    /// Creates the automaton variant matching the JFLAP `type` declaration.
    pub fn new(kind: &str) -> Result<Self, ConversionError> {
        match kind {
            TYPE_FA => Ok(Automaton::Finite(FiniteAutomaton::default())),
            TYPE_PDA => Ok(Automaton::Pushdown(PushdownAutomaton::default())),
            TYPE_TURING => Ok(Automaton::Turing(TuringMachine::default())),
            _ => Err(ConversionError::UnsupportedAutomaton(kind.to_string())),
        }
    }

    /// Registers a state in the registry, marking initial/final membership.
    pub fn record_state(&mut self, state: &RawState) {
        self.base_mut().record_state(state);
    }

    /// Records a transition: renders its rule in the variant's notation and
    /// grows the alphabet sets.
    ///
    /// All states must have been recorded beforehand, since the transition
    /// references them by identifier.
    pub fn record_transition(&mut self, transition: &RawTransition) -> Result<(), ConversionError> {
        match self {
            Automaton::Finite(fa) => fa.record_transition(transition),
            Automaton::Pushdown(pda) => pda.record_transition(transition),
            Automaton::Turing(tm) => tm.record_transition(transition),
        }
    }

    /// The formal tuple definition: header line plus state/alphabet/final
    /// set lines.
    pub fn definition(&self) -> Vec<String> {
        match self {
            Automaton::Finite(fa) => fa.definition(),
            Automaton::Pushdown(pda) => pda.definition(),
            Automaton::Turing(tm) => tm.definition(),
        }
    }

    /// The rendered transition rules, sorted by source state.
    pub fn rules(&self) -> Vec<String> {
        self.base().rules()
    }

    fn base(&self) -> &AutomatonBase {
        match self {
            Automaton::Finite(fa) => &fa.base,
            Automaton::Pushdown(pda) => &pda.base,
            Automaton::Turing(tm) => &tm.base,
        }
    }

    fn base_mut(&mut self) -> &mut AutomatonBase {
        match self {
            Automaton::Finite(fa) => &mut fa.base,
            Automaton::Pushdown(pda) => &mut pda.base,
            Automaton::Turing(tm) => &mut tm.base,
        }
    }
}
