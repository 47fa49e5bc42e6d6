use super::{AutomatonBase, ConversionError, DELTA, EPSILON, SIGMA, resolve};
use crate::parser::RawTransition;
use crate::parser::vocabulary::{TAG_FROM, TAG_READ, TAG_TO};

/// Finite automaton: a transition consumes one input symbol, or none.
#[derive(Debug, Default)]
pub struct FiniteAutomaton {
    pub(super) base: AutomatonBase,
}

impl FiniteAutomaton {
    /// Renders `δ(<from>, <read>) = <to>` and grows the alphabet with the
    /// read symbol, if one was supplied.
    pub(super) fn record_transition(
        &mut self,
        transition: &RawTransition,
    ) -> Result<(), ConversionError> {
        let from = self.base.state_name(&transition.from, TAG_FROM)?.to_owned();
        let to = self.base.state_name(&transition.to, TAG_TO)?.to_owned();
        let read = resolve(&transition.read, TAG_READ, EPSILON)?;
        let rule = format!("{DELTA}({from}, {read}) = {to}");
        self.base.add_symbol(transition.read.symbol());
        self.base.push_rule(from, rule);
        Ok(())
    }

    pub(super) fn definition(&self) -> Vec<String> {
        vec![
            format!("FA = (K, {SIGMA}, {DELTA}, {}, F)", self.base.initial()),
            self.base.states_set("K"),
            self.base.alphabet_set(SIGMA, self.base.alphabet()),
            self.base.final_states_set("F"),
        ]
    }
}
