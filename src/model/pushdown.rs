use super::{AutomatonBase, ConversionError, DELTA, EPSILON, GAMMA, SIGMA, resolve};
use crate::parser::RawTransition;
use crate::parser::vocabulary::{TAG_FROM, TAG_POP, TAG_PUSH, TAG_READ, TAG_TO};
use std::collections::BTreeSet;

/// Pushdown automaton: a transition consumes an input symbol and replaces
/// the top of the stack.
///
/// The `Z` component of the tuple header (initial stack symbol) is part of
/// the notation but is not present in the JFLAP export, so it is never
/// bound to a value.
#[derive(Debug, Default)]
pub struct PushdownAutomaton {
    pub(super) base: AutomatonBase,
    stack_alphabet: BTreeSet<String>,
}

impl PushdownAutomaton {
    /// Renders `δ(<from>, <read>, <pop>) = (<to>, <push>)`; the read symbol
    /// grows Σ, the pop/push symbols grow Γ.
    pub(super) fn record_transition(
        &mut self,
        transition: &RawTransition,
    ) -> Result<(), ConversionError> {
        let from = self.base.state_name(&transition.from, TAG_FROM)?.to_owned();
        let to = self.base.state_name(&transition.to, TAG_TO)?.to_owned();
        let read = resolve(&transition.read, TAG_READ, EPSILON)?;
        let pop = resolve(&transition.pop, TAG_POP, EPSILON)?;
        let push = resolve(&transition.push, TAG_PUSH, EPSILON)?;
        let rule = format!("{DELTA}({from}, {read}, {pop}) = ({to}, {push})");
        self.base.add_symbol(transition.read.symbol());
        for symbol in [&transition.pop, &transition.push] {
            if let Some(symbol) = symbol.symbol() {
                self.stack_alphabet.insert(symbol.to_string());
            }
        }
        self.base.push_rule(from, rule);
        Ok(())
    }

    pub(super) fn definition(&self) -> Vec<String> {
        vec![
            format!(
                "PDA = (K, {SIGMA}, {GAMMA}, {DELTA}, {}, Z, F)",
                self.base.initial()
            ),
            self.base.states_set("K"),
            self.base.alphabet_set(SIGMA, self.base.alphabet()),
            self.base.alphabet_set(GAMMA, &self.stack_alphabet),
            self.base.final_states_set("F"),
        ]
    }
}
