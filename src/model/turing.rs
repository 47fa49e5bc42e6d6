use super::{AutomatonBase, BLANK, ConversionError, DELTA, GAMMA, SIGMA, resolve};
use crate::parser::RawTransition;
use crate::parser::vocabulary::{TAG_FROM, TAG_MOVE, TAG_READ, TAG_TO, TAG_WRITE};

/// Turing machine: a transition reads a tape cell, writes it back and moves
/// the head.
///
/// The JFLAP export does not distinguish the input alphabet from the tape
/// alphabet, so the Σ line of the definition is a literal placeholder and Γ
/// absorbs both read and write symbols.
#[derive(Debug, Default)]
pub struct TuringMachine {
    pub(super) base: AutomatonBase,
}

impl TuringMachine {
    /// Renders `δ(<from>, <read>) = (<to>, <write>, <move>)`; read and
    /// write symbols grow the tape alphabet. The head movement is required.
    pub(super) fn record_transition(
        &mut self,
        transition: &RawTransition,
    ) -> Result<(), ConversionError> {
        let from = self.base.state_name(&transition.from, TAG_FROM)?.to_owned();
        let to = self.base.state_name(&transition.to, TAG_TO)?.to_owned();
        let read = resolve(&transition.read, TAG_READ, BLANK)?;
        let write = resolve(&transition.write, TAG_WRITE, BLANK)?;
        let direction = transition
            .r#move
            .symbol()
            .ok_or(ConversionError::MissingField(TAG_MOVE))?;
        let rule = format!("{DELTA}({from}, {read}) = ({to}, {write}, {direction})");
        self.base.add_symbol(transition.read.symbol());
        self.base.add_symbol(transition.write.symbol());
        self.base.push_rule(from, rule);
        Ok(())
    }

    pub(super) fn definition(&self) -> Vec<String> {
        vec![
            format!("TM = (K, {SIGMA}, {GAMMA}, {DELTA}, {}, F)", self.base.initial()),
            self.base.states_set("K"),
            format!("{SIGMA} = {{...}}"),
            self.base.alphabet_set(GAMMA, self.base.alphabet()),
            self.base.final_states_set("F"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Automaton;
    use crate::parser::{Field, RawState};

    fn automaton() -> Automaton {
        let mut automaton = Automaton::new("turing").expect("turing is supported");
        automaton.record_state(&RawState {
            id: "0".to_string(),
            name: "q0".to_string(),
            initial: true,
            r#final: false,
        });
        automaton.record_state(&RawState {
            id: "1".to_string(),
            name: "halt".to_string(),
            initial: false,
            r#final: true,
        });
        automaton
    }

    #[test]
    fn rule_rendering() -> Result<(), ConversionError> {
        let mut automaton = automaton();
        automaton.record_transition(&RawTransition {
            from: Field::Text("0".to_string()),
            to: Field::Text("1".to_string()),
            read: Field::Text("0".to_string()),
            write: Field::Text("1".to_string()),
            r#move: Field::Text("R".to_string()),
            ..RawTransition::default()
        })?;
        assert_eq!(
            automaton.definition(),
            vec![
                "TM = (K, Σ, Γ, δ, q0, F)",
                "K = {halt, q0}",
                "Σ = {...}",
                "Γ = {0, 1}",
                "F = {halt}",
            ]
        );
        assert_eq!(automaton.rules(), vec!["δ(q0, 0) = (halt, 1, R)"]);
        Ok(())
    }

    #[test]
    fn empty_read_and_write_render_blank() -> Result<(), ConversionError> {
        let mut automaton = automaton();
        automaton.record_transition(&RawTransition {
            from: Field::Text("0".to_string()),
            to: Field::Text("1".to_string()),
            read: Field::Empty,
            write: Field::Empty,
            r#move: Field::Text("L".to_string()),
            ..RawTransition::default()
        })?;
        assert_eq!(automaton.rules(), vec!["δ(q0, □) = (halt, □, L)"]);
        // blanks are substitutions, not tape symbols
        assert_eq!(automaton.definition()[3], "Γ = {}");
        Ok(())
    }

    #[test]
    fn missing_move_element() {
        let mut automaton = automaton();
        let err = automaton
            .record_transition(&RawTransition {
                from: Field::Text("0".to_string()),
                to: Field::Text("1".to_string()),
                read: Field::Text("0".to_string()),
                write: Field::Text("1".to_string()),
                r#move: Field::Empty,
                ..RawTransition::default()
            })
            .unwrap_err();
        assert!(matches!(err, ConversionError::MissingField("move")));
    }
}
