use crate::model::Automaton;
use std::io::Write;

/// Writes the automaton's formal definition followed by its transition
/// rules, one statement per line.
pub fn write_definition<W: Write>(automaton: &Automaton, writer: &mut W) -> std::io::Result<()> {
    for line in automaton.definition() {
        writeln!(writer, "{line}")?;
    }
    for rule in automaton.rules() {
        writeln!(writer, "{rule}")?;
    }
    Ok(())
}
