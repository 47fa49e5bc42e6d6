use clap::Parser;
use jflap2formal::{Cli, ConversionError, load, write_definition};
use std::path::Path;

fn convert(path: &Path) -> anyhow::Result<String> {
    let automaton = load(path)?;
    let mut output = Vec::new();
    write_definition(&automaton, &mut output)?;
    Ok(String::from_utf8(output)?)
}

#[test]
fn finite_automaton() -> anyhow::Result<()> {
    let output = convert(Path::new("./tests/assets/fa.xml"))?;
    assert_eq!(
        output,
        "FA = (K, Σ, δ, q0, F)\n\
         K = {q0, q1}\n\
         Σ = {a}\n\
         F = {q1}\n\
         δ(q0, a) = q1\n"
    );
    Ok(())
}

#[test]
fn output_independent_of_declaration_order() -> anyhow::Result<()> {
    let output = convert(Path::new("./tests/assets/fa.xml"))?;
    let reordered = convert(Path::new("./tests/assets/fa_reordered.xml"))?;
    assert_eq!(output, reordered);
    Ok(())
}

#[test]
fn conversion_is_idempotent() -> anyhow::Result<()> {
    let first = convert(Path::new("./tests/assets/fa.xml"))?;
    let second = convert(Path::new("./tests/assets/fa.xml"))?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn epsilon_transition() -> anyhow::Result<()> {
    let output = convert(Path::new("./tests/assets/fa_epsilon.xml"))?;
    assert_eq!(
        output,
        "FA = (K, Σ, δ, q0, F)\n\
         K = {q0, q1}\n\
         Σ = {b}\n\
         F = {q1}\n\
         δ(q0, ε) = q1\n\
         δ(q1, b) = q1\n"
    );
    Ok(())
}

#[test]
fn pushdown_automaton() -> anyhow::Result<()> {
    let output = convert(Path::new("./tests/assets/pda.xml"))?;
    assert_eq!(
        output,
        "PDA = (K, Σ, Γ, δ, q0, Z, F)\n\
         K = {q0, q1, q2}\n\
         Σ = {a, b}\n\
         Γ = {A}\n\
         F = {q2}\n\
         δ(q0, a, ε) = (q1, A)\n\
         δ(q1, b, A) = (q2, ε)\n"
    );
    Ok(())
}

#[test]
fn turing_machine() -> anyhow::Result<()> {
    let output = convert(Path::new("./tests/assets/turing.xml"))?;
    assert_eq!(
        output,
        "TM = (K, Σ, Γ, δ, q0, F)\n\
         K = {halt, q0}\n\
         Σ = {...}\n\
         Γ = {0, 1}\n\
         F = {halt}\n\
         δ(q0, 1) = (q0, 0, R)\n\
         δ(q0, □) = (halt, □, S)\n"
    );
    Ok(())
}

#[test]
fn unsupported_automaton_type() {
    let err = load(Path::new("./tests/assets/unsupported.xml")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConversionError>(),
        Some(ConversionError::UnsupportedAutomaton(kind)) if kind == "regex"
    ));
}

#[test]
fn cli_writes_output_file() -> anyhow::Result<()> {
    let output = std::env::temp_dir().join("jflap2formal_fa.txt");
    let cli = Cli::parse_from([
        "jflap2formal",
        "./tests/assets/fa.xml",
        output.to_str().expect("valid utf-8 path"),
    ]);
    cli.run()?;
    let written = std::fs::read_to_string(&output)?;
    std::fs::remove_file(&output)?;
    assert_eq!(written, convert(Path::new("./tests/assets/fa.xml"))?);
    Ok(())
}

#[test]
fn cli_unsupported_type_leaves_empty_output() -> anyhow::Result<()> {
    let output = std::env::temp_dir().join("jflap2formal_unsupported.txt");
    let cli = Cli::parse_from([
        "jflap2formal",
        "./tests/assets/unsupported.xml",
        output.to_str().expect("valid utf-8 path"),
    ]);
    // recovered: diagnostic only, no definition written
    cli.run()?;
    let written = std::fs::read_to_string(&output)?;
    std::fs::remove_file(&output)?;
    assert_eq!(written, "");
    Ok(())
}

#[test]
fn unknown_state_reference() {
    let err = load(Path::new("./tests/assets/unknown_state.xml")).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConversionError>(),
        Some(ConversionError::UnknownState(id)) if id == "9"
    ));
}
