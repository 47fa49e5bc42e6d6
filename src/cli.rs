use crate::builder::ModelBuilder;
use crate::model::ConversionError;
use crate::parser::JflapDocument;
use crate::print_def;
use anyhow::Context;
use clap::Parser;
use log::error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Converts JFLAP automaton files to formal-language definitions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the JFLAP XML file to convert
    #[arg(value_hint = clap::ValueHint::FilePath)]
    input: PathBuf,
    /// Path of the text file the definition is written to
    #[arg(value_hint = clap::ValueHint::FilePath)]
    output: PathBuf,
}

impl Cli {
    pub fn run(&self) -> anyhow::Result<()> {
        // The output file is created up front, so an aborted conversion
        // leaves an empty file rather than a stale one.
        let output = File::create(&self.output).with_context(|| {
            format!("failed to create output file '{}'", self.output.display())
        })?;
        let mut writer = BufWriter::new(output);
        let document = JflapDocument::parse(&self.input)?;
        match ModelBuilder::build(&document) {
            Ok(automaton) => {
                print_def::write_definition(&automaton, &mut writer).with_context(|| {
                    format!("failed to write definition to '{}'", self.output.display())
                })?;
                writer.flush().with_context(|| {
                    format!("failed to write definition to '{}'", self.output.display())
                })?;
                Ok(())
            }
            // Recovered: report and leave the output file empty.
            Err(ConversionError::UnsupportedAutomaton(kind)) => {
                error!(target: "cli", "unsupported automaton type '{kind}'");
                println!("Supplied automaton type is not supported");
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}
