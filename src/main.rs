use clap::Parser;
use jflap2formal::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = cli.run() {
        println!("ERROR: {err:#}");
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
