use clap::Parser;
use sdfgen::cli::Cli;
use sdfgen::error::SdfError;
use sdfgen::log::{init_log, level_from_verbosity};
use sdfgen::pipeline::{run, Context};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_log(level_from_verbosity(cli.verbose));

    let outcome = Context::from_cli(&cli).and_then(|ctx| run(&ctx));

    match outcome {
        Ok(()) => ExitCode::from(0),
        Err(err) => {
            eprintln!("sdfgen: {err}");
            match err {
                SdfError::OutOfMemory(_) => ExitCode::from(2),
                SdfError::InvalidArguments(_) | SdfError::Decode(_) | SdfError::Encode(_) => {
                    ExitCode::from(1)
                }
            }
        }
    }
}
