use std::{fs, path::PathBuf};

use clap::Parser;
use parlance::{error::Error, interpreter::evaluator::core::Context, run_source};

/// parlance is a programming language that reads like plain English
/// sentences.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the program to run.
    script: PathBuf,
}

fn main() {
    let args = Args::parse();

    let script = fs::read_to_string(&args.script).unwrap_or_else(|_| {
                                                     eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                                               args.script.display());
                                                     std::process::exit(1);
                                                 });

    let mut context = Context::new();

    // Parse failures are part of the conversation and go to stdout; runtime
    // failures go to stderr.
    match run_source(&script, &mut context) {
        Ok(()) => {},
        Err(Error::Parse(error)) => println!("{error}"),
        Err(Error::Runtime(error)) => eprintln!("{error}"),
    }
}
