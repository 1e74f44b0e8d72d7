//! sinecheck-analyze - WAV file frequency analyzer.

use clap::Parser;
use std::process::ExitCode;

use sinecheck_cli::commands;

/// Analyzes a WAV audio file on the standard input and exposes its major
/// frequencies.
///
/// The audio parameters come from the WAV header. Up to 64 frequencies can
/// be discovered per channel. With `-f`, the detections are checked
/// against the tone set a generator run with the same count would produce.
#[derive(Parser)]
#[command(name = "sinecheck-analyze")]
#[command(author, version, about)]
struct Cli {
    /// Number of expected frequencies per channel
    #[arg(short = 'f', long = "freqs", value_name = "NFREQS",
          value_parser = clap::value_parser!(u32).range(1..))]
    freqs: Option<u32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::analyze::run(cli.freqs) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
