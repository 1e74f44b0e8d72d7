//! sinecheck-gen - WAV file creator with sinewaves at known frequencies.

use clap::Parser;
use std::process::ExitCode;

use sinecheck_cli::commands;

/// Generates a WAV audio file on the standard output, with a number of
/// known frequencies added on each channel.
///
/// Listening to this file is discouraged, as pure sinewaves are as
/// mathematically beautiful as unpleasant to the human ears.
#[derive(Parser)]
#[command(name = "sinecheck-gen")]
#[command(author, version, about)]
struct Cli {
    /// Number of channels
    #[arg(short = 'c', long = "channels", default_value_t = 2,
          value_parser = clap::value_parser!(u16).range(1..))]
    channels: u16,

    /// Sampling rate in Hz (min: 400)
    #[arg(short = 'r', long = "rate", default_value_t = 48000,
          value_parser = clap::value_parser!(u32).range(1..))]
    rate: u32,

    /// Bits per sample (supported: 16, 32)
    #[arg(short = 'b', long = "bits", default_value_t = 32,
          value_parser = clap::value_parser!(u16).range(1..))]
    bits: u16,

    /// Duration in seconds (min: 3)
    #[arg(short = 'd', long = "duration", default_value_t = 10,
          value_parser = clap::value_parser!(u32).range(1..))]
    duration: u32,

    /// Number of frequencies per channel
    #[arg(short = 'f', long = "freqs", default_value_t = 4,
          value_parser = clap::value_parser!(u32).range(1..))]
    freqs: u32,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match commands::generate::run(cli.channels, cli.rate, cli.bits, cli.duration, cli.freqs) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
