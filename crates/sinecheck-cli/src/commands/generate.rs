//! Generate command implementation
//!
//! Synthesizes one sinewave mix per channel from the deterministic tone
//! layout and writes the resulting PCM WAV file to stdout. The tone list
//! goes to stderr so the output stream stays a clean WAV byte stream.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;

use sinecheck_core::synth::synth_waves;
use sinecheck_core::wav::{interleave_to_pcm, write_wav};
use sinecheck_core::{AudioParams, ToneLayout, WavHeader};

use super::reporting::log_parameters;

/// Run the generate command
///
/// # Arguments
/// * `channels` - Number of channels
/// * `rate` - Sample rate in Hz
/// * `bits` - Bits per sample (16 or 32)
/// * `duration` - Duration in seconds
/// * `freqs` - Number of tones per channel
///
/// # Returns
/// Exit code 0 on success; parameter and layout failures bubble up as
/// errors.
pub fn run(channels: u16, rate: u32, bits: u16, duration: u32, freqs: u32) -> Result<ExitCode> {
    let params = AudioParams::for_generation(channels, rate, bits, duration, freqs)?;

    eprintln!("Generating audio file with following parameters:");
    log_parameters(&params);
    eprintln!();

    let layout = ToneLayout::new(&params)?;
    log_tones(&layout, &params);

    let waves = synth_waves(&layout, &params);
    let pcm = interleave_to_pcm(&waves, params.bits_per_sample)?;

    let header = WavHeader {
        channels: params.channels,
        sample_rate: params.sample_rate,
        bits_per_sample: params.bits_per_sample,
        data_size: pcm.len() as u32,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_wav(&mut out, &header, &pcm)?;
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}

/// Lists the tones about to be synthesized, per channel.
fn log_tones(layout: &ToneLayout, params: &AudioParams) {
    for c in 0..params.channels {
        eprintln!("Frequencies on channel {c}:");
        for (i, freq) in layout.channel(c).iter().enumerate() {
            eprintln!("* {i}/ {freq} Hz");
        }
    }
    eprintln!();
}
