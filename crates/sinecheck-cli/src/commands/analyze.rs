//! Analyze command implementation
//!
//! Reads a PCM WAV file from stdin, runs the sliding spectral analysis on
//! every channel, and prints the detected tones. With an expected tone
//! count, the detections are instead diffed against the deterministic
//! layout and reported as ok/KO plus any spurious extras.

use std::fmt::Write as _;
use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::Result;

use sinecheck_core::{
    analyze_buffer, compare_channel, read_wav, AudioParams, ChannelComparison, DetectedTones,
    ToneLayout, Verdict,
};

use super::reporting::log_parameters;

/// Run the analyze command
///
/// # Arguments
/// * `freqs` - Expected tones per channel; `None` lists detections only
///
/// # Returns
/// Exit code 0 whenever the analysis completes, regardless of match
/// outcomes; header and layout failures bubble up as errors.
pub fn run(freqs: Option<u32>) -> Result<ExitCode> {
    let stdin = io::stdin();
    run_on(&mut stdin.lock(), freqs)
}

/// Analyzes one WAV stream and prints the report to stdout.
fn run_on<R: Read>(input: &mut R, freqs: Option<u32>) -> Result<ExitCode> {
    let (header, data) = read_wav(input)?;
    let params = AudioParams::from_header(&header, freqs.unwrap_or(0))?;

    eprintln!("Analyzing audio file with following parameters:");
    log_parameters(&params);
    eprintln!();

    let detected = analyze_buffer(&data, &params);

    if params.freqs_per_chan == 0 {
        for (c, tones) in detected.iter().enumerate() {
            print!("{}", render_detections(c, tones));
        }
    } else {
        let layout = ToneLayout::new(&params)?;
        for (c, tones) in detected.iter().enumerate() {
            let cmp = compare_channel(tones, layout.channel(c as u16));
            print!("{}", render_comparison(c, tones, &cmp));
        }
        println!();
    }

    Ok(ExitCode::SUCCESS)
}

/// Detection listing for one channel, in detection order.
fn render_detections(chan: usize, tones: &DetectedTones) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Frequencies found on channel {chan} (max threshold: {:.1}):",
        tones.max_threshold()
    );
    if tones.is_empty() {
        let _ = writeln!(out, "None.");
    }
    for freq in tones.freqs() {
        let _ = writeln!(out, "* {freq} Hz");
    }
    out
}

/// Expected-vs-detected report for one channel.
fn render_comparison(chan: usize, tones: &DetectedTones, cmp: &ChannelComparison) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Frequencies expected on channel {chan} ({}max threshold: {:.1}):",
        if tones.is_empty() { "empty, " } else { "" },
        tones.max_threshold()
    );

    for (i, &(expected, verdict)) in cmp.expected.iter().enumerate() {
        let _ = write!(out, "* {i}/ {expected} Hz: ");
        match verdict {
            Verdict::Match { diff: 0 } => {
                let _ = writeln!(out, "ok");
            }
            Verdict::Match { diff } => {
                let _ = writeln!(out, "ok ({diff} Hz)");
            }
            Verdict::Miss => {
                let _ = writeln!(out, "KO");
            }
        }
    }

    if !cmp.spurious.is_empty() {
        let _ = writeln!(out, "Frequencies *not* expected on channel {chan}:");
        for freq in &cmp.spurious {
            let _ = writeln!(out, "*    {freq} Hz: spurious");
        }
    }

    out
}
