//! Sinewave round-trip core
//!
//! This crate implements the shared engine behind the `sinecheck` tools: a
//! generator that synthesizes PCM WAV files carrying a deterministic set of
//! pure tones per channel, and an analyzer that recovers the dominant
//! frequencies from such a file and optionally checks them against the same
//! deterministic set.
//!
//! # Overview
//!
//! The analysis side walks overlapping Hann-windowed blocks across each
//! channel, computes a power spectrum per block, extracts threshold-crossing
//! peaks, and merges them into a per-channel deduplicated tone set. The
//! generation side lays out tones so that no two channels share a frequency,
//! synthesizes the corresponding sinewaves, and writes a plain PCM WAV file.
//!
//! # Determinism
//!
//! Both directions are fully deterministic. The tone layout is a pure
//! function of (sample rate, channels, tones per channel), so a file
//! produced by the generator can be verified by the analyzer with no side
//! channel: feed the same tone count to both ends and every expected tone
//! must come back within 1 Hz.
//!
//! # Crate structure
//!
//! - [`params`] - validated audio parameter record and shared constants
//! - [`wav`] - the fixed RIFF/PCM header codec and PCM interleaving
//! - [`channel`] - interleaved PCM to normalized per-channel samples
//! - [`analysis`] - sliding-window spectral analysis (the core)
//! - [`layout`] - deterministic per-channel tone layout
//! - [`synth`] - sinewave synthesis for the generator
//! - [`compare`] - detected-vs-expected tone comparison

pub mod analysis;
pub mod channel;
pub mod compare;
pub mod error;
pub mod layout;
pub mod params;
pub mod synth;
pub mod wav;

pub use analysis::{analyze_buffer, DetectedTones};
pub use compare::{compare_channel, ChannelComparison, Verdict};
pub use error::{AudioError, AudioResult};
pub use layout::ToneLayout;
pub use params::{
    AudioParams, FREQ_ACCURACY, MAX_FREQS_PER_CHAN, MIN_DURATION_S, MIN_FREQ, POWER_NOISE_LEVEL,
};
pub use wav::{read_wav, write_wav, WavHeader};
