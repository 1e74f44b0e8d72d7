//! Sliding-window spectral analysis.
//!
//! Each channel is deinterleaved into a normalized sample vector, then a
//! Hann-windowed FFT slides across it with 50% overlap. Every block's
//! power spectrum goes through peak extraction, and the surviving tones
//! accumulate in a per-channel [`DetectedTones`] set. Blocks are processed
//! in ascending start order; the whole pass is sequential and allocates
//! nothing it does not release.

mod peaks;
mod spectrum;


pub use peaks::{extract_peaks, within_accuracy, DetectedTones};
pub use spectrum::SpectrumAnalyzer;

use crate::channel::extract_channel;
use crate::params::AudioParams;

/// Smallest power of two strictly greater than `v`.
///
/// Saturates at `1 << 31` when the top bit is already set; returns 1 for
/// `v = 0`. Callers here only pass `v >= MIN_FREQ`, where the result is
/// always a strict doubling bound.
pub fn next_pow2(v: u32) -> u32 {
    if v & (1 << 31) != 0 {
        return 1 << 31;
    }
    if v == 0 {
        return 1;
    }
    1 << (32 - v.leading_zeros())
}

/// Window geometry derived from the sample rate.
///
/// The window covers at least one second of audio, slides by half its
/// width so every tone lands wholly inside at least one block, and skips
/// the first and last half-second of the channel where startup and tail
/// glitches live.
#[derive(Debug, Clone, Copy)]
struct WindowPlan {
    offset: usize,
    slide: usize,
    window: usize,
}

impl WindowPlan {
    fn for_rate(sample_rate: u32) -> Self {
        let slide = next_pow2(sample_rate / 2) as usize;
        Self {
            offset: (sample_rate / 2) as usize,
            slide,
            window: 2 * slide,
        }
    }
}

/// Analyzes one channel vector into a tone set.
fn analyze_channel(
    wave: &[f64],
    plan: WindowPlan,
    spectrum: &SpectrumAnalyzer,
    sample_rate: u32,
) -> DetectedTones {
    let mut tones = DetectedTones::default();

    // No full window between the skipped head and tail means no blocks;
    // the channel then simply reports nothing.
    let end = wave.len().saturating_sub(plan.offset);
    let mut start = plan.offset;
    while start + plan.window < end {
        let power = spectrum.power_spectrum(&wave[start..start + plan.window]);
        extract_peaks(&power, sample_rate, &mut tones);
        start += plan.slide;
    }

    tones
}

/// Analyzes every channel of an interleaved PCM buffer.
///
/// Returns one [`DetectedTones`] per channel, in channel order.
pub fn analyze_buffer(pcm: &[u8], params: &AudioParams) -> Vec<DetectedTones> {
    let plan = WindowPlan::for_rate(params.sample_rate);
    let spectrum = SpectrumAnalyzer::new(plan.window);

    (0..params.channels)
        .map(|chan| {
            let wave = extract_channel(pcm, chan, params);
            analyze_channel(&wave, plan, &spectrum, params.sample_rate)
        })
        .collect()
}
