//! Peak extraction from a power spectrum into a per-channel tone set.

use crate::params::{FREQ_ACCURACY, MAX_FREQS_PER_CHAN, MIN_FREQ, POWER_NOISE_LEVEL};

/// Whether two frequencies count as the same tone.
pub fn within_accuracy(f1: u32, f2: u32) -> bool {
    f1.abs_diff(f2) <= FREQ_ACCURACY
}

/// Tones detected on one channel, in insertion order, plus the largest
/// peak threshold any accepted block produced.
///
/// The threshold doubles as a noise indicator: it stays at 0.0 on a
/// silent channel and is at least [`POWER_NOISE_LEVEL`] whenever the set
/// is non-empty.
#[derive(Debug, Clone, Default)]
pub struct DetectedTones {
    freqs: Vec<u32>,
    max_threshold: f64,
}

impl DetectedTones {
    /// Detected frequencies in detection order.
    pub fn freqs(&self) -> &[u32] {
        &self.freqs
    }

    /// Largest threshold seen across the channel's accepted blocks.
    pub fn max_threshold(&self) -> f64 {
        self.max_threshold
    }

    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }

    /// Whether `freq` is within [`FREQ_ACCURACY`] of a listed tone.
    fn contains_near(&self, freq: u32) -> bool {
        self.freqs.iter().any(|&f| within_accuracy(f, freq))
    }

    /// Inserts a tone unless a near-equal one is already listed.
    ///
    /// A full set refuses the insertion; that is reported on the
    /// diagnostic stream but is not an error.
    fn push(&mut self, freq: u32) {
        if self.freqs.len() >= MAX_FREQS_PER_CHAN {
            eprintln!("Maximum number of detected frequencies reached");
            return;
        }

        if !self.contains_near(freq) {
            self.freqs.push(freq);
        }
    }

    fn note_threshold(&mut self, threshold: f64) {
        if threshold > self.max_threshold {
            self.max_threshold = threshold;
        }
    }

    /// Builds a set from already-known tones, applying the usual
    /// deduplication and capacity rules.
    pub fn from_freqs(freqs: impl IntoIterator<Item = u32>, max_threshold: f64) -> Self {
        let mut tones = Self {
            freqs: Vec::new(),
            max_threshold,
        };
        for freq in freqs {
            tones.push(freq);
        }
        tones
    }
}

/// Extracts the dominant frequencies of one block's power spectrum into
/// `out`.
///
/// Only bins in `[MIN_FREQ * size / rate, size/2)` are scanned. The
/// threshold is half the band maximum; a block whose threshold falls
/// under [`POWER_NOISE_LEVEL`] contributes nothing. Each contiguous run
/// of bins above the threshold emits its highest bin as one tone (the
/// first bin wins a tie), converted to Hz with truncating division. A run
/// that is still above the threshold when the scan ends emits nothing.
pub fn extract_peaks(power: &[f64], sample_rate: u32, out: &mut DetectedTones) {
    let size = (power.len() - 1) * 2;
    let band_start = (MIN_FREQ as u64 * size as u64 / sample_rate as u64) as usize;
    let band_end = power.len() - 1; // Nyquist bin excluded

    let mut maximum = 0.0f64;
    for k in band_start..band_end {
        if power[k] > maximum {
            maximum = power[k];
        }
    }

    let threshold = maximum / 2.0;
    if threshold < POWER_NOISE_LEVEL {
        return;
    }
    out.note_threshold(threshold);

    let mut above = false;
    let mut local_max = 0.0f64;
    let mut local_max_idx = 0usize;
    for k in band_start..band_end {
        if power[k] > threshold {
            above = true;
            if power[k] > local_max {
                local_max = power[k];
                local_max_idx = k;
            }
        } else {
            if above {
                let frequency =
                    (sample_rate as u64 * local_max_idx as u64 / size as u64) as u32;
                out.push(frequency);
            }
            above = false;
            local_max = 0.0;
        }
    }
}
