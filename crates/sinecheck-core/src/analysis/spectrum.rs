//! Hann-windowed power spectrum of a real-valued block.

use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftPlanner};

/// Hann window factor for position `idx` in a block of `len` samples.
///
/// Tapers the block ends to limit the harmonics a discontinuous segment
/// would otherwise smear across the spectrum.
fn hann_window(val: f64, idx: usize, len: usize) -> f64 {
    val * 0.5 * (1.0 - (2.0 * std::f64::consts::PI * idx as f64 / len as f64).cos())
}

/// Forward FFT planned once for a fixed block size.
pub struct SpectrumAnalyzer {
    fft: Arc<dyn Fft<f64>>,
    size: usize,
}

impl SpectrumAnalyzer {
    /// Plans a forward transform for blocks of `size` samples.
    /// `size` must be a power of two.
    pub fn new(size: usize) -> Self {
        debug_assert!(size.is_power_of_two());
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(size),
            size,
        }
    }

    /// Computes the power spectrum of one block.
    ///
    /// The block is Hann-windowed into a scratch buffer (the input is left
    /// untouched, so callers can slide overlapping windows over one
    /// channel vector), transformed, and reduced to `size/2 + 1` power
    /// values: `P[0] = |Re X[0]|`, `P[k] = hypot(Re X[k], Im X[k])` for
    /// the interior bins, `P[size/2] = |Re X[size/2]|`.
    pub fn power_spectrum(&self, block: &[f64]) -> Vec<f64> {
        debug_assert_eq!(block.len(), self.size);

        let mut buffer: Vec<Complex<f64>> = block
            .iter()
            .enumerate()
            .map(|(i, &v)| Complex::new(hann_window(v, i, self.size), 0.0))
            .collect();

        self.fft.process(&mut buffer);

        let half = self.size / 2;
        let mut power = Vec::with_capacity(half + 1);
        power.push(buffer[0].re.abs());
        for bin in &buffer[1..half] {
            power.push(bin.norm());
        }
        power.push(buffer[half].re.abs());

        power
    }
}
