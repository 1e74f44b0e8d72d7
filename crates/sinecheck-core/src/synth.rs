//! Sinewave synthesis for the generator.

use std::f64::consts::PI;

use crate::layout::ToneLayout;
use crate::params::AudioParams;

/// Synthesizes one channel as the sum of its tones.
///
/// `w[s] = sum_f sin(2 pi f s / rate) / tone_count`; dividing by the tone
/// count keeps the sum inside [-1.0, 1.0].
pub fn synth_channel(freqs: &[u32], params: &AudioParams) -> Vec<f64> {
    let rate = params.sample_rate as f64;

    (0..params.samples_per_chan)
        .map(|s| {
            let sum: f64 = freqs
                .iter()
                .map(|&f| (2.0 * PI * f as f64 * s as f64 / rate).sin())
                .sum();
            sum / freqs.len() as f64
        })
        .collect()
}

/// Synthesizes every channel of a layout.
pub fn synth_waves(layout: &ToneLayout, params: &AudioParams) -> Vec<Vec<f64>> {
    (0..params.channels)
        .map(|c| synth_channel(layout.channel(c), params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ToneLayout;

    fn params() -> AudioParams {
        AudioParams::for_generation(1, 48000, 32, 3, 1).unwrap()
    }

    #[test]
    fn test_single_tone_samples() {
        let wave = synth_channel(&[200], &params());
        assert_eq!(wave.len(), 144_000);
        for s in [0usize, 1, 17, 240, 100_000] {
            let expected = (2.0 * PI * 200.0 * s as f64 / 48000.0).sin();
            assert!((wave[s] - expected).abs() < 1e-12, "sample {s}");
        }
    }

    #[test]
    fn test_sum_is_normalized() {
        let wave = synth_channel(&[200, 6150, 12100, 18050], &params());
        assert!(wave.iter().all(|&v| (-1.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_waves_follow_layout() {
        let p = AudioParams::for_generation(2, 48000, 32, 3, 2).unwrap();
        let layout = ToneLayout::new(&p).unwrap();
        let waves = synth_waves(&layout, &p);
        assert_eq!(waves.len(), 2);
        // Channels carry different tone sets, so the waves differ.
        assert_ne!(waves[0], waves[1]);
    }
}
