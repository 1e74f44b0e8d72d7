//! Channel deinterleaver.

use crate::params::AudioParams;

/// Extracts one channel from an interleaved PCM buffer as normalized f64
/// samples.
///
/// Sample `s` of channel `chan` sits at byte offset
/// `(s * channels + chan) * bytes_per_sample`; each value is a signed
/// little-endian integer of the configured width, divided by the
/// full-scale maximum for that width. No clipping, DC removal or
/// resampling happens here.
pub fn extract_channel(pcm: &[u8], chan: u16, params: &AudioParams) -> Vec<f64> {
    let bytes = params.bytes_per_sample();
    let offset = chan as usize * bytes;

    pcm.chunks_exact(params.frame_size())
        .map(|frame| decode_sample(&frame[offset..offset + bytes]))
        .collect()
}

/// Decodes one little-endian signed sample to [-1.0, 1.0].
fn decode_sample(raw: &[u8]) -> f64 {
    match raw.len() {
        2 => i16::from_le_bytes([raw[0], raw[1]]) as f64 / i16::MAX as f64,
        3 => {
            // Sign-extend the high byte to reach a 32-bit lane.
            let ext = if raw[2] & 0x80 != 0 { 0xFF } else { 0x00 };
            let value = i32::from_le_bytes([raw[0], raw[1], raw[2], ext]);
            value as f64 / 0x7FFFFF as f64
        }
        4 => i32::from_le_bytes([raw[0], raw[1], raw[2], raw[3]]) as f64 / i32::MAX as f64,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::AudioParams;

    fn params(channels: u16, bits: u16) -> AudioParams {
        AudioParams {
            channels,
            sample_rate: 48000,
            bits_per_sample: bits,
            duration_s: 3,
            freqs_per_chan: 0,
            samples_per_chan: 0,
        }
    }

    #[test]
    fn test_extract_16_bit_full_scale() {
        let pcm = [
            i16::MAX.to_le_bytes(),
            (-i16::MAX).to_le_bytes(),
            0i16.to_le_bytes(),
        ]
        .concat();
        let wave = extract_channel(&pcm, 0, &params(1, 16));
        assert_eq!(wave, vec![1.0, -1.0, 0.0]);
    }

    #[test]
    fn test_extract_picks_the_right_channel() {
        // Stereo 16-bit: left ramps up, right ramps down.
        let mut pcm = Vec::new();
        for s in 0i16..4 {
            pcm.extend_from_slice(&(s * 100).to_le_bytes());
            pcm.extend_from_slice(&(-s * 100).to_le_bytes());
        }
        let p = params(2, 16);
        let left = extract_channel(&pcm, 0, &p);
        let right = extract_channel(&pcm, 1, &p);
        assert_eq!(left.len(), 4);
        for s in 0..4 {
            assert!((left[s] - s as f64 * 100.0 / i16::MAX as f64).abs() < 1e-12);
            assert!((right[s] + s as f64 * 100.0 / i16::MAX as f64).abs() < 1e-12);
        }
    }

    #[test]
    fn test_extract_24_bit_sign_extension() {
        // 0x7FFFFF is full scale positive, 0xFFFFFF is -1, 0x800000 is the
        // most negative value.
        let pcm = vec![0xFF, 0xFF, 0x7F, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x80];
        let wave = extract_channel(&pcm, 0, &params(1, 24));
        assert_eq!(wave[0], 1.0);
        assert!((wave[1] + 1.0 / 0x7FFFFF as f64).abs() < 1e-15);
        assert!((wave[2] + 0x800000 as f64 / 0x7FFFFF as f64).abs() < 1e-12);
    }

    #[test]
    fn test_extract_32_bit_full_scale() {
        let pcm = [i32::MAX.to_le_bytes(), (-i32::MAX).to_le_bytes()].concat();
        let wave = extract_channel(&pcm, 0, &params(1, 32));
        assert_eq!(wave, vec![1.0, -1.0]);
    }
}
