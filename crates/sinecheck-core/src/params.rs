//! Audio parameter record and shared constants.

use crate::error::{AudioError, AudioResult};
use crate::wav::WavHeader;

/// Lowest frequency considered during analysis and layout, in Hz.
pub const MIN_FREQ: u32 = 200;

/// Shortest audio the engine accepts, in whole seconds.
pub const MIN_DURATION_S: u32 = 3;

/// Upper bound on detected tones per channel.
pub const MAX_FREQS_PER_CHAN: usize = 64;

/// Minimum block threshold below which a block's peaks are discarded.
/// Arbitrary unit (unnormalized DFT magnitude).
pub const POWER_NOISE_LEVEL: f64 = 5.0;

/// Tolerance for "same frequency" comparisons, in Hz.
pub const FREQ_ACCURACY: u32 = 1;

/// Immutable parameters of one generation or analysis run.
///
/// Built through [`AudioParams::for_generation`] or
/// [`AudioParams::from_header`], which perform all validation; once
/// constructed, the record never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioParams {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (16, 24 or 32).
    pub bits_per_sample: u16,
    /// Duration in whole seconds.
    pub duration_s: u32,
    /// Tones per channel; 0 on the analysis path when no comparison was
    /// requested.
    pub freqs_per_chan: u32,
    /// Samples per channel.
    pub samples_per_chan: usize,
}

impl AudioParams {
    /// Builds parameters for the generator.
    ///
    /// # Errors
    /// Rejects zero channel/tone counts, sample rates below `2 * MIN_FREQ`,
    /// sample widths other than 16 or 32 bits, and durations below
    /// [`MIN_DURATION_S`].
    pub fn for_generation(
        channels: u16,
        sample_rate: u32,
        bits_per_sample: u16,
        duration_s: u32,
        freqs_per_chan: u32,
    ) -> AudioResult<Self> {
        if channels == 0 {
            return Err(AudioError::invalid_param("channels", "must be nonzero"));
        }
        if freqs_per_chan == 0 {
            return Err(AudioError::invalid_param("freqs", "must be nonzero"));
        }
        if sample_rate < 2 * MIN_FREQ {
            return Err(AudioError::invalid_param(
                "rate",
                format!("{sample_rate} Hz is below the {} Hz minimum", 2 * MIN_FREQ),
            ));
        }
        if bits_per_sample != 16 && bits_per_sample != 32 {
            return Err(AudioError::UnsupportedBitsPerSample {
                bits: bits_per_sample,
            });
        }
        if duration_s < MIN_DURATION_S {
            return Err(AudioError::TooShort { duration_s });
        }

        Ok(Self {
            channels,
            sample_rate,
            bits_per_sample,
            duration_s,
            freqs_per_chan,
            samples_per_chan: sample_rate as usize * duration_s as usize,
        })
    }

    /// Builds parameters for the analyzer from a parsed WAV header.
    ///
    /// The header's numeric fields are authoritative; this only checks
    /// internal consistency. `freqs_per_chan` is the `-f` argument, or 0
    /// when no comparison was requested.
    ///
    /// # Errors
    /// Rejects zero channels/rate/payload, payloads that are not a whole
    /// number of frames, unsupported sample widths, and audio shorter than
    /// [`MIN_DURATION_S`].
    pub fn from_header(header: &WavHeader, freqs_per_chan: u32) -> AudioResult<Self> {
        if header.channels == 0 || header.sample_rate == 0 || header.data_size == 0 {
            return Err(AudioError::CorruptedHeader {
                channels: header.channels,
                sample_rate: header.sample_rate,
                data_size: header.data_size,
            });
        }

        match header.bits_per_sample {
            16 | 24 | 32 => {}
            bits => return Err(AudioError::UnsupportedBitsPerSample { bits }),
        }

        if header.data_size % header.frame_size() as u32 != 0 {
            return Err(AudioError::CorruptedHeader {
                channels: header.channels,
                sample_rate: header.sample_rate,
                data_size: header.data_size,
            });
        }

        let samples_per_chan = header.data_size as usize / header.frame_size();
        let duration_s = (samples_per_chan / header.sample_rate as usize) as u32;
        if duration_s < MIN_DURATION_S {
            return Err(AudioError::TooShort { duration_s });
        }

        Ok(Self {
            channels: header.channels,
            sample_rate: header.sample_rate,
            bits_per_sample: header.bits_per_sample,
            duration_s,
            freqs_per_chan,
            samples_per_chan,
        })
    }

    /// Bytes per sample on one channel.
    pub fn bytes_per_sample(&self) -> usize {
        self.bits_per_sample as usize / 8
    }

    /// Bytes per frame (one sample on every channel).
    pub fn frame_size(&self) -> usize {
        self.channels as usize * self.bytes_per_sample()
    }

    /// Total payload size in bytes.
    pub fn data_size(&self) -> usize {
        self.samples_per_chan * self.frame_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::WavHeader;

    fn header(channels: u16, sample_rate: u32, bits: u16, data_size: u32) -> WavHeader {
        WavHeader {
            channels,
            sample_rate,
            bits_per_sample: bits,
            data_size,
        }
    }

    #[test]
    fn test_generation_params() {
        let params = AudioParams::for_generation(2, 48000, 32, 10, 4).unwrap();
        assert_eq!(params.samples_per_chan, 480_000);
        assert_eq!(params.frame_size(), 8);
        assert_eq!(params.data_size(), 3_840_000);
    }

    #[test]
    fn test_generation_rejects_low_rate() {
        let err = AudioParams::for_generation(1, 399, 32, 5, 1).unwrap_err();
        assert!(matches!(err, AudioError::InvalidParameter { name: "rate", .. }));
        // 400 Hz is exactly 2 * MIN_FREQ and passes.
        AudioParams::for_generation(1, 400, 32, 5, 1).unwrap();
    }

    #[test]
    fn test_generation_rejects_24_bit() {
        let err = AudioParams::for_generation(1, 48000, 24, 5, 1).unwrap_err();
        assert!(matches!(err, AudioError::UnsupportedBitsPerSample { bits: 24 }));
    }

    #[test]
    fn test_generation_rejects_short_duration() {
        let err = AudioParams::for_generation(1, 48000, 32, 2, 1).unwrap_err();
        assert!(matches!(err, AudioError::TooShort { duration_s: 2 }));
    }

    #[test]
    fn test_header_params() {
        // 2 channels, 32-bit, 5 seconds at 48 kHz.
        let h = header(2, 48000, 32, 48000 * 5 * 8);
        let params = AudioParams::from_header(&h, 0).unwrap();
        assert_eq!(params.samples_per_chan, 240_000);
        assert_eq!(params.duration_s, 5);
        assert_eq!(params.freqs_per_chan, 0);
    }

    #[test]
    fn test_header_rejects_zero_fields() {
        for h in [
            header(0, 48000, 32, 1024),
            header(2, 0, 32, 1024),
            header(2, 48000, 32, 0),
        ] {
            let err = AudioParams::from_header(&h, 0).unwrap_err();
            assert!(matches!(err, AudioError::CorruptedHeader { .. }));
        }
    }

    #[test]
    fn test_header_rejects_ragged_payload() {
        // 7 bytes cannot be a whole number of 8-byte frames.
        let h = header(2, 48000, 32, 48000 * 5 * 8 + 7);
        let err = AudioParams::from_header(&h, 0).unwrap_err();
        assert!(matches!(err, AudioError::CorruptedHeader { .. }));
    }

    #[test]
    fn test_header_rejects_odd_bit_width() {
        let h = header(1, 48000, 8, 48000 * 5);
        let err = AudioParams::from_header(&h, 0).unwrap_err();
        assert!(matches!(err, AudioError::UnsupportedBitsPerSample { bits: 8 }));
    }

    #[test]
    fn test_header_rejects_short_audio() {
        // Just under 3 seconds of mono 16-bit audio.
        let h = header(1, 48000, 16, (48000 * 3 - 2) * 2);
        let err = AudioParams::from_header(&h, 0).unwrap_err();
        assert!(matches!(err, AudioError::TooShort { duration_s: 2 }));
    }

    #[test]
    fn test_header_accepts_24_bit() {
        let h = header(1, 48000, 24, 48000 * 3 * 3);
        let params = AudioParams::from_header(&h, 0).unwrap();
        assert_eq!(params.bytes_per_sample(), 3);
        assert_eq!(params.duration_s, 3);
    }
}
