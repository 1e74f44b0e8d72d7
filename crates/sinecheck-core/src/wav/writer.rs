//! WAV emission and PCM interleaving.

use std::io::{self, Write};

use crate::error::{AudioError, AudioResult};

use super::format::{WavHeader, HEADER_LEN};

/// Writes a complete WAV file: the prologue for `header`, then the
/// payload. `header.data_size` must match `pcm_data.len()`.
pub fn write_wav<W: Write>(writer: &mut W, header: &WavHeader, pcm_data: &[u8]) -> io::Result<()> {
    writer.write_all(&header.prologue())?;
    writer.write_all(pcm_data)
}

/// Writes a complete WAV file to a byte vector.
pub fn write_wav_to_vec(header: &WavHeader, pcm_data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    out.extend_from_slice(&header.prologue());
    out.extend_from_slice(pcm_data);
    out
}

/// Interleaves per-channel f64 waves into 16-bit PCM bytes.
///
/// Samples are expected in [-1.0, 1.0]; each is scaled by `i16::MAX` and
/// truncated toward zero.
pub fn interleave_pcm16(waves: &[Vec<f64>]) -> Vec<u8> {
    let samples = waves.iter().map(Vec::len).min().unwrap_or(0);
    let mut pcm = Vec::with_capacity(samples * waves.len() * 2);

    for s in 0..samples {
        for wave in waves {
            let value = (wave[s] * i16::MAX as f64) as i16;
            pcm.extend_from_slice(&value.to_le_bytes());
        }
    }

    pcm
}

/// Interleaves per-channel f64 waves into 32-bit PCM bytes.
pub fn interleave_pcm32(waves: &[Vec<f64>]) -> Vec<u8> {
    let samples = waves.iter().map(Vec::len).min().unwrap_or(0);
    let mut pcm = Vec::with_capacity(samples * waves.len() * 4);

    for s in 0..samples {
        for wave in waves {
            let value = (wave[s] * i32::MAX as f64) as i32;
            pcm.extend_from_slice(&value.to_le_bytes());
        }
    }

    pcm
}

/// Interleaves per-channel waves into PCM of the requested width.
///
/// # Errors
/// [`AudioError::UnsupportedBitsPerSample`] for widths the generator does
/// not emit (only 16 and 32 bits are produced).
pub fn interleave_to_pcm(waves: &[Vec<f64>], bits_per_sample: u16) -> AudioResult<Vec<u8>> {
    match bits_per_sample {
        16 => Ok(interleave_pcm16(waves)),
        32 => Ok(interleave_pcm32(waves)),
        bits => Err(AudioError::UnsupportedBitsPerSample { bits }),
    }
}
