//! WAV header parameters.

/// Length of the fixed RIFF + `fmt ` + `data` prologue in bytes.
pub const HEADER_LEN: usize = 44;

/// Format tag for plain PCM.
pub const WAVE_FORMAT_PCM: u16 = 1;

/// Payload size of the `fmt ` chunk for plain PCM.
const FMT_CHUNK_SIZE: u32 = 16;

/// The header fields this engine reads and writes.
///
/// `file_len`, `avg_bytes_per_sec` and `block_align` are derived on write
/// and ignored on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// Number of interleaved channels.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample (16, 24 or 32).
    pub bits_per_sample: u16,
    /// Size of the PCM payload in bytes.
    pub data_size: u32,
}

impl WavHeader {
    /// Bytes per sample on one channel.
    pub fn bytes_per_sample(&self) -> usize {
        self.bits_per_sample as usize / 8
    }

    /// Bytes per frame (one sample on every channel).
    pub fn frame_size(&self) -> usize {
        self.channels as usize * self.bytes_per_sample()
    }

    /// Block align field (bytes per frame).
    pub(crate) fn block_align(&self) -> u16 {
        self.channels * (self.bits_per_sample / 8)
    }

    /// Byte rate field (bytes per second).
    pub(crate) fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    /// Serializes the fixed prologue, mirroring the offsets
    /// [`parse_header`](super::parse_header) reads them back from.
    ///
    /// `file_len` counts everything after the first eight bytes, so a
    /// header whose `data_size` matches the payload yields a standard
    /// RIFF file.
    pub fn prologue(&self) -> [u8; HEADER_LEN] {
        let riff_len = HEADER_LEN as u32 - 8 + self.data_size;

        let mut out = [0u8; HEADER_LEN];
        out[0..4].copy_from_slice(b"RIFF");
        out[4..8].copy_from_slice(&riff_len.to_le_bytes());
        out[8..12].copy_from_slice(b"WAVE");
        out[12..16].copy_from_slice(b"fmt ");
        out[16..20].copy_from_slice(&FMT_CHUNK_SIZE.to_le_bytes());
        out[20..22].copy_from_slice(&WAVE_FORMAT_PCM.to_le_bytes());
        out[22..24].copy_from_slice(&self.channels.to_le_bytes());
        out[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[28..32].copy_from_slice(&self.byte_rate().to_le_bytes());
        out[32..34].copy_from_slice(&self.block_align().to_le_bytes());
        out[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        out[36..40].copy_from_slice(b"data");
        out[40..44].copy_from_slice(&self.data_size.to_le_bytes());
        out
    }
}
