//! WAV header parsing and payload reading.

use std::io::{self, Read};

use crate::error::{AudioError, AudioResult};

use super::format::{WavHeader, HEADER_LEN, WAVE_FORMAT_PCM};

/// Parses the fixed 44-byte prologue.
///
/// The magic tags and the format tag are validated; the numeric fields are
/// taken at face value. `file_len`, `avg_bytes_per_sec` and `block_align`
/// are ignored entirely (recorders routinely leave them wrong or at
/// `u32::MAX`).
///
/// # Errors
/// [`AudioError::MalformedHeader`] if the input is shorter than the
/// prologue or a tag does not match; [`AudioError::UnsupportedFormat`] for
/// non-PCM format tags.
pub fn parse_header(bytes: &[u8]) -> AudioResult<WavHeader> {
    if bytes.len() < HEADER_LEN {
        return Err(AudioError::MalformedHeader);
    }

    if &bytes[0..4] != b"RIFF"
        || &bytes[8..12] != b"WAVE"
        || &bytes[12..16] != b"fmt "
        || &bytes[36..40] != b"data"
    {
        return Err(AudioError::MalformedHeader);
    }

    let format_tag = u16::from_le_bytes([bytes[20], bytes[21]]);
    if format_tag != WAVE_FORMAT_PCM {
        return Err(AudioError::UnsupportedFormat { tag: format_tag });
    }

    Ok(WavHeader {
        channels: u16::from_le_bytes([bytes[22], bytes[23]]),
        sample_rate: u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
        bits_per_sample: u16::from_le_bytes([bytes[34], bytes[35]]),
        data_size: u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]),
    })
}

/// Reads a complete WAV stream: the prologue, then exactly `data_size`
/// bytes of PCM.
///
/// Trailing bytes after the payload are left unread. A stream that ends
/// inside the prologue is malformed; one that ends inside the payload
/// yields [`AudioError::PartialData`] with the byte counts.
pub fn read_wav<R: Read>(reader: &mut R) -> AudioResult<(WavHeader, Vec<u8>)> {
    let mut prologue = [0u8; HEADER_LEN];
    if read_fully(reader, &mut prologue)? < HEADER_LEN {
        return Err(AudioError::MalformedHeader);
    }

    let header = parse_header(&prologue)?;

    let expected = header.data_size as usize;
    let mut data = vec![0u8; expected];
    let actual = read_fully(reader, &mut data)?;
    if actual < expected {
        return Err(AudioError::PartialData { expected, actual });
    }

    Ok((header, data))
}

/// Fills `buf` from `reader`; returns the byte count, which is short of
/// `buf.len()` only at end of stream.
fn read_fully<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
