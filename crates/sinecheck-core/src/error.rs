//! Error types for the sinecheck core.

use thiserror::Error;

/// Result type for core operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors surfaced by header parsing, parameter validation, tone layout
/// and I/O.
///
/// Display strings match the diagnostics the tools print on stderr, so the
/// CLI layer can forward them verbatim.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Input ended before the fixed RIFF/fmt/data prologue, or a magic tag
    /// did not match.
    #[error("Malformed WAV file")]
    MalformedHeader,

    /// The format tag announces something other than plain PCM.
    #[error("Unsupported format tag: {tag} (PCM only)")]
    UnsupportedFormat {
        /// The format tag found in the header.
        tag: u16,
    },

    /// Sample width this engine does not handle.
    #[error("Unsupported: {bits} bits per sample")]
    UnsupportedBitsPerSample {
        /// The offending bits-per-sample value.
        bits: u16,
    },

    /// Zero channels, rate or payload, or a payload that is not a whole
    /// number of frames.
    #[error("Corrupted header ({channels} channels, {sample_rate} Hz, {data_size} B)")]
    CorruptedHeader {
        channels: u16,
        sample_rate: u32,
        data_size: u32,
    },

    /// Audio shorter than the minimum the analysis needs.
    #[error("Audio file too short ({duration_s} seconds)")]
    TooShort {
        /// Whole seconds of audio actually present.
        duration_s: u32,
    },

    /// The stream ended before the announced payload size arrived.
    #[error("Partial audio content: expected {expected} B, read {actual} B")]
    PartialData { expected: usize, actual: usize },

    /// The tone layout cannot fit the requested tone count between
    /// MIN_FREQ and the Nyquist frequency.
    #[error("Cannot generate sine waves: not enough range")]
    NotEnoughRange,

    /// Invalid generation parameter.
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AudioError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_param_helper() {
        let err = AudioError::invalid_param("rate", "must be at least 400 Hz");
        assert!(err.to_string().contains("rate"));
        assert!(err.to_string().contains("at least 400 Hz"));
    }

    #[test]
    fn test_malformed_header_message() {
        assert_eq!(AudioError::MalformedHeader.to_string(), "Malformed WAV file");
    }
}
