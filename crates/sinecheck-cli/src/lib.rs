//! sinecheck CLI
//!
//! Library half of the two command-line tools: `sinecheck-gen` writes a
//! WAV file full of known sinewaves to stdout, `sinecheck-analyze` reads a
//! WAV file from stdin and reports the dominant frequencies per channel,
//! optionally checking them against the deterministic tone layout the
//! generator uses.

pub mod commands;
