//! Shared stderr reporting helpers.

use sinecheck_core::AudioParams;

/// Prints the parameter banner both tools emit before doing any work.
///
/// Result output stays on stdout; everything here is diagnostic.
pub(crate) fn log_parameters(params: &AudioParams) {
    eprintln!("* Channels: {}", params.channels);
    eprintln!("* Sample rate: {} Hz", params.sample_rate);
    eprintln!("* Bits per sample: S{}_LE", params.bits_per_sample);
    eprintln!("* Duration: {} seconds", params.duration_s);
    if params.freqs_per_chan != 0 {
        eprintln!("* Frequencies per channel: {}", params.freqs_per_chan);
    }
}
