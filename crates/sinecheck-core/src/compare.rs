//! Detected-vs-expected tone comparison.

use crate::analysis::{within_accuracy, DetectedTones};

/// Outcome for one expected tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A detected tone lies within the accuracy window; `diff` is the
    /// signed error of that tone against the expected one, in Hz.
    Match { diff: i64 },
    /// No detected tone is close enough.
    Miss,
}

/// Comparison result for one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelComparison {
    /// One `(expected_tone, verdict)` pair per expected tone, in layout
    /// order.
    pub expected: Vec<(u32, Verdict)>,
    /// Detected tones that match no expected tone, in detection order.
    pub spurious: Vec<u32>,
}

/// Diffs one channel's detected set against its expected tone list.
///
/// Purely descriptive: verdicts never affect the analyzer's exit status.
pub fn compare_channel(detected: &DetectedTones, expected: &[u32]) -> ChannelComparison {
    let expected = expected
        .iter()
        .map(|&e| {
            let verdict = match detected.freqs().iter().find(|&&d| within_accuracy(d, e)) {
                Some(&d) => Verdict::Match {
                    diff: d as i64 - e as i64,
                },
                None => Verdict::Miss,
            };
            (e, verdict)
        })
        .collect();

    let spurious = detected
        .freqs()
        .iter()
        .copied()
        .filter(|&d| !expected_matches(&expected, d))
        .collect();

    ChannelComparison { expected, spurious }
}

fn expected_matches(expected: &[(u32, Verdict)], detected: u32) -> bool {
    expected.iter().any(|&(e, _)| within_accuracy(detected, e))
}
