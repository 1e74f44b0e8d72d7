//! End-to-end round trip: generate a tone WAV in memory, analyze it, and
//! check every expected tone comes back with no strays.

use sinecheck_core::{
    analyze_buffer, compare_channel, read_wav, synth::synth_waves, wav::interleave_to_pcm,
    wav::write_wav_to_vec, AudioParams, ToneLayout, Verdict, WavHeader, FREQ_ACCURACY,
    POWER_NOISE_LEVEL,
};

/// Generates a complete WAV byte stream for the given parameters.
fn generate_wav(params: &AudioParams) -> Vec<u8> {
    let layout = ToneLayout::new(params).unwrap();
    let waves = synth_waves(&layout, params);
    let pcm = interleave_to_pcm(&waves, params.bits_per_sample).unwrap();
    let header = WavHeader {
        channels: params.channels,
        sample_rate: params.sample_rate,
        bits_per_sample: params.bits_per_sample,
        data_size: pcm.len() as u32,
    };
    write_wav_to_vec(&header, &pcm)
}

/// Feeds generated bytes back through the reader and analyzer, then checks
/// the comparator verdicts channel by channel.
fn assert_round_trip(channels: u16, sample_rate: u32, bits: u16, duration_s: u32, freqs: u32) {
    let gen_params =
        AudioParams::for_generation(channels, sample_rate, bits, duration_s, freqs).unwrap();
    let wav = generate_wav(&gen_params);

    let (header, data) = read_wav(&mut wav.as_slice()).unwrap();
    let params = AudioParams::from_header(&header, freqs).unwrap();
    assert_eq!(params.samples_per_chan, gen_params.samples_per_chan);

    let layout = ToneLayout::new(&params).unwrap();
    let detected = analyze_buffer(&data, &params);

    for c in 0..channels {
        let tones = &detected[c as usize];
        assert!(
            tones.max_threshold() >= POWER_NOISE_LEVEL,
            "channel {c} threshold {}",
            tones.max_threshold()
        );

        let cmp = compare_channel(tones, layout.channel(c));
        for &(e, verdict) in &cmp.expected {
            match verdict {
                Verdict::Match { diff } => {
                    assert!(
                        diff.unsigned_abs() <= FREQ_ACCURACY as u64,
                        "channel {c}, {e} Hz off by {diff}"
                    );
                }
                Verdict::Miss => panic!("channel {c} missed {e} Hz"),
            }
        }
        assert!(
            cmp.spurious.is_empty(),
            "channel {c} spurious tones: {:?}",
            cmp.spurious
        );
    }
}

#[test]
fn mono_single_tone_round_trip() {
    assert_round_trip(1, 48000, 32, 5, 1);
}

#[test]
fn stereo_four_tone_round_trip() {
    assert_round_trip(2, 48000, 32, 10, 4);
}

#[test]
fn sixteen_bit_round_trip() {
    assert_round_trip(2, 44100, 16, 5, 3);
}

#[test]
fn low_rate_round_trip() {
    assert_round_trip(1, 8000, 32, 5, 4);
}

#[test]
fn injected_tone_shows_up_as_spurious() {
    // Scenario: a 10 kHz stray rides on top of the expected four-tone set.
    let params = AudioParams::for_generation(1, 48000, 32, 5, 4).unwrap();
    let layout = ToneLayout::new(&params).unwrap();
    assert_eq!(layout.channel(0), &[200, 6150, 12100, 18050]);

    let mut tones: Vec<u32> = layout.channel(0).to_vec();
    tones.push(10000);
    let wave = sinecheck_core::synth::synth_channel(&tones, &params);
    let pcm = interleave_to_pcm(&[wave], 32).unwrap();

    let detected = analyze_buffer(&pcm, &params);
    let cmp = compare_channel(&detected[0], layout.channel(0));

    for &(e, verdict) in &cmp.expected {
        assert!(
            matches!(verdict, Verdict::Match { .. }),
            "expected tone {e} Hz went missing"
        );
    }
    assert_eq!(cmp.spurious.len(), 1);
    assert!(cmp.spurious[0].abs_diff(10000) <= FREQ_ACCURACY);
}

#[test]
fn silent_wav_analyzes_clean() {
    let header = WavHeader {
        channels: 1,
        sample_rate: 48000,
        bits_per_sample: 32,
        data_size: 48000 * 5 * 4,
    };
    let wav = write_wav_to_vec(&header, &vec![0u8; header.data_size as usize]);

    let (header, data) = read_wav(&mut wav.as_slice()).unwrap();
    let params = AudioParams::from_header(&header, 0).unwrap();
    let detected = analyze_buffer(&data, &params);
    assert!(detected[0].is_empty());
    assert_eq!(detected[0].max_threshold(), 0.0);
}
