//! End-to-end coverage of the fixed-parameter scenario: a 10 second
//! 20Hz..20000Hz sine sweep at 44100Hz, serialized as mono 16-bit WAV.

use std::io::Cursor;

use lazy_static::lazy_static;

use sweepgen::sweep::{generate_sweep, SweepParams, Waveform};
use sweepgen::writer::{read_wav, read_wav_file, write_wav, write_wav_file, WavFormat};

lazy_static! {
    static ref FULL_RANGE_SWEEP: Vec<i16> = {
        let params = SweepParams::new(20, 20_000, 10.0, Waveform::Sine);
        generate_sweep(&params).unwrap()
    };
}

#[test]
fn full_range_sweep_has_the_expected_length() {
    assert_eq!(FULL_RANGE_SWEEP.len(), 441_000);
    // t = 0 means zero phase, so the sine starts silent
    assert_eq!(FULL_RANGE_SWEEP[0], 0);
}

#[test]
fn full_range_sweep_serializes_to_the_expected_size() {
    let mut out = Cursor::new(Vec::new());
    write_wav(&mut out, WavFormat::mono(44_100), &FULL_RANGE_SWEEP[..]).unwrap();
    let bytes = out.into_inner();

    assert_eq!(bytes.len(), 882_044);
    // ChunkSize counts everything after itself: 36 + 882000
    assert_eq!(&bytes[4..8], &882_036u32.to_le_bytes());
    assert_eq!(&bytes[40..44], &882_000u32.to_le_bytes());
}

#[test]
fn nominal_frequency_ramps_up_monotonically() {
    let params = SweepParams::new(20, 20_000, 10.0, Waveform::Sine);
    let mut previous = params.frequency_at(0.0);
    assert_eq!(previous, 20.0);

    for i in 1..441_000usize {
        let f = params.frequency_at(i as f64 / 44_100.0);
        assert!(f > previous);
        previous = f;
    }
}

#[test]
fn the_container_round_trips_in_memory() {
    let format = WavFormat::mono(44_100);
    let mut out = Cursor::new(Vec::new());
    write_wav(&mut out, format, &FULL_RANGE_SWEEP[..]).unwrap();
    out.set_position(0);

    let wave = read_wav(&mut out).unwrap();
    assert_eq!(wave.format, format);
    assert_eq!(wave.pcm, *FULL_RANGE_SWEEP);
}

#[test]
fn the_container_round_trips_through_a_file() {
    let path = std::env::temp_dir().join("sweepgen_round_trip.wav");

    let params = SweepParams::new(440, 440, 0.1, Waveform::Square);
    let samples = generate_sweep(&params).unwrap();
    let format = WavFormat::mono(params.sample_rate as u32);

    write_wav_file(&path, format, &samples).unwrap();
    let wave = read_wav_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(wave.format, format);
    assert_eq!(wave.pcm, samples);
}
