extern crate sweepgen;

use sweepgen::sweep::{generate_sweep, SweepModel, SweepParams, Waveform};
use sweepgen::writer::{write_wav_file, WavFormat};

fn main() {
    std::fs::create_dir_all("out").expect("failed to create out/");

    // Rising sine chirp over the audible range
    let sine = SweepParams::new(20, 20_000, 5.0, Waveform::Sine);
    write_wav_file(
        "out/sweep_sine.wav",
        WavFormat::mono(sine.sample_rate as u32),
        &generate_sweep(&sine).expect("failed to generate"),
    )
    .expect("failed to write wav");

    // Same ramp, square shaped
    let square = SweepParams::new(20, 20_000, 5.0, Waveform::Square);
    write_wav_file(
        "out/sweep_square.wav",
        WavFormat::mono(square.sample_rate as u32),
        &generate_sweep(&square).expect("failed to generate"),
    )
    .expect("failed to write wav");

    // Falling sweep
    let falling = SweepParams::new(8_000, 100, 3.0, Waveform::Sine);
    write_wav_file(
        "out/sweep_falling.wav",
        WavFormat::mono(falling.sample_rate as u32),
        &generate_sweep(&falling).expect("failed to generate"),
    )
    .expect("failed to write wav");

    // The exact quadratic-phase alternative, audibly slower to climb than
    // the default direct model
    let mut exact = SweepParams::new(20, 20_000, 5.0, Waveform::Sine);
    exact.model = SweepModel::Integrated;
    write_wav_file(
        "out/sweep_integrated.wav",
        WavFormat::mono(exact.sample_rate as u32),
        &generate_sweep(&exact).expect("failed to generate"),
    )
    .expect("failed to write wav");
}
