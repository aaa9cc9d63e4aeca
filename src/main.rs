use sweepgen::sweep::{generate_sweep, SweepParams, Waveform};
use sweepgen::writer::{write_wav_file, WavFormat};

fn main() {
    // 10 second sine sweep across the audible range, CD-quality mono
    let params = SweepParams::new(20, 20_000, 10.0, Waveform::Sine);
    let sweep = generate_sweep(&params).expect("failed to generate sweep");

    write_wav_file(
        "sweep.wav",
        WavFormat::mono(params.sample_rate as u32),
        &sweep,
    )
    .expect("failed to write wav");

    println!("Sweep WAV file has been written.");
}
