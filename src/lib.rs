//! Generate linear frequency sweeps (chirps) and write them out as
//! uncompressed 16-bit PCM WAV files.
//!
//! The following generates a 10 second sine sweep from 20Hz to 20000Hz at a
//! 44100Hz sample rate and serializes it into an in-memory WAV container.
//!
//! ```
//! use std::io::Cursor;
//!
//! use sweepgen::sweep::{generate_sweep, SweepParams, Waveform};
//! use sweepgen::writer::{write_wav, WavFormat};
//!
//! let params = SweepParams::new(20, 20_000, 10.0, Waveform::Sine);
//! let samples = generate_sweep(&params).expect("failed to generate sweep");
//! assert_eq!(samples.len(), 441_000);
//!
//! let mut out = Cursor::new(Vec::new());
//! write_wav(&mut out, WavFormat::mono(44_100), &samples).expect("failed to write wav");
//! assert_eq!(out.get_ref().len(), 882_044);
//! ```
//!
//! See: `demos/sweep.rs`

pub mod errors;
pub mod sweep;
pub mod synthesizer;
pub mod wave;
pub mod writer;
