//! Evaluate waveform functions into sample buffers and quantize them for
//! serialization.
//!
//! The following generates a 0.1s long, 16-bit, 440Hz sine tone at a 44100Hz
//! sample rate, then writes the samples into a WAV file at `out/sine.wav`.
//!
//! ```no_run
//! use sweepgen::synthesizer::{make_samples, quantize_samples};
//! use sweepgen::wave::sine_wave;
//! use sweepgen::writer::{write_wav_file, WavFormat};
//!
//! write_wav_file(
//!     "out/sine.wav",
//!     WavFormat::mono(44_100),
//!     &quantize_samples::<i16>(&make_samples(0.1, 44_100, sine_wave(440.0))),
//! ).expect("failed to write wav");
//! ```

use num::traits::{Bounded, FromPrimitive, Num, ToPrimitive, Zero};

/// Quantizes a `f64` sample in `[-1.0, 1.0]` into `T`.
///
/// The input is scaled by `T::max_value()` and truncated toward zero, so
/// `1.0` maps to `T::max_value()` and `-1.0` to `-T::max_value()` (one level
/// above `T::min_value()` for two's-complement types).
///
/// ```
/// use sweepgen::synthesizer::quantize;
///
/// assert_eq!(quantize::<i16>(1.0f64), 32_767i16);
/// assert_eq!(quantize::<i16>(-1.0f64), -32_767i16);
/// assert_eq!(quantize::<i8>(1.0f64), 127i8);
/// ```
pub fn quantize<T>(input: f64) -> T
where
    T: Num + Bounded + FromPrimitive + ToPrimitive + Zero,
{
    let scale = T::max_value().to_f64().unwrap_or(0.0);
    // defaults to 0 on quantization failure for whatever reason
    T::from_f64((input * scale).trunc()).unwrap_or_else(T::zero)
}

/// Quantizes a slice of `f64` samples into `Vec<T>`.
///
/// ```
/// use sweepgen::synthesizer::{make_samples, quantize_samples};
/// use sweepgen::wave::sine_wave;
///
/// quantize_samples::<i16>(&make_samples(1.0, 44_100, sine_wave(440.0)));
/// ```
pub fn quantize_samples<T>(input: &[f64]) -> Vec<T>
where
    T: Num + Bounded + FromPrimitive + ToPrimitive + Zero,
{
    input.iter().map(|s| quantize::<T>(*s)).collect()
}

/// Given a waveform function, returns a `Vec<f64>` of raw samples (not
/// normalised or quantised)
///
/// `length` is in seconds, `sample_rate` in hertz (eg `44_100`). The buffer
/// holds `floor(sample_rate * length)` samples; a length too short to cover a
/// single sample instant yields an empty buffer.
///
/// ```
/// use sweepgen::synthesizer::make_samples;
/// use sweepgen::wave;
///
/// let sine = make_samples(0.1, 44_100, |t| (t * 440.0 * 2.0 * 3.14159).sin());
/// let square = make_samples(0.1, 44_100, wave::square_wave(440.0));
/// ```
pub fn make_samples<F>(length: f64, sample_rate: usize, waveform: F) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let num_samples = (sample_rate as f64 * length).floor() as usize;
    let mut samples: Vec<f64> = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f64 / sample_rate as f64;
        samples.push(waveform(t));
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wave::sine_wave;

    #[test]
    fn it_quantizes() {
        assert_eq!(quantize::<i16>(1.0), i16::max_value());
        assert_eq!(quantize::<i16>(-1.0), -i16::max_value());
        assert_eq!(quantize::<i16>(0.0), 0);
        // 0.5 * 32767 = 16383.5, truncated toward zero
        assert_eq!(quantize::<i16>(0.5), 16_383);
        assert_eq!(quantize::<i16>(-0.5), -16_383);
        assert_eq!(quantize::<i8>(1.0), i8::max_value());
    }

    #[test]
    fn it_makes_samples() {
        // 0.25Hz at 1Hz: quarter-cycle steps, sin(pi) carries float residue
        let samples = make_samples(4.0, 1, sine_wave(0.25));
        assert_eq!(
            samples,
            vec![0.0, 1.0, 1.2246467991473532e-16, -1.0]
        );
    }

    #[test]
    fn it_makes_an_empty_buffer_for_subsample_lengths() {
        let samples = make_samples(1e-6, 44_100, sine_wave(440.0));
        assert!(samples.is_empty());
    }
}
