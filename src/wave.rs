//! Fixed-frequency waveform generators.
//!
//! Each function returns a closure over time `t` (in seconds) yielding the
//! normalized amplitude in `[-1.0, 1.0]` at that instant. Sweeps reuse the
//! same amplitude mapping via `crate::sweep::Waveform`.

use std::f64::consts::PI;

/// Returns a sine wave function at `frequency` Hz.
///
/// ```
/// use sweepgen::wave::sine_wave;
///
/// let tone = sine_wave(440.0);
/// assert_eq!(tone(0.0), 0.0);
/// ```
pub fn sine_wave(frequency: f64) -> impl Fn(f64) -> f64 + Copy {
    move |t: f64| -> f64 { (t * frequency * 2.0 * PI).sin() }
}

/// Returns a square wave function at `frequency` Hz.
///
/// The output is `1.0` where the underlying sine is strictly positive and
/// `-1.0` everywhere else, including the zero crossings themselves.
///
/// ```
/// use sweepgen::wave::square_wave;
///
/// let tone = square_wave(440.0);
/// assert_eq!(tone(0.0), -1.0);
/// ```
pub fn square_wave(frequency: f64) -> impl Fn(f64) -> f64 + Copy {
    move |t: f64| -> f64 {
        let sine = sine_wave(frequency)(t);
        if sine > 0.0 {
            1.0
        } else {
            -1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_starts_a_sine_at_zero() {
        let sine = sine_wave(440.0);
        assert_eq!(sine(0.0), 0.0);
    }

    #[test]
    fn it_squares_off_a_sine() {
        // 1Hz, so t = 0.25 is the positive peak and t = 0.75 the negative one
        let square = square_wave(1.0);
        assert_eq!(square(0.25), 1.0);
        assert_eq!(square(0.75), -1.0);
    }

    #[test]
    fn it_maps_the_zero_crossing_low() {
        let square = square_wave(1.0);
        assert_eq!(square(0.0), -1.0);
    }
}
