//! Linear frequency sweep (chirp) generation.
//!
//! A sweep ramps its nominal frequency linearly from `start_frequency` to
//! `end_frequency` over `duration` seconds. Every sample is computed from
//! absolute time, so generation is a pure function of the parameters.
//!
//! ```
//! use sweepgen::sweep::{generate_sweep, SweepParams, Waveform};
//!
//! let params = SweepParams::new(20, 20_000, 1.0, Waveform::Sine);
//! let samples = generate_sweep(&params).unwrap();
//! assert_eq!(samples.len(), 44_100);
//! ```

use std::f64::consts::PI;

use crate::errors::{Result, SweepError};
use crate::synthesizer::quantize_samples;

/// Sample rate used when none is given, in Hz.
pub const DEFAULT_SAMPLE_RATE: usize = 44_100;

/// Waveform shape of the generated sweep.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Waveform {
    Sine,
    Square,
}

impl Waveform {
    /// Normalized amplitude for a phase angle in radians.
    ///
    /// Square flattens the sine to `1.0` where it is strictly positive and
    /// `-1.0` everywhere else; `sin θ == 0` lands on `-1.0`.
    fn amplitude(self, angle: f64) -> f64 {
        match self {
            Waveform::Sine => angle.sin(),
            Waveform::Square => {
                if angle.sin() > 0.0 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

/// How the instantaneous phase of a sweep is computed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SweepModel {
    /// `θ(t) = 2π·f(t)·t`, re-deriving the frequency from absolute time at
    /// every sample instead of integrating a running phase. The effective
    /// sweep bends away from the nominal linear ramp as `t` grows; this is
    /// the historical output of this generator and stays the default.
    Direct,
    /// `θ(t) = 2π·(f0·t + step·t²/2)`, the exact integral of the linear
    /// ramp, for a mathematically true linear sweep.
    Integrated,
}

/// Parameters for one sweep invocation.
///
/// `start_frequency` and `end_frequency` may be equal (a constant tone) or
/// in either order (a rising or falling sweep). The sample rate is carried
/// per invocation; there is no process-wide setting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepParams {
    /// Frequency at `t = 0`, in Hz.
    pub start_frequency: u32,
    /// Nominal frequency at `t = duration`, in Hz.
    pub end_frequency: u32,
    /// Sweep length in seconds.
    pub duration: f64,
    pub waveform: Waveform,
    /// Samples per second for this invocation.
    pub sample_rate: usize,
    pub model: SweepModel,
}

impl SweepParams {
    /// Creates parameters with the default 44100Hz sample rate and the
    /// `Direct` phase model.
    pub fn new(
        start_frequency: u32,
        end_frequency: u32,
        duration: f64,
        waveform: Waveform,
    ) -> SweepParams {
        SweepParams {
            start_frequency,
            end_frequency,
            duration,
            waveform,
            sample_rate: DEFAULT_SAMPLE_RATE,
            model: SweepModel::Direct,
        }
    }

    /// Frequency change per second over the sweep, in Hz. Negative for a
    /// falling sweep, zero for a constant tone.
    pub fn frequency_step(&self) -> f64 {
        (f64::from(self.end_frequency) - f64::from(self.start_frequency)) / self.duration
    }

    /// Nominal instantaneous frequency at `t` seconds, in Hz.
    pub fn frequency_at(&self, t: f64) -> f64 {
        f64::from(self.start_frequency) + self.frequency_step() * t
    }

    /// Phase angle at `t` seconds, in radians, under the configured model.
    pub fn phase_at(&self, t: f64) -> f64 {
        match self.model {
            SweepModel::Direct => t * self.frequency_at(t) * 2.0 * PI,
            SweepModel::Integrated => {
                let half_ramp = self.frequency_step() * t / 2.0;
                t * (f64::from(self.start_frequency) + half_ramp) * 2.0 * PI
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return Err(SweepError::Parameter(format!(
                "duration must be a positive number of seconds, got {}",
                self.duration
            )));
        }
        if self.sample_rate == 0 {
            return Err(SweepError::Parameter(
                "sample rate must be positive".to_string(),
            ));
        }
        if self.start_frequency == 0 || self.end_frequency == 0 {
            return Err(SweepError::Parameter(format!(
                "frequencies must be positive, got {}Hz..{}Hz",
                self.start_frequency, self.end_frequency
            )));
        }
        Ok(())
    }
}

/// Generates the raw, un-quantized samples of a sweep.
///
/// The buffer holds `floor(sample_rate × duration)` samples; a duration too
/// short to cover a single sample instant yields an empty buffer, not an
/// error. Degenerate parameters (non-positive duration, zero sample rate or
/// frequency) are rejected up front.
pub fn sweep_samples(params: &SweepParams) -> Result<Vec<f64>> {
    params.validate()?;

    let num_samples = (params.sample_rate as f64 * params.duration).floor() as usize;
    let mut samples: Vec<f64> = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let t = i as f64 / params.sample_rate as f64;
        samples.push(params.waveform.amplitude(params.phase_at(t)));
    }

    Ok(samples)
}

/// Generates a sweep quantized to signed 16-bit samples, ready for
/// `crate::writer::write_wav`.
///
/// ```
/// use sweepgen::sweep::{generate_sweep, SweepParams, Waveform};
///
/// let params = SweepParams::new(440, 880, 0.5, Waveform::Square);
/// let samples = generate_sweep(&params).unwrap();
/// assert_eq!(samples.len(), 22_050);
/// ```
pub fn generate_sweep(params: &SweepParams) -> Result<Vec<i16>> {
    Ok(quantize_samples::<i16>(&sweep_samples(params)?))
}
