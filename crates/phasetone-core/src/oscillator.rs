//! Phase-continuous stereo sine pair.

use std::f64::consts::TAU;

use crate::params::ToneParams;

/// Two continuously-running sine oscillators on one sample clock.
///
/// The phase accumulators live here and nowhere else. In production the
/// oscillator is moved into the audio callback closure, which makes the
/// accumulators exclusive to the real-time thread by construction; callback
/// invocations are strictly sequential, so they need no synchronization.
/// A freshly constructed oscillator starts both channels at phase 0.
#[derive(Debug, Clone)]
pub struct StereoOscillator {
    sample_rate: u32,
    phase_left: f64,
    phase_right: f64,
}

impl StereoOscillator {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            phase_left: 0.0,
            phase_right: 0.0,
        }
    }

    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Left accumulator in radians, kept in `[0, TAU)` between buffers.
    #[inline]
    pub fn phase_left(&self) -> f64 {
        self.phase_left
    }

    /// Right accumulator in radians, kept in `[0, TAU)` between buffers.
    #[inline]
    pub fn phase_right(&self) -> f64 {
        self.phase_right
    }

    /// Fill one stereo-interleaved buffer of `out.len() / 2` frames.
    ///
    /// Each sample's phase is an offset from the accumulator at the start of
    /// the buffer rather than a per-sample accumulation, so concatenated
    /// buffers of any size form one continuous waveform:
    ///
    /// `left[i]  = sin(TAU * f_left  * i/sr + phase_left)`
    /// `right[i] = sin(TAU * f_right * i/sr + phase_right + offset)`
    ///
    /// with `offset` being `phase_offset_deg` in radians. A muted channel
    /// writes zeros for the whole buffer while its accumulator keeps
    /// advancing, so un-muting resumes with the phase an uninterrupted run
    /// would have had.
    ///
    /// The end-of-buffer advance uses the frequencies `params` held on
    /// entry; a frequency change lands exactly on the next buffer's first
    /// sample, with no partial-buffer ramp. The step at the boundary can be
    /// audible.
    pub fn render(&mut self, params: &ToneParams, out: &mut [f32]) {
        let sr = f64::from(self.sample_rate);
        let offset_rad = params.phase_offset_deg.to_radians();

        let mut frames_mut = out.chunks_exact_mut(2);
        for (i, frame) in (&mut frames_mut).enumerate() {
            let t = i as f64 / sr;
            let left = (TAU * params.freq_left_hz * t + self.phase_left).sin();
            let right = (TAU * params.freq_right_hz * t + self.phase_right + offset_rad).sin();
            frame[0] = if params.mute_left { 0.0 } else { left as f32 };
            frame[1] = if params.mute_right { 0.0 } else { right as f32 };
        }
        // An odd trailing sample cannot form a frame; silence it.
        for sample in frames_mut.into_remainder() {
            *sample = 0.0;
        }

        let frames = out.len() / 2;
        let elapsed = frames as f64 / sr;
        self.phase_left = (self.phase_left + TAU * params.freq_left_hz * elapsed) % TAU;
        self.phase_right = (self.phase_right + TAU * params.freq_right_hz * elapsed) % TAU;
    }
}
