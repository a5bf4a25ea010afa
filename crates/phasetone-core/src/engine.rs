//! Output device lifecycle and the real-time render callback.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use thiserror::Error;

use crate::constants::{CHANNELS, DEFAULT_SAMPLE_RATE_HZ};
use crate::oscillator::StereoOscillator;
use crate::params::SharedParams;

#[derive(Debug, Error)]
pub enum DeviceError {
    #[error("no default audio output device available")]
    NoDevice,
    #[error("failed to build output stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start output stream: {0}")]
    PlayStream(#[from] cpal::PlayStreamError),
}

/// Owns the output stream and the shared parameter block.
///
/// While running, the engine holds a `cpal::Stream` whose callback renders
/// from a [`StereoOscillator`] moved into the closure. [`stop`](ToneEngine::stop)
/// or drop releases the device; the next [`start`](ToneEngine::start) builds a
/// fresh oscillator, so playback always begins at phase 0 for both channels.
///
/// `cpal::Stream` is not `Send`, so the engine must live on the thread that
/// started it. Parameter setters only touch [`SharedParams`] and are safe to
/// call whether or not a stream is running; the callback picks the new values
/// up at its next buffer.
pub struct ToneEngine {
    params: SharedParams,
    sample_rate: u32,
    stream: Option<cpal::Stream>,
}

impl Default for ToneEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_RATE_HZ)
    }
}

impl ToneEngine {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            params: SharedParams::default(),
            sample_rate,
            stream: None,
        }
    }

    /// Open the default output device and start rendering.
    ///
    /// A no-op when already running, so repeated starts cannot reset the
    /// oscillator phases mid-playback.
    pub fn start(&mut self) -> Result<(), DeviceError> {
        if self.stream.is_some() {
            return Ok(());
        }

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(DeviceError::NoDevice)?;
        let config = cpal::StreamConfig {
            channels: CHANNELS,
            sample_rate: cpal::SampleRate(self.sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let params = self.params.clone();
        let mut oscillator = StereoOscillator::new(self.sample_rate);
        let stream = device.build_output_stream(
            &config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                let snapshot = params.snapshot();
                oscillator.render(&snapshot, data);
            },
            |err| log::error!("output stream error: {err}"),
            None,
        )?;
        stream.play()?;
        log::info!("output stream running at {} Hz", self.sample_rate);

        self.stream = Some(stream);
        Ok(())
    }

    /// Stop rendering and release the device. No-op when already stopped.
    pub fn stop(&mut self) {
        if let Some(stream) = self.stream.take() {
            // Best effort: dropping the stream releases the device either way.
            if let Err(err) = stream.pause() {
                log::warn!("failed to pause output stream: {err}");
            }
            log::info!("output stream stopped");
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.stream.is_some()
    }

    #[inline]
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Handle to the shared parameter block, e.g. for a control surface that
    /// outlives borrows of the engine.
    pub fn params(&self) -> SharedParams {
        self.params.clone()
    }

    pub fn set_freq_left(&self, hz: f64) {
        self.params.set_freq_left(hz);
    }

    pub fn set_freq_right(&self, hz: f64) {
        self.params.set_freq_right(hz);
    }

    pub fn set_phase_offset_deg(&self, degrees: f64) {
        self.params.set_phase_offset_deg(degrees);
    }

    pub fn set_mute_left(&self, mute: bool) {
        self.params.set_mute_left(mute);
    }

    pub fn set_mute_right(&self, mute: bool) {
        self.params.set_mute_right(mute);
    }
}

impl Drop for ToneEngine {
    fn drop(&mut self) {
        self.stop();
    }
}
