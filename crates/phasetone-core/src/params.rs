//! Tone parameters shared between the control surface and the audio callback.
//!
//! The five scalars below are the only state both execution contexts touch.
//! They live behind a single mutex; the callback copies the whole group out
//! with [`SharedParams::snapshot`] at the top of each buffer and releases the
//! lock before any synthesis, so the worst case it can block a setter (or a
//! setter can block it) is the duration of a five-field copy.

use std::sync::{Arc, Mutex};

use crate::constants::DEFAULT_FREQ_HZ;

/// One generation of the shared parameter group.
///
/// Plain data: taking a snapshot detaches it from later setter calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneParams {
    /// Left channel frequency in Hz. Positive; the engine does not validate.
    pub freq_left_hz: f64,
    /// Right channel frequency in Hz. Positive; the engine does not validate.
    pub freq_right_hz: f64,
    /// Constant angular shift of the right channel, in degrees. Conceptually
    /// in [0, 360) but not clamped here; range policy belongs to the caller.
    pub phase_offset_deg: f64,
    pub mute_left: bool,
    pub mute_right: bool,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            freq_left_hz: DEFAULT_FREQ_HZ,
            freq_right_hz: DEFAULT_FREQ_HZ,
            phase_offset_deg: 0.0,
            mute_left: false,
            mute_right: false,
        }
    }
}

/// Cloneable handle to the shared parameter group.
///
/// Every clone refers to the same underlying state, so any number of control
/// threads can feed the one audio callback. Setters write a single field
/// under the lock and return; changes become audible at the start of the
/// next callback buffer, never mid-buffer.
#[derive(Debug, Clone, Default)]
pub struct SharedParams {
    inner: Arc<Mutex<ToneParams>>,
}

impl SharedParams {
    pub fn new(initial: ToneParams) -> Self {
        Self {
            inner: Arc::new(Mutex::new(initial)),
        }
    }

    /// Copy the current parameter group out, holding the lock only for the
    /// copy itself.
    pub fn snapshot(&self) -> ToneParams {
        *self.inner.lock().unwrap()
    }

    pub fn set_freq_left(&self, hz: f64) {
        self.inner.lock().unwrap().freq_left_hz = hz;
    }

    pub fn set_freq_right(&self, hz: f64) {
        self.inner.lock().unwrap().freq_right_hz = hz;
    }

    pub fn set_phase_offset_deg(&self, degrees: f64) {
        self.inner.lock().unwrap().phase_offset_deg = degrees;
    }

    pub fn set_mute_left(&self, mute: bool) {
        self.inner.lock().unwrap().mute_left = mute;
    }

    pub fn set_mute_right(&self, mute: bool) {
        self.inner.lock().unwrap().mute_right = mute;
    }
}
