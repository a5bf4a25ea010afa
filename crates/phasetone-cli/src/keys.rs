//! Key bindings and the control state they edit.
//!
//! The engine accepts whatever values it is given; keeping frequencies inside
//! the audible band and the phase offset inside one turn is this module's job.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use phasetone_core::{
    DeviceError, ToneEngine, DEFAULT_FREQ_HZ, FREQ_STEP_COARSE_HZ, FREQ_STEP_HZ, FULL_TURN_DEG,
    MAX_FREQ_HZ, MIN_FREQ_HZ, PHASE_STEP_COARSE_DEG, PHASE_STEP_DEG,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlAction {
    Quit,
    ToggleRun,
    NudgeFreqLeft(f64),
    NudgeFreqRight(f64),
    NudgePhase(f64),
    ToggleMuteLeft,
    ToggleMuteRight,
    ZeroPhase,
}

/// Last values pushed to the engine, kept for display and for stepping.
///
/// The engine's parameter block is the authority for the audio thread; this
/// mirror exists so the UI can step and redraw without taking that lock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub freq_left_hz: f64,
    pub freq_right_hz: f64,
    pub phase_offset_deg: f64,
    pub mute_left: bool,
    pub mute_right: bool,
}

impl Default for Controls {
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

/// Pin into the audible band. `f64::max`/`min` drop a NaN operand, so a NaN
/// flag value lands on `MIN_FREQ_HZ` instead of passing through unclamped.
#[inline]
pub fn clamp_freq(hz: f64) -> f64 {
    hz.max(MIN_FREQ_HZ).min(MAX_FREQ_HZ)
}

/// Wrap into [0, 360). Unlike `%`, negative inputs land in range; non-finite
/// inputs fall back to a zero offset.
#[inline]
pub fn wrap_phase_deg(degrees: f64) -> f64 {
    if degrees.is_finite() {
        degrees.rem_euclid(FULL_TURN_DEG)
    } else {
        0.0
    }
}

pub fn action_for_key(key: &KeyEvent) -> Option<ControlAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(ControlAction::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(ControlAction::Quit),
        KeyCode::Char(' ') => Some(ControlAction::ToggleRun),
        KeyCode::Char('z') => Some(ControlAction::NudgeFreqLeft(-FREQ_STEP_HZ)),
        KeyCode::Char('x') => Some(ControlAction::NudgeFreqLeft(FREQ_STEP_HZ)),
        KeyCode::Char('Z') => Some(ControlAction::NudgeFreqLeft(-FREQ_STEP_COARSE_HZ)),
        KeyCode::Char('X') => Some(ControlAction::NudgeFreqLeft(FREQ_STEP_COARSE_HZ)),
        KeyCode::Char(',') => Some(ControlAction::NudgeFreqRight(-FREQ_STEP_HZ)),
        KeyCode::Char('.') => Some(ControlAction::NudgeFreqRight(FREQ_STEP_HZ)),
        KeyCode::Char('<') => Some(ControlAction::NudgeFreqRight(-FREQ_STEP_COARSE_HZ)),
        KeyCode::Char('>') => Some(ControlAction::NudgeFreqRight(FREQ_STEP_COARSE_HZ)),
        KeyCode::Left if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(ControlAction::NudgePhase(-PHASE_STEP_COARSE_DEG))
        }
        KeyCode::Right if key.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(ControlAction::NudgePhase(PHASE_STEP_COARSE_DEG))
        }
        KeyCode::Left => Some(ControlAction::NudgePhase(-PHASE_STEP_DEG)),
        KeyCode::Right => Some(ControlAction::NudgePhase(PHASE_STEP_DEG)),
        KeyCode::Char('l') => Some(ControlAction::ToggleMuteLeft),
        KeyCode::Char('r') => Some(ControlAction::ToggleMuteRight),
        KeyCode::Char('0') => Some(ControlAction::ZeroPhase),
        _ => None,
    }
}

/// Step the mirror, then push the result to the engine.
///
/// Only `ToggleRun` can fail; it is the one action that touches the device.
pub fn apply(
    action: ControlAction,
    controls: &mut Controls,
    engine: &mut ToneEngine,
) -> Result<(), DeviceError> {
    match action {
        ControlAction::Quit => {}
        ControlAction::ToggleRun => {
            if engine.is_running() {
                engine.stop();
            } else {
                engine.start()?;
            }
        }
        ControlAction::NudgeFreqLeft(step) => {
            controls.freq_left_hz = clamp_freq(controls.freq_left_hz + step);
            engine.set_freq_left(controls.freq_left_hz);
        }
        ControlAction::NudgeFreqRight(step) => {
            controls.freq_right_hz = clamp_freq(controls.freq_right_hz + step);
            engine.set_freq_right(controls.freq_right_hz);
        }
        ControlAction::NudgePhase(step) => {
            controls.phase_offset_deg = wrap_phase_deg(controls.phase_offset_deg + step);
            engine.set_phase_offset_deg(controls.phase_offset_deg);
        }
        ControlAction::ToggleMuteLeft => {
            controls.mute_left = !controls.mute_left;
            engine.set_mute_left(controls.mute_left);
        }
        ControlAction::ToggleMuteRight => {
            controls.mute_right = !controls.mute_right;
            engine.set_mute_right(controls.mute_right);
        }
        ControlAction::ZeroPhase => {
            controls.phase_offset_deg = 0.0;
            engine.set_phase_offset_deg(0.0);
        }
    }
    Ok(())
}

/// What the event loop owes the terminal after one key event.
#[derive(Debug, PartialEq)]
pub enum KeyOutcome {
    /// Not one of ours; the status line stays as it is.
    Idle,
    /// A control changed; the note carries any failure text for the redraw.
    Changed(String),
    Quit,
}

/// Map a key event to its action and apply it.
pub fn handle_key(key: &KeyEvent, controls: &mut Controls, engine: &mut ToneEngine) -> KeyOutcome {
    let Some(action) = action_for_key(key) else {
        return KeyOutcome::Idle;
    };
    if action == ControlAction::Quit {
        return KeyOutcome::Quit;
    }
    match apply(action, controls, engine) {
        Ok(()) => KeyOutcome::Changed(String::new()),
        Err(err) => KeyOutcome::Changed(format!("  ({err})")),
    }
}

/// Push every field of the mirror into the engine's parameter block.
pub fn push_all(controls: &Controls, engine: &ToneEngine) {
    engine.set_freq_left(controls.freq_left_hz);
    engine.set_freq_right(controls.freq_right_hz);
    engine.set_phase_offset_deg(controls.phase_offset_deg);
    engine.set_mute_left(controls.mute_left);
    engine.set_mute_right(controls.mute_right);
}

pub fn status_line(controls: &Controls, running: bool) -> String {
    let state = if running { "playing" } else { "stopped" };
    let left_tag = if controls.mute_left { " [muted]" } else { "" };
    let right_tag = if controls.mute_right { " [muted]" } else { "" };
    format!(
        "{state} | left {:.1} Hz{left_tag} | right {:.1} Hz{right_tag} | phase {:.1} deg",
        controls.freq_left_hz, controls.freq_right_hz, controls.phase_offset_deg
    )
}
