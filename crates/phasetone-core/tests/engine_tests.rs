// Engine lifecycle tests that pass with or without an audio device. The
// start tests assert the contract for whichever way the host answers;
// rendering itself needs real hardware and is exercised through the cli
// binary.

use phasetone_core::{ToneEngine, DEFAULT_FREQ_HZ, DEFAULT_SAMPLE_RATE_HZ};

#[test]
fn a_new_engine_is_stopped() {
    let engine = ToneEngine::default();
    assert!(!engine.is_running());
    assert_eq!(engine.sample_rate(), DEFAULT_SAMPLE_RATE_HZ);
}

#[test]
fn stop_without_a_stream_is_a_no_op() {
    let mut engine = ToneEngine::default();
    engine.stop();
    engine.stop();
    assert!(!engine.is_running());
}

#[test]
fn is_running_tracks_the_start_outcome() {
    let mut engine = ToneEngine::default();
    match engine.start() {
        Err(_) => assert!(
            !engine.is_running(),
            "a start that returned an error must not leave a live stream behind"
        ),
        Ok(()) => {
            assert!(engine.is_running());
            engine.stop();
            assert!(!engine.is_running());
        }
    }
}

#[test]
fn a_running_engine_ignores_a_second_start() {
    let mut engine = ToneEngine::default();
    if engine.start().is_err() {
        // Headless host; nothing to double-start.
        return;
    }
    assert!(engine.start().is_ok());
    assert!(engine.is_running());
    engine.stop();
    assert!(!engine.is_running());
}

#[test]
fn setters_take_effect_while_stopped() {
    let engine = ToneEngine::default();
    engine.set_freq_left(600.0);
    engine.set_freq_right(660.0);
    engine.set_phase_offset_deg(120.0);
    engine.set_mute_left(true);

    let s = engine.params().snapshot();
    assert_eq!(s.freq_left_hz, 600.0);
    assert_eq!(s.freq_right_hz, 660.0);
    assert_eq!(s.phase_offset_deg, 120.0);
    assert!(s.mute_left);
    assert!(!s.mute_right);
}

#[test]
fn params_handles_alias_the_engine_state() {
    let engine = ToneEngine::default();
    let handle = engine.params();
    handle.set_freq_left(1234.0);
    assert_eq!(engine.params().snapshot().freq_left_hz, 1234.0);
    assert_eq!(engine.params().snapshot().freq_right_hz, DEFAULT_FREQ_HZ);
}

#[test]
fn sample_rate_is_fixed_at_construction() {
    let engine = ToneEngine::new(48_000);
    assert_eq!(engine.sample_rate(), 48_000);
}
