// Tests for the shared parameter block: snapshot semantics and visibility
// of edits across clones and threads.

use std::thread;

use phasetone_core::{SharedParams, ToneParams, DEFAULT_FREQ_HZ};

#[test]
fn defaults_match_the_documented_startup_state() {
    let p = ToneParams::default();
    assert_eq!(p.freq_left_hz, DEFAULT_FREQ_HZ);
    assert_eq!(p.freq_right_hz, DEFAULT_FREQ_HZ);
    assert_eq!(p.phase_offset_deg, 0.0);
    assert!(!p.mute_left);
    assert!(!p.mute_right);
}

#[test]
fn each_setter_touches_exactly_one_field() {
    let shared = SharedParams::default();

    shared.set_freq_left(993.0);
    let s = shared.snapshot();
    assert_eq!(s.freq_left_hz, 993.0);
    assert_eq!(s.freq_right_hz, DEFAULT_FREQ_HZ);
    assert_eq!(s.phase_offset_deg, 0.0);

    shared.set_phase_offset_deg(90.0);
    shared.set_mute_right(true);
    let s = shared.snapshot();
    assert_eq!(s.freq_left_hz, 993.0);
    assert_eq!(s.phase_offset_deg, 90.0);
    assert!(s.mute_right);
    assert!(!s.mute_left);
}

#[test]
fn snapshot_is_a_detached_copy() {
    let shared = SharedParams::default();
    let before = shared.snapshot();
    shared.set_freq_left(999.0);
    assert_eq!(before.freq_left_hz, DEFAULT_FREQ_HZ);
    assert_eq!(shared.snapshot().freq_left_hz, 999.0);
}

#[test]
fn clones_edit_the_same_block() {
    let a = SharedParams::default();
    let b = a.clone();
    b.set_mute_left(true);
    b.set_freq_right(523.25);
    let s = a.snapshot();
    assert!(s.mute_left);
    assert_eq!(s.freq_right_hz, 523.25);
}

#[test]
fn edits_from_another_thread_become_visible() {
    let shared = SharedParams::new(ToneParams::default());
    let writer = shared.clone();
    let handle = thread::spawn(move || {
        for hz in [500.0, 750.0, 1000.0] {
            writer.set_freq_left(hz);
        }
    });
    handle.join().expect("writer thread panicked");
    assert_eq!(shared.snapshot().freq_left_hz, 1000.0);
}
