// Sanity checks on the tuning constants and their relationships.

use phasetone_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn frequency_band_is_ordered_and_contains_the_default() {
    assert!(MIN_FREQ_HZ > 0.0);
    assert!(MIN_FREQ_HZ < MAX_FREQ_HZ);
    assert!(DEFAULT_FREQ_HZ >= MIN_FREQ_HZ && DEFAULT_FREQ_HZ <= MAX_FREQ_HZ);

    // Nyquist: the whole band must be representable at the default rate
    assert!(MAX_FREQ_HZ * 2.0 <= f64::from(DEFAULT_SAMPLE_RATE_HZ));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn steps_are_positive_and_coarse_exceeds_fine() {
    assert!(FREQ_STEP_HZ > 0.0);
    assert!(FREQ_STEP_COARSE_HZ > FREQ_STEP_HZ);
    assert!(PHASE_STEP_DEG > 0.0);
    assert!(PHASE_STEP_COARSE_DEG > PHASE_STEP_DEG);
    assert!(PHASE_STEP_COARSE_DEG < FULL_TURN_DEG);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn output_is_stereo() {
    assert_eq!(CHANNELS, 2);
    assert_eq!(FULL_TURN_DEG, 360.0);
}
