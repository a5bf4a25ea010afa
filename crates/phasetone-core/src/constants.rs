// Shared engine/control-surface tuning constants.

// Stream format
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 44_100;
pub const CHANNELS: u16 = 2; // left = interference path A, right = path B

// Startup parameters
pub const DEFAULT_FREQ_HZ: f64 = 440.0;

// Control-surface range policy (the engine itself never clamps)
pub const MIN_FREQ_HZ: f64 = 1.0;
pub const MAX_FREQ_HZ: f64 = 20_000.0;
pub const FULL_TURN_DEG: f64 = 360.0;

// Keyboard step sizes
pub const FREQ_STEP_HZ: f64 = 1.0;
pub const FREQ_STEP_COARSE_HZ: f64 = 10.0;
pub const PHASE_STEP_DEG: f64 = 5.0;
pub const PHASE_STEP_COARSE_DEG: f64 = 45.0;
