pub mod constants;
pub mod engine;
pub mod oscillator;
pub mod params;

pub use constants::*;
pub use engine::{DeviceError, ToneEngine};
pub use oscillator::StereoOscillator;
pub use params::{SharedParams, ToneParams};
