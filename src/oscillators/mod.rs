//! Oscillator implementations.
//!
//! Morse tones are pure sine waves, so this module only carries the sine
//! oscillator.

mod sine;

pub use sine::SineOscillator;
