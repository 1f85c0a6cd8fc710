//! Sine wave oscillator implementation.

use crate::{AudioSignal, Signal};
use std::f64::consts::PI;

/// A sine wave oscillator used as the Morse tone source.
///
/// Generates a continuous full-scale sine wave starting at phase zero, so every
/// keyed element begins at a zero crossing.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 48000)
pub struct SineOscillator<const SAMPLE_RATE: u32> {
    /// Current phase of the oscillator (0.0 to 1.0)
    phase: f64,
    /// Phase increment per sample (frequency / sample_rate)
    phase_increment: f64,
}

impl<const SAMPLE_RATE: u32> SineOscillator<SAMPLE_RATE> {
    /// Creates a new sine oscillator.
    ///
    /// # Arguments
    ///
    /// * `frequency` - Frequency of the sine wave in Hz
    ///
    /// # Examples
    ///
    /// ```
    /// use koch::{Signal, SineOscillator};
    ///
    /// let mut osc = SineOscillator::<48000>::new(770.0);
    /// assert_eq!(osc.next_sample(), 0.0);
    /// ```
    pub fn new(frequency: f64) -> Self {
        Self {
            phase: 0.0,
            phase_increment: frequency / SAMPLE_RATE as f64,
        }
    }

    /// Gets the frequency of the oscillator in Hz.
    pub fn frequency(&self) -> f64 {
        self.phase_increment * SAMPLE_RATE as f64
    }
}

impl<const SAMPLE_RATE: u32> Signal for SineOscillator<SAMPLE_RATE> {
    fn next_sample(&mut self) -> f64 {
        let sample = (self.phase * 2.0 * PI).sin();

        // Increment phase and wrap to [0.0, 1.0)
        self.phase += self.phase_increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }

        sample
    }
}

impl<const SAMPLE_RATE: u32> AudioSignal<SAMPLE_RATE> for SineOscillator<SAMPLE_RATE> {}
