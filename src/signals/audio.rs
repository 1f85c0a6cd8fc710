//! Audio signal traits and extensions for sample-rate-aware signals.

use super::primitives::{Crop, crop};
use crate::Signal;
use crate::combinators::Gain;

/// Common interface for anything that can be played as audio.
///
/// This trait extends `Signal` to add the sample rate at the type level. The
/// sample rate is encoded as a const generic parameter, so a 48 kHz tone cannot
/// be cropped or filtered as if it were a 44.1 kHz one.
///
/// # Type Parameters
///
/// * `SAMPLE_RATE` - Sample rate in Hz (e.g., 48000)
///
/// # Examples
///
/// ```
/// use koch::{AudioSignal, SineOscillator};
///
/// let osc: SineOscillator<48000> = SineOscillator::new(770.0);
/// assert_eq!(osc.sample_rate(), 48000.0);
/// ```
pub trait AudioSignal<const SAMPLE_RATE: u32>: Signal {
    /// Gets the sample rate at which this audio is being generated.
    fn sample_rate(&self) -> f64 {
        SAMPLE_RATE as f64
    }
}

/// Extension trait providing level and length adapters for audio signals.
///
/// Automatically implemented for every `AudioSignal`, so the sample rate never
/// has to be passed by hand.
///
/// # Examples
///
/// ```
/// use koch::{AudioSignalExt, SineOscillator};
///
/// let dit: Vec<f64> = SineOscillator::<48000>::new(770.0)
///     .volume(-3.0)
///     .crop(0.06)
///     .collect();
/// assert_eq!(dit.len(), 2880);
/// ```
pub trait AudioSignalExt<const SAMPLE_RATE: u32>: AudioSignal<SAMPLE_RATE> + Sized {
    /// Scales this signal by a level change in decibels.
    ///
    /// # Arguments
    ///
    /// * `db` - Level change, e.g. `-3.0` for roughly 0.708x amplitude
    fn volume(self, db: f64) -> Gain<Self> {
        super::primitives::volume(self, db)
    }

    /// Limits this signal to `seconds` worth of samples.
    fn crop(self, seconds: f64) -> Crop<Self> {
        crop::<SAMPLE_RATE, Self>(self, seconds)
    }
}

// Blanket implementation for all AudioSignal types
impl<T: AudioSignal<SAMPLE_RATE>, const SAMPLE_RATE: u32> AudioSignalExt<SAMPLE_RATE> for T {}
