//! Sample primitives: tones, silences, cropping and level changes.
//!
//! These are the building blocks the keyer assembles into Morse audio. Tones
//! are unbounded signals; `crop` and `silence` produce bounded streams that end
//! after a whole number of frames.

use super::AudioSignal;
use crate::Signal;
use crate::combinators::{Gain, SignalExt};
use crate::oscillators::SineOscillator;

/// Number of frames covering `seconds` at `SAMPLE_RATE`.
///
/// Durations are rounded to the nearest frame. Negative and non-finite
/// durations produce zero frames.
pub fn sample_count<const SAMPLE_RATE: u32>(seconds: f64) -> usize {
    let frames = (seconds * SAMPLE_RATE as f64).round();
    if frames.is_finite() && frames > 0.0 {
        frames as usize
    } else {
        0
    }
}

/// Converts a decibel level change into a linear amplitude factor.
pub fn db_to_gain(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// An unbounded full-scale sine tone.
pub fn tone<const SAMPLE_RATE: u32>(frequency: f64) -> SineOscillator<SAMPLE_RATE> {
    SineOscillator::new(frequency)
}

/// A bounded run of zero samples lasting `seconds`.
pub fn silence<const SAMPLE_RATE: u32>(seconds: f64) -> Silence {
    Silence {
        remaining: sample_count::<SAMPLE_RATE>(seconds),
    }
}

/// Limits an unbounded signal to `seconds` worth of samples.
pub fn crop<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>>(source: S, seconds: f64) -> Crop<S> {
    Crop {
        source,
        remaining: sample_count::<SAMPLE_RATE>(seconds),
    }
}

/// Scales a signal by `db` decibels.
pub fn volume<S: Signal>(source: S, db: f64) -> Gain<S> {
    source.gain(db_to_gain(db))
}

/// A finite stream of zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Silence {
    remaining: usize,
}

impl Iterator for Silence {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(0.0)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Silence {}

/// The first `n` samples of an unbounded signal, as a finite stream.
pub struct Crop<S: Signal> {
    source: S,
    remaining: usize,
}

impl<S: Signal> Iterator for Crop<S> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        Some(self.source.next_sample())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Signal> ExactSizeIterator for Crop<S> {}
