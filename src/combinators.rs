//! Signal combinators.
//!
//! Keying only needs one combinator: a fixed gain that places tones at their
//! playback level.

use crate::{AudioSignal, Signal};

/// Scales a signal by a fixed factor.
///
/// # Examples
///
/// ```
/// use koch::{Signal, SineOscillator, combinators::Gain};
///
/// let osc = SineOscillator::<48000>::new(770.0);
/// let mut quieter = Gain { source: osc, gain: 0.5 };
/// assert!(quieter.next_sample().abs() <= 0.5);
/// ```
pub struct Gain<S: Signal> {
    pub source: S,
    pub gain: f64,
}

impl<S: Signal> Signal for Gain<S> {
    fn next_sample(&mut self) -> f64 {
        self.source.next_sample() * self.gain
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>> AudioSignal<SAMPLE_RATE> for Gain<S> {}

/// Extension trait providing combinator methods on any Signal.
pub trait SignalExt: Signal + Sized {
    /// Applies a linear gain factor to this signal.
    fn gain(self, gain: f64) -> Gain<Self> {
        Gain { source: self, gain }
    }
}

// Blanket implementation for all Signal types
impl<T: Signal> SignalExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gain() {
        let mut gain = Gain {
            source: 2.0_f64,
            gain: 0.5,
        };
        assert_eq!(gain.next_sample(), 1.0);
    }

    #[test]
    fn test_signal_ext_gain_chaining() {
        let mut signal = 2.0_f64.gain(0.5).gain(3.0);
        assert_eq!(signal.next_sample(), 3.0);
    }
}
