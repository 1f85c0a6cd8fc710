//! Core signal trait.
//!
//! This module provides the `Signal` trait for unbounded sample sources such as
//! oscillators. Bounded sample streams (a single dit, a run of silence, a whole
//! encoded message) are plain `Iterator<Item = f64>` values and are produced
//! from signals by cropping.

/// Common interface for unbounded signal sources.
///
/// A signal never runs out: every call to `next_sample()` yields another value.
/// Use [`crop`](crate::signals::crop) to turn a signal into a finite stream.
pub trait Signal {
    /// Generates the next sample from the signal.
    ///
    /// # Returns
    ///
    /// A sample value, typically between -1.0 and 1.0 for audio signals
    fn next_sample(&mut self) -> f64;
}

/// Implementation of `Signal` for `f64` representing a constant signal value.
///
/// # Examples
///
/// ```
/// use koch::Signal;
///
/// let mut constant = 0.5_f64;
/// assert_eq!(constant.next_sample(), 0.5);
/// assert_eq!(constant.next_sample(), 0.5);
/// ```
impl Signal for f64 {
    fn next_sample(&mut self) -> f64 {
        *self
    }
}
