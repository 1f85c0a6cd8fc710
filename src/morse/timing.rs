//! ARRL Farnsworth timing.
//!
//! Speeds are defined by the word "PARIS", 50 dit units long including its
//! trailing word space, so one dit lasts `1.2 / wpm` seconds. Farnsworth timing
//! sends characters at the character speed (CWPM) and stretches the gaps between
//! letters and words until the overall rate drops to the requested WPM. See the
//! ARRL "Morse Code: The Essential Language" timing appendix.

use super::plan::Segment;
use crate::error::{MorseError, MorseResult};

/// Overall speed used when nothing else is configured.
pub const DEFAULT_WPM: f64 = 20.0;

/// Character speed floor recommended by the ARRL for Farnsworth practice.
pub const ARRL_FARNSWORTH_LIMIT: f64 = 18.0;

/// Durations, in seconds, of every element of Morse timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timings {
    /// A dot.
    pub dit: f64,
    /// A dash, always three dits.
    pub dah: f64,
    /// Silence between the elements of one character.
    pub inter_symbol: f64,
    /// Silence between characters.
    pub inter_letter: f64,
    /// Silence standing for a space between words.
    pub inter_word: f64,
}

impl Timings {
    /// Farnsworth timings for `wpm` overall with characters sent at `cwpm`.
    ///
    /// `cwpm` defaults to `wpm` and is never allowed below it.
    ///
    /// # Examples
    ///
    /// ```
    /// use koch::Timings;
    ///
    /// let timings = Timings::farnsworth(10.0, Some(18.0)).unwrap();
    /// assert!((timings.dit - 1.2 / 18.0).abs() < 1e-12);
    /// assert!(timings.inter_letter > 3.0 * timings.dit);
    /// ```
    pub fn farnsworth(wpm: f64, cwpm: Option<f64>) -> MorseResult<Self> {
        let cwpm = cwpm.unwrap_or(wpm).max(wpm);
        let degenerate = || MorseError::DegenerateTiming { wpm, cwpm };

        if !wpm.is_finite() || wpm <= 0.0 || !cwpm.is_finite() {
            return Err(degenerate());
        }

        let timings = Self::compute(wpm, cwpm);
        if !(timings.inter_letter.is_finite() && timings.inter_letter > 0.0) {
            return Err(degenerate());
        }
        Ok(timings)
    }

    /// Timings for `wpm`, switching to Farnsworth spacing below `farnsworth_limit`.
    ///
    /// Characters are sent at `max(farnsworth_limit, wpm)`. Passing `None`
    /// disables Farnsworth spacing so characters and gaps share one speed.
    pub fn wpm(wpm: f64, farnsworth_limit: Option<f64>) -> MorseResult<Self> {
        let cwpm = match farnsworth_limit {
            Some(limit) => limit.max(wpm),
            None => wpm,
        };
        Self::farnsworth(wpm, Some(cwpm))
    }

    fn compute(wpm: f64, cwpm: f64) -> Self {
        let dit = 1.2 / cwpm;
        let t_a = (60.0 * cwpm - 37.2 * wpm) / (cwpm * wpm);

        Self {
            dit,
            dah: 3.0 * dit,
            inter_symbol: dit,
            inter_letter: 3.0 * t_a / 19.0,
            inter_word: 7.0 * t_a / 19.0,
        }
    }

    /// Length of one segment in seconds.
    pub fn duration(&self, segment: Segment) -> f64 {
        match segment {
            Segment::Dot => self.dit,
            Segment::Dash => self.dah,
            Segment::InterSymbolSilence => self.inter_symbol,
            Segment::InterLetterSilence => self.inter_letter,
            Segment::Space => self.inter_word,
        }
    }

    /// Total length of a sequence of segments in seconds.
    pub fn duration_of(&self, segments: impl IntoIterator<Item = Segment>) -> f64 {
        segments.into_iter().map(|s| self.duration(s)).sum()
    }
}

impl Default for Timings {
    /// 20 WPM with the ARRL Farnsworth limit, which sends plain 20 WPM.
    fn default() -> Self {
        Self::compute(DEFAULT_WPM, ARRL_FARNSWORTH_LIMIT.max(DEFAULT_WPM))
    }
}

/// Farnsworth timings; see [`Timings::farnsworth`].
pub fn farnsworth(wpm: f64, cwpm: Option<f64>) -> MorseResult<Timings> {
    Timings::farnsworth(wpm, cwpm)
}

/// Timings with the given Farnsworth limit; see [`Timings::wpm`].
pub fn wpm(wpm: f64, farnsworth_limit: Option<f64>) -> MorseResult<Timings> {
    Timings::wpm(wpm, farnsworth_limit)
}
