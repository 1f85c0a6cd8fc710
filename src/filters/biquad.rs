//! Biquad band-pass section.
//!
//! Uses the standard biquad difference equation with coefficients from Robert
//! Bristow-Johnson's Audio EQ Cookbook (band-pass, constant 0 dB peak gain).
//! The filter wraps either an unbounded `Signal` or a finite sample stream
//! (`Iterator<Item = f64>`); a filtered finite stream ends when its source does.

use crate::{AudioSignal, Signal};

/// A second-order band-pass filter over an input signal or stream.
///
/// # Examples
///
/// ```
/// use koch::{Signal, SineOscillator, filters::BiquadFilter};
///
/// let tone = SineOscillator::<48000>::new(770.0);
/// let mut filter = BiquadFilter::<48000, _>::bandpass(tone, 770.0, 1.925);
/// assert!(filter.next_sample().is_finite());
/// ```
pub struct BiquadFilter<const SAMPLE_RATE: u32, S> {
    source: S,
    center: f64,
    q: f64,

    // Previous inputs and outputs
    x1: f64,
    x2: f64,
    y1: f64,
    y2: f64,

    // Normalized coefficients; b1 is always zero for a band-pass
    b0: f64,
    b2: f64,
    a1: f64,
    a2: f64,
}

impl<const SAMPLE_RATE: u32, S> BiquadFilter<SAMPLE_RATE, S> {
    /// Creates a band-pass section.
    ///
    /// # Arguments
    ///
    /// * `source` - Input signal or stream
    /// * `center` - Center frequency in Hz, clamped below Nyquist
    /// * `q` - Q factor (center / bandwidth). Higher = narrower band.
    pub fn bandpass(source: S, center: f64, q: f64) -> Self {
        use std::f64::consts::PI;

        let q = q.max(0.001);
        let sample_rate = SAMPLE_RATE as f64;
        let center = center.clamp(1.0, sample_rate * 0.49);

        let omega = 2.0 * PI * center / sample_rate;
        let alpha = omega.sin() / (2.0 * q);
        let a0 = 1.0 + alpha;

        Self {
            source,
            center,
            q,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
            b0: alpha / a0,
            b2: -alpha / a0,
            a1: -2.0 * omega.cos() / a0,
            a2: (1.0 - alpha) / a0,
        }
    }

    /// Center frequency in Hz after clamping.
    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    fn filter(&mut self, x0: f64) -> f64 {
        // y[n] = b0*x[n] + b2*x[n-2] - a1*y[n-1] - a2*y[n-2]
        let y0 = self.b0 * x0 + self.b2 * self.x2 - self.a1 * self.y1 - self.a2 * self.y2;

        self.x2 = self.x1;
        self.x1 = x0;
        self.y2 = self.y1;
        self.y1 = y0;

        y0
    }
}

impl<const SAMPLE_RATE: u32, S: Signal> Signal for BiquadFilter<SAMPLE_RATE, S> {
    fn next_sample(&mut self) -> f64 {
        let x0 = self.source.next_sample();
        self.filter(x0)
    }
}

impl<const SAMPLE_RATE: u32, S: AudioSignal<SAMPLE_RATE>> AudioSignal<SAMPLE_RATE>
    for BiquadFilter<SAMPLE_RATE, S>
{
}

impl<const SAMPLE_RATE: u32, S: Iterator<Item = f64>> Iterator for BiquadFilter<SAMPLE_RATE, S> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let x0 = self.source.next()?;
        Some(self.filter(x0))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}
