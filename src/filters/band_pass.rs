//! Band-pass stream transformer.

use super::BiquadFilter;

/// Three band-pass sections applied in series.
pub type Cascade<const SAMPLE_RATE: u32, S> =
    BiquadFilter<SAMPLE_RATE, BiquadFilter<SAMPLE_RATE, BiquadFilter<SAMPLE_RATE, S>>>;

/// Narrowest half-width a band is built with, in Hz.
pub const MIN_HALF_WIDTH: f64 = 1.0;

/// A pass band described by its center and half-width in Hz.
///
/// The band spans `center - half_width` to `center + half_width`, which maps to
/// a biquad Q of `center / (2 * half_width)`. Half-widths below
/// [`MIN_HALF_WIDTH`] are widened to it.
///
/// # Examples
///
/// ```
/// use koch::filters::band_pass;
/// use koch::signals::silence;
///
/// let bpf = band_pass(770.0, 200.0);
/// let filtered = bpf.apply::<48000, _>(silence::<48000>(0.1));
/// assert_eq!(filtered.count(), 4800);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandPass {
    center: f64,
    half_width: f64,
}

/// Creates a band-pass transformer centered on `center`.
pub fn band_pass(center: f64, half_width: f64) -> BandPass {
    BandPass::new(center, half_width)
}

impl BandPass {
    pub fn new(center: f64, half_width: f64) -> Self {
        Self { center, half_width }
    }

    pub fn center(&self) -> f64 {
        self.center
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    /// Q factor of a single section.
    pub fn q(&self) -> f64 {
        self.center / (2.0 * self.half_width.max(MIN_HALF_WIDTH))
    }

    /// Wraps `source` in one band-pass section.
    pub fn apply<const SAMPLE_RATE: u32, S>(&self, source: S) -> BiquadFilter<SAMPLE_RATE, S> {
        BiquadFilter::bandpass(source, self.center, self.q())
    }

    /// Wraps `source` in three band-pass sections for a steeper skirt.
    pub fn cascade<const SAMPLE_RATE: u32, S>(&self, source: S) -> Cascade<SAMPLE_RATE, S> {
        let first = self.apply::<SAMPLE_RATE, _>(source);
        let second = self.apply::<SAMPLE_RATE, _>(first);
        self.apply::<SAMPLE_RATE, _>(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AudioSignalExt, Signal, SineOscillator};

    fn steady_peak(mut stream: impl Iterator<Item = f64>, skip: usize) -> f64 {
        stream.by_ref().take(skip).for_each(drop);
        stream.fold(0.0, |peak: f64, s| peak.max(s.abs()))
    }

    #[test]
    fn test_q_from_half_width() {
        let bpf = band_pass(770.0, 200.0);
        assert!((bpf.q() - 1.925).abs() < 1e-12);
    }

    #[test]
    fn test_zero_half_width_uses_floor() {
        let bpf = band_pass(770.0, 0.0);
        assert_eq!(bpf.q(), 770.0 / (2.0 * MIN_HALF_WIDTH));
        assert_eq!(band_pass(770.0, -5.0).q(), bpf.q());
    }

    #[test]
    fn test_narrowest_band_still_passes_center() {
        let bpf = band_pass(770.0, 0.0);
        let tone = SineOscillator::<48000>::new(770.0).crop(1.0);
        let peak = steady_peak(bpf.apply::<48000, _>(tone), 36000);
        assert!(peak > 0.5, "Center not passed: {}", peak);
    }

    #[test]
    fn test_cascade_passes_center() {
        let bpf = band_pass(770.0, 200.0);
        let tone = SineOscillator::<48000>::new(770.0).crop(0.5);
        let peak = steady_peak(bpf.cascade::<48000, _>(tone), 12000);
        assert!(peak > 0.95 && peak < 1.05, "Center not passed: {}", peak);
    }

    #[test]
    fn test_cascade_attenuates_more_than_one_section() {
        let bpf = band_pass(770.0, 200.0);
        let single = steady_peak(
            bpf.apply::<48000, _>(SineOscillator::<48000>::new(3000.0).crop(0.5)),
            12000,
        );
        let triple = steady_peak(
            bpf.cascade::<48000, _>(SineOscillator::<48000>::new(3000.0).crop(0.5)),
            12000,
        );
        assert!(triple < single * single, "single {} triple {}", single, triple);
    }

    #[test]
    fn test_apply_to_unbounded_signal() {
        let mut filtered =
            band_pass(770.0, 200.0).apply::<48000, _>(SineOscillator::<48000>::new(770.0));
        for _ in 0..1000 {
            assert!(filtered.next_sample().is_finite());
        }
    }
}
