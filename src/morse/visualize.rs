//! ASCII rendering of sample streams, for debugging.

/// Every this many samples one character is drawn.
pub const VISUALIZE_STRIDE: usize = 512;

/// Samples smaller than this in magnitude are drawn as silence.
pub const NEAR_ZERO: f64 = 0.01;

/// Renders a stream as `|` for sound and `_` for silence.
///
/// The stream is consumed, so render a separately synthesized copy rather
/// than audio meant for playback.
///
/// # Examples
///
/// ```
/// use koch::{Keyer, visualize};
///
/// let keyer = Keyer::new();
/// let picture = visualize(keyer.code_with("E E", false).unwrap());
/// assert!(picture.starts_with('_'));
/// assert!(picture.contains('|'));
/// ```
pub fn visualize(samples: impl IntoIterator<Item = f64>) -> String {
    samples
        .into_iter()
        .step_by(VISUALIZE_STRIDE)
        .map(|sample| if sample.abs() < NEAR_ZERO { '_' } else { '|' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stream() {
        assert_eq!(visualize(std::iter::empty()), "");
    }

    #[test]
    fn test_decimation() {
        let samples = (0..VISUALIZE_STRIDE * 4).map(|i| {
            if i >= VISUALIZE_STRIDE * 2 { 0.5 } else { 0.0 }
        });
        assert_eq!(visualize(samples), "__||");
    }

    #[test]
    fn test_partial_stride_still_drawn() {
        assert_eq!(visualize([1.0, 1.0, 1.0]), "|");
        assert_eq!(visualize(vec![-0.2; VISUALIZE_STRIDE + 1]), "||");
    }

    #[test]
    fn test_near_zero_band() {
        assert_eq!(visualize([0.009]), "_");
        assert_eq!(visualize([-0.009]), "_");
        assert_eq!(visualize([0.011]), "|");
    }
}
