//! Synthesis parameters and their defaults.

use super::timing::Timings;
use crate::error::{MorseError, MorseResult};

/// Default tone frequency in Hz.
pub const DEFAULT_FREQUENCY: f64 = 770.0;

/// Default audio bandwidth in Hz, centered on the tone.
pub const DEFAULT_BANDWIDTH: f64 = 200.0;

/// Default frame rate of synthesized audio.
pub const DEFAULT_SAMPLE_RATE: u32 = 48000;

/// Level of keyed tones relative to full scale, in dB.
pub const TONE_LEVEL_DB: f64 = -3.0;

/// Everything that shapes synthesized Morse audio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    /// Element and gap durations.
    pub timings: Timings,
    /// Tone frequency in Hz.
    pub frequency: f64,
    /// Width of the pass band in Hz.
    pub bandwidth: f64,
}

impl Parameters {
    /// Creates parameters, rejecting unusable frequencies and bandwidths.
    pub fn new(timings: Timings, frequency: f64, bandwidth: f64) -> MorseResult<Self> {
        let params = Self {
            timings,
            frequency,
            bandwidth,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks that the frequency and bandwidth are positive and finite.
    pub fn validate(&self) -> MorseResult<()> {
        check_frequency(self.frequency)?;
        check_bandwidth(self.bandwidth)?;
        Ok(())
    }

    /// Half-width of the band-pass filter, never wider than the tone frequency.
    pub fn half_width(&self) -> f64 {
        self.bandwidth.min(self.frequency)
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            timings: Timings::default(),
            frequency: DEFAULT_FREQUENCY,
            bandwidth: DEFAULT_BANDWIDTH,
        }
    }
}

pub(crate) fn check_frequency(freq: f64) -> MorseResult<f64> {
    if freq.is_finite() && freq > 0.0 {
        Ok(freq)
    } else {
        Err(MorseError::InvalidFrequency { freq })
    }
}

pub(crate) fn check_bandwidth(bandwidth: f64) -> MorseResult<f64> {
    if bandwidth.is_finite() && bandwidth > 0.0 {
        Ok(bandwidth)
    } else {
        Err(MorseError::InvalidBandwidth { bandwidth })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = Parameters::default();
        assert_eq!(params.frequency, 770.0);
        assert_eq!(params.bandwidth, 200.0);
        assert_eq!(params.timings, Timings::default());
    }

    #[test]
    fn test_half_width_is_capped_by_frequency() {
        assert_eq!(Parameters::default().half_width(), 200.0);
        let low = Parameters::new(Timings::default(), 150.0, 200.0).unwrap();
        assert_eq!(low.half_width(), 150.0);
    }

    #[test]
    fn test_rejects_bad_values() {
        let timings = Timings::default();
        assert_eq!(
            Parameters::new(timings, 0.0, 200.0),
            Err(MorseError::InvalidFrequency { freq: 0.0 })
        );
        assert!(Parameters::new(timings, f64::NAN, 200.0).is_err());
        assert_eq!(
            Parameters::new(timings, 770.0, -1.0),
            Err(MorseError::InvalidBandwidth { bandwidth: -1.0 })
        );
    }

    #[test]
    fn test_validate_struct_literal() {
        let params = Parameters {
            bandwidth: 0.0,
            ..Parameters::default()
        };
        assert_eq!(
            params.validate(),
            Err(MorseError::InvalidBandwidth { bandwidth: 0.0 })
        );
        assert_eq!(Parameters::default().validate(), Ok(()));
    }
}
