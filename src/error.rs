//! Error types for Morse synthesis.

use thiserror::Error;

/// Result type for Morse synthesis operations.
pub type MorseResult<T> = Result<T, MorseError>;

/// Errors that can occur while planning or synthesizing Morse audio.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MorseError {
    /// A token has no entry in the symbol table.
    #[error("no Morse symbol for token {token:?}")]
    UnknownToken {
        /// The token that could not be resolved.
        token: String,
    },

    /// The speed combination cannot produce usable timings.
    #[error("degenerate timing for {wpm} WPM / {cwpm} CWPM")]
    DegenerateTiming {
        /// Overall words per minute.
        wpm: f64,
        /// Character words per minute after clamping.
        cwpm: f64,
    },

    /// Tone frequency is not a positive, finite value.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The rejected frequency.
        freq: f64,
    },

    /// Bandwidth is not a positive, finite value.
    #[error("invalid bandwidth: {bandwidth} Hz")]
    InvalidBandwidth {
        /// The rejected bandwidth.
        bandwidth: f64,
    },
}

impl MorseError {
    /// Creates an unknown token error.
    pub fn unknown_token(token: impl Into<String>) -> Self {
        Self::UnknownToken {
            token: token.into(),
        }
    }
}
