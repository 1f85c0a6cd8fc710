//! Koch - Morse code audio synthesis
//!
//! Turns text into Morse code audio with ARRL Farnsworth timing. Audio is
//! produced lazily as `f64` samples, band-pass filtered around the tone to keep
//! key clicks out of the signal.
//!
//! ```
//! use koch::{Keyer, Timings};
//!
//! let keyer = Keyer::new();
//! let _speed = keyer.override_timings(Timings::wpm(15.0, Some(18.0))?);
//! let audio: Vec<f64> = keyer.code("CQ CQ")?.collect();
//! assert!(!audio.is_empty());
//! # Ok::<(), koch::MorseError>(())
//! ```

pub mod combinators;
pub mod error;
pub mod filters;
pub mod morse;
pub mod oscillators;
pub mod signals;

// Re-export commonly used types at the crate root
pub use combinators::{Gain, SignalExt};
pub use error::{MorseError, MorseResult};
pub use filters::{BandPass, BiquadFilter, band_pass};
pub use morse::*;
pub use oscillators::SineOscillator;
pub use signals::{AudioSignal, AudioSignalExt, Signal};
