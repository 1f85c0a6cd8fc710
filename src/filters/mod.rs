//! Filters for shaping keyed audio.
//!
//! - `BiquadFilter` is a single second-order band-pass section
//! - `BandPass` describes a band around the tone and builds filter cascades

mod band_pass;
mod biquad;

pub use band_pass::{BandPass, Cascade, MIN_HALF_WIDTH, band_pass};
pub use biquad::BiquadFilter;
